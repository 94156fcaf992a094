//! Result card for one flyer match on the search screen.

#[cfg(test)]
#[path = "flyer_card_test.rs"]
mod flyer_card_test;

use leptos::prelude::*;

use crate::net::types::FlyerItem;

/// Compose the display price from its surrounding text fragments.
pub(crate) fn format_price(pre: &str, price: &str, post: &str) -> String {
    if price.is_empty() {
        return "Price not available".to_owned();
    }
    let composed = format!("{pre}{price}{post}");
    let composed = composed.trim();
    if composed.is_empty() {
        "Price not available".to_owned()
    } else {
        composed.to_owned()
    }
}

/// Render an epoch-milliseconds timestamp as a local date string.
fn format_date(epoch_ms: i64) -> String {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_precision_loss)]
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(epoch_ms as f64));
        String::from(date.to_locale_date_string("en-CA", &wasm_bindgen::JsValue::UNDEFINED))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = epoch_ms;
        String::new()
    }
}

/// A flyer search result with an add-to-list action.
#[component]
pub fn FlyerCard(
    flyer: FlyerItem,
    on_add: Callback<FlyerItem>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let price = format_price(&flyer.pre_price_text, &flyer.price_text, &flyer.post_price_text);
    let window = format!("{} - {}", format_date(flyer.start_date), format_date(flyer.end_date));
    let add_payload = flyer.clone();
    let thumb_src = flyer.image_url.clone();
    let thumb_alt = flyer.product_name.clone();

    view! {
        <div class="flyer-card">
            <Show when={
                let has_image = !flyer.image_url.is_empty();
                move || has_image
            }>
                <img class="flyer-card__thumb" src=thumb_src.clone() alt=thumb_alt.clone()/>
            </Show>
            <div class="flyer-card__body">
                <span class="flyer-card__store">{flyer.store.clone()}</span>
                <h3 class="flyer-card__name">{flyer.product_name.clone()}</h3>
                <Show when={
                    let has_brand = !flyer.brand.is_empty();
                    move || has_brand
                }>
                    <span class="flyer-card__brand">{flyer.brand.clone()}</span>
                </Show>
                <p class="flyer-card__description">{flyer.description.clone()}</p>
                <span class="flyer-card__price">{price}</span>
                <span class="flyer-card__dates">{window}</span>
                <Show when={
                    let has_disclaimer = !flyer.disclaimer_text.is_empty();
                    move || has_disclaimer
                }>
                    <p class="flyer-card__disclaimer">{flyer.disclaimer_text.clone()}</p>
                </Show>
            </div>
            <button
                class="btn btn--primary flyer-card__add"
                disabled=move || busy.get()
                on:click=move |_| on_add.run(add_payload.clone())
            >
                "Add"
            </button>
        </div>
    }
}
