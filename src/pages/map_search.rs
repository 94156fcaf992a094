//! Map-based product search screen (public home route).
//!
//! SYSTEM CONTEXT
//! ==============
//! Early-stage screen: collects a product query, a search radius, and a
//! free-text address (remembered across visits via the session store). The
//! backing search endpoint has not shipped, so submitting only reports that
//! the feature is coming.

use leptos::prelude::*;

#[component]
pub fn MapSearchPage() -> impl IntoView {
    let query = RwSignal::new(String::new());
    let distance_km = RwSignal::new(10_u32);
    let address = RwSignal::new(String::new());
    let status = RwSignal::new(None::<&'static str>);

    // Prime the address from the last-used value, falling back to the
    // configured default.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            let session = crate::session::Session::from_window();
            let initial = session
                .last_address()
                .unwrap_or_else(|| crate::config::AppConfig::get().default_address.to_owned());
            if !initial.is_empty() {
                address.set(initial);
            }
        }
    });

    let on_address_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        address.set(value.clone());
        #[cfg(feature = "hydrate")]
        {
            let session = crate::session::Session::from_window();
            session.set_last_address(value.trim());
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = value;
        }
    };

    let on_search = move |_| {
        if query.get().trim().is_empty() {
            status.set(Some("Enter at least one product name first."));
            return;
        }
        // TODO: wire to the product search endpoint once the backend ships it.
        status.set(Some("Product search is coming soon."));
    };

    view! {
        <main class="map-search">
            <div class="map-search__form">
                <span>"I want to buy"</span>
                <textarea
                    class="map-search__query"
                    rows="3"
                    placeholder="Enter product names, separated by commas"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                ></textarea>

                <div class="map-search__row">
                    <span>"within"</span>
                    <input
                        class="map-search__distance"
                        type="number"
                        min="1"
                        prop:value=move || distance_km.get().to_string()
                        on:input=move |ev| {
                            if let Ok(parsed) = event_target_value(&ev).parse::<u32>() {
                                distance_km.set(parsed.max(1));
                            }
                        }
                    />
                    <span>"km"</span>
                </div>

                <div class="map-search__row">
                    <span>"near"</span>
                    <input
                        class="map-search__address"
                        type="text"
                        placeholder="Address or intersection"
                        prop:value=move || address.get()
                        on:input=on_address_input
                    />
                </div>

                <button class="btn btn--primary" on:click=on_search>
                    "Find products"
                </button>

                <Show when=move || status.get().is_some()>
                    <p class="map-search__status">{move || status.get().unwrap_or_default()}</p>
                </Show>

                <p class="map-search__signin">
                    <a href=crate::config::routes::LOGIN>"Sign in"</a>
                    " to manage your shop lists."
                </p>
            </div>
        </main>
    }
}
