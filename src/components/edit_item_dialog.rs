//! Modal dialog for editing a shop-list item's fields.

use leptos::prelude::*;

use crate::net::api::ItemPatch;
use crate::net::types::ShopListItem;

/// Edit dialog primed from the current item. Saving submits a patch with the
/// three text fields; the bought flag is toggled elsewhere.
#[component]
pub fn EditItemDialog(
    item: ShopListItem,
    on_save: Callback<ItemPatch>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let item_name = RwSignal::new(item.item_name.clone());
    let brand_name = RwSignal::new(item.brand_name.clone());
    let extra_info = RwSignal::new(item.extra_info.clone());

    let submit = Callback::new(move |_| {
        if item_name.get().trim().is_empty() {
            return;
        }
        on_save.run(ItemPatch {
            item_name: Some(item_name.get().trim().to_owned()),
            brand_name: Some(brand_name.get().trim().to_owned()),
            extra_info: Some(extra_info.get().trim().to_owned()),
            is_bought: None,
        });
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Edit Item"</h2>
                <label class="dialog__label">
                    "Item Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || item_name.get()
                        on:input=move |ev| item_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Brand"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || brand_name.get()
                        on:input=move |ev| brand_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Other Info"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || extra_info.get()
                        on:input=move |ev| extra_info.set(event_target_value(&ev))
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}
