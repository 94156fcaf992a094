//! Modal dialog for creating a new shop list.

use leptos::prelude::*;

/// Prompts for a list name and submits it. Blank names are ignored.
#[component]
pub fn CreateListDialog(on_submit: Callback<String>, on_cancel: Callback<()>) -> impl IntoView {
    let name = RwSignal::new(String::new());

    let submit = Callback::new(move |_| {
        let value = name.get();
        if value.trim().is_empty() {
            return;
        }
        on_submit.run(value.trim().to_owned());
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create New Shop List"</h2>
                <label class="dialog__label">
                    "List Name"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Enter list name"
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            name.set(event_target_value(&ev));
                        }
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}
