//! Modal dialog for joining a shop list via share code.

use leptos::prelude::*;

/// Prompts for a share code. The owning page runs the join call and writes
/// any failure into `error` so the dialog can stay open for a retry.
#[component]
pub fn JoinListDialog(
    error: RwSignal<Option<String>>,
    on_submit: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let code = RwSignal::new(String::new());

    let submit = Callback::new(move |_| {
        let value = code.get();
        if value.trim().is_empty() {
            error.set(Some("Please enter a share code".to_owned()));
            return;
        }
        on_submit.run(value.trim().to_owned());
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Join Shop List"</h2>
                <p class="dialog__message">"Enter the share code to join a shop list:"</p>
                <label class="dialog__label">
                    "Share Code"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Enter share code"
                        prop:value=move || code.get()
                        on:input=move |ev| {
                            code.set(event_target_value(&ev));
                            error.set(None);
                        }
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Join"
                    </button>
                </div>
            </div>
        </div>
    }
}
