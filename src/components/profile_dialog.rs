//! Profile create/update dialog with postal-code validation.
//!
//! Used both as the first-run profile setup (no cancel path until a profile
//! exists) and as the top bar's update dialog.

#[cfg(test)]
#[path = "profile_dialog_test.rs"]
mod profile_dialog_test;

use leptos::prelude::*;

use crate::net::types::UserProfile;

/// Validate the flyer-locality postal code: exactly six characters,
/// uppercase letters at even indices and digits at odd indices (A1B2C3).
pub fn is_valid_postal_code(code: &str) -> bool {
    let chars: Vec<char> = code.chars().collect();
    if chars.len() != 6 {
        return false;
    }
    chars.iter().enumerate().all(|(i, c)| {
        if i % 2 == 0 {
            c.is_ascii_uppercase()
        } else {
            c.is_ascii_digit()
        }
    })
}

pub(crate) fn validate_profile_input(nickname: &str, postal_code: &str) -> Result<(), &'static str> {
    if nickname.trim().is_empty() {
        return Err("Please enter a nickname");
    }
    if !is_valid_postal_code(postal_code) {
        return Err(
            "Invalid postal code format. Must be 6 characters with letters in odd positions and numbers in even positions (e.g., A1B2C3)",
        );
    }
    Ok(())
}

/// Profile dialog. Primed from an existing profile when present; submits
/// `(nickname, postal_code)` only after validation passes.
#[component]
pub fn ProfileDialog(
    #[prop(optional_no_strip)] profile: Option<UserProfile>,
    /// Hide the cancel button during first-run setup.
    #[prop(default = true)]
    cancellable: bool,
    on_submit: Callback<(String, String)>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let nickname = RwSignal::new(profile.as_ref().map(|p| p.nickname.clone()).unwrap_or_default());
    let postal_code =
        RwSignal::new(profile.as_ref().map(|p| p.postal_code.clone()).unwrap_or_default());
    let error = RwSignal::new(None::<&'static str>);

    let submit = Callback::new(move |_| {
        let nickname_value = nickname.get();
        let postal_value = postal_code.get();
        match validate_profile_input(&nickname_value, &postal_value) {
            Ok(()) => {
                error.set(None);
                on_submit.run((nickname_value.trim().to_owned(), postal_value));
            }
            Err(message) => error.set(Some(message)),
        }
    });

    view! {
        <div class="dialog-backdrop">
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Your Profile"</h2>
                <label class="dialog__label">
                    "Nickname"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Enter a nickname"
                        prop:value=move || nickname.get()
                        on:input=move |ev| nickname.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Postal Code"
                    <input
                        class="dialog__input"
                        type="text"
                        maxlength="6"
                        placeholder="A1B2C3"
                        prop:value=move || postal_code.get()
                        on:input=move |ev| {
                            postal_code.set(event_target_value(&ev).to_ascii_uppercase());
                        }
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <Show when=move || cancellable>
                        <button class="btn" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                    </Show>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}
