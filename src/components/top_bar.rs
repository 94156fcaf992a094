//! Member-area top bar: brand, profile summary, theme toggle, logout.

use leptos::prelude::*;

use crate::components::profile_dialog::ProfileDialog;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

/// Top bar shown on every member screen. Owns the profile-update dialog and
/// its API call; pages react to a profile change through `on_profile_updated`.
#[component]
pub fn TopBar(on_profile_updated: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let show_profile_dialog = RwSignal::new(false);

    let profile_summary = move || {
        auth.get()
            .profile
            .map(|p| format!("{} ({})", p.nickname, p.postal_code))
            .unwrap_or_default()
    };

    let on_profile_submit = Callback::new(move |(nickname, postal_code): (String, String)| {
        // No-op updates just close the dialog.
        if auth
            .get_untracked()
            .profile
            .as_ref()
            .is_some_and(|p| p.nickname == nickname && p.postal_code == postal_code)
        {
            show_profile_dialog.set(false);
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let session = crate::session::Session::from_window();
                match crate::net::api::update_profile(&session, &nickname, &postal_code).await {
                    Ok(updated) => {
                        session.set_cached_profile(&updated);
                        auth.update(|a| a.profile = Some(updated));
                        show_profile_dialog.set(false);
                        on_profile_updated.run(());
                    }
                    Err(err) => {
                        log::error!("profile update failed: {err}");
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (nickname, postal_code);
        }
    });

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let session = crate::session::Session::from_window();
            session.clear_tokens();
            session.clear_cached_profile();
            auth.update(|a| a.profile = None);
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href(crate::config::routes::LOGIN);
            }
        }
    };

    view! {
        <header class="top-bar toolbar">
            <a class="toolbar__brand" href=crate::config::routes::MEMBER>
                "Shopper"
            </a>

            <span class="toolbar__spacer"></span>

            <span class="toolbar__profile">{profile_summary}</span>
            <button
                class="btn toolbar__update"
                on:click=move |_| show_profile_dialog.set(true)
                title="Update profile"
            >
                "Update"
            </button>

            <button
                class="btn toolbar__dark-toggle"
                on:click=move |_| {
                    let current = ui.get().dark_mode;
                    let next = crate::util::dark_mode::toggle(current);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>

            <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>

        <Show when=move || show_profile_dialog.get()>
            <ProfileDialog
                profile=auth.get_untracked().profile
                on_submit=on_profile_submit
                on_cancel=Callback::new(move |()| show_profile_dialog.set(false))
            />
        </Show>
    }
}
