//! Login initiator: token check, CSRF state mint, authorize redirect.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page never shows a form. With a stored token it forwards straight to
//! the member area; without one it persists a fresh CSRF state and performs a
//! full browser navigation to the auth server's authorize endpoint. Token
//! validity is not checked here — a stale token surfaces as a 401 on the
//! first API call.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

#[component]
pub fn LoginPage() -> impl IntoView {
    let query = use_query_map();
    let error = move || query.read().get("error").filter(|e| !e.is_empty());

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            use crate::config::{AppConfig, routes};
            use crate::net::oauth;
            use crate::session::Session;

            let session = Session::from_window();
            let Some(window) = web_sys::window() else {
                return;
            };
            if session.access_token().is_some() {
                let _ = window.location().set_href(routes::MEMBER);
                return;
            }
            let state = oauth::generate_state();
            if session.set_csrf_state(&state).is_err() {
                log::error!("could not persist login state; aborting redirect");
                return;
            }
            let url =
                oauth::build_authorize_url(AppConfig::get(), &state, error().as_deref());
            let _ = window.location().set_href(&url);
        }
    });

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Shopper"</h1>
                <p class="login-card__subtitle">"Grocery lists with flyer deals"</p>
                <Show when=move || error().is_some()>
                    <p class="login-message login-message--error">
                        {move || error().unwrap_or_default()}
                    </p>
                </Show>
                <p class="login-message">"Redirecting to sign-in..."</p>
            </div>
        </div>
    }
}
