//! OAuth callback: validate the echoed state and exchange the code.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs the `AwaitingParams -> ValidatingState -> ExchangingCode` sequence
//! exactly once per page load. Success lands on the member home; any failure
//! clears partially written tokens and returns to the login initiator with
//! the error message, which mints a fresh CSRF state for the next attempt.

#[cfg(test)]
#[path = "callback_test.rs"]
mod callback_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::net::oauth::CallbackParams;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::oauth::{self, CallbackError};
#[cfg(any(test, feature = "hydrate"))]
use crate::session::Session;

/// Drive the callback state machine against the stored session.
///
/// The CSRF comparison happens before [`oauth::exchange_code`] can run: a
/// mismatch short-circuits with no network call.
///
/// # Errors
///
/// Any [`CallbackError`]; the session holds no tokens afterward.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) async fn run_login_callback(
    session: &Session,
    params: &CallbackParams,
) -> Result<(), CallbackError> {
    let request = oauth::prepare_exchange(params, session.csrf_state().as_deref())?;
    match oauth::exchange_code(&request).await {
        Ok(tokens) => oauth::complete_exchange(session, &tokens),
        Err(err) => {
            session.clear_tokens();
            Err(err)
        }
    }
}

#[component]
pub fn CallbackPage() -> impl IntoView {
    let query = use_query_map();
    let started = RwSignal::new(false);

    Effect::new(move || {
        if started.get_untracked() {
            return;
        }
        started.set(true);

        let params = CallbackParams {
            code: query.read_untracked().get("code"),
            state: query.read_untracked().get("state"),
            error: query.read_untracked().get("error"),
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::config::routes;

            let session = Session::from_window();
            let destination = match run_login_callback(&session, &params).await {
                Ok(()) => routes::MEMBER.to_owned(),
                Err(err) => {
                    log::warn!("login callback failed: {err}");
                    format!("{}?error={}", routes::LOGIN, urlencoding::encode(&err.to_string()))
                }
            };
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&destination);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = params;
        }
    });

    view! {
        <div class="callback-page">
            <p>"Completing sign-in..."</p>
        </div>
    }
}
