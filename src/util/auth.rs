//! Shared auth redirect behavior.
//!
//! SYSTEM CONTEXT
//! ==============
//! Member screens apply identical session-expiry handling: once the API
//! layer reports an auth failure the stored token is already purged, and the
//! screen hands the user back to the login initiator.

/// Send the browser to the login route. No-op outside a browser.
pub fn redirect_to_login() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(crate::config::routes::LOGIN);
        }
    }
}
