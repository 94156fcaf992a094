//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and profile-aware components to coordinate login
//! redirects and identity-dependent rendering. The token itself lives in the
//! session store; this mirrors "who is logged in" for reactive rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::UserProfile;

/// Authentication state tracking the current profile and loading status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub profile: Option<UserProfile>,
    pub loading: bool,
    /// Set when the backend has no profile yet; opens the first-run dialog.
    pub needs_profile: bool,
}
