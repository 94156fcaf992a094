//! Session/token store — the single source of truth for authentication.
//!
//! DESIGN
//! ======
//! All browser-persisted session state (bearer tokens, the OAuth CSRF state,
//! the cached profile copy, the last map-search address) goes through one
//! repository backed by a pluggable `SessionBackend`. The browser backend is
//! durable `localStorage`; tests and server rendering substitute the
//! in-memory backend. No other module touches storage for these keys.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::net::types::{TokenPair, UserProfile};

const ACCESS_TOKEN_KEY: &str = "access_token";
const REFRESH_TOKEN_KEY: &str = "refresh_token";
const OAUTH_STATE_KEY: &str = "oauth_state";
const PROFILE_KEY: &str = "user_profile";
const LAST_ADDRESS_KEY: &str = "last_address";

/// Errors surfaced by session persistence.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The backing store rejected a write.
    #[error("session storage unavailable")]
    Unavailable,
    /// A token read back after writing did not match what was written.
    #[error("Token storage verification failed")]
    VerificationFailed,
}

/// Minimal string key/value store the session repository sits on.
pub trait SessionBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;
    fn remove(&self, key: &str);
}

/// In-memory backend for tests and server rendering.
#[derive(Default)]
pub struct MemoryStorage {
    inner: RefCell<HashMap<String, String>>,
}

impl SessionBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.inner.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.inner.borrow_mut().remove(key);
    }
}

/// Durable `localStorage` backend. Requires a browser environment.
#[cfg(feature = "hydrate")]
#[derive(Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "hydrate")]
impl SessionBackend for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let storage = Self::storage().ok_or(SessionError::Unavailable)?;
        storage.set_item(key, value).map_err(|_| SessionError::Unavailable)
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// The session repository. Cheap to clone and construct; holds no state of
/// its own beyond a change counter.
#[derive(Clone)]
pub struct Session {
    backend: Rc<dyn SessionBackend>,
    rev: Rc<Cell<u64>>,
}

impl Session {
    pub fn new(backend: Rc<dyn SessionBackend>) -> Self {
        Self {
            backend,
            rev: Rc::new(Cell::new(0)),
        }
    }

    /// Browser-backed session under hydration, in-memory otherwise.
    pub fn from_window() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::new(Rc::new(BrowserStorage))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::new(Rc::new(MemoryStorage::default()))
        }
    }

    /// Change counter, bumped on every auth-affecting mutation.
    pub fn rev(&self) -> u64 {
        self.rev.get()
    }

    fn bump(&self) {
        self.rev.set(self.rev.get() + 1);
    }

    // ---- bearer tokens ----

    pub fn access_token(&self) -> Option<String> {
        self.backend.get(ACCESS_TOKEN_KEY)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.backend.get(REFRESH_TOKEN_KEY)
    }

    /// Persist a token pair and verify the access token by reading it back.
    ///
    /// # Errors
    ///
    /// [`SessionError::VerificationFailed`] when the read-back does not match
    /// what was written; [`SessionError::Unavailable`] when storage rejects
    /// the write.
    pub fn set_tokens(&self, tokens: &TokenPair) -> Result<(), SessionError> {
        self.backend.set(ACCESS_TOKEN_KEY, &tokens.access_token)?;
        if let Some(refresh) = &tokens.refresh_token {
            self.backend.set(REFRESH_TOKEN_KEY, refresh)?;
        }
        let stored = self.backend.get(ACCESS_TOKEN_KEY);
        if stored.as_deref() != Some(tokens.access_token.as_str()) {
            return Err(SessionError::VerificationFailed);
        }
        self.bump();
        Ok(())
    }

    /// Remove both tokens. Used on logout, 401 expiry, and failed exchanges.
    pub fn clear_tokens(&self) {
        self.backend.remove(ACCESS_TOKEN_KEY);
        self.backend.remove(REFRESH_TOKEN_KEY);
        self.bump();
    }

    // ---- OAuth CSRF state ----

    pub fn csrf_state(&self) -> Option<String> {
        self.backend.get(OAUTH_STATE_KEY)
    }

    /// # Errors
    ///
    /// [`SessionError::Unavailable`] when storage rejects the write.
    pub fn set_csrf_state(&self, state: &str) -> Result<(), SessionError> {
        self.backend.set(OAUTH_STATE_KEY, state)
    }

    /// Read and delete the stored CSRF state in one step.
    pub fn take_csrf_state(&self) -> Option<String> {
        let state = self.backend.get(OAUTH_STATE_KEY);
        self.backend.remove(OAUTH_STATE_KEY);
        state
    }

    pub fn clear_csrf_state(&self) {
        self.backend.remove(OAUTH_STATE_KEY);
    }

    // ---- cached profile copy (display-priming only, never authoritative) ----

    pub fn cached_profile(&self) -> Option<UserProfile> {
        let raw = self.backend.get(PROFILE_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    pub fn set_cached_profile(&self, profile: &UserProfile) {
        if let Ok(raw) = serde_json::to_string(profile) {
            let _ = self.backend.set(PROFILE_KEY, &raw);
        }
    }

    pub fn clear_cached_profile(&self) {
        self.backend.remove(PROFILE_KEY);
    }

    // ---- map search address ----

    pub fn last_address(&self) -> Option<String> {
        self.backend.get(LAST_ADDRESS_KEY)
    }

    pub fn set_last_address(&self, address: &str) {
        let _ = self.backend.set(LAST_ADDRESS_KEY, address);
    }
}
