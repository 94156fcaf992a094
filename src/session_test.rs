use super::*;

fn memory_session() -> Session {
    Session::new(Rc::new(MemoryStorage::default()))
}

fn pair(access: &str, refresh: Option<&str>) -> TokenPair {
    TokenPair {
        access_token: access.to_owned(),
        refresh_token: refresh.map(str::to_owned),
    }
}

// =============================================================
// Token lifecycle
// =============================================================

#[test]
fn set_tokens_stores_both_tokens() {
    let session = memory_session();
    session.set_tokens(&pair("tok1", Some("ref1"))).unwrap();
    assert_eq!(session.access_token().as_deref(), Some("tok1"));
    assert_eq!(session.refresh_token().as_deref(), Some("ref1"));
}

#[test]
fn set_tokens_without_refresh_leaves_refresh_absent() {
    let session = memory_session();
    session.set_tokens(&pair("tok1", None)).unwrap();
    assert_eq!(session.access_token().as_deref(), Some("tok1"));
    assert!(session.refresh_token().is_none());
}

#[test]
fn clear_tokens_removes_both() {
    let session = memory_session();
    session.set_tokens(&pair("tok1", Some("ref1"))).unwrap();
    session.clear_tokens();
    assert!(session.access_token().is_none());
    assert!(session.refresh_token().is_none());
}

#[test]
fn token_mutations_bump_rev() {
    let session = memory_session();
    let before = session.rev();
    session.set_tokens(&pair("tok1", None)).unwrap();
    assert!(session.rev() > before);
    let mid = session.rev();
    session.clear_tokens();
    assert!(session.rev() > mid);
}

/// Backend that accepts writes but never returns them, simulating a broken
/// store. `set_tokens` must detect this on its read-back.
struct BlackHoleStorage;

impl SessionBackend for BlackHoleStorage {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }
    fn set(&self, _key: &str, _value: &str) -> Result<(), SessionError> {
        Ok(())
    }
    fn remove(&self, _key: &str) {}
}

#[test]
fn set_tokens_detects_storage_verification_failure() {
    let session = Session::new(Rc::new(BlackHoleStorage));
    let err = session.set_tokens(&pair("tok1", None)).unwrap_err();
    assert_eq!(err, SessionError::VerificationFailed);
}

// =============================================================
// CSRF state
// =============================================================

#[test]
fn take_csrf_state_is_single_use() {
    let session = memory_session();
    session.set_csrf_state("xyz").unwrap();
    assert_eq!(session.take_csrf_state().as_deref(), Some("xyz"));
    assert!(session.take_csrf_state().is_none());
    assert!(session.csrf_state().is_none());
}

// =============================================================
// Cached profile
// =============================================================

#[test]
fn cached_profile_round_trips() {
    let session = memory_session();
    let profile = UserProfile {
        id: "u1".to_owned(),
        nickname: "alice".to_owned(),
        postal_code: "A1B2C3".to_owned(),
        created_at: None,
        updated_at: None,
    };
    session.set_cached_profile(&profile);
    assert_eq!(session.cached_profile(), Some(profile));
    session.clear_cached_profile();
    assert!(session.cached_profile().is_none());
}

#[test]
fn cached_profile_ignores_corrupt_json() {
    let session = memory_session();
    session.backend.set(super::PROFILE_KEY, "{not json").unwrap();
    assert!(session.cached_profile().is_none());
}

#[test]
fn last_address_round_trips() {
    let session = memory_session();
    assert!(session.last_address().is_none());
    session.set_last_address("123 Main St");
    assert_eq!(session.last_address().as_deref(), Some("123 Main St"));
}
