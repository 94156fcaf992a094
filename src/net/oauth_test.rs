use super::*;
use crate::session::{MemoryStorage, SessionBackend};
use std::rc::Rc;

fn params(code: Option<&str>, state: Option<&str>, error: Option<&str>) -> CallbackParams {
    CallbackParams {
        code: code.map(str::to_owned),
        state: state.map(str::to_owned),
        error: error.map(str::to_owned),
    }
}

// =============================================================
// State generation and URL building
// =============================================================

#[test]
fn generate_state_is_long_and_unique() {
    let a = generate_state();
    let b = generate_state();
    assert_eq!(a.len(), 64);
    assert_ne!(a, b);
}

#[test]
fn authorize_url_carries_required_oauth_params() {
    let config = AppConfig::get();
    let url = build_authorize_url(config, "xyz", None);
    assert!(url.starts_with(&config.auth_url(endpoints::AUTHORIZE)));
    assert!(url.contains("response_type=code"));
    assert!(url.contains("state=xyz"));
    assert!(url.contains("scope=profile%20shoplist%20search"));
    assert!(url.contains(&format!(
        "redirect_uri={}",
        urlencoding::encode(&config.callback_url())
    )));
    assert!(!url.contains("&error="));
}

#[test]
fn authorize_url_forwards_provider_error() {
    let url = build_authorize_url(AppConfig::get(), "xyz", Some("access denied"));
    assert!(url.ends_with("&error=access%20denied"));
}

#[test]
fn token_body_is_form_encoded_with_grant_type() {
    let request = ExchangeRequest {
        code: "abc/123".to_owned(),
        state: "xyz".to_owned(),
    };
    let body = token_request_body(AppConfig::get(), &request);
    assert!(body.starts_with("grant_type=authorization_code&code=abc%2F123"));
    assert!(body.ends_with("&state=xyz"));
}

// =============================================================
// prepare_exchange decision table
// =============================================================

#[test]
fn provider_error_is_surfaced_verbatim() {
    let err = prepare_exchange(&params(None, None, Some("access_denied")), Some("xyz"));
    assert_eq!(err, Err(CallbackError::Provider("access_denied".to_owned())));
}

#[test]
fn missing_code_or_state_fails() {
    assert_eq!(
        prepare_exchange(&params(None, Some("xyz"), None), Some("xyz")),
        Err(CallbackError::MissingParams)
    );
    assert_eq!(
        prepare_exchange(&params(Some("abc"), None, None), Some("xyz")),
        Err(CallbackError::MissingParams)
    );
}

#[test]
fn state_mismatch_yields_no_exchange_request() {
    // No ExchangeRequest means the exchange POST can never be issued.
    assert_eq!(
        prepare_exchange(&params(Some("abc"), Some("xyz"), None), Some("other")),
        Err(CallbackError::StateMismatch)
    );
}

#[test]
fn absent_stored_state_yields_no_exchange_request() {
    assert_eq!(
        prepare_exchange(&params(Some("abc"), Some("xyz"), None), None),
        Err(CallbackError::StateMismatch)
    );
}

#[test]
fn matching_state_produces_exchange_request() {
    let request = prepare_exchange(&params(Some("abc"), Some("xyz"), None), Some("xyz")).unwrap();
    assert_eq!(request.code, "abc");
    assert_eq!(request.state, "xyz");
}

// =============================================================
// complete_exchange
// =============================================================

#[test]
fn complete_exchange_persists_token_and_clears_state() {
    let session = Session::new(Rc::new(MemoryStorage::default()));
    session.set_csrf_state("xyz").unwrap();
    let tokens = TokenPair {
        access_token: "tok1".to_owned(),
        refresh_token: Some("ref1".to_owned()),
    };
    complete_exchange(&session, &tokens).unwrap();
    assert_eq!(session.access_token().as_deref(), Some("tok1"));
    assert_eq!(session.refresh_token().as_deref(), Some("ref1"));
    assert!(session.csrf_state().is_none());
}

/// Backend whose reads never reflect writes, to drive the verification path.
struct BlackHoleStorage;

impl SessionBackend for BlackHoleStorage {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }
    fn set(&self, _key: &str, _value: &str) -> Result<(), crate::session::SessionError> {
        Ok(())
    }
    fn remove(&self, _key: &str) {}
}

#[test]
fn complete_exchange_reports_storage_verification_failure() {
    let session = Session::new(Rc::new(BlackHoleStorage));
    let tokens = TokenPair {
        access_token: "tok1".to_owned(),
        refresh_token: None,
    };
    assert_eq!(
        complete_exchange(&session, &tokens),
        Err(CallbackError::StorageVerification)
    );
    assert!(session.access_token().is_none());
}

#[test]
fn error_messages_match_login_screen_copy() {
    assert_eq!(
        CallbackError::MissingParams.to_string(),
        "Invalid response - missing required parameters"
    );
    assert_eq!(
        CallbackError::StateMismatch.to_string(),
        "Invalid state - possible security issue"
    );
    assert_eq!(
        CallbackError::StorageVerification.to_string(),
        "Token storage verification failed"
    );
}
