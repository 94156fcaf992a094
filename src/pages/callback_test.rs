use super::*;
use crate::session::MemoryStorage;
use futures::executor::block_on;
use std::rc::Rc;

fn memory_session() -> Session {
    Session::new(Rc::new(MemoryStorage::default()))
}

fn params(code: Option<&str>, state: Option<&str>, error: Option<&str>) -> CallbackParams {
    CallbackParams {
        code: code.map(str::to_owned),
        state: state.map(str::to_owned),
        error: error.map(str::to_owned),
    }
}

#[test]
fn provider_error_ends_the_attempt() {
    let session = memory_session();
    let result = block_on(run_login_callback(
        &session,
        &params(None, None, Some("access_denied")),
    ));
    assert_eq!(result, Err(CallbackError::Provider("access_denied".to_owned())));
    assert!(session.access_token().is_none());
}

#[test]
fn missing_params_end_the_attempt() {
    let session = memory_session();
    session.set_csrf_state("xyz").unwrap();
    let result = block_on(run_login_callback(&session, &params(Some("abc"), None, None)));
    assert_eq!(result, Err(CallbackError::MissingParams));
}

#[test]
fn state_mismatch_fails_before_any_exchange() {
    let session = memory_session();
    session.set_csrf_state("other").unwrap();
    let result = block_on(run_login_callback(
        &session,
        &params(Some("abc"), Some("xyz"), None),
    ));
    assert_eq!(result, Err(CallbackError::StateMismatch));
    // No tokens were written by the aborted attempt.
    assert!(session.access_token().is_none());
    assert!(session.refresh_token().is_none());
}

#[test]
fn absent_stored_state_is_a_mismatch() {
    let session = memory_session();
    let result = block_on(run_login_callback(
        &session,
        &params(Some("abc"), Some("xyz"), None),
    ));
    assert_eq!(result, Err(CallbackError::StateMismatch));
}
