use super::*;

#[test]
fn auth_state_default_no_profile() {
    let state = AuthState::default();
    assert!(state.profile.is_none());
    assert!(!state.needs_profile);
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}
