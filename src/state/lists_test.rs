use super::*;

#[test]
fn lists_state_defaults() {
    let state = ListsState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn active_list_state_defaults() {
    let state = ActiveListState::default();
    assert!(state.list.is_none());
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert!(state.share_code.is_none());
}
