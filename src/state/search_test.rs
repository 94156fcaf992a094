use super::*;

#[test]
fn search_state_defaults() {
    let state = SearchState::default();
    assert!(state.results.is_empty());
    assert!(!state.searching);
    assert!(!state.adding);
    assert!(state.error.is_none());
    assert!(state.add_error.is_none());
}
