//! Flyer-search state for the add-item screen.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::net::types::FlyerItem;

/// Debounced flyer-search results and in-flight flags.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchState {
    pub results: Vec<FlyerItem>,
    pub searching: bool,
    pub error: Option<String>,
    pub adding: bool,
    pub add_error: Option<String>,
}
