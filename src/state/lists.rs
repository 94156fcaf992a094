//! Shop-list inventory state for the member home screen.
//!
//! DESIGN
//! ======
//! Separating list-inventory state from the active-list detail state keeps
//! the home grid independent of whatever list is being edited.

#[cfg(test)]
#[path = "lists_test.rs"]
mod lists_test;

use crate::net::types::ShopList;

/// Shop lists shown on the member home screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListsState {
    pub items: Vec<ShopList>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Detail state for the edit screen's single active list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActiveListState {
    pub list: Option<ShopList>,
    pub loading: bool,
    pub error: Option<String>,
    /// Share code returned by the backend, shown in the share dialog.
    pub share_code: Option<String>,
}
