//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dialogs and page chrome while reading/writing shared
//! state from Leptos context providers; API calls stay at the page level
//! except for the top bar's profile update.

pub mod confirm_dialog;
pub mod create_list_dialog;
pub mod edit_item_dialog;
pub mod flyer_card;
pub mod join_list_dialog;
pub mod profile_dialog;
pub mod top_bar;
