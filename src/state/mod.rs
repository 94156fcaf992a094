//! Shared signal state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages and components read/write these structs through `RwSignal` context
//! providers installed by `app::App`; the session store itself stays behind
//! `crate::session` and is mirrored into `AuthState` on change.

pub mod auth;
pub mod lists;
pub mod search;
pub mod ui;
