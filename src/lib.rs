//! # shopper
//!
//! Leptos + WASM frontend for the grocery shopping-list service.
//!
//! All persistence, search ranking, and list ownership live in the backend
//! core and auth services; this crate renders UI state and issues HTTP calls
//! against them. The crate contains pages, components, shared signal state,
//! the OAuth login flow, and the typed core-API client.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
