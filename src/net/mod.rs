//! Networking modules for the auth and core API services.
//!
//! SYSTEM CONTEXT
//! ==============
//! `oauth` handles the authorization-code login flow, `api` the bearer-token
//! REST calls against the core service, and `types` the wire schema plus the
//! defensive reshaping into semantic types.

pub mod api;
pub mod oauth;
pub mod types;
