//! OAuth2 authorization-code flow: login redirect and callback exchange.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page redirects the whole browser to the auth server's authorize
//! endpoint; the callback page validates the echoed CSRF state and exchanges
//! the single-use code for a token pair. Validation and persistence are pure
//! steps so the whole state machine is testable without a network; only
//! `exchange_code` touches HTTP, and it can never run before
//! [`prepare_exchange`] has succeeded.

#[cfg(test)]
#[path = "oauth_test.rs"]
mod oauth_test;

use crate::config::{AppConfig, endpoints};
use crate::net::types::TokenPair;
#[cfg(feature = "hydrate")]
use crate::net::types::TokenResponse;
use crate::session::{Session, SessionError};

/// Scopes requested at login.
pub const SCOPE: &str = "profile shoplist search";

/// Terminal failures of a login attempt. Each renders as the user-facing
/// message shown on the login screen; none are retried.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CallbackError {
    /// The auth server reported an error; surfaced verbatim.
    #[error("{0}")]
    Provider(String),
    /// `code` or `state` missing from the callback URL.
    #[error("Invalid response - missing required parameters")]
    MissingParams,
    /// The echoed `state` did not match the stored CSRF state.
    #[error("Invalid state - possible security issue")]
    StateMismatch,
    /// The token endpoint rejected the exchange or was unreachable.
    #[error("Failed to exchange code for tokens")]
    ExchangeFailed,
    /// 2xx exchange response without an `access_token` field.
    #[error("No access token received")]
    MissingToken,
    /// The persisted token did not read back as written.
    #[error("Token storage verification failed")]
    StorageVerification,
}

/// Query parameters parsed off the callback URL.
#[derive(Clone, Debug, Default)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

/// A validated exchange request. Constructible only through
/// [`prepare_exchange`], so the CSRF check always precedes the network call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExchangeRequest {
    pub code: String,
    pub state: String,
}

/// Generate a fresh CSRF state token from two concatenated random fragments.
pub fn generate_state() -> String {
    format!(
        "{}{}",
        uuid::Uuid::new_v4().simple(),
        uuid::Uuid::new_v4().simple()
    )
}

/// Build the authorize-endpoint URL the browser navigates to.
pub fn build_authorize_url(config: &AppConfig, state: &str, error: Option<&str>) -> String {
    let mut url = format!(
        "{}?response_type=code&client_id={}&redirect_uri={}&state={}&scope={}",
        config.auth_url(endpoints::AUTHORIZE),
        urlencoding::encode(config.client_id),
        urlencoding::encode(&config.callback_url()),
        urlencoding::encode(state),
        urlencoding::encode(SCOPE),
    );
    if let Some(error) = error {
        url.push_str("&error=");
        url.push_str(&urlencoding::encode(error));
    }
    url
}

/// Form-encoded body for the token-endpoint POST.
pub fn token_request_body(config: &AppConfig, request: &ExchangeRequest) -> String {
    format!(
        "grant_type=authorization_code&code={}&redirect_uri={}&client_id={}&client_secret={}&state={}",
        urlencoding::encode(&request.code),
        urlencoding::encode(&config.callback_url()),
        urlencoding::encode(config.client_id),
        urlencoding::encode(config.client_secret),
        urlencoding::encode(&request.state),
    )
}

/// `AwaitingParams` + `ValidatingState`: decide whether an exchange may run.
///
/// # Errors
///
/// Fails on a provider-reported error, missing parameters, or a CSRF state
/// mismatch. The mismatch check runs before any network call by construction.
pub fn prepare_exchange(
    params: &CallbackParams,
    stored_state: Option<&str>,
) -> Result<ExchangeRequest, CallbackError> {
    if let Some(error) = &params.error {
        return Err(CallbackError::Provider(error.clone()));
    }
    let (Some(code), Some(state)) = (&params.code, &params.state) else {
        return Err(CallbackError::MissingParams);
    };
    match stored_state {
        Some(stored) if stored == state => Ok(ExchangeRequest {
            code: code.clone(),
            state: state.clone(),
        }),
        _ => Err(CallbackError::StateMismatch),
    }
}

/// `ExchangingCode`: single POST to the token endpoint. One attempt, no retry.
///
/// # Errors
///
/// Fails on transport errors, non-2xx responses, undecodable bodies, and
/// 2xx bodies without an `access_token`.
pub async fn exchange_code(request: &ExchangeRequest) -> Result<TokenPair, CallbackError> {
    #[cfg(feature = "hydrate")]
    {
        let config = AppConfig::get();
        let response = gloo_net::http::Request::post(&config.auth_url(endpoints::TOKEN))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(token_request_body(config, request))
            .map_err(|_| CallbackError::ExchangeFailed)?
            .send()
            .await
            .map_err(|_| CallbackError::ExchangeFailed)?;
        if !response.ok() {
            log::warn!("token exchange failed with status {}", response.status());
            return Err(CallbackError::ExchangeFailed);
        }
        let tokens: TokenResponse = response
            .json()
            .await
            .map_err(|_| CallbackError::ExchangeFailed)?;
        tokens.into_pair().ok_or(CallbackError::MissingToken)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(CallbackError::ExchangeFailed)
    }
}

/// Final step: persist the token pair, clear the CSRF state, and verify the
/// write. On failure the session holds no partial tokens.
///
/// # Errors
///
/// Fails when the persisted access token does not read back as written.
pub fn complete_exchange(session: &Session, tokens: &TokenPair) -> Result<(), CallbackError> {
    match session.set_tokens(tokens) {
        Ok(()) => {
            session.clear_csrf_state();
            Ok(())
        }
        Err(SessionError::VerificationFailed) => {
            session.clear_tokens();
            Err(CallbackError::StorageVerification)
        }
        Err(SessionError::Unavailable) => {
            session.clear_tokens();
            Err(CallbackError::ExchangeFailed)
        }
    }
}
