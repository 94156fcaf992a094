//! Core-API client: profile, shop lists, items, and flyer search.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs returning [`ApiError::Unavailable`] since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every operation requires a stored access token before any request is
//! constructed; a missing token fails synchronously with zero network calls.
//! A 401 from any endpoint purges the stored access token as a side effect,
//! so callers can funnel the user back to login. Single-resource 404s get a
//! distinct not-found error. Nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;

#[cfg(feature = "hydrate")]
use crate::config::{AppConfig, endpoints};
use crate::net::types::{FlyerItem, Member, ShopList, UserProfile};
use crate::session::Session;

#[cfg(feature = "hydrate")]
use crate::net::types::{FlyersResponse, MembersResponse, ShareCodeResponse, ShopListsResponse};

/// Failure classes for core-API operations. Rendered to display strings at
/// the operation boundary; never propagated as panics.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No stored access token; the call was never issued.
    #[error("No access token found")]
    NoToken,
    /// 401 from the backend. The stored access token has been purged.
    #[error("Your session has expired. Please log in again.")]
    SessionExpired,
    /// 404 on a single-resource fetch.
    #[error("{0} not found")]
    NotFound(&'static str),
    /// Any other non-2xx status.
    #[error("Request failed with status {0}")]
    Http(u16),
    /// Transport-level failure.
    #[error("Network error: {0}")]
    Network(String),
    /// 2xx response whose body did not match the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),
    /// Called outside a browser environment.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Whether this failure means the session is gone and the user must log
    /// in again, as opposed to a retryable-by-hand operation failure.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::NoToken | ApiError::SessionExpired)
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Classify a response status. On 401 the stored access token is purged
/// before the error is returned, regardless of the operation.
#[cfg(any(test, feature = "hydrate"))]
fn fail_for_status(
    session: &Session,
    status: u16,
    not_found: Option<&'static str>,
) -> Result<(), ApiError> {
    match status {
        200..=299 => Ok(()),
        401 => {
            session.clear_tokens();
            Err(ApiError::SessionExpired)
        }
        404 => match not_found {
            Some(what) => Err(ApiError::NotFound(what)),
            None => Err(ApiError::Http(404)),
        },
        other => Err(ApiError::Http(other)),
    }
}

#[cfg(feature = "hydrate")]
fn net_err(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
fn decode_err(err: gloo_net::Error) -> ApiError {
    ApiError::Decode(err.to_string())
}

/// Body for `PUT /shoplist/{id}/item`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewItem {
    pub item_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// Partial body for `POST /shoplist/{id}/item/{item_id}`; absent fields are
/// left untouched by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_bought: Option<bool>,
}

/// Fetch the caller's profile. `Ok(None)` on 404 — the profile has not been
/// created yet and the first-run dialog should open.
///
/// # Errors
///
/// [`ApiError::NoToken`] without a stored token; classified transport and
/// status failures otherwise.
pub async fn fetch_profile(session: &Session) -> Result<Option<UserProfile>, ApiError> {
    let token = session.access_token().ok_or(ApiError::NoToken)?;
    #[cfg(feature = "hydrate")]
    {
        let url = AppConfig::get().core_url(endpoints::USER_PROFILE);
        let response = gloo_net::http::Request::get(&url)
            .header("Authorization", &bearer(&token))
            .send()
            .await
            .map_err(net_err)?;
        if response.status() == 404 {
            return Ok(None);
        }
        fail_for_status(session, response.status(), None)?;
        let profile: UserProfile = response.json().await.map_err(decode_err)?;
        Ok(Some(profile))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Create or update the caller's profile, returning the backend's copy.
///
/// # Errors
///
/// [`ApiError::NoToken`] without a stored token; classified transport and
/// status failures otherwise.
pub async fn update_profile(
    session: &Session,
    nickname: &str,
    postal_code: &str,
) -> Result<UserProfile, ApiError> {
    let token = session.access_token().ok_or(ApiError::NoToken)?;
    #[cfg(feature = "hydrate")]
    {
        let url = AppConfig::get().core_url(endpoints::USER_PROFILE);
        let body = serde_json::json!({ "nickname": nickname, "postal_code": postal_code });
        let response = gloo_net::http::Request::post(&url)
            .header("Authorization", &bearer(&token))
            .json(&body)
            .map_err(net_err)?
            .send()
            .await
            .map_err(net_err)?;
        fail_for_status(session, response.status(), None)?;
        let profile: UserProfile = response.json().await.map_err(decode_err)?;
        Ok(profile)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, nickname, postal_code);
        Err(ApiError::Unavailable)
    }
}

/// Fetch all shop lists the caller owns or has joined.
///
/// # Errors
///
/// [`ApiError::NoToken`] without a stored token; classified transport and
/// status failures otherwise.
pub async fn fetch_shop_lists(session: &Session) -> Result<Vec<ShopList>, ApiError> {
    let token = session.access_token().ok_or(ApiError::NoToken)?;
    #[cfg(feature = "hydrate")]
    {
        let url = AppConfig::get().core_url(endpoints::SHOPLIST);
        let response = gloo_net::http::Request::get(&url)
            .header("Authorization", &bearer(&token))
            .send()
            .await
            .map_err(net_err)?;
        fail_for_status(session, response.status(), None)?;
        let body: ShopListsResponse = response.json().await.map_err(decode_err)?;
        Ok(body.shoplists.into_iter().map(ShopList::from).collect())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Create a new shop list owned by the caller.
/// # Errors
///
/// [`ApiError::NoToken`] without a stored token; classified transport and
/// status failures otherwise.
pub async fn create_shop_list(session: &Session, name: &str) -> Result<(), ApiError> {
    let token = session.access_token().ok_or(ApiError::NoToken)?;
    #[cfg(feature = "hydrate")]
    {
        let url = AppConfig::get().core_url(endpoints::SHOPLIST);
        let body = serde_json::json!({ "name": name });
        let response = gloo_net::http::Request::put(&url)
            .header("Authorization", &bearer(&token))
            .json(&body)
            .map_err(net_err)?
            .send()
            .await
            .map_err(net_err)?;
        fail_for_status(session, response.status(), None)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, name);
        Err(ApiError::Unavailable)
    }
}

/// Fetch one shop list with owner, members, and items.
///
/// # Errors
///
/// [`ApiError::NotFound`] on 404; otherwise the usual token, transport, and
/// status failures.
pub async fn fetch_shop_list(session: &Session, id: i64) -> Result<ShopList, ApiError> {
    let token = session.access_token().ok_or(ApiError::NoToken)?;
    #[cfg(feature = "hydrate")]
    {
        let url = AppConfig::get().core_url(&endpoints::shoplist_by_id(id));
        let response = gloo_net::http::Request::get(&url)
            .header("Authorization", &bearer(&token))
            .send()
            .await
            .map_err(net_err)?;
        fail_for_status(session, response.status(), Some("Shop list"))?;
        let raw: crate::net::types::RawShopList = response.json().await.map_err(decode_err)?;
        Ok(ShopList::from(raw))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err(ApiError::Unavailable)
    }
}

/// Leave a shop list. Rejoining later requires a fresh share code.
///
/// # Errors
///
/// [`ApiError::NoToken`] without a stored token; classified transport and
/// status failures otherwise.
pub async fn leave_shop_list(session: &Session, id: i64) -> Result<(), ApiError> {
    let token = session.access_token().ok_or(ApiError::NoToken)?;
    #[cfg(feature = "hydrate")]
    {
        let url = AppConfig::get().core_url(&endpoints::shoplist_leave(id));
        let response = gloo_net::http::Request::post(&url)
            .header("Authorization", &bearer(&token))
            .send()
            .await
            .map_err(net_err)?;
        fail_for_status(session, response.status(), None)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err(ApiError::Unavailable)
    }
}

/// Join a shop list by share code.
///
/// # Errors
///
/// [`ApiError::NoToken`] without a stored token; classified transport and
/// status failures otherwise.
pub async fn join_shop_list(session: &Session, share_code: &str) -> Result<(), ApiError> {
    let token = session.access_token().ok_or(ApiError::NoToken)?;
    #[cfg(feature = "hydrate")]
    {
        let url = AppConfig::get().core_url(endpoints::SHOPLIST_JOIN);
        let body = serde_json::json!({ "share_code": share_code });
        let response = gloo_net::http::Request::post(&url)
            .header("Authorization", &bearer(&token))
            .json(&body)
            .map_err(net_err)?
            .send()
            .await
            .map_err(net_err)?;
        fail_for_status(session, response.status(), None)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, share_code);
        Err(ApiError::Unavailable)
    }
}

/// Request a share code granting join access to a shop list.
///
/// # Errors
///
/// [`ApiError::NoToken`] without a stored token; classified transport and
/// status failures otherwise.
pub async fn request_share_code(session: &Session, id: i64) -> Result<String, ApiError> {
    let token = session.access_token().ok_or(ApiError::NoToken)?;
    #[cfg(feature = "hydrate")]
    {
        let url = AppConfig::get().core_url(&endpoints::shoplist_share_code(id));
        let response = gloo_net::http::Request::post(&url)
            .header("Authorization", &bearer(&token))
            .send()
            .await
            .map_err(net_err)?;
        fail_for_status(session, response.status(), None)?;
        let body: ShareCodeResponse = response.json().await.map_err(decode_err)?;
        Ok(body.share_code)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the members of a shop list.
///
/// # Errors
///
/// [`ApiError::NoToken`] without a stored token; classified transport and
/// status failures otherwise.
pub async fn fetch_members(session: &Session, id: i64) -> Result<Vec<Member>, ApiError> {
    let token = session.access_token().ok_or(ApiError::NoToken)?;
    #[cfg(feature = "hydrate")]
    {
        let url = AppConfig::get().core_url(&endpoints::shoplist_members(id));
        let response = gloo_net::http::Request::get(&url)
            .header("Authorization", &bearer(&token))
            .send()
            .await
            .map_err(net_err)?;
        fail_for_status(session, response.status(), None)?;
        let body: MembersResponse = response.json().await.map_err(decode_err)?;
        Ok(body.members)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err(ApiError::Unavailable)
    }
}

/// Add an item to a shop list.
///
/// # Errors
///
/// [`ApiError::NoToken`] without a stored token; classified transport and
/// status failures otherwise.
pub async fn add_item(session: &Session, id: i64, item: &NewItem) -> Result<(), ApiError> {
    let token = session.access_token().ok_or(ApiError::NoToken)?;
    #[cfg(feature = "hydrate")]
    {
        let url = AppConfig::get().core_url(&endpoints::shoplist_items(id));
        let response = gloo_net::http::Request::put(&url)
            .header("Authorization", &bearer(&token))
            .json(item)
            .map_err(net_err)?
            .send()
            .await
            .map_err(net_err)?;
        fail_for_status(session, response.status(), None)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id, item);
        Err(ApiError::Unavailable)
    }
}

/// Apply a partial update to a shop-list item.
///
/// # Errors
///
/// [`ApiError::NoToken`] without a stored token; classified transport and
/// status failures otherwise.
pub async fn edit_item(
    session: &Session,
    id: i64,
    item_id: i64,
    patch: &ItemPatch,
) -> Result<(), ApiError> {
    let token = session.access_token().ok_or(ApiError::NoToken)?;
    #[cfg(feature = "hydrate")]
    {
        let url = AppConfig::get().core_url(&endpoints::shoplist_item(id, item_id));
        let response = gloo_net::http::Request::post(&url)
            .header("Authorization", &bearer(&token))
            .json(patch)
            .map_err(net_err)?
            .send()
            .await
            .map_err(net_err)?;
        fail_for_status(session, response.status(), None)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id, item_id, patch);
        Err(ApiError::Unavailable)
    }
}

/// Remove an item from a shop list.
///
/// # Errors
///
/// [`ApiError::NoToken`] without a stored token; classified transport and
/// status failures otherwise.
pub async fn remove_item(session: &Session, id: i64, item_id: i64) -> Result<(), ApiError> {
    let token = session.access_token().ok_or(ApiError::NoToken)?;
    #[cfg(feature = "hydrate")]
    {
        let url = AppConfig::get().core_url(&endpoints::shoplist_item(id, item_id));
        let response = gloo_net::http::Request::delete(&url)
            .header("Authorization", &bearer(&token))
            .send()
            .await
            .map_err(net_err)?;
        fail_for_status(session, response.status(), None)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id, item_id);
        Err(ApiError::Unavailable)
    }
}

/// Search current flyers by product name.
///
/// # Errors
///
/// [`ApiError::NoToken`] without a stored token; classified transport and
/// status failures otherwise.
pub async fn search_flyers(session: &Session, term: &str) -> Result<Vec<FlyerItem>, ApiError> {
    let token = session.access_token().ok_or(ApiError::NoToken)?;
    #[cfg(feature = "hydrate")]
    {
        let url = format!(
            "{}?searchName={}",
            AppConfig::get().core_url(endpoints::SEARCH_FLYERS),
            urlencoding::encode(term)
        );
        let response = gloo_net::http::Request::get(&url)
            .header("Authorization", &bearer(&token))
            .send()
            .await
            .map_err(net_err)?;
        fail_for_status(session, response.status(), None)?;
        let body: FlyersResponse = response.json().await.map_err(decode_err)?;
        Ok(body.flyers)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, term);
        Err(ApiError::Unavailable)
    }
}
