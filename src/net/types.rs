//! Wire DTOs and the semantic types screens render from.
//!
//! DESIGN
//! ======
//! The backend's field names and shapes drifted across revisions (`name` vs
//! `item_name`, optional `brand_name`, numeric ids serialized as strings),
//! so responses are decoded into tolerant `Raw*` DTOs and explicitly
//! converted, never rendered as-is.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// User profile as owned by the backend. The client caches a copy for
/// display priming only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub nickname: String,
    /// Six-character postal code used for flyer locality.
    pub postal_code: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A shop-list member (also used for the owner).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub nickname: String,
}

/// A shopping list with its owner, members, and items.
#[derive(Clone, Debug, PartialEq)]
pub struct ShopList {
    pub id: i64,
    pub name: String,
    pub owner: Member,
    pub members: Vec<Member>,
    pub items: Vec<ShopListItem>,
}

/// A single entry on a shopping list.
#[derive(Clone, Debug, PartialEq)]
pub struct ShopListItem {
    pub id: i64,
    pub item_name: String,
    pub brand_name: String,
    pub extra_info: String,
    pub is_bought: bool,
    /// Stores with a current flyer deal for this item, deduplicated.
    pub available_stores: Vec<String>,
    /// Full flyer matches for the detail view.
    pub flyer_details: Vec<FlyerItem>,
}

/// A promotional flyer listing returned by the search backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlyerItem {
    pub store: String,
    pub brand: String,
    pub product_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub disclaimer_text: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "de_f64")]
    pub original_price: f64,
    #[serde(default)]
    pub pre_price_text: String,
    #[serde(default)]
    pub price_text: String,
    #[serde(default)]
    pub post_price_text: String,
    /// Deal window start, milliseconds since the Unix epoch.
    #[serde(default, deserialize_with = "de_i64")]
    pub start_date: i64,
    /// Deal window end, milliseconds since the Unix epoch.
    #[serde(default, deserialize_with = "de_i64")]
    pub end_date: i64,
}

/// Token pair issued by the auth server's token endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Raw token-endpoint response; `access_token` may be absent in an
/// otherwise-2xx body, which callers must treat as a failed exchange.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl TokenResponse {
    /// Promote to a [`TokenPair`], or `None` when the access token is missing.
    pub fn into_pair(self) -> Option<TokenPair> {
        Some(TokenPair {
            access_token: self.access_token?,
            refresh_token: self.refresh_token,
        })
    }
}

// ---- raw wire shapes ----

#[derive(Debug, Deserialize)]
pub(crate) struct ShopListsResponse {
    #[serde(default)]
    pub shoplists: Vec<RawShopList>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MembersResponse {
    #[serde(default)]
    pub members: Vec<Member>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ShareCodeResponse {
    pub share_code: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FlyersResponse {
    #[serde(default)]
    pub flyers: Vec<FlyerItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawShopList {
    #[serde(deserialize_with = "de_i64")]
    pub id: i64,
    pub name: String,
    pub owner: Member,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub items: Vec<RawShopListItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawShopListItem {
    #[serde(deserialize_with = "de_i64")]
    pub id: i64,
    /// Older backend revisions sent `name`; newer ones send `item_name`.
    #[serde(alias = "item_name")]
    pub name: String,
    #[serde(default)]
    pub brand_name: Option<String>,
    #[serde(default)]
    pub extra_info: Option<String>,
    #[serde(default)]
    pub is_bought: bool,
    #[serde(default)]
    pub flyer: Vec<FlyerItem>,
}

impl From<RawShopList> for ShopList {
    fn from(raw: RawShopList) -> Self {
        ShopList {
            id: raw.id,
            name: raw.name,
            owner: raw.owner,
            members: raw.members,
            items: raw.items.into_iter().map(ShopListItem::from).collect(),
        }
    }
}

impl From<RawShopListItem> for ShopListItem {
    fn from(raw: RawShopListItem) -> Self {
        let mut stores = Vec::new();
        for flyer in &raw.flyer {
            if !stores.contains(&flyer.store) {
                stores.push(flyer.store.clone());
            }
        }
        ShopListItem {
            id: raw.id,
            item_name: raw.name,
            brand_name: raw.brand_name.unwrap_or_default(),
            extra_info: raw.extra_info.unwrap_or_default(),
            is_bought: raw.is_bought,
            available_stores: stores,
            flyer_details: raw.flyer,
        }
    }
}

fn de_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        serde_json::Value::String(raw) => raw
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("expected integer, got {raw:?}"))),
        _ => Err(D::Error::custom("expected number")),
    }
}

fn de_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| D::Error::custom("expected finite number")),
        serde_json::Value::String(raw) => raw
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("expected number, got {raw:?}"))),
        _ => Err(D::Error::custom("expected number")),
    }
}
