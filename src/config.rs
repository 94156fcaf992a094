//! Service endpoints and application configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client talks to two external services: the auth server (authorize +
//! token endpoints) and the core API (profile, shop lists, flyer search).
//! Base URLs and OAuth client credentials are baked in at build time via
//! `SHOPPER_*` environment variables, with localhost defaults for dev.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::sync::OnceLock;

/// Build-time application configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Base URL of the core API service.
    pub core_api_url: &'static str,
    /// Base URL of the OAuth authorization server.
    pub auth_api_url: &'static str,
    /// Public URL this frontend is served from.
    pub frontend_url: &'static str,
    /// OAuth client id registered with the auth server.
    pub client_id: &'static str,
    /// OAuth client secret registered with the auth server.
    pub client_secret: &'static str,
    /// Path prefix the app is mounted under.
    pub base_path: &'static str,
    /// Prefill address for the map search screen.
    pub default_address: &'static str,
    /// Google Maps key for the map search screen, once it renders a map.
    pub google_maps_api_key: &'static str,
    /// Google Maps map id paired with the key above.
    pub map_id: &'static str,
}

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// The process-wide configuration, resolved from build-time env overrides.
    pub fn get() -> &'static AppConfig {
        CONFIG.get_or_init(|| AppConfig {
            core_api_url: option_env!("SHOPPER_CORE_API_URL").unwrap_or("http://localhost:8080"),
            auth_api_url: option_env!("SHOPPER_AUTH_API_URL").unwrap_or("http://localhost:9096"),
            frontend_url: option_env!("SHOPPER_FRONTEND_URL").unwrap_or("http://localhost:3000"),
            client_id: option_env!("SHOPPER_CLIENT_ID").unwrap_or(""),
            client_secret: option_env!("SHOPPER_CLIENT_SECRET").unwrap_or(""),
            base_path: option_env!("SHOPPER_BASE_PATH").unwrap_or("/shopper"),
            default_address: option_env!("SHOPPER_DEFAULT_ADDRESS").unwrap_or(""),
            google_maps_api_key: option_env!("SHOPPER_GOOGLE_MAPS_API_KEY").unwrap_or(""),
            map_id: option_env!("SHOPPER_MAP_ID").unwrap_or(""),
        })
    }

    /// Full core-API URL for an endpoint path.
    pub fn core_url(&self, path: &str) -> String {
        format!("{}{path}", self.core_api_url)
    }

    /// Full auth-server URL for an endpoint path.
    pub fn auth_url(&self, path: &str) -> String {
        format!("{}{path}", self.auth_api_url)
    }

    /// The OAuth redirect URI pointing back at this frontend.
    pub fn callback_url(&self) -> String {
        format!("{}{}/callback", self.frontend_url, self.base_path)
    }
}

/// Core-API and auth-server endpoint paths.
///
/// The `/core/v2` prefix tracks the current backend API revision.
pub mod endpoints {
    pub const AUTHORIZE: &str = "/auth/authorize";
    pub const TOKEN: &str = "/auth/token";

    pub const USER_PROFILE: &str = "/core/v2/user";
    pub const SHOPLIST: &str = "/core/v2/shoplist";
    pub const SHOPLIST_JOIN: &str = "/core/v2/shoplist/join";
    pub const SEARCH_FLYERS: &str = "/core/v2/search/flyers";

    pub fn shoplist_by_id(id: i64) -> String {
        format!("/core/v2/shoplist/{id}")
    }

    pub fn shoplist_items(id: i64) -> String {
        format!("/core/v2/shoplist/{id}/item")
    }

    pub fn shoplist_item(id: i64, item_id: i64) -> String {
        format!("/core/v2/shoplist/{id}/item/{item_id}")
    }

    pub fn shoplist_leave(id: i64) -> String {
        format!("/core/v2/shoplist/{id}/leave")
    }

    pub fn shoplist_share_code(id: i64) -> String {
        format!("/core/v2/shoplist/{id}/share-code")
    }

    pub fn shoplist_share_code_revoke(id: i64) -> String {
        format!("/core/v2/shoplist/{id}/share-code/revoke")
    }

    pub fn shoplist_members(id: i64) -> String {
        format!("/core/v2/shoplist/{id}/members")
    }
}

/// Client-side route paths for the member area.
pub mod routes {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const CALLBACK: &str = "/callback";
    pub const ERROR: &str = "/error";
    pub const MEMBER: &str = "/member";

    pub fn shop_list(id: i64) -> String {
        format!("/member/shoplist/{id}")
    }

    pub fn search_item(id: i64) -> String {
        format!("/member/searchshopitem/{id}")
    }
}
