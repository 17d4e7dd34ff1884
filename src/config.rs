//! Site configuration: routes, endpoints, layout breakpoint, localized
//! strings, and the identity-provider web config.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend renders a `<script type="application/json" id="site-config">`
//! element into each page. `SiteConfig::load` reads it once at startup and the
//! `App` provides the result through Leptos context. Every field has a default
//! so a page without the element still works (minus federated sign-in).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

/// DOM id of the JSON config element.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Width below which the navigation collapses when none is configured.
pub const DEFAULT_COMPACT_BREAKPOINT_PX: f64 = 768.0;

/// Web config for the federated identity provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdentityConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_id: Option<String>,
}

impl IdentityConfig {
    /// Whether enough is configured to initialize the provider.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.auth_domain.is_empty() && !self.project_id.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub login_endpoint: String,
    pub register_endpoint: String,
    /// Destination after a successful login or federated sign-in.
    pub home_route: String,
    /// Destination after a successful registration.
    pub login_route: String,
    /// Viewports at or below this width use the compact navigation layout.
    pub compact_breakpoint_px: f64,
    pub placeholder_avatar: String,
    pub fallback_display_name: String,
    pub system_error_message: String,
    /// Acknowledgment after federated sign-in; `{name}` is replaced.
    pub sign_in_greeting: String,
    pub sign_in_failure_prefix: String,
    pub signed_out_message: String,
    pub identity: IdentityConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            login_endpoint: "/login".to_owned(),
            register_endpoint: "/register".to_owned(),
            home_route: "/home".to_owned(),
            login_route: "/login".to_owned(),
            compact_breakpoint_px: DEFAULT_COMPACT_BREAKPOINT_PX,
            placeholder_avatar: "/static/default-avatar.png".to_owned(),
            fallback_display_name: "Người dùng".to_owned(),
            system_error_message: "Lỗi hệ thống!".to_owned(),
            sign_in_greeting: "Đăng nhập Google thành công! Xin chào {name}".to_owned(),
            sign_in_failure_prefix: "Đăng nhập Google thất bại".to_owned(),
            signed_out_message: "Bạn đã đăng xuất!".to_owned(),
            identity: IdentityConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parse a config document; omitted fields keep their defaults.
    ///
    /// A breakpoint that is not a positive number is reset to the default
    /// with a warning; the rest of the document is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(raw)?;
        let breakpoint = config.compact_breakpoint_px;
        if breakpoint.is_nan() || breakpoint <= 0.0 {
            log::warn!("compact breakpoint {breakpoint} is not positive; using {DEFAULT_COMPACT_BREAKPOINT_PX}");
            config.compact_breakpoint_px = DEFAULT_COMPACT_BREAKPOINT_PX;
        }
        Ok(config)
    }

    /// Greeting shown after federated sign-in.
    pub fn greeting_for(&self, display_name: Option<&str>) -> String {
        let name = display_name.unwrap_or(&self.fallback_display_name);
        self.sign_in_greeting.replace("{name}", name)
    }

    /// Read the config element from the current document.
    ///
    /// Falls back to defaults (with a warning) when the element is missing or
    /// malformed. Outside the browser this always returns defaults.
    pub fn load() -> Self {
        #[cfg(feature = "csr")]
        {
            let raw = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
                .and_then(|el| el.text_content());
            let Some(raw) = raw else {
                log::warn!("#{CONFIG_ELEMENT_ID} not found; using default site config");
                return Self::default();
            };
            match Self::from_json(&raw) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("{e}; using default site config");
                    Self::default()
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }
}
