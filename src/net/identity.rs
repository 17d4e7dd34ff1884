//! Federated identity provider seam and its browser binding.
//!
//! SYSTEM CONTEXT
//! ==============
//! The provider's JS SDK is loaded by `js/identity_bridge.js`; this module
//! imports that bridge with wasm-bindgen and exposes it as an
//! `IdentityProvider`. Session notifications from the SDK are forwarded into
//! a `SessionContext`.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use crate::net::types::UserRecord;
use crate::state::session::SessionContext;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("identity provider is not configured")]
    NotConfigured,
    #[error("{0}")]
    Provider(String),
}

impl IdentityError {
    /// Message as reported by the provider, for user-facing notifications.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Federated sign-in capability.
#[allow(async_fn_in_trait)]
pub trait IdentityProvider {
    /// Run the popup sign-in flow.
    ///
    /// # Errors
    ///
    /// Returns an error if the popup is closed, the network fails, or the
    /// provider rejects the sign-in.
    async fn sign_in_with_popup(&self) -> Result<UserRecord, IdentityError>;

    /// End the provider session.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider fails to sign out.
    async fn sign_out(&self) -> Result<(), IdentityError>;

    /// Forward every provider session change into `session` for the rest of
    /// the page's lifetime.
    fn watch_session(&self, session: SessionContext);
}

#[cfg(feature = "csr")]
pub use browser::FirebaseIdentity;

#[cfg(feature = "csr")]
mod browser {
    use wasm_bindgen::JsValue;
    use wasm_bindgen::prelude::*;

    use super::{IdentityError, IdentityProvider};
    use crate::config::IdentityConfig;
    use crate::net::types::UserRecord;
    use crate::state::session::SessionContext;

    #[wasm_bindgen(module = "/js/identity_bridge.js")]
    extern "C" {
        #[wasm_bindgen(js_name = initIdentity, catch)]
        fn init_identity(config_json: &str) -> Result<(), JsValue>;

        #[wasm_bindgen(js_name = signInWithGooglePopup, catch)]
        async fn sign_in_with_google_popup() -> Result<JsValue, JsValue>;

        #[wasm_bindgen(js_name = signOutUser, catch)]
        async fn sign_out_user() -> Result<JsValue, JsValue>;

        #[wasm_bindgen(js_name = onSessionChanged)]
        fn on_session_changed(callback: &Closure<dyn FnMut(JsValue)>);
    }

    fn string_field(value: &JsValue, key: &str) -> Option<String> {
        js_sys::Reflect::get(value, &JsValue::from_str(key))
            .ok()
            .and_then(|v| v.as_string())
    }

    fn user_from_js(value: &JsValue) -> Option<UserRecord> {
        if value.is_null() || value.is_undefined() {
            return None;
        }
        Some(UserRecord::signed_in(
            string_field(value, "displayName"),
            string_field(value, "photoURL"),
        ))
    }

    fn error_from_js(value: &JsValue) -> IdentityError {
        let message = string_field(value, "message")
            .or_else(|| value.as_string())
            .unwrap_or_else(|| format!("{value:?}"));
        IdentityError::Provider(message)
    }

    /// Firebase Auth accessed through the JS bridge module.
    ///
    /// Only obtainable from a successful `init`.
    #[derive(Clone, Copy, Debug)]
    pub struct FirebaseIdentity {
        _initialized: (),
    }

    impl FirebaseIdentity {
        /// Initialize the provider SDK with `config`.
        ///
        /// # Errors
        ///
        /// Returns an error if the config is incomplete or the SDK throws.
        pub fn init(config: &IdentityConfig) -> Result<Self, IdentityError> {
            if !config.is_configured() {
                return Err(IdentityError::NotConfigured);
            }
            let json = serde_json::to_string(config).map_err(|e| IdentityError::Provider(e.to_string()))?;
            init_identity(&json).map_err(|e| error_from_js(&e))?;
            Ok(Self { _initialized: () })
        }
    }

    impl IdentityProvider for FirebaseIdentity {
        async fn sign_in_with_popup(&self) -> Result<UserRecord, IdentityError> {
            let value = sign_in_with_google_popup().await.map_err(|e| error_from_js(&e))?;
            user_from_js(&value).ok_or_else(|| IdentityError::Provider("no user returned".to_owned()))
        }

        async fn sign_out(&self) -> Result<(), IdentityError> {
            sign_out_user().await.map_err(|e| error_from_js(&e))?;
            Ok(())
        }

        fn watch_session(&self, session: SessionContext) {
            let callback = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
                session.publish(user_from_js(&value));
            });
            on_session_changed(&callback);
            // The subscription lives as long as the page.
            callback.forget();
        }
    }
}
