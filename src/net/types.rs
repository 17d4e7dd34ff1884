//! Shared wire DTOs for the backend and identity-provider boundaries.
//!
//! DESIGN
//! ======
//! Field names mirror the JSON the collaborators emit (`displayName`,
//! `photoURL`, `message`, `detail`) so serde does the mapping and callers
//! only see Rust names.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A signed-in user as reported by the identity provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Display name, if the provider account has one.
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    /// Avatar image URL, if the provider account has one.
    #[serde(rename = "photoURL", default)]
    pub photo_url: Option<String>,
    /// Whether the record represents an authenticated session.
    #[serde(default = "default_authenticated")]
    pub authenticated: bool,
}

fn default_authenticated() -> bool {
    true
}

impl UserRecord {
    /// Build an authenticated record from optional provider fields.
    pub fn signed_in(display_name: Option<String>, photo_url: Option<String>) -> Self {
        Self {
            display_name,
            photo_url,
            authenticated: true,
        }
    }
}

/// JSON body returned by the `/login` and `/register` endpoints.
///
/// Success responses carry `message`; failures carry `detail`, which is a
/// string for handled errors and a list of objects for request validation
/// errors. Any JSON document is accepted: a body that is not an object simply
/// has neither field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServerReply {
    pub message: Option<serde_json::Value>,
    pub detail: Option<serde_json::Value>,
}

impl ServerReply {
    /// Pick `message` and `detail` out of a decoded body.
    pub fn from_value(body: &serde_json::Value) -> Self {
        Self {
            message: body.get("message").cloned(),
            detail: body.get("detail").cloned(),
        }
    }

    /// Render `message` for display, or `None` when the server omitted it.
    pub fn message_text(&self) -> Option<String> {
        display_text(self.message.as_ref())
    }

    /// Render `detail` for display, or `None` when the server omitted it.
    pub fn detail_text(&self) -> Option<String> {
        display_text(self.detail.as_ref())
    }
}

/// Strings verbatim, other values as compact JSON, null as absent.
fn display_text(value: Option<&serde_json::Value>) -> Option<String> {
    match value? {
        serde_json::Value::Null => None,
        serde_json::Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
