//! HTTP helpers for the backend's form endpoints.
//!
//! Client-side (csr): real requests via `gloo-net`.
//! Native builds only carry the `Backend` seam so adapters can be tested
//! against in-memory doubles.
//!
//! ERROR HANDLING
//! ==============
//! A request that reaches the server always yields a `BackendResponse`,
//! whatever its status. Only transport and encoding failures are errors.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::form_payload::{FormEncoding, FormPayload};

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("could not encode form body: {0}")]
    Encode(String),
}

/// Raw status and body of a completed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendResponse {
    pub status: u16,
    pub body: String,
}

impl BackendResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport for form submissions.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// POST `payload` to `path` using `encoding`, asking for a JSON reply.
    ///
    /// # Errors
    ///
    /// Returns an error when the body cannot be encoded or the request does
    /// not complete.
    async fn post_form(
        &self,
        path: &str,
        payload: &FormPayload,
        encoding: FormEncoding,
    ) -> Result<BackendResponse, SubmitError>;
}

#[cfg(any(test, feature = "csr"))]
fn describe_js_error(context: &str, detail: impl std::fmt::Debug) -> String {
    format!("{context}: {detail:?}")
}

/// Same-origin backend reached through the browser `fetch` API.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooBackend;

#[cfg(feature = "csr")]
impl Backend for GlooBackend {
    async fn post_form(
        &self,
        path: &str,
        payload: &FormPayload,
        encoding: FormEncoding,
    ) -> Result<BackendResponse, SubmitError> {
        use gloo_net::http::Request;

        let mut builder = Request::post(path)
            .header("Accept", "application/json")
            .credentials(web_sys::RequestCredentials::SameOrigin);
        if let Some(content_type) = encoding.content_type() {
            builder = builder.header("Content-Type", content_type);
        }
        let request = match encoding {
            FormEncoding::UrlEncoded => builder.body(payload.to_urlencoded()),
            FormEncoding::Multipart => {
                let data = payload
                    .to_form_data()
                    .map_err(|e| SubmitError::Encode(describe_js_error("FormData", e)))?;
                builder.body(data)
            }
        }
        .map_err(|e| SubmitError::Encode(e.to_string()))?;

        let resp = request
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        Ok(BackendResponse { status, body })
    }
}
