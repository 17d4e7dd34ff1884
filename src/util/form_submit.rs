//! Login and registration submission adapters.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both forms follow one contract: POST the serialized fields, decode the
//! JSON reply, then either show the server message and navigate, or show the
//! server's error detail. A reply that is not JSON is reported with the
//! generic system-error text whatever its status.

#[cfg(test)]
#[path = "form_submit_test.rs"]
mod form_submit_test;

use crate::config::SiteConfig;
use crate::net::api::{Backend, BackendResponse};
use crate::net::form_payload::{FormEncoding, FormPayload};
use crate::net::types::ServerReply;
use crate::util::page::PageEffects;

/// DOM id of the login form.
pub const LOGIN_FORM_ID: &str = "loginForm";
/// DOM id of the registration form.
pub const REGISTER_FORM_ID: &str = "registerForm";

/// Which form an adapter serves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Registration,
}

/// Interpreted result of a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 2xx: show `message` (when present) and go to `redirect`.
    Accepted { message: Option<String>, redirect: String },
    /// Non-2xx: show `detail` and stay.
    Rejected { detail: String },
    /// Body was not JSON, or the request never completed.
    SystemError,
}

/// Submission adapter for one form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormAdapter {
    pub kind: FormKind,
    pub endpoint: String,
    pub encoding: FormEncoding,
    pub success_route: String,
    system_error_message: String,
}

impl FormAdapter {
    /// `#loginForm`: URL-encoded POST, then `/home`.
    pub fn login(config: &SiteConfig) -> Self {
        Self {
            kind: FormKind::Login,
            endpoint: config.login_endpoint.clone(),
            encoding: FormEncoding::UrlEncoded,
            success_route: config.home_route.clone(),
            system_error_message: config.system_error_message.clone(),
        }
    }

    /// `#registerForm`: multipart POST, then `/login`.
    pub fn registration(config: &SiteConfig) -> Self {
        Self {
            kind: FormKind::Registration,
            endpoint: config.register_endpoint.clone(),
            encoding: FormEncoding::Multipart,
            success_route: config.login_route.clone(),
            system_error_message: config.system_error_message.clone(),
        }
    }

    pub fn form_id(&self) -> &'static str {
        match self.kind {
            FormKind::Login => LOGIN_FORM_ID,
            FormKind::Registration => REGISTER_FORM_ID,
        }
    }

    /// Classify a completed response.
    pub fn interpret(&self, response: &BackendResponse) -> SubmitOutcome {
        let reply = match serde_json::from_str::<serde_json::Value>(&response.body) {
            Ok(body) => ServerReply::from_value(&body),
            Err(e) => {
                log::error!(
                    "{} response (status {}) is not JSON: {e}",
                    self.endpoint,
                    response.status
                );
                return SubmitOutcome::SystemError;
            }
        };
        if response.ok() {
            SubmitOutcome::Accepted {
                message: reply.message_text(),
                redirect: self.success_route.clone(),
            }
        } else {
            SubmitOutcome::Rejected {
                detail: reply
                    .detail_text()
                    .unwrap_or_else(|| self.system_error_message.clone()),
            }
        }
    }

    /// Surface `outcome` to the user.
    pub fn apply<P: PageEffects>(&self, page: &P, outcome: &SubmitOutcome) {
        match outcome {
            SubmitOutcome::Accepted { message, redirect } => {
                if let Some(message) = message {
                    page.alert(message);
                }
                page.navigate(redirect);
            }
            SubmitOutcome::Rejected { detail } => page.alert(detail),
            SubmitOutcome::SystemError => page.alert(&self.system_error_message),
        }
    }

    /// Send `payload`, then report the outcome through `page`.
    pub async fn submit<B: Backend, P: PageEffects>(
        &self,
        backend: &B,
        page: &P,
        payload: FormPayload,
    ) -> SubmitOutcome {
        if self.kind == FormKind::Registration {
            for (name, _) in payload.iter() {
                log::debug!("registration field: {name}");
            }
        }
        let outcome = match backend.post_form(&self.endpoint, &payload, self.encoding).await {
            Ok(response) => self.interpret(&response),
            Err(e) => {
                log::error!("{} submission failed: {e}", self.endpoint);
                SubmitOutcome::SystemError
            }
        };
        self.apply(page, &outcome);
        outcome
    }
}

/// Read the submitted form's fields from a submit event.
///
/// Logs and returns `None` if the event did not come from a form.
#[cfg(feature = "csr")]
pub fn payload_from_submit(ev: &web_sys::SubmitEvent) -> Option<FormPayload> {
    use wasm_bindgen::JsCast;

    let Some(form) = ev
        .target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlFormElement>().ok())
    else {
        log::error!("submit event without a form target");
        return None;
    };
    match FormPayload::from_form(&form) {
        Ok(payload) => Some(payload),
        Err(e) => {
            log::error!("could not read form #{}: {e:?}", form.id());
            None
        }
    }
}
