use std::sync::Mutex;

use futures::executor::block_on;

use super::*;
use crate::state::session::SessionContext;
use crate::util::page_test_support::{PageCall, RecordingPage};

/// Provider double with canned results.
struct FakeProvider {
    sign_in: Result<UserRecord, IdentityError>,
    sign_out: Result<(), IdentityError>,
    sign_in_calls: Mutex<usize>,
}

impl FakeProvider {
    fn new(sign_in: Result<UserRecord, IdentityError>, sign_out: Result<(), IdentityError>) -> Self {
        Self {
            sign_in,
            sign_out,
            sign_in_calls: Mutex::new(0),
        }
    }
}

impl IdentityProvider for FakeProvider {
    async fn sign_in_with_popup(&self) -> Result<UserRecord, IdentityError> {
        *self.sign_in_calls.lock().unwrap() += 1;
        self.sign_in.clone()
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        self.sign_out.clone()
    }

    fn watch_session(&self, _session: SessionContext) {}
}

fn config() -> SiteConfig {
    SiteConfig {
        sign_in_greeting: "Welcome {name}".to_owned(),
        sign_in_failure_prefix: "Sign-in failed".to_owned(),
        signed_out_message: "Signed out".to_owned(),
        fallback_display_name: "reader".to_owned(),
        ..SiteConfig::default()
    }
}

// =============================================================
// sign_in_with_popup
// =============================================================

#[test]
fn sign_in_success_greets_and_navigates_home() {
    let user = UserRecord::signed_in(Some("Lan".to_owned()), None);
    let provider = FakeProvider::new(Ok(user.clone()), Ok(()));
    let page = RecordingPage::default();

    let result = block_on(sign_in_with_popup(&provider, &page, &config()));

    assert_eq!(result, Ok(user));
    assert_eq!(
        page.calls(),
        vec![
            PageCall::Alert("Welcome Lan".to_owned()),
            PageCall::Navigate("/home".to_owned())
        ]
    );
}

#[test]
fn sign_in_greeting_uses_fallback_name() {
    let provider = FakeProvider::new(Ok(UserRecord::signed_in(None, None)), Ok(()));
    let page = RecordingPage::default();

    block_on(sign_in_with_popup(&provider, &page, &config())).unwrap();

    assert_eq!(page.alerts(), vec!["Welcome reader".to_owned()]);
}

#[test]
fn sign_in_failure_alerts_prefixed_message_without_navigation() {
    let err = IdentityError::Provider("popup closed by user".to_owned());
    let provider = FakeProvider::new(Err(err.clone()), Ok(()));
    let page = RecordingPage::default();

    let result = block_on(sign_in_with_popup(&provider, &page, &config()));

    assert_eq!(result, Err(err));
    assert_eq!(page.calls(), vec![PageCall::Alert("Sign-in failed: popup closed by user".to_owned())]);
}

#[test]
fn sign_in_failure_is_not_retried() {
    let provider = FakeProvider::new(Err(IdentityError::Provider("network".to_owned())), Ok(()));
    let page = RecordingPage::default();

    let _ = block_on(sign_in_with_popup(&provider, &page, &config()));

    assert_eq!(*provider.sign_in_calls.lock().unwrap(), 1);
}

#[test]
fn default_failure_message_matches_site_locale() {
    let message = sign_in_failure_message(
        &SiteConfig::default(),
        &IdentityError::Provider("popup blocked".to_owned()),
    );
    assert_eq!(message, "Đăng nhập Google thất bại: popup blocked");
}

// =============================================================
// sign_out
// =============================================================

#[test]
fn sign_out_success_acknowledges_and_reloads() {
    let provider = FakeProvider::new(Err(IdentityError::NotConfigured), Ok(()));
    let page = RecordingPage::default();

    block_on(sign_out(&provider, &page, &config())).unwrap();

    assert_eq!(
        page.calls(),
        vec![PageCall::Alert("Signed out".to_owned()), PageCall::Reload]
    );
}

#[test]
fn sign_out_failure_neither_alerts_nor_reloads() {
    let provider = FakeProvider::new(
        Err(IdentityError::NotConfigured),
        Err(IdentityError::Provider("network".to_owned())),
    );
    let page = RecordingPage::default();

    let result = block_on(sign_out(&provider, &page, &config()));

    assert!(result.is_err());
    assert!(page.calls().is_empty());
}
