//! Federated sign-in and sign-out flows shared by the login page and header.
//!
//! SYSTEM CONTEXT
//! ==============
//! These flows only acknowledge and navigate. Header chrome updates arrive
//! separately through the provider's session subscription.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::config::SiteConfig;
use crate::net::identity::{IdentityError, IdentityProvider};
use crate::net::types::UserRecord;
use crate::util::page::PageEffects;

/// Message shown when the popup flow fails.
pub fn sign_in_failure_message(config: &SiteConfig, err: &IdentityError) -> String {
    format!("{}: {}", config.sign_in_failure_prefix, err.message())
}

/// Run the popup sign-in; greet and go home on success, alert on failure.
///
/// # Errors
///
/// Returns the provider error after it has been shown to the user.
pub async fn sign_in_with_popup<I, P>(
    provider: &I,
    page: &P,
    config: &SiteConfig,
) -> Result<UserRecord, IdentityError>
where
    I: IdentityProvider,
    P: PageEffects,
{
    match provider.sign_in_with_popup().await {
        Ok(user) => {
            page.alert(&config.greeting_for(user.display_name.as_deref()));
            page.navigate(&config.home_route);
            Ok(user)
        }
        Err(e) => {
            page.alert(&sign_in_failure_message(config, &e));
            Err(e)
        }
    }
}

/// Sign out; acknowledge and reload on success, log on failure.
///
/// # Errors
///
/// Returns the provider error after logging it.
pub async fn sign_out<I, P>(provider: &I, page: &P, config: &SiteConfig) -> Result<(), IdentityError>
where
    I: IdentityProvider,
    P: PageEffects,
{
    match provider.sign_out().await {
        Ok(()) => {
            page.alert(&config.signed_out_message);
            page.reload();
            Ok(())
        }
        Err(e) => {
            log::error!("sign-out failed: {e}");
            Err(e)
        }
    }
}
