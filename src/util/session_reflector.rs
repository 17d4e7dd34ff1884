//! Reflects session changes onto the header chrome.
//!
//! Two states: signed-in shows the profile (avatar + name) and hides the
//! sign-up affordance; signed-out does the inverse. Each notification fully
//! determines the visible state, so the last one always wins.

#[cfg(test)]
#[path = "session_reflector_test.rs"]
mod session_reflector_test;

use crate::config::SiteConfig;
use crate::net::types::UserRecord;
use crate::state::chrome::ChromeView;
use crate::state::session::SessionObserver;

pub struct SessionReflector<V> {
    view: V,
    placeholder_avatar: String,
    fallback_display_name: String,
}

impl<V: ChromeView> SessionReflector<V> {
    pub fn new(view: V, config: &SiteConfig) -> Self {
        Self {
            view,
            placeholder_avatar: config.placeholder_avatar.clone(),
            fallback_display_name: config.fallback_display_name.clone(),
        }
    }

    fn show_signed_in(&self, user: &UserRecord) {
        let avatar = user
            .photo_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(&self.placeholder_avatar);
        let name = user
            .display_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.fallback_display_name);

        self.view.set_profile_visible(true);
        self.view.set_signup_visible(false);
        self.view.set_avatar(avatar);
        self.view.set_display_name(name);
    }

    fn show_signed_out(&self) {
        self.view.set_profile_visible(false);
        self.view.set_menu_open(false);
        self.view.set_signup_visible(true);
    }

    /// Pointer entered the profile chrome.
    pub fn on_profile_enter(&self) {
        self.view.set_menu_open(true);
    }

    /// Pointer left the profile chrome.
    pub fn on_profile_leave(&self) {
        self.view.set_menu_open(false);
    }
}

impl<V: ChromeView + Send + Sync> SessionObserver for SessionReflector<V> {
    fn on_session_changed(&self, user: Option<&UserRecord>) {
        log::debug!("session changed: {user:?}");
        match user {
            Some(user) if user.authenticated => self.show_signed_in(user),
            _ => self.show_signed_out(),
        }
    }
}
