//! Header chrome view-model: profile avatar/name, sign-up affordance, and
//! the hover menu.
//!
//! DESIGN
//! ======
//! The session reflector writes through `ChromeView` instead of touching DOM
//! nodes; the header component renders from `RwSignal<ChromeState>`.

#[cfg(test)]
#[path = "chrome_test.rs"]
mod chrome_test;

use leptos::prelude::*;

/// Visible state of the header's session-dependent elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChromeState {
    pub profile_visible: bool,
    pub signup_visible: bool,
    pub avatar_src: String,
    pub display_name: String,
    pub menu_open: bool,
}

impl Default for ChromeState {
    fn default() -> Self {
        Self {
            profile_visible: false,
            signup_visible: true,
            avatar_src: String::new(),
            display_name: String::new(),
            menu_open: false,
        }
    }
}

impl ChromeState {
    /// Class list for the `#user-profile` container.
    pub fn profile_class(&self) -> &'static str {
        if self.profile_visible {
            "user-profile"
        } else {
            "user-profile d-none"
        }
    }

    /// Inline `display` value for the `#signup-btn` affordance.
    pub fn signup_display(&self) -> &'static str {
        if self.signup_visible { "block" } else { "none" }
    }

    /// Class list for the `#menu-content` dropdown.
    pub fn menu_class(&self) -> &'static str {
        if self.menu_open {
            "menu-content show"
        } else {
            "menu-content"
        }
    }
}

/// Sink for chrome updates.
pub trait ChromeView {
    fn set_profile_visible(&self, visible: bool);
    fn set_signup_visible(&self, visible: bool);
    fn set_avatar(&self, src: &str);
    fn set_display_name(&self, name: &str);
    fn set_menu_open(&self, open: bool);
}

impl ChromeView for RwSignal<ChromeState> {
    fn set_profile_visible(&self, visible: bool) {
        self.update(|c| c.profile_visible = visible);
    }

    fn set_signup_visible(&self, visible: bool) {
        self.update(|c| c.signup_visible = visible);
    }

    fn set_avatar(&self, src: &str) {
        let src = src.to_owned();
        self.update(|c| c.avatar_src = src);
    }

    fn set_display_name(&self, name: &str) {
        let name = name.to_owned();
        self.update(|c| c.display_name = name);
    }

    fn set_menu_open(&self, open: bool) {
        self.update(|c| c.menu_open = open);
    }
}
