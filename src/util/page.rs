//! Page-level side effects: blocking alerts and full-page navigation.
//!
//! Adapters and auth flows go through `PageEffects` so tests can record what
//! the user would have seen.

/// Blocking notification and navigation capability.
pub trait PageEffects {
    fn alert(&self, message: &str);
    fn navigate(&self, href: &str);
    fn reload(&self);
}

/// The current browser window.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPage;

#[cfg(feature = "csr")]
impl PageEffects for BrowserPage {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn navigate(&self, href: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(href) {
                log::error!("navigation to {href} failed: {e:?}");
            }
        }
    }

    fn reload(&self) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                log::error!("reload failed: {e:?}");
            }
        }
    }
}
