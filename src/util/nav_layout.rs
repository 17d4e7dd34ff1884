//! Responsive relocation of the shared navigation fragment.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `.nav-topbar` fragment lives in `.main-nav` on compact viewports and
//! in `.top-bar` on wide ones. It is moved, never cloned, so exactly one
//! container holds it at any time. The `.hamburger-menu` toggles its `show`
//! class independently of where it is mounted.

#[cfg(test)]
#[path = "nav_layout_test.rs"]
mod nav_layout_test;

/// Class toggled on the fragment by the hamburger control.
pub const MENU_VISIBLE_CLASS: &str = "show";

/// Which container holds the navigation fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavSlot {
    /// `.main-nav`, used at or below the breakpoint.
    Compact,
    /// `.top-bar`, used above the breakpoint.
    Wide,
}

/// Slot for a viewport `width` in CSS pixels.
pub fn slot_for_width(width: f64, breakpoint: f64) -> NavSlot {
    if width <= breakpoint {
        NavSlot::Compact
    } else {
        NavSlot::Wide
    }
}

/// DOM operations the controller needs.
pub trait NavDom {
    fn contains_fragment(&self, slot: NavSlot) -> bool;
    fn append_fragment(&self, slot: NavSlot);
    fn toggle_fragment_class(&self, class: &str);
}

/// Controller over an optional set of navigation elements.
///
/// When the page lacks any required element the controller is inert.
pub struct NavController<D> {
    dom: Option<D>,
    breakpoint: f64,
}

impl<D: NavDom> NavController<D> {
    pub fn attach(dom: Option<D>, breakpoint: f64) -> Self {
        if dom.is_none() {
            log::error!("navigation elements missing (.nav-topbar, .main-nav, .top-bar); layout disabled");
        }
        Self { dom, breakpoint }
    }

    pub fn is_active(&self) -> bool {
        self.dom.is_some()
    }

    /// Move the fragment into the slot for `width`.
    ///
    /// Returns `true` if the DOM was mutated. Calling again at the same width
    /// is a no-op.
    pub fn relocate(&self, width: f64) -> bool {
        let Some(dom) = self.dom.as_ref() else {
            return false;
        };
        let slot = slot_for_width(width, self.breakpoint);
        if dom.contains_fragment(slot) {
            return false;
        }
        dom.append_fragment(slot);
        true
    }

    /// Toggle the fragment's visibility class. Returns `false` when inert.
    pub fn toggle_menu(&self) -> bool {
        let Some(dom) = self.dom.as_ref() else {
            log::error!("cannot toggle menu: .nav-topbar missing");
            return false;
        };
        dom.toggle_fragment_class(MENU_VISIBLE_CLASS);
        true
    }
}

#[cfg(feature = "csr")]
pub use browser::{ElementNav, viewport_width};

#[cfg(feature = "csr")]
mod browser {
    use super::{NavDom, NavSlot};

    /// Live DOM handles for the fragment and both containers.
    pub struct ElementNav {
        fragment: web_sys::Element,
        compact: web_sys::Element,
        wide: web_sys::Element,
    }

    impl ElementNav {
        /// Resolve `.nav-topbar`, `.main-nav` and `.top-bar` in `document`.
        pub fn from_document(document: &web_sys::Document) -> Option<Self> {
            let find = |selector: &str| document.query_selector(selector).ok().flatten();
            Some(Self {
                fragment: find(".nav-topbar")?,
                compact: find(".main-nav")?,
                wide: find(".top-bar")?,
            })
        }

        /// Resolve the elements in the current window's document.
        pub fn from_window() -> Option<Self> {
            let document = web_sys::window()?.document()?;
            Self::from_document(&document)
        }

        fn container(&self, slot: NavSlot) -> &web_sys::Element {
            match slot {
                NavSlot::Compact => &self.compact,
                NavSlot::Wide => &self.wide,
            }
        }
    }

    impl NavDom for ElementNav {
        fn contains_fragment(&self, slot: NavSlot) -> bool {
            self.container(slot).contains(Some(&*self.fragment))
        }

        fn append_fragment(&self, slot: NavSlot) {
            if let Err(e) = self.container(slot).append_child(&self.fragment) {
                log::error!("failed to move navigation fragment: {e:?}");
            }
        }

        fn toggle_fragment_class(&self, class: &str) {
            let _ = self.fragment.class_list().toggle(class);
        }
    }

    /// Current `window.innerWidth`, if available.
    pub fn viewport_width() -> Option<f64> {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }
}
