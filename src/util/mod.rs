//! Behavior behind the header and auth pages.
//!
//! Each module drives one user-visible flow (sign-in, form submission,
//! navigation layout, session reflection) through a small trait, so the flow
//! runs against the browser under `csr` and against doubles in tests.

pub mod auth;
pub mod form_submit;
pub mod nav_layout;
pub mod page;
pub mod session_reflector;

#[cfg(test)]
pub(crate) mod page_test_support;
