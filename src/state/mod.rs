//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` tracks who is signed in; `chrome` is the header view-model that
//! session changes are reflected onto.

pub mod chrome;
pub mod session;
