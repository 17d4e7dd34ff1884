//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form wiring and delegates submission semantics to
//! `util::form_submit` and `util::auth`.

pub mod home;
pub mod login;
pub mod register;
