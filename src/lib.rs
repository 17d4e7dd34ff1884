//! # newsroom-client
//!
//! Leptos + WASM presentation layer for the news site: header chrome that
//! reflects the federated sign-in session, responsive navigation, and the
//! login/registration forms that post to the backend.
//!
//! Browser glue is behind the `csr` feature. Without it the crate builds
//! natively so session, layout and submission logic can be unit-tested
//! without a document.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
