//! # getcovered-client
//!
//! Leptos + WASM frontend for the GetCovered.io insurance-coverage product.
//! Renders the marketing pages, the authentication flows (Google OAuth and
//! email/password), the user and admin dashboards, and the settings panel,
//! all backed by the remote REST API.
//!
//! The crate compiles in two modes: the `csr` feature builds the browser
//! bundle (real HTTP via `gloo-net`, `localStorage`-backed credentials,
//! `window.location` navigation), while the default native build swaps in
//! inert stubs so the session, guard, and API-classification logic can be
//! unit tested without a browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point — mounts the application onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(crate::app::App);
}
