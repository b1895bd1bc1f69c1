//! # depot-client
//!
//! Leptos + WASM frontend for the depot admin dashboard.
//!
//! This crate contains the login page, the role gate that picks between the
//! admin and warehouse layouts, the session context backed by tab-scoped
//! browser storage, and the REST helper for the two role login endpoints.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydration entry point for the WASM bundle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
