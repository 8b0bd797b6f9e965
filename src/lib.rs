//! # eduvault-ui
//!
//! Leptos + WASM frontend for the EduVault study dashboard. Students sign
//! in, organize study subjects, track reminders, and upload files against
//! an external REST backend.
//!
//! This crate contains pages, components, application state, and the REST
//! client. Browser-only code is gated behind the `hydrate` feature so the
//! crate also builds for SSR and for native unit tests.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hooks panics and logging into the console, then
/// hydrates the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
