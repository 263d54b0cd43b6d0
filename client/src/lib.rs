//! # client
//!
//! Leptos + WASM frontend for the SharePli tweet-campaign tracker.
//!
//! This crate contains pages, components, application state, and the REST
//! API helpers. Domain logic (tweet content assembly, share statistics, form
//! validation) lives in plain modules so it stays unit-testable off-browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydration entry point invoked from the SSR-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
