//! # folio
//!
//! Leptos + WASM client for a single-page portfolio/marketing site: loading
//! overlay, scroll-aware navbar, persisted light/dark theme, smooth in-page
//! scrolling, a validated contact form with a stubbed submission, and small
//! scroll-triggered animations (typewriter title, count-up stats, parallax
//! hero pattern).
//!
//! The headless models live in `state` and `anim` and are tested natively;
//! everything that touches the DOM is feature-gated behind `hydrate`.

pub mod anim;
pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: sets up logging and hydrates the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);

    leptos::mount::hydrate_body(app::App);
}
