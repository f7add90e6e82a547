//! # client
//!
//! Leptos frontend for the session-gated portal. Rendered on the server
//! (`ssr`) and hydrated in the browser (`hydrate`).
//!
//! The browser never sees the session cookie's contents: it asks the server
//! for the current session once per mount and gates protected pages on the
//! answer.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered `App`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
