//! # client
//!
//! Leptos + WASM frontend for the Valentine proposal site.
//!
//! This crate contains the static data tables, the interaction and animation
//! math behind the evasive "No" button and the confetti celebration, the
//! reactive page state, and the route-level pages and components. The same
//! crate renders on the server (`ssr`) and hydrates in the browser
//! (`hydrate`).

pub mod app;
pub mod components;
pub mod data;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs the panic hook and console logger, then
/// hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    log::info!("hydrating valentine client");
    leptos::mount::hydrate_body(app::App);
}
