//! # client
//!
//! Leptos + WASM frontend for the portfolio page.
//!
//! The crate renders the page on the server (`ssr`) and hydrates it in the
//! browser (`hydrate`). Page behavior is split in two layers:
//!
//! - [`state`] holds plain state machines (theme, menu, project filter,
//!   contact form) that compile and test without a browser.
//! - [`util`] holds the hydrate-only adapters that bind those machines, and the
//!   ones in the `effects` crate, to DOM events, timers, and animation frames.
//!
//! [`components`] and [`pages`] compose both into the rendered page.

pub mod app;
pub mod components;
pub mod consts;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"console logger already installed".into());
    }
    leptos::mount::hydrate_body(app::App);
}
