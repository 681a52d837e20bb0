//! # avotonix-ui
//!
//! Leptos + WASM frontend for the Avotonix landing page.
//!
//! The same crate renders on the server (`ssr`) and hydrates in the browser
//! (`hydrate`). Browser-only behavior (theme persistence, pointer/scroll
//! tracking) sits behind the `hydrate` feature; the state it drives is plain
//! Rust and tests without a browser.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating avotonix landing page");
    leptos::mount::hydrate_body(app::App);
}
