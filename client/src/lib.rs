//! # client
//!
//! Leptos + WASM front end for the URL shortener.
//!
//! The page shell (`pages::home`) holds the last short URL and composes the
//! header, the submission form, the result card, and the footer. The
//! submission flow itself lives in the `shortener` crate; this crate only
//! binds it to signals, the browser's `fetch`, and `window.alert`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
