//! # client
//!
//! Leptos + WASM frontend for the office website.
//!
//! This crate contains the page views, the shared header/footer chrome,
//! static site content, the contact form state machine, and the REST helper
//! that posts inquiries to the server.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: attach to the server-rendered HTML.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
