//! # client
//!
//! Leptos + WASM frontend for Ency, the text and URL summarizer.
//!
//! This crate contains the summarization panel (state, components, page),
//! the HTTP client for the remote summarization API, and the routed `App`
//! that the server renders with SSR and the browser hydrates.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    util::browser::init_logging();
    leptos::mount::hydrate_body(app::App);
}
