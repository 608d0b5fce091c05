//! # plateview
//!
//! Leptos + WASM frontend for a microscopy plate-image database.
//! Renders a project/plate tree sidebar, a grid of well thumbnails for a
//! selected plate and timepoint, and a deep-linked full-resolution pan/zoom
//! viewer backed by the image-merge API.
//!
//! This crate contains pages, components, application state, and the
//! REST/URL plumbing against the external `/api/query`, `/api/list/:plate`,
//! and `/api/image-merge*` endpoints.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydration entry point, invoked from the generated WASM bindings.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
