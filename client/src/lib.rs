//! # client
//!
//! Leptos + WASM frontend for the Food AI nutrition analyzer.
//!
//! This crate contains pages, components, per-page state models, and the
//! REST helpers for the analysis pipeline. Each page owns its own state;
//! nothing is shared across routes beyond the router itself.
//!
//! The bundle is served statically by the backend; the `csr` feature marks
//! the browser build, and native builds (tests) compile the pure logic only.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: mount the application into the document body.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(crate::app::App);
}
