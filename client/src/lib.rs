//! # client
//!
//! Leptos + WASM frontend for the QR code system.
//!
//! This crate contains pages, components, session and page state, and the
//! REST client for the external QR code backend. QR images are rendered by a
//! third-party service; nothing here encodes or decodes QR codes.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
