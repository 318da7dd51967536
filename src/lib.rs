//! # marketplace-client
//!
//! Leptos + WASM front-end for the freelance marketplace.
//!
//! This crate contains the session store, the route table and its guard,
//! the REST client for the marketplace API, and the route-level pages. The
//! API server itself is an external collaborator reached over HTTP.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: panic hook, console logging, then mount [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
