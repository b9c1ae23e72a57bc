//! # client
//!
//! Leptos + WASM frontend for the SWOB developer console.
//!
//! This crate contains the route table, pages, components, session and auth
//! state, and the authentication endpoint client. The root host crate
//! renders it on the server (`ssr`); the browser bundle hydrates it
//! (`hydrate`).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

/// WASM entry point: attach the app to the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
