//! Primex Business landing site
//!
//! Server-rendered with Leptos and hydrated in the browser. Page behaviour
//! lives in `primex-core`; this crate renders it and wires it to the DOM.

pub mod app;
pub mod browser;
pub mod components;
pub mod config;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod server;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    leptos::mount_to_body(app::App);
}
