// lib.rs - Root module for the little_scholars library

/// The fixtures module contains reusable test data
pub mod fixtures;

pub mod web_app;

/// WASM entry point for client-side hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}
