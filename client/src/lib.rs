//! # client
//!
//! Leptos + WASM page for Ask the AI: renders the conversation history,
//! collects a query, and drives one round trip per submission through the
//! gateway's `/api/completion` endpoint.
//!
//! State logic (`state`) and wire handling (`net`) are plain Rust and tested
//! natively; browser-only pieces sit behind the `csr` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod state;

/// Browser entry point: mount [`app::App`] into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
