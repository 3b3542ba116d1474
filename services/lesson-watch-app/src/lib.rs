//! Lesson Watch Dashboard - Leptos frontend
//!
//! Browser UI for searching lessons, building a watch list and controlling
//! the backend monitor. All state lives in a [`lesson_watch::Dashboard`];
//! the components only render the signals it writes to.

pub mod app;
pub mod components;
pub mod executor;
pub mod http;
pub mod view;

#[cfg(feature = "csr")]
pub mod dom;

pub use app::App;

/// WASM entry point
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    leptos::mount::mount_to_body(App);
}
