//! # calendar-web
//!
//! Leptos + WASM frontend for the community calendar application.
//!
//! Users sign up, log in, create or join communities, post template tags on
//! calendar dates and chat per tag. The backend is a REST API reached through
//! [`net::api::ApiClient`]; everything browser-specific (cookies, HTTP, DOM)
//! sits behind the `csr` feature so the state machines and route tables build
//! and test natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: installs the panic hook and console logger, then mounts
/// the application on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = config::parse_log_level(option_env!("LOG_LEVEL"));
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"console logger already installed".into());
    }
    leptos::mount::mount_to_body(app::App);
}
