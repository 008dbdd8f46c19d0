//! # bookshelf
//!
//! Leptos + WASM application shell: route table, navigation guard, a
//! reactive auth store persisted to `localStorage`, and bootstrap of the
//! Firestore and theme settings.
//!
//! The store (`state`), guard (`guard`) and route table (`routes`) are plain
//! Rust and build natively for tests; `app`, `pages` and `components` bind
//! them to the browser. Browser-only glue sits behind the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod guard;
pub mod pages;
pub mod routes;
pub mod services;
pub mod state;
pub mod util;

/// WASM entry point: install logging, build the store and services, mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use std::sync::Arc;

    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = config::AppConfig::from_build_env().unwrap_or_else(|e| {
        log::error!("invalid build configuration, using defaults: {e}");
        config::AppConfig { firebase: None, theme: config::DEFAULT_THEME }
    });
    let services = services::bootstrap(&config);
    let store = state::auth::AuthStore::restore(Arc::new(util::storage::LocalStorage));

    leptos::mount::mount_to_body(move || view! { <App store=store services=services/> });
}
