/// Atlas web dashboard
///
/// Leptos-based admin dashboard: public page shell, role-aware
/// sidebar navigation, and session management, compiled to WASM with
/// optional Axum SSR.

pub mod app;
pub mod auth;
pub mod components;
pub mod nav;
pub mod pages;
pub mod types;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount_to_body(App);
}
