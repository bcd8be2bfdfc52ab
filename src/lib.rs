//! # vestibule
//!
//! Leptos + WASM frontend for the authentication gateway. A single form
//! toggles between login and signup, posts credentials to the auth API, and
//! keeps the resulting session identity in client state.
//!
//! This crate contains the two route pages, the auth-form state model, the
//! REST helpers for the auth endpoints, and the first-visit localStorage
//! flag that picks the form's initial mode.

pub mod app;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: set up panics + logging, then hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
