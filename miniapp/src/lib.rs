//! ShakeTON: a shake-to-earn Telegram Mini-App.
//!
//! Leptos client-side rendered frontend. The pure game logic lives in
//! [`engine`], host adapters (Telegram WebApp, TON Connect, backend REST)
//! in [`services`], and the signal-backed contexts in [`state`].

use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod config;
pub mod engine;
pub mod pages;
pub mod services;
pub mod state;
pub mod utils;

/// Wasm entry point.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("starting ShakeTON mini-app");

    hide_loading_screen();
    leptos::mount::mount_to_body(app::App);
}

/// Remove the static loading placeholder from index.html, if present.
fn hide_loading_screen() {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id("loading"));
    if let Some(element) = element {
        element.remove();
    }
}
