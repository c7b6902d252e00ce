//! # portfolio-client
//!
//! Leptos + WASM frontend for a single-page personal portfolio: navigation,
//! about, skills, projects, and a contact form posting to `/api/contact`.
//!
//! The contact submission flow (`state::contact` + `net::contact`) is the only
//! part with behavior beyond rendering; everything else is presentation over
//! static `content`.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    leptos::mount::hydrate_body(app::App);
}
