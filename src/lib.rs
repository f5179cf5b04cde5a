//! DigiFlow - premium n8n hosting landing page
//!
//! Server-rendered with Leptos and hydrated in the browser. The pointer
//! interaction engine lives in `core::motion` (pure state) and `ui::motion`
//! (DOM bindings); the workflow assistant calls Gemini through the server.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    crate::ui::motion::init_motion();
    leptos::mount::hydrate_body(App);
}
