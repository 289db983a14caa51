//! My Website - static landing page
//!
//! A single marketing page (navigation, hero, feature grid, footer) rendered
//! with Leptos and styled with Tailwind utility classes.

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
