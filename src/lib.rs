//! EasyFront Page Builder WASM Module
//!
//! This is the core WASM module for the EasyFront visual page builder.
//! It owns the canonical element store and provides placement, HTML/CSS
//! generation, and the reverse sync from hand-edited CSS text.

pub mod models;
pub mod parse;
pub mod renderers;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use models::document::*;
pub use models::element::*;
pub use models::project::*;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("EasyFront page builder WASM module initialized");
}
