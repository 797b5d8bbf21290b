//! Page builder WASM API
//!
//! This module provides the JavaScript-facing API for the page builder
//! core. It includes shared utilities for serialization, validation, and
//! error handling, as well as the API functions organized by functional
//! domain.
//!
//! # Module Structure
//!
//! - `helpers`: shared serialization, error handling, and logging
//! - `core`: document store operations (add/update/delete/select/load/…)
//! - `drop`: drop-payload handling for palette components and widgets
//! - `render`: HTML/CSS generation entry points
//! - `sync`: reverse sync from edited CSS text into the store

pub mod helpers;
pub mod core;
pub mod drop;
pub mod render;
pub mod sync;

// Re-export all public functions to present a single API surface
pub use self::core::*;
pub use drop::{drop_component, drop_widget, DropPayload};
pub use render::{generate_complete_html, generate_css, generate_html};
pub use sync::parse_and_apply_css;
