//! Renderers module for the page builder
//!
//! This module contains the projection logic turning the element
//! store into its textual output formats (HTML and CSS).

pub mod css;
pub mod html;

// Re-export commonly used functions
pub use css::{camel_to_kebab, generate_css};
pub use html::{element_markup, generate_complete_html, generate_html, CANVAS_CONTAINER_CLASS};
