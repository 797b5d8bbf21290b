//! Parsing module for the page builder
//!
//! This module contains the reverse path from generated text back
//! into the document model.

pub mod css;

// Re-export commonly used types
pub use css::*;
