//! Models module for the page builder
//!
//! This module contains the data models for the element-store
//! architecture: placed elements, the document store, and the
//! persistence record shapes.

pub mod document;
pub mod element;
pub mod project;

// Re-export commonly used types
pub use document::*;
pub use element::*;
pub use project::*;
