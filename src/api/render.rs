//! Generation exports
//!
//! Thin wrappers projecting the live document into its textual output
//! formats. The stylesheet header timestamp is injected here so the
//! renderers themselves stay pure functions of the element list.

use wasm_bindgen::prelude::*;

use crate::api::core::with_document;
use crate::renderers::{css, html};

/// Timestamp for the informational stylesheet header
fn generation_timestamp() -> String {
    chrono::Local::now().format("%d/%m/%Y %H:%M:%S").to_string()
}

/// Generate the HTML document for the current composition
#[wasm_bindgen(js_name = generateHtml)]
pub fn generate_html() -> Result<String, JsValue> {
    with_document(|document| html::generate_html(&document.elements))
}

/// Generate the stylesheet for the current composition
#[wasm_bindgen(js_name = generateCss)]
pub fn generate_css() -> Result<String, JsValue> {
    with_document(|document| css::generate_css(&document.elements, &generation_timestamp()))
}

/// Generate one self-contained HTML document with the stylesheet inlined
#[wasm_bindgen(js_name = generateCompleteHtml)]
pub fn generate_complete_html() -> Result<String, JsValue> {
    with_document(|document| {
        let stylesheet = css::generate_css(&document.elements, &generation_timestamp());
        html::generate_complete_html(&document.elements, &stylesheet)
    })
}
