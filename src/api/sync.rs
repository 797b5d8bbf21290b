//! Reverse sync: edited stylesheet text back into the document
//!
//! Called by the host's code editor whenever the user edits the CSS tab.
//! The scan itself never fails; malformed fragments are skipped. The
//! whole call is all-or-nothing: either the scanned batch is applied, or
//! (if the store cannot be locked) the document is left entirely
//! untouched and the error is surfaced.

use wasm_bindgen::prelude::*;

use crate::api::core::with_document;
use crate::parse::css::apply_css_text;
use crate::wasm_info;

/// Parse edited stylesheet text and apply the changes to the document
///
/// Returns the ids of the elements that were updated.
#[wasm_bindgen(js_name = parseAndApplyCss)]
pub fn parse_and_apply_css(css: &str) -> Result<js_sys::Array, JsValue> {
    let updated = with_document(|document| apply_css_text(document, css))?;
    wasm_info!("parseAndApplyCss: {} element(s) updated", updated.len());

    let result = js_sys::Array::new();
    for id in &updated {
        result.push(&JsValue::from_str(id));
    }
    Ok(result)
}
