//! WASM build test
//!
//! This module tests that the WASM module can be built and the basic
//! store → generate → sync cycle works in a browser environment.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use easyfront_wasm::api;

wasm_bindgen_test_configure!(run_in_browser);

fn add_button() -> String {
    let draft = serde_json::json!({
        "type": "button",
        "position": { "x": 20, "y": 20 },
        "size": { "width": 120, "height": 40 },
        "content": "Bouton"
    });
    let value = serde_wasm_bindgen::to_value(&draft).unwrap();
    api::add_element(value).expect("addElement succeeds")
}

#[wasm_bindgen_test]
fn test_store_round_trip() {
    api::new_document().unwrap();
    let id = add_button();

    let html = api::generate_html().unwrap();
    assert!(html.contains(&format!("element-{}", id)));

    let css = api::generate_css().unwrap();
    assert!(css.contains("left: 20px;"));
}

#[wasm_bindgen_test]
fn test_css_edit_flows_back() {
    api::new_document().unwrap();
    let id = add_button();

    let edited = format!(".element-{} {{ left: 40px; }}", id);
    let updated = api::parse_and_apply_css(&edited).unwrap();
    assert_eq!(updated.length(), 1);

    let css = api::generate_css().unwrap();
    assert!(css.contains("left: 40px;"));
}

#[wasm_bindgen_test]
fn test_drop_component_snaps_to_grid() {
    api::new_document().unwrap();

    let payload = serde_json::json!({
        "isBuiltIn": true,
        "componentType": "button"
    });
    let payload = serde_wasm_bindgen::to_value(&payload).unwrap();
    let id = api::drop_component(payload, 105.0, 187.0).expect("drop succeeds");

    let css = api::generate_css().unwrap();
    // Palette default 120x40, centered on the cursor, snapped to 20px
    assert!(css.contains(&format!(".element-{}", id)));
    assert!(css.contains("left: 40px;"));
    assert!(css.contains("top: 160px;"));
}

#[wasm_bindgen_test]
fn test_delete_clears_selection() {
    api::new_document().unwrap();
    let id = add_button();

    api::select_element(Some(id.clone())).unwrap();
    api::delete_element(&id).unwrap();
    assert_eq!(api::get_selected_element_id().unwrap(), None);
}
