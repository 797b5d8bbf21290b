//! Core store operations exposed to the host
//!
//! The WASM module owns the live document (canonical source of truth);
//! the JavaScript host drives it through the functions here and re-reads
//! the state it needs for rendering. All operations are synchronous: a
//! project load is one `loadProject` call, so its clear-then-populate
//! sequence can never interleave with another mutation.

use lazy_static::lazy_static;
use std::sync::Mutex;
use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, serialize, ApiError};
use crate::models::{Document, ElementDraft, ElementPatch, Project, Size, Widget};
use crate::utils::grid::{snap_position_to_grid, snap_size_to_grid};
use crate::{wasm_info, wasm_warn};

// WASM-owned document storage (canonical source of truth)
lazy_static! {
    static ref DOCUMENT: Mutex<Document> = Mutex::new(Document::new());
}

/// Run `f` against the locked document
///
/// The lock error path only exists for a poisoned cell; it maps to an
/// [`ApiError`] so callers surface it instead of panicking, and the
/// document is left untouched.
pub(crate) fn with_document<T>(f: impl FnOnce(&mut Document) -> T) -> Result<T, JsValue> {
    let mut document = DOCUMENT
        .lock()
        .map_err(|e| ApiError::Store(e.to_string()))?;
    Ok(f(&mut document))
}

/// Reset the store to an empty document with default grid configuration
#[wasm_bindgen(js_name = newDocument)]
pub fn new_document() -> Result<(), JsValue> {
    wasm_info!("newDocument called");
    with_document(|document| *document = Document::new())
}

/// Full document state: elements, selection, grid size
#[wasm_bindgen(js_name = getDocument)]
pub fn get_document() -> Result<JsValue, JsValue> {
    with_document(|document| document.clone())
        .and_then(|document| serialize(&document, "Document serialization error"))
}

/// Current element list in store order
#[wasm_bindgen(js_name = getElements)]
pub fn get_elements() -> Result<JsValue, JsValue> {
    with_document(|document| document.elements.clone())
        .and_then(|elements| serialize(&elements, "Element serialization error"))
}

/// One element by id, or `null` when absent
#[wasm_bindgen(js_name = getElement)]
pub fn get_element(id: &str) -> Result<JsValue, JsValue> {
    with_document(|document| document.element(id).cloned())
        .and_then(|element| serialize(&element, "Element serialization error"))
}

/// Append an element draft; returns the assigned id
#[wasm_bindgen(js_name = addElement)]
pub fn add_element(element: JsValue) -> Result<String, JsValue> {
    let draft: ElementDraft = deserialize(element, "Element deserialization error")?;
    let id = with_document(|document| document.add_element(draft))?;
    wasm_info!("addElement: created element {}", id);
    Ok(id)
}

/// Shallow-merge a partial patch onto the element matching `id`
///
/// A missing id is a silent no-op (logged, not an error).
#[wasm_bindgen(js_name = updateElement)]
pub fn update_element(id: &str, patch: JsValue) -> Result<(), JsValue> {
    let patch: ElementPatch = deserialize(patch, "Patch deserialization error")?;
    let found = with_document(|document| document.update_element(id, patch))?;
    if !found {
        wasm_warn!("updateElement: no element with id {}", id);
    }
    Ok(())
}

/// Remove the element matching `id`, clearing a matching selection
#[wasm_bindgen(js_name = deleteElement)]
pub fn delete_element(id: &str) -> Result<(), JsValue> {
    let removed = with_document(|document| document.delete_element(id))?;
    if removed {
        wasm_info!("deleteElement: removed {}", id);
    } else {
        wasm_warn!("deleteElement: no element with id {}", id);
    }
    Ok(())
}

/// Set or clear the selection pointer
#[wasm_bindgen(js_name = selectElement)]
pub fn select_element(id: Option<String>) -> Result<(), JsValue> {
    with_document(|document| document.select_element(id))
}

#[wasm_bindgen(js_name = getSelectedElementId)]
pub fn get_selected_element_id() -> Result<Option<String>, JsValue> {
    with_document(|document| document.selected_element_id.clone())
}

/// Move an element to raw canvas coordinates (drag path)
///
/// The coordinates are snapped to the active grid and clamped to the
/// canvas before being written, so stored positions always satisfy the
/// grid invariant.
#[wasm_bindgen(js_name = moveElement)]
pub fn move_element(id: &str, x: f64, y: f64) -> Result<(), JsValue> {
    let found = with_document(|document| {
        let position = snap_position_to_grid(x, y, document.grid_size).clamp_non_negative();
        document.move_element(id, position)
    })?;
    if !found {
        wasm_warn!("moveElement: no element with id {}", id);
    }
    Ok(())
}

/// Resize an element to raw dimensions (resize-stop path)
///
/// Dimensions are snapped to the active grid with a one-grid-unit floor.
#[wasm_bindgen(js_name = resizeElement)]
pub fn resize_element(id: &str, width: f64, height: f64) -> Result<(), JsValue> {
    let found = with_document(|document| {
        let size = snap_size_to_grid(width, height, document.grid_size);
        document.resize_element(id, size)
    })?;
    if !found {
        wasm_warn!("resizeElement: no element with id {}", id);
    }
    Ok(())
}

/// Empty the canvas (elements and selection)
#[wasm_bindgen(js_name = clearCanvas)]
pub fn clear_canvas() -> Result<(), JsValue> {
    wasm_info!("clearCanvas called");
    with_document(|document| document.clear())
}

/// Set the grid size for future placements (never re-snaps)
#[wasm_bindgen(js_name = setGridSize)]
pub fn set_grid_size(size: i32) -> Result<(), JsValue> {
    with_document(|document| document.set_grid_size(size))
}

#[wasm_bindgen(js_name = getGridSize)]
pub fn get_grid_size() -> Result<i32, JsValue> {
    with_document(|document| document.grid_size)
}

/// Snapshot the current composition as a project record
///
/// The record is returned to the host for explicit persistence; the
/// store itself is never implicitly saved.
#[wasm_bindgen(js_name = snapshotProject)]
pub fn snapshot_project(name: &str) -> Result<JsValue, JsValue> {
    let project = with_document(|document| Project::new(name, document.elements.clone()))?;
    wasm_info!("snapshotProject: {} ({} elements)", project.name, project.elements.len());
    serialize(&project, "Project serialization error")
}

/// Replace the canvas with a saved project's elements
///
/// Runs as one synchronous clear-then-populate sequence. Every element
/// is re-added through the normal add path and receives a fresh id;
/// selection is reset.
#[wasm_bindgen(js_name = loadProject)]
pub fn load_project(project: JsValue) -> Result<(), JsValue> {
    let project: Project = deserialize(project, "Project deserialization error")?;
    wasm_info!("loadProject: {} ({} elements)", project.name, project.elements.len());
    with_document(|document| {
        document.clear();
        for element in project.elements {
            document.add_element(ElementDraft {
                kind: element.kind,
                position: element.position,
                size: element.size,
                content: element.content,
                styles: element.styles,
                attributes: element.attributes,
            });
        }
    })
}

/// Build a widget record for the host's importer to persist
#[wasm_bindgen(js_name = createWidget)]
pub fn create_widget(
    name: &str,
    category: &str,
    html: &str,
    css: &str,
    default_size: JsValue,
) -> Result<JsValue, JsValue> {
    let default_size: Option<Size> =
        deserialize(default_size, "Size deserialization error").unwrap_or(None);
    let widget = Widget::new(
        name,
        category,
        html,
        css,
        default_size.unwrap_or(Size::new(300, 200)),
    );
    wasm_info!("createWidget: {} [{}]", widget.name, widget.category);
    serialize(&widget, "Widget serialization error")
}
