//! Drop payload handling
//!
//! Consumes the record the drag-and-drop layer produces when something is
//! released over the canvas. The host resolves widget references against
//! its store first (an unresolvable id is its dialog to show, not ours),
//! then calls one of the two entry points with raw canvas coordinates.
//! Placement semantics live here: center on the cursor, snap to the
//! grid, clamp into the canvas.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::api::core::with_document;
use crate::api::helpers::{deserialize, ApiError};
use crate::models::{Document, ElementDraft, ElementType, Position, Size, Widget};
use crate::utils::grid::{snap_position_to_grid, snap_size_to_grid};
use crate::{wasm_info, wasm_warn};

/// Record produced by the drag layer for a drop
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DropPayload {
    /// Built-in palette component vs widget reference
    #[serde(default)]
    pub is_built_in: bool,

    /// Palette tag name, for built-in drops
    #[serde(default)]
    pub component_type: Option<String>,

    /// Widget id the host resolves against its store, for widget drops
    #[serde(default)]
    pub widget_id: Option<String>,

    /// Target footprint; missing or malformed falls back to a default
    #[serde(default)]
    pub default_size: Option<Size>,
}

/// Center a footprint on the cursor, snap it, clamp it into the canvas
fn place(document: &Document, x: f64, y: f64, size: Size) -> (Position, Size) {
    let grid = document.grid_size;
    let position = snap_position_to_grid(
        x - f64::from(size.width) / 2.0,
        y - f64::from(size.height) / 2.0,
        grid,
    )
    .clamp_non_negative();
    let size = snap_size_to_grid(f64::from(size.width), f64::from(size.height), grid);
    (position, size)
}

/// Drop a built-in palette component at raw canvas coordinates
///
/// Returns the id of the created element. The payload's size falls back
/// to the component's palette default when missing.
#[wasm_bindgen(js_name = dropComponent)]
pub fn drop_component(payload: JsValue, x: f64, y: f64) -> Result<String, JsValue> {
    let payload: DropPayload = deserialize(payload, "Drop payload deserialization error")?;

    let tag = payload.component_type.unwrap_or_default();
    let kind = ElementType::from_tag(&tag)
        .ok_or_else(|| ApiError::InvalidInput(format!("Unknown component type: '{}'", tag)))?;

    let requested = payload.default_size.unwrap_or_else(|| {
        wasm_warn!("dropComponent: no defaultSize in payload, using palette default");
        kind.default_size()
    });

    let id = with_document(|document| {
        let (position, size) = place(document, x, y, requested);
        document.add_element(ElementDraft::from_type(kind, position, size))
    })?;
    wasm_info!("dropComponent: placed {} as {}", kind.tag_name(), id);
    Ok(id)
}

/// Drop a widget instance at raw canvas coordinates
///
/// `widget` is the full record the host resolved from its store. The
/// element always renders as a `div` hosting the widget's HTML, with
/// provenance carried in the reserved attributes. Size falls back to the
/// widget's own default, then to 300×200.
#[wasm_bindgen(js_name = dropWidget)]
pub fn drop_widget(payload: JsValue, widget: JsValue, x: f64, y: f64) -> Result<String, JsValue> {
    let payload: DropPayload = deserialize(payload, "Drop payload deserialization error")?;
    let widget: Widget = deserialize(widget, "Widget deserialization error")?;

    let requested = payload
        .default_size
        .filter(|size| size.width > 0 && size.height > 0)
        .or({
            let fallback = widget.default_size;
            (fallback.width > 0 && fallback.height > 0).then_some(fallback)
        })
        .unwrap_or_else(|| {
            wasm_warn!("dropWidget: no usable size, falling back to 300x200");
            Size::new(300, 200)
        });

    let id = with_document(|document| {
        let (position, size) = place(document, x, y, requested);
        document.add_element(widget.instantiate(position, size))
    })?;
    wasm_info!("dropWidget: placed widget '{}' as {}", widget.name, id);
    Ok(id)
}
