//! Document store for the page builder
//!
//! The Document is the canonical in-memory collection of placed elements,
//! plus the selection pointer and the active grid size. Every other part
//! of the system (generators, reverse parser, API layer) reads and mutates
//! this structure; nothing here persists implicitly — snapshotting to the
//! host's project store is an explicit, separate action.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::element::{Element, ElementDraft, ElementType, Position, PropertyMap, Size};

/// Grid sizes the toolbar offers
pub const GRID_SIZES: [i32; 4] = [10, 20, 30, 50];

/// Grid size a fresh document starts with
pub const DEFAULT_GRID_SIZE: i32 = 20;

/// Ordered collection of elements plus selection and grid configuration
///
/// Element order is insertion order and is used only for stable
/// render/serialization order, not for z-index or nesting.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub elements: Vec<Element>,
    pub selected_element_id: Option<String>,
    pub grid_size: i32,
}

impl Document {
    /// Create an empty document with the default grid
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            selected_element_id: None,
            grid_size: DEFAULT_GRID_SIZE,
        }
    }

    /// Append a new element, assigning it a fresh id
    ///
    /// Ids are UUIDs: unique for the document's lifetime and never reused,
    /// so the `element-<id>` CSS class is an unambiguous back-reference.
    pub fn add_element(&mut self, draft: ElementDraft) -> String {
        let id = Uuid::new_v4().to_string();
        self.elements.push(draft.into_element(id.clone()));
        id
    }

    /// Shallow-merge a patch onto the element matching `id`
    ///
    /// Present patch fields replace the corresponding field wholesale.
    /// A missing id is a silent no-op; returns whether an element matched.
    pub fn update_element(&mut self, id: &str, patch: ElementPatch) -> bool {
        match self.element_mut(id) {
            Some(element) => {
                patch.apply_to(element);
                true
            }
            None => false,
        }
    }

    /// Replace an element's position (drag path)
    pub fn move_element(&mut self, id: &str, position: Position) -> bool {
        match self.element_mut(id) {
            Some(element) => {
                element.position = position;
                true
            }
            None => false,
        }
    }

    /// Replace an element's size (resize path)
    pub fn resize_element(&mut self, id: &str, size: Size) -> bool {
        match self.element_mut(id) {
            Some(element) => {
                element.size = size;
                true
            }
            None => false,
        }
    }

    /// Remove the element matching `id`, clearing the selection if it
    /// pointed at it. Missing id is a silent no-op.
    pub fn delete_element(&mut self, id: &str) -> bool {
        let before = self.elements.len();
        self.elements.retain(|element| element.id != id);
        let removed = self.elements.len() != before;
        if removed && self.selected_element_id.as_deref() == Some(id) {
            self.selected_element_id = None;
        }
        removed
    }

    /// Set or clear the selection pointer; existence is not validated
    pub fn select_element(&mut self, id: Option<String>) {
        self.selected_element_id = id;
    }

    /// Empty the element list and the selection (used before loading
    /// a different project)
    pub fn clear(&mut self) {
        self.elements.clear();
        self.selected_element_id = None;
    }

    /// Update the grid size for future placements
    ///
    /// Existing elements are never re-snapped. Non-positive values are
    /// ignored; the toolbar only offers [`GRID_SIZES`].
    pub fn set_grid_size(&mut self, size: i32) {
        if size > 0 {
            self.grid_size = size;
        }
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|element| element.id == id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|element| element.id == id)
    }

    pub fn selected_element(&self) -> Option<&Element> {
        let id = self.selected_element_id.as_deref()?;
        self.element(id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Partial element update; present fields replace wholesale
///
/// `styles` and `attributes` are replaced as whole maps here. The
/// field-level merge used by the CSS reverse path is a separate,
/// deliberate code path (see `parse::css`).
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ElementPatch {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ElementType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<PropertyMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<PropertyMap>,
}

impl ElementPatch {
    fn apply_to(self, element: &mut Element) {
        if let Some(kind) = self.kind {
            element.kind = kind;
        }
        if let Some(position) = self.position {
            element.position = position;
        }
        if let Some(size) = self.size {
            element.size = size;
        }
        if let Some(content) = self.content {
            element.content = content;
        }
        if let Some(styles) = self.styles {
            element.styles = styles;
        }
        if let Some(attributes) = self.attributes {
            element.attributes = attributes;
        }
    }
}
