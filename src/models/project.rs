//! Persistence records exchanged with the host's project/widget store
//!
//! The store itself (IndexedDB via Dexie) lives in the JavaScript host;
//! this module only defines the record shapes and the factory/instantiation
//! logic so ids and timestamps are assigned consistently on the Rust side.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::element::{
    Element, ElementDraft, ElementType, Position, PropertyMap, Size, WIDGET_CSS_ATTR,
    WIDGET_ID_ATTR, WIDGET_NAME_ATTR,
};

/// A saved page composition
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub elements: Vec<Element>,
    pub created_at: String,
    pub updated_at: String,
}

impl Project {
    /// Snapshot a record ready for the host to persist
    pub fn new(name: impl Into<String>, elements: Vec<Element>) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            elements,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// A reusable HTML/CSS template that can be instantiated as an element
///
/// Widgets are referenced, not owned: instantiation copies the widget's
/// `html`/`css` into the element, so later edits to the widget definition
/// do not retroactively affect already-placed elements.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    pub id: String,
    pub name: String,
    pub category: String,
    pub html: String,
    pub css: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub default_size: Size,
    pub created_at: String,
}

impl Widget {
    /// Build a record for the host's widget importer to persist
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        html: impl Into<String>,
        css: impl Into<String>,
        default_size: Size,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            category: category.into(),
            html: html.into(),
            css: css.into(),
            thumbnail: None,
            default_size,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Instantiate this widget as a placed element draft
    ///
    /// Widget instances always render as a `div` hosting the widget's HTML;
    /// provenance travels in the reserved `data-widget-*` attribute keys.
    pub fn instantiate(&self, position: Position, size: Size) -> ElementDraft {
        let mut attributes = PropertyMap::new();
        attributes.insert(WIDGET_ID_ATTR.to_string(), self.id.clone());
        attributes.insert(WIDGET_NAME_ATTR.to_string(), self.name.clone());
        attributes.insert(WIDGET_CSS_ATTR.to_string(), self.css.clone());

        ElementDraft {
            kind: ElementType::Div,
            position,
            size,
            content: self.html.clone(),
            styles: PropertyMap::new(),
            attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card_widget() -> Widget {
        Widget::new(
            "Carte produit",
            "custom",
            "<div class=\"card\">Produit</div>",
            ".card { border-radius: 8px; }",
            Size::new(300, 200),
        )
    }

    #[test]
    fn test_widget_instantiation_carries_provenance() {
        let widget = card_widget();
        let draft = widget.instantiate(Position::new(40, 60), Size::new(300, 200));

        assert_eq!(draft.kind, ElementType::Div);
        assert_eq!(draft.content, widget.html);
        assert_eq!(
            draft.attributes.get(WIDGET_ID_ATTR),
            Some(&widget.id)
        );
        assert_eq!(
            draft.attributes.get(WIDGET_NAME_ATTR).map(String::as_str),
            Some("Carte produit")
        );
        assert_eq!(
            draft.attributes.get(WIDGET_CSS_ATTR).map(String::as_str),
            Some(".card { border-radius: 8px; }")
        );
    }

    #[test]
    fn test_instantiation_copies_not_references() {
        let mut widget = card_widget();
        let draft = widget.instantiate(Position::default(), widget.default_size);

        // Editing the widget definition afterwards must not affect the draft
        widget.html = "<div>changed</div>".to_string();
        widget.css = ".card { color: red; }".to_string();
        assert_eq!(draft.content, "<div class=\"card\">Produit</div>");
        assert_eq!(
            draft.attributes.get(WIDGET_CSS_ATTR).map(String::as_str),
            Some(".card { border-radius: 8px; }")
        );
    }

    #[test]
    fn test_record_field_names_are_camel_case() {
        let widget = card_widget();
        let json = serde_json::to_string(&widget).unwrap();
        assert!(json.contains("\"defaultSize\""));
        assert!(json.contains("\"createdAt\""));

        let project = Project::new("Ma page", Vec::new());
        let json = serde_json::to_string(&project).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"updatedAt\""));
        assert!(!project.id.is_empty());
    }
}
