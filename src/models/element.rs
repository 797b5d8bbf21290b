//! Element data model for the page builder
//!
//! An Element is one placed, positioned, sized visual unit in the document.
//! The model is a flat list (no nesting); parent/child layout is expressed
//! purely through generated CSS positioning.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Reserved attribute prefix carrying widget provenance.
///
/// Keys under this prefix are editor-internal and are never emitted as
/// visible HTML attributes.
pub const WIDGET_ATTR_PREFIX: &str = "data-widget-";

/// Attribute key holding the source widget id.
pub const WIDGET_ID_ATTR: &str = "data-widget-id";
/// Attribute key holding the source widget display name.
pub const WIDGET_NAME_ATTR: &str = "data-widget-name";
/// Attribute key holding the widget's own CSS rules.
pub const WIDGET_CSS_ATTR: &str = "data-widget-css";

/// Insertion-ordered map used for both `styles` and `attributes`.
///
/// Order matters: generation must be deterministic, and emitted
/// declarations/attributes follow insertion order.
pub type PropertyMap = IndexMap<String, String>;

/// Closed vocabulary of HTML tags an element can render as
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Div,
    Button,
    Input,
    Textarea,
    Label,
    H1,
    H2,
    H3,
    P,
    Img,
    Form,
}

impl ElementType {
    /// All element types, in palette order
    pub const ALL: [ElementType; 11] = [
        ElementType::Div,
        ElementType::Button,
        ElementType::Input,
        ElementType::Textarea,
        ElementType::Label,
        ElementType::H1,
        ElementType::H2,
        ElementType::H3,
        ElementType::P,
        ElementType::Img,
        ElementType::Form,
    ];

    /// The HTML tag name (also the serialized form)
    pub fn tag_name(&self) -> &'static str {
        match self {
            ElementType::Div => "div",
            ElementType::Button => "button",
            ElementType::Input => "input",
            ElementType::Textarea => "textarea",
            ElementType::Label => "label",
            ElementType::H1 => "h1",
            ElementType::H2 => "h2",
            ElementType::H3 => "h3",
            ElementType::P => "p",
            ElementType::Img => "img",
            ElementType::Form => "form",
        }
    }

    /// Parse a tag name as it appears in drop payloads
    pub fn from_tag(tag: &str) -> Option<ElementType> {
        ElementType::ALL.iter().copied().find(|t| t.tag_name() == tag)
    }

    /// Default text payload shown right after a palette drop
    pub fn default_content(&self) -> &'static str {
        match self {
            ElementType::Button => "Bouton",
            // Inputs carry no text node
            ElementType::Input => "",
            ElementType::Textarea => "",
            ElementType::Label => "Label",
            ElementType::H1 => "Titre H1",
            ElementType::H2 => "Titre H2",
            ElementType::H3 => "Titre H3",
            ElementType::P => "Paragraphe de texte",
            ElementType::Img => "Image",
            ElementType::Div => "Container",
            ElementType::Form => "Formulaire",
        }
    }

    /// Default footprint used when a drop payload carries no size
    pub fn default_size(&self) -> Size {
        match self {
            ElementType::Button => Size::new(120, 40),
            ElementType::Input => Size::new(200, 40),
            ElementType::Textarea => Size::new(300, 100),
            ElementType::Label => Size::new(150, 30),
            ElementType::H1 => Size::new(200, 40),
            ElementType::H2 => Size::new(200, 40),
            ElementType::H3 => Size::new(200, 40),
            ElementType::P => Size::new(300, 60),
            ElementType::Img => Size::new(200, 200),
            ElementType::Div => Size::new(300, 200),
            ElementType::Form => Size::new(300, 200),
        }
    }

    /// Default HTML attributes for a freshly dropped element
    pub fn default_attributes(&self) -> PropertyMap {
        let mut attrs = PropertyMap::new();
        match self {
            ElementType::Input => {
                attrs.insert("type".to_string(), "text".to_string());
                attrs.insert("placeholder".to_string(), "Entrez du texte...".to_string());
            }
            ElementType::Textarea => {
                attrs.insert("placeholder".to_string(), "Entrez du texte...".to_string());
            }
            ElementType::Img => {
                attrs.insert("src".to_string(), "https://via.placeholder.com/200".to_string());
                attrs.insert("alt".to_string(), "Image".to_string());
            }
            ElementType::Button => {
                attrs.insert("type".to_string(), "button".to_string());
            }
            ElementType::Form => {
                attrs.insert("method".to_string(), "post".to_string());
            }
            _ => {}
        }
        attrs
    }
}

/// Pixel offset of an element inside the canvas container
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Clamp both coordinates to the canvas (no negative offsets)
    pub fn clamp_non_negative(self) -> Self {
        Self {
            x: self.x.max(0),
            y: self.y.max(0),
        }
    }
}

/// Pixel footprint of an element
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// One placed visual unit in the document
///
/// The `id` is assigned at creation, is stable for the element's lifetime
/// and is never reused. The CSS class `element-<id>` derived from it links
/// the generated markup to the generated stylesheet, and is what the
/// reverse parser resolves edits against.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Element {
    pub id: String,

    /// Rendered tag; ignored when the element hosts a widget
    #[serde(rename = "type")]
    pub kind: ElementType,

    pub position: Position,
    pub size: Size,

    /// Label text, or raw widget HTML when the element hosts a widget
    pub content: String,

    /// CSS properties in camelCase form; absence means "unset"
    pub styles: PropertyMap,

    /// HTML attributes, including the reserved `data-widget-*` keys
    pub attributes: PropertyMap,
}

impl Element {
    /// CSS class token linking this element to its stylesheet rule
    pub fn css_class(&self) -> String {
        format!("element-{}", self.id)
    }

    /// Widget provenance, if this element was instantiated from a widget
    pub fn widget_ref(&self) -> Option<WidgetRef<'_>> {
        let id = self.attributes.get(WIDGET_ID_ATTR)?;
        Some(WidgetRef {
            id,
            name: self
                .attributes
                .get(WIDGET_NAME_ATTR)
                .map(String::as_str)
                .unwrap_or(""),
            css: self
                .attributes
                .get(WIDGET_CSS_ATTR)
                .map(String::as_str)
                .unwrap_or(""),
        })
    }

    pub fn is_widget(&self) -> bool {
        self.attributes.contains_key(WIDGET_ID_ATTR)
    }

    /// Attributes that may appear in generated HTML, in insertion order
    ///
    /// The reserved `data-widget-*` keys are editor-internal and filtered out.
    pub fn visible_attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .filter(|(key, _)| !key.starts_with(WIDGET_ATTR_PREFIX))
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

/// Borrowed view of an element's widget provenance
///
/// This is the tagged form of the `data-widget-*` attribute convention:
/// the serialized representation keeps the attribute keys for storage
/// compatibility, while code dispatches on this type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WidgetRef<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub css: &'a str,
}

/// An element as submitted by the host, before the store assigns an id
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ElementDraft {
    #[serde(rename = "type")]
    pub kind: ElementType,
    pub position: Position,
    pub size: Size,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub styles: PropertyMap,
    #[serde(default)]
    pub attributes: PropertyMap,
}

impl ElementDraft {
    /// Draft for a palette drop: type defaults for content, attributes
    pub fn from_type(kind: ElementType, position: Position, size: Size) -> Self {
        Self {
            kind,
            position,
            size,
            content: kind.default_content().to_string(),
            styles: PropertyMap::new(),
            attributes: kind.default_attributes(),
        }
    }

    /// Attach a store-assigned id, producing a placed element
    pub fn into_element(self, id: String) -> Element {
        Element {
            id,
            kind: self.kind,
            position: self.position,
            size: self.size,
            content: self.content,
            styles: self.styles,
            attributes: self.attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_type_serializes_as_tag_name() {
        for kind in ElementType::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.tag_name()));
            assert_eq!(ElementType::from_tag(kind.tag_name()), Some(kind));
        }
    }

    #[test]
    fn test_from_tag_rejects_unknown() {
        assert_eq!(ElementType::from_tag("span"), None);
        assert_eq!(ElementType::from_tag(""), None);
    }

    #[test]
    fn test_draft_from_type_uses_palette_defaults() {
        let draft = ElementDraft::from_type(
            ElementType::Button,
            Position::new(20, 20),
            ElementType::Button.default_size(),
        );
        assert_eq!(draft.content, "Bouton");
        assert_eq!(draft.size, Size::new(120, 40));
        assert_eq!(draft.attributes.get("type").map(String::as_str), Some("button"));
    }

    #[test]
    fn test_default_sizes_are_positive() {
        for kind in ElementType::ALL {
            let size = kind.default_size();
            assert!(size.width > 0 && size.height > 0, "bad size for {:?}", kind);
        }
    }

    #[test]
    fn test_form_controls_have_no_default_text() {
        // Inputs carry their hint in the placeholder attribute instead
        assert_eq!(ElementType::Input.default_content(), "");
        assert_eq!(ElementType::Textarea.default_content(), "");
        assert!(ElementType::Input.default_attributes().contains_key("placeholder"));
    }

    #[test]
    fn test_widget_ref_requires_widget_id() {
        let mut element = ElementDraft::from_type(
            ElementType::Div,
            Position::default(),
            Size::new(300, 200),
        )
        .into_element("a".to_string());
        assert!(element.widget_ref().is_none());

        element
            .attributes
            .insert(WIDGET_ID_ATTR.to_string(), "w1".to_string());
        element
            .attributes
            .insert(WIDGET_NAME_ATTR.to_string(), "Carte".to_string());
        let widget = element.widget_ref().expect("widget provenance");
        assert_eq!(widget.id, "w1");
        assert_eq!(widget.name, "Carte");
        assert_eq!(widget.css, "");
    }

    #[test]
    fn test_visible_attributes_filters_widget_keys() {
        let mut element = ElementDraft::from_type(
            ElementType::Div,
            Position::default(),
            Size::new(300, 200),
        )
        .into_element("a".to_string());
        element
            .attributes
            .insert("title".to_string(), "carte".to_string());
        element
            .attributes
            .insert(WIDGET_ID_ATTR.to_string(), "w1".to_string());
        element
            .attributes
            .insert(WIDGET_CSS_ATTR.to_string(), ".card{}".to_string());

        let visible: Vec<_> = element.visible_attributes().collect();
        assert_eq!(visible, vec![("title", "carte")]);
    }

    #[test]
    fn test_styles_preserve_insertion_order() {
        let mut element = ElementDraft::from_type(
            ElementType::P,
            Position::default(),
            Size::new(300, 60),
        )
        .into_element("a".to_string());
        element
            .styles
            .insert("backgroundColor".to_string(), "#fff".to_string());
        element
            .styles
            .insert("color".to_string(), "#111".to_string());
        element
            .styles
            .insert("fontSize".to_string(), "14px".to_string());

        let keys: Vec<_> = element.styles.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["backgroundColor", "color", "fontSize"]);

        // Order must survive a serde round-trip as well
        let json = serde_json::to_string(&element).unwrap();
        let back: Element = serde_json::from_str(&json).unwrap();
        let keys: Vec<_> = back.styles.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["backgroundColor", "color", "fontSize"]);
    }
}
