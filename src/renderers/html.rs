//! HTML generation
//!
//! Projects the element list into an HTML document. Generation is a pure
//! function of the list: identical input yields byte-identical output.
//! Users may hand-edit and re-import the generated files, so the emitted
//! shape is part of the contract and content passes through verbatim
//! (widget HTML in particular must not be rewritten).

use crate::models::{Element, ElementType};

/// Class of the single positioning container wrapping all elements
pub const CANVAS_CONTAINER_CLASS: &str = "canvas-container";

/// Fallback `src` when an image element has none
const IMG_PLACEHOLDER_SRC: &str = "placeholder.jpg";

const PAGE_TITLE: &str = "EasyFront - Page générée";

/// Visible attributes rendered as ` key="value"` pairs, or an empty string
fn format_attributes(element: &Element) -> String {
    let attrs = element
        .visible_attributes()
        .map(|(key, value)| format!("{}=\"{}\"", key, value))
        .collect::<Vec<_>>()
        .join(" ");
    if attrs.is_empty() {
        String::new()
    } else {
        format!(" {}", attrs)
    }
}

/// Render one element as an HTML tag, indented by `indent` spaces
pub fn element_markup(element: &Element, indent: usize) -> String {
    let spaces = " ".repeat(indent);
    let class_attr = format!(" class=\"{}\"", element.css_class());

    // Widget instances ignore their nominal tag: the stored widget HTML
    // is injected verbatim inside a positioned div
    if element.is_widget() {
        return format!(
            "{spaces}<div{class_attr}>\n{spaces}  {}\n{spaces}</div>",
            element.content
        );
    }

    let attrs = format_attributes(element);
    match element.kind {
        ElementType::Input => format!("{spaces}<input{class_attr}{attrs} />"),
        ElementType::Img => {
            let src = element
                .attributes
                .get("src")
                .map(String::as_str)
                .filter(|src| !src.is_empty())
                .unwrap_or(IMG_PLACEHOLDER_SRC);
            let alt = element
                .attributes
                .get("alt")
                .map(String::as_str)
                .filter(|alt| !alt.is_empty())
                .unwrap_or(&element.content);
            format!("{spaces}<img{class_attr} src=\"{src}\" alt=\"{alt}\" />")
        }
        ElementType::Textarea => format!(
            "{spaces}<textarea{class_attr}{attrs}>{}</textarea>",
            element.content
        ),
        kind => {
            let tag = kind.tag_name();
            format!(
                "{spaces}<{tag}{class_attr}{attrs}>{}</{tag}>",
                element.content
            )
        }
    }
}

/// All element tags in store order, joined with newlines
fn body_markup(elements: &[Element]) -> String {
    elements
        .iter()
        .map(|element| element_markup(element, 2))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Generate the HTML document, linking the external stylesheet
pub fn generate_html(elements: &[Element]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="fr">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{PAGE_TITLE}</title>
  <link rel="stylesheet" href="styles.css">
</head>
<body>
  <div class="{CANVAS_CONTAINER_CLASS}">
{}
  </div>
</body>
</html>"#,
        body_markup(elements)
    )
}

/// Generate a single self-contained document with the stylesheet inlined
///
/// The body markup is the same as [`generate_html`]; only the head differs.
pub fn generate_complete_html(elements: &[Element], stylesheet: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="fr">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{PAGE_TITLE}</title>
  <style>
{stylesheet}
  </style>
</head>
<body>
  <div class="{CANVAS_CONTAINER_CLASS}">
{}
  </div>
</body>
</html>"#,
        body_markup(elements)
    )
}
