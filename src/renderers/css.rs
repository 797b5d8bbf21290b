//! Stylesheet generation
//!
//! Projects the element list into a stylesheet: a fixed preamble, each
//! widget's own CSS verbatim, and one positioning rule per element. The
//! four geometry properties (`left`, `top`, `width`, `height`) are always
//! present and always reflect the element's `position`/`size` fields;
//! entries of `styles` follow and can never override them.

use crate::models::Element;

/// Longest content excerpt quoted in a rule's leading comment
const COMMENT_EXCERPT_LEN: usize = 30;

/// Convert a camelCase property name to its CSS kebab-case form
///
/// `backgroundColor` → `background-color`
pub fn camel_to_kebab(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn content_excerpt(content: &str) -> String {
    let excerpt: String = content.chars().take(COMMENT_EXCERPT_LEN).collect();
    if content.chars().count() > COMMENT_EXCERPT_LEN {
        format!("{}...", excerpt)
    } else {
        excerpt
    }
}

/// Generate the stylesheet for the element list
///
/// `generated_at` only feeds the informational header comment, so callers
/// (and tests) control it and generation stays a pure function. Nothing
/// downstream may depend on the header.
pub fn generate_css(elements: &[Element], generated_at: &str) -> String {
    let mut css = format!("/* Généré par EasyFront le {} */\n\n", generated_at);

    // Base reset so the export renders the same everywhere
    css.push_str("* {\n  box-sizing: border-box;\n  margin: 0;\n  padding: 0;\n}\n\n");
    css.push_str("body {\n  font-family: system-ui, -apple-system, sans-serif;\n}\n\n");

    // The container spans the page and is the positioning reference frame
    css.push_str(
        ".canvas-container {\n  position: relative;\n  width: 100%;\n  min-height: 100vh;\n}\n\n",
    );

    for element in elements {
        // The widget's own selector-scoped rules, verbatim, tagged by name.
        // Distinct from the per-element positioning rule below.
        if let Some(widget) = element.widget_ref() {
            if !widget.css.is_empty() {
                css.push_str(&format!("/* Widget: {} */\n", widget.name));
                css.push_str(widget.css);
                css.push_str("\n\n");
            }
        }

        css.push_str(&format!(
            "/* {} - {} */\n",
            element.kind.tag_name(),
            content_excerpt(&element.content)
        ));
        css.push_str(&format!(".element-{} {{\n", element.id));

        // Geometry first, always, straight from position/size
        css.push_str("  position: relative;\n");
        css.push_str(&format!("  left: {}px;\n", element.position.x));
        css.push_str(&format!("  top: {}px;\n", element.position.y));
        css.push_str(&format!("  width: {}px;\n", element.size.width));
        css.push_str(&format!("  height: {}px;\n", element.size.height));

        for (key, value) in &element.styles {
            css.push_str(&format!("  {}: {};\n", camel_to_kebab(key), value));
        }

        css.push_str("}\n\n");
    }

    css
}
