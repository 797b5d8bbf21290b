//! Reverse stylesheet parser
//!
//! Turns hand-edited stylesheet text back into element updates. This is a
//! constrained-grammar scanner, not a CSS parser: it only recognizes the
//! exact rule shape the generator emits (`.element-<id> { decl; decl; }`,
//! flat bodies, no nesting) and silently ignores everything else. Parsing
//! never fails; a malformed rule or declaration is skipped, not reported.

use crate::models::{Document, PropertyMap};

/// Selector prefix the scanner recognizes; `element-<id>` is a strict
/// function of the element id, so the mapping back is unambiguous
const RULE_MARKER: &str = ".element-";

/// Parsed updates for one element rule
///
/// Geometry keys are tracked individually: an edit that mentions only
/// `left` must leave `top` and the size untouched. `styles` is the full
/// replacement map rebuilt from this parse pass — declarations absent
/// from the edited text are dropped, not retained.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CssRuleUpdate {
    pub element_id: String,
    pub left: Option<i32>,
    pub top: Option<i32>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub styles: PropertyMap,
}

impl CssRuleUpdate {
    fn new(element_id: &str) -> Self {
        Self {
            element_id: element_id.to_string(),
            ..Default::default()
        }
    }

    pub fn has_geometry(&self) -> bool {
        self.left.is_some() || self.top.is_some() || self.width.is_some() || self.height.is_some()
    }
}

/// Convert a kebab-case property name back to camelCase
///
/// `background-color` → `backgroundColor`; a dash not followed by a
/// lowercase letter is kept as-is.
pub fn kebab_to_camel(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '-' {
            match chars.peek() {
                Some(&next) if next.is_ascii_lowercase() => {
                    out.push(next.to_ascii_uppercase());
                    chars.next();
                }
                _ => out.push('-'),
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Leading integer of a declaration value: `"40px"` → 40, `"auto"` → None
fn leading_int(value: &str) -> Option<i32> {
    let bytes = value.as_bytes();
    let mut end = 0;
    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    value[..end].parse().ok()
}

fn is_id_char(byte: u8) -> bool {
    // The alphabet UUID ids are drawn from at generation time
    matches!(byte, b'0'..=b'9' | b'a'..=b'f' | b'-')
}

/// Scan edited stylesheet text for every recognizable element rule
///
/// Rules appear in textual order, possibly with repeated ids. Unmatched
/// or malformed text is skipped without error; an unterminated body ends
/// the scan.
pub fn scan_rules(css: &str) -> Vec<CssRuleUpdate> {
    let bytes = css.as_bytes();
    let mut updates = Vec::new();
    let mut search_from = 0;

    while let Some(found) = css[search_from..].find(RULE_MARKER) {
        let id_start = search_from + found + RULE_MARKER.len();

        let mut id_end = id_start;
        while id_end < bytes.len() && is_id_char(bytes[id_end]) {
            id_end += 1;
        }
        if id_end == id_start {
            search_from = id_start;
            continue;
        }

        let mut cursor = id_end;
        while cursor < bytes.len() && bytes[cursor].is_ascii_whitespace() {
            cursor += 1;
        }
        if cursor >= bytes.len() || bytes[cursor] != b'{' {
            search_from = id_end;
            continue;
        }

        let body_start = cursor + 1;
        let body_len = match css[body_start..].find('}') {
            Some(len) => len,
            // Unterminated rule: nothing else can match
            None => break,
        };
        if body_len == 0 {
            search_from = body_start;
            continue;
        }

        let body = &css[body_start..body_start + body_len];
        updates.push(parse_rule_body(&css[id_start..id_end], body));
        search_from = body_start + body_len + 1;
    }

    updates
}

/// Classify the declarations of one rule body
fn parse_rule_body(element_id: &str, body: &str) -> CssRuleUpdate {
    let mut update = CssRuleUpdate::new(element_id);

    for declaration in body.split(';') {
        let declaration = declaration.trim();
        if declaration.is_empty() {
            continue;
        }
        let (key, value) = match declaration.split_once(':') {
            Some(parts) => parts,
            None => continue,
        };
        let key = key.trim();
        let value = value.trim();
        if key.is_empty() || value.is_empty() {
            continue;
        }

        match key {
            // Geometry flows back into position/size, never into styles.
            // Non-numeric values are dropped, not written.
            "left" => update.left = leading_int(value).or(update.left),
            "top" => update.top = leading_int(value).or(update.top),
            "width" => update.width = leading_int(value).or(update.width),
            "height" => update.height = leading_int(value).or(update.height),
            // The positioning keyword is generator-owned
            "position" => {}
            _ => {
                update.styles.insert(kebab_to_camel(key), value.to_string());
            }
        }
    }

    update
}

/// Parse edited stylesheet text and merge it into the document
///
/// The full text is scanned first and the updates applied as one batch,
/// so a malformed rule can never leave other elements half-updated. For
/// each matched element: geometry keys seen in the text overwrite the
/// matching axis (unmentioned axes keep their prior value), and `styles`
/// is replaced with the map rebuilt from this parse pass. Rules whose id
/// is not in the document are inert. Returns the updated element ids in
/// store order of application.
pub fn apply_css_text(document: &mut Document, css: &str) -> Vec<String> {
    // Last rule wins per id, matching the editor's keyed merge
    let mut batch: Vec<CssRuleUpdate> = Vec::new();
    for update in scan_rules(css) {
        if document.element(&update.element_id).is_none() {
            continue;
        }
        match batch.iter_mut().find(|u| u.element_id == update.element_id) {
            Some(existing) => *existing = update,
            None => batch.push(update),
        }
    }

    let mut updated = Vec::with_capacity(batch.len());
    for update in batch {
        let merge_geometry = update.has_geometry();
        let CssRuleUpdate {
            element_id,
            left,
            top,
            width,
            height,
            styles,
        } = update;
        if let Some(element) = document.element_mut(&element_id) {
            if merge_geometry {
                element.position.x = left.unwrap_or(element.position.x);
                element.position.y = top.unwrap_or(element.position.y);
                element.size.width = width.unwrap_or(element.size.width);
                element.size.height = height.unwrap_or(element.size.height);
            }
            element.styles = styles;
            updated.push(element_id);
        }
    }
    updated
}
