// Reverse sync scenarios: hand-edits to the generated stylesheet flow
// back into the store without disturbing unrelated elements, and the
// generate→parse→merge cycle is idempotent

use easyfront_wasm::models::{Document, ElementDraft, ElementType, Position, Size};
use easyfront_wasm::parse::apply_css_text;
use easyfront_wasm::renderers::generate_css;

fn two_button_doc() -> (Document, String, String) {
    let mut doc = Document::new();
    let mut draft = ElementDraft::from_type(
        ElementType::Button,
        Position::new(20, 20),
        Size::new(120, 40),
    );
    draft.styles.insert("backgroundColor".to_string(), "#3b82f6".to_string());
    draft.styles.insert("color".to_string(), "white".to_string());
    let a = doc.add_element(draft);
    let b = doc.add_element(ElementDraft::from_type(
        ElementType::P,
        Position::new(0, 100),
        Size::new(300, 60),
    ));
    (doc, a, b)
}

#[test]
fn test_generate_parse_merge_is_idempotent() {
    let (mut doc, _, _) = two_button_doc();
    doc.select_element(doc.elements.first().map(|e| e.id.clone()));

    let css = generate_css(&doc.elements, "roundtrip");
    let before = doc.clone();
    let updated = apply_css_text(&mut doc, &css);

    assert_eq!(updated.len(), 2, "both rules must match their elements");
    assert_eq!(doc, before, "re-applying unedited output must change nothing");
}

#[test]
fn test_editing_left_updates_only_that_axis() {
    let (mut doc, a, b) = two_button_doc();

    let css = generate_css(&doc.elements, "edit");
    let rule = format!(".element-{} {{", a);
    let edited = {
        // Change .element-a's left from 20px to 40px, nothing else
        let rule_start = css.find(&rule).unwrap();
        let (head, tail) = css.split_at(rule_start);
        format!("{}{}", head, tail.replacen("left: 20px;", "left: 40px;", 1))
    };

    apply_css_text(&mut doc, &edited);

    let element_a = doc.element(&a).unwrap();
    assert_eq!(element_a.position, Position::new(40, 20));
    assert_eq!(element_a.size, Size::new(120, 40));
    // Styling carried over from the regenerated text
    assert_eq!(
        element_a.styles.get("backgroundColor").map(String::as_str),
        Some("#3b82f6")
    );

    // The other element is untouched
    let element_b = doc.element(&b).unwrap();
    assert_eq!(element_b.position, Position::new(0, 100));
    assert_eq!(element_b.size, Size::new(300, 60));
}

#[test]
fn test_elements_absent_from_the_text_are_untouched() {
    let (mut doc, a, b) = two_button_doc();

    // The user deleted every rule except element a's, then edited it
    let css = format!(".element-{} {{\n  top: 60px;\n  font-weight: bold;\n}}", a);
    let updated = apply_css_text(&mut doc, &css);
    assert_eq!(updated, vec![a.clone()]);

    let element_a = doc.element(&a).unwrap();
    assert_eq!(element_a.position, Position::new(20, 60));
    // Styles were rebuilt from the edited text only
    let keys: Vec<&str> = element_a.styles.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["fontWeight"]);

    let element_b = doc.element(&b).unwrap();
    assert_eq!(element_b.position, Position::new(0, 100));
    assert!(element_b.styles.is_empty());
}

#[test]
fn test_rules_for_deleted_elements_are_skipped() {
    let (mut doc, a, b) = two_button_doc();
    let css = generate_css(&doc.elements, "stale");

    // The element disappears between generation and the edit being applied
    doc.delete_element(&a);
    let updated = apply_css_text(&mut doc, &css);

    assert_eq!(updated, vec![b.clone()]);
    assert!(doc.element(&a).is_none());
}

#[test]
fn test_malformed_fragments_degrade_to_skips() {
    let (mut doc, a, _) = two_button_doc();
    let css = format!(
        "this is not css at all }}{{;;\n\
         .element-{id} {{\n  left: oops;\n  top: 80px;\n  color red;\n  font-size: 12px;\n}}\n\
         .element-{id} junk without braces",
        id = a
    );

    apply_css_text(&mut doc, &css);

    let element = doc.element(&a).unwrap();
    // `left: oops` dropped, `top` applied, `color red` (no colon) skipped
    assert_eq!(element.position, Position::new(20, 80));
    let keys: Vec<&str> = element.styles.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["fontSize"]);
}

#[test]
fn test_widget_css_block_does_not_confuse_the_scanner() {
    let mut doc = Document::new();
    let mut draft = ElementDraft::from_type(
        ElementType::Div,
        Position::new(40, 40),
        Size::new(300, 200),
    );
    draft.content = "<div class=\"card\">Produit</div>".to_string();
    draft
        .attributes
        .insert("data-widget-id".to_string(), "w1".to_string());
    draft
        .attributes
        .insert("data-widget-name".to_string(), "Carte".to_string());
    draft.attributes.insert(
        "data-widget-css".to_string(),
        ".card { padding: 12px; }".to_string(),
    );
    let id = doc.add_element(draft);

    let css = generate_css(&doc.elements, "widget");
    let before = doc.clone();
    let updated = apply_css_text(&mut doc, &css);

    // Only the positioning rule matches; the widget's own rules are not
    // element rules and flow through untouched
    assert_eq!(updated, vec![id]);
    assert_eq!(doc, before);
}

#[test]
fn test_batch_applies_after_full_scan() {
    let (mut doc, a, b) = two_button_doc();
    // Element b's rule comes first in the text, element a's last and
    // malformed mid-way: both valid rules still apply
    let css = format!(
        ".element-{b} {{ left: 200px; }}\n\
         .element-broken {{ left: 1px; }}\n\
         .element-{a} {{ left: 60px; }}",
        a = a,
        b = b
    );
    let updated = apply_css_text(&mut doc, &css);
    assert_eq!(updated.len(), 2);
    assert_eq!(doc.element(&a).unwrap().position.x, 60);
    assert_eq!(doc.element(&b).unwrap().position.x, 200);
}
