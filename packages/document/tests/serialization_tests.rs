//! Site file round-trip tests

use proptest::prelude::*;
use serde_json::{json, Value};
use sitebuilder_document::{
    deserialize, find_template, serialize, Animation, AnimationSpec, ComponentNode,
    ComponentStyles, ComponentType, Document, NodeData, Theme,
};
use std::sync::Arc;

fn kind_strategy() -> impl Strategy<Value = ComponentType> {
    prop::sample::select(ComponentType::KNOWN.to_vec())
}

fn leaf_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::from),
    ]
}

fn node_strategy() -> impl Strategy<Value = ComponentNode> {
    let leaf = (kind_strategy(), prop::collection::btree_map("[a-z]{1,6}", leaf_value(), 0..4))
        .prop_map(|(kind, props)| {
            NodeData::new(kind)
                .with_props(props.into_iter().collect())
                .into_node(String::new())
        });

    leaf.prop_recursive(3, 24, 4, |inner| {
        (kind_strategy(), prop::collection::vec(inner, 0..4)).prop_map(|(kind, children)| {
            let mut node = NodeData::new(kind).into_node(String::new());
            node.children = Some(children.into_iter().map(Arc::new).collect());
            node
        })
    })
}

/// Give every node a distinct id, pre-order
fn number(node: &mut ComponentNode, next: &mut usize) {
    *next += 1;
    node.id = format!("n{}", next);
    if let Some(children) = node.children.as_mut() {
        for child in children.iter_mut() {
            number(Arc::make_mut(child), next);
        }
    }
}

proptest! {
    #[test]
    fn round_trip_preserves_document(mut roots in prop::collection::vec(node_strategy(), 0..5)) {
        let mut next = 0;
        for root in roots.iter_mut() {
            number(root, &mut next);
        }
        let doc = Document::from_nodes(roots);
        let theme = Theme::business_blue();

        let text = serialize(&doc, &theme).unwrap();
        let (loaded, loaded_theme) = deserialize(&text).unwrap();

        prop_assert_eq!(loaded, doc);
        prop_assert_eq!(loaded_theme, theme);
    }
}

#[test]
fn test_round_trip_with_styles_and_animation() {
    let mut node = NodeData::from_library(ComponentType::Hero).into_node("hero".to_string());
    node.styles = Some(ComponentStyles {
        background_color: Some("#000".to_string()),
        columns: Some(3),
        animation: Some(Animation {
            entrance: Some(AnimationSpec::new("fade-in")),
            exit: Some(AnimationSpec {
                kind: "zoom-out".to_string(),
                duration_ms: Some(500),
                delay_ms: Some(100),
                easing: Some("ease-in".to_string()),
            }),
        }),
        ..ComponentStyles::default()
    });
    let doc = Document::from_nodes(vec![node]);

    let text = serialize(&doc, &Theme::default()).unwrap();
    let value: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        value["components"][0]["styles"]["animation"]["exit"],
        json!({ "type": "zoom-out", "duration": 500, "delay": 100, "easing": "ease-in" })
    );

    let (loaded, _) = deserialize(&text).unwrap();
    assert_eq!(loaded, doc);
}

#[test]
fn test_builtin_template_survives_export() {
    let template = find_template("portfolio-creative").unwrap();

    let text = serialize(&template.components, &template.theme).unwrap();
    let (doc, theme) = deserialize(&text).unwrap();

    assert_eq!(doc, template.components);
    assert_eq!(theme.name, "Creative Dark");
}

#[test]
fn test_export_from_earlier_editor() {
    let text = r##"{
        "version": "1.0",
        "exportedAt": "2024-03-02T10:00:00.000Z",
        "components": [
            { "id": "header-1", "type": "header", "props": { "title": "Mon Site" } },
            {
                "id": "grid-1",
                "type": "scrollable-grid",
                "props": { "columns": 3 },
                "styles": { "padding": "2rem", "overflow": "auto" },
                "children": [ { "id": "item-1", "type": "grid-item", "props": {} } ]
            }
        ],
        "theme": {
            "name": "Modern Blue",
            "colors": { "primary": "#3B82F6", "secondary": "#64748B", "accent": "#F59E0B",
                        "background": "#FFFFFF", "text": "#1F2937", "muted": "#6B7280" },
            "fonts": { "heading": "Inter, sans-serif", "body": "Inter, sans-serif" }
        }
    }"##;

    let (doc, theme) = deserialize(text).unwrap();
    assert_eq!(theme, Theme::default());
    assert_eq!(doc.ids(), vec!["header-1", "grid-1", "item-1"]);
    assert!(doc.is_descendant("item-1"));
    assert_eq!(doc.find_by_id("grid-1").unwrap().child_count(), 1);
}

#[test]
fn test_partial_animation_exports_as_written() {
    let components = json!([{
        "id": "hero-1",
        "type": "hero",
        "props": {},
        "styles": { "animation": { "entrance": { "type": "fade" }, "exit": { "type": "slide", "delay": 50 } } }
    }]);
    let text = json!({ "components": components, "theme": Theme::default() }).to_string();

    let (doc, theme) = deserialize(&text).unwrap();
    let entrance = doc.roots()[0].styles.as_ref().unwrap().animation.as_ref().unwrap().entrance.clone().unwrap();
    assert_eq!(entrance.duration(), 300);

    let exported: Value = serde_json::from_str(&serialize(&doc, &theme).unwrap()).unwrap();
    assert_eq!(exported["components"], components);
}
