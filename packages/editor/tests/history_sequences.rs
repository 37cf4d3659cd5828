//! Edit sequences through the builder: history, selection and undo laws

use proptest::prelude::*;
use serde_json::json;
use sitebuilder_document::{find_template, ComponentType, Document, IdGenerator, NodeData, Theme};
use sitebuilder_editor::{Builder, Mutation, MutationError, NodePatch};

fn builder() -> Builder {
    Builder::with_ids(IdGenerator::from_seed("hs".to_string()))
}

fn header() -> NodeData {
    NodeData::new(ComponentType::Header).with_prop("title", "Mon Site")
}

#[test]
fn test_first_insert_then_missing_grid() {
    let mut builder = builder();

    let id = builder.add_component(header(), None).unwrap();

    assert_eq!(builder.document().len(), 1);
    assert_eq!(builder.selected(), Some(id.as_str()));
    assert_eq!(builder.history().len(), 2);
    assert_eq!(builder.history().cursor(), 1);

    let result = builder.add_component(NodeData::new(ComponentType::GridItem), Some("grid-404"));

    assert!(matches!(result, Err(MutationError::ParentNotFound(_))));
    assert_eq!(builder.document().len(), 1);
    assert_eq!(builder.document().count_nodes(), 1);
    assert_eq!(builder.history().len(), 2);
}

#[test]
fn test_reorder_last_to_first() {
    let mut builder = builder();
    let a = builder.add_component(NodeData::new(ComponentType::Hero), None).unwrap();
    let b = builder.add_component(NodeData::new(ComponentType::About), None).unwrap();
    let c = builder.add_component(NodeData::new(ComponentType::Footer), None).unwrap();

    builder.reorder_components(&c, &a).unwrap();

    assert_eq!(
        builder.document().root_ids(),
        vec![c.as_str(), a.as_str(), b.as_str()]
    );
}

#[test]
fn test_new_edit_discards_redo_branch() {
    let mut builder = builder();
    builder.add_component(NodeData::new(ComponentType::Hero), None).unwrap();
    builder.add_component(NodeData::new(ComponentType::About), None).unwrap();
    builder.undo();
    builder.add_component(NodeData::new(ComponentType::Footer), None).unwrap();

    assert!(!builder.redo());
    assert_eq!(builder.history().len(), 3);
    assert_eq!(builder.history().cursor(), 2);
}

#[test]
fn test_undo_redo_clear_selection() {
    let mut builder = builder();
    let a = builder.add_component(NodeData::new(ComponentType::Hero), None).unwrap();
    builder.add_component(NodeData::new(ComponentType::About), None).unwrap();

    assert!(builder.undo());
    assert_eq!(builder.selected(), None);
    assert_eq!(builder.document().root_ids(), vec![a.as_str()]);

    builder.select(Some(&a));
    assert!(builder.redo());
    assert_eq!(builder.selected(), None);
    assert_eq!(builder.document().len(), 2);
}

#[test]
fn test_failed_edits_record_nothing() {
    let mut builder = builder();
    builder.add_component(NodeData::new(ComponentType::Hero), None).unwrap();

    assert!(builder.update_component("ghost", NodePatch::default()).is_err());
    assert!(builder.delete_component("ghost").is_err());
    assert!(builder.reorder_components("ghost", "ghost").is_err());
    assert!(builder.set_prop("ghost", "title", json!("x")).is_err());

    assert_eq!(builder.history().len(), 2);
}

#[test]
fn test_unchanged_update_records_nothing() {
    let mut builder = builder();
    let id = builder.add_component(NodeData::new(ComponentType::Hero), None).unwrap();

    builder.update_component(&id, NodePatch::default()).unwrap();
    builder.reorder_components(&id, &id).unwrap();

    assert_eq!(builder.history().len(), 2);
}

#[test]
fn test_insert_at_index_clamps_and_selects() {
    let mut builder = builder();
    let a = builder.add_component(NodeData::new(ComponentType::Hero), None).unwrap();
    let b = builder
        .insert_at_index(NodeData::new(ComponentType::Footer), 42)
        .unwrap();

    assert_eq!(builder.document().root_ids(), vec![a.as_str(), b.as_str()]);
    assert_eq!(builder.selected(), Some(b.as_str()));
}

#[test]
fn test_delete_other_keeps_selection() {
    let mut builder = builder();
    let grid = builder.add_component(NodeData::new(ComponentType::Grid), None).unwrap();
    let item = builder
        .insert_into_parent(NodeData::new(ComponentType::GridItem), &grid)
        .unwrap();
    let footer = builder.add_component(NodeData::new(ComponentType::Footer), None).unwrap();

    builder.select(Some(&item));
    builder.delete_component(&footer).unwrap();
    assert_eq!(builder.selected(), Some(item.as_str()));

    builder.delete_component(&item).unwrap();
    assert_eq!(builder.selected(), None);
}

#[test]
fn test_load_template_resets_history() {
    let mut builder = builder();
    builder.add_component(NodeData::new(ComponentType::Hero), None).unwrap();
    builder.select(Some("anything"));

    let template = find_template("portfolio-creative").unwrap();
    builder.load_template(template.components.clone(), template.theme.clone());

    assert_eq!(builder.document(), &template.components);
    assert_eq!(builder.theme().name, "Creative Dark");
    assert_eq!(builder.selected(), None);
    assert_eq!(builder.history().len(), 1);
    assert!(!builder.can_undo());

    // Edits after loading undo back to the template, not to empty
    builder.delete_component("hero-2").unwrap();
    builder.undo();
    assert_eq!(builder.document(), &template.components);
}

#[test]
fn test_export_import_round_trip() -> anyhow::Result<()> {
    let mut builder = builder();
    let grid = builder.add_component(NodeData::from_library(ComponentType::ScrollableGrid), None)?;
    builder.add_component(NodeData::from_library(ComponentType::GridItem), Some(&grid))?;
    builder.set_style(&grid, "backgroundColor", json!("#111"))?;
    builder.set_theme(Theme::business_blue());

    let text = builder.export()?;

    let mut other = Builder::new();
    other.import(&text)?;

    assert_eq!(other.document(), builder.document());
    assert_eq!(other.theme(), builder.theme());
    assert_eq!(other.history().len(), 1);
    Ok(())
}

#[test]
fn test_history_limit() {
    let mut builder = builder().with_history_limit(3);
    for _ in 0..5 {
        builder.add_component(NodeData::new(ComponentType::Text), None).unwrap();
    }

    assert_eq!(builder.history().len(), 4);

    let mut undos = 0;
    while builder.undo() {
        undos += 1;
    }
    assert_eq!(undos, 3);
    assert_eq!(builder.document().len(), 2);
}

#[derive(Debug, Clone)]
enum Step {
    Root(ComponentType),
    Nested(ComponentType, prop::sample::Index),
    At(ComponentType, usize),
    Delete(prop::sample::Index),
    Update(prop::sample::Index, String),
    Reorder(prop::sample::Index, prop::sample::Index),
}

fn step() -> impl Strategy<Value = Step> {
    let kind = prop::sample::select(ComponentType::KNOWN.to_vec());
    prop_oneof![
        kind.clone().prop_map(Step::Root),
        (kind.clone(), any::<prop::sample::Index>()).prop_map(|(k, i)| Step::Nested(k, i)),
        (kind, 0usize..10).prop_map(|(k, i)| Step::At(k, i)),
        any::<prop::sample::Index>().prop_map(Step::Delete),
        (any::<prop::sample::Index>(), "[a-z]{1,8}").prop_map(|(i, s)| Step::Update(i, s)),
        (any::<prop::sample::Index>(), any::<prop::sample::Index>())
            .prop_map(|(a, b)| Step::Reorder(a, b)),
    ]
}

/// Turn a step into a mutation against the current document, if it has a target
fn to_mutation(step: &Step, doc: &Document) -> Option<Mutation> {
    let all: Vec<String> = doc.ids().iter().map(|id| id.to_string()).collect();
    let roots: Vec<String> = doc.root_ids().iter().map(|id| id.to_string()).collect();

    match step {
        Step::Root(kind) => Some(Mutation::InsertRoot {
            node: NodeData::new(kind.clone()),
        }),
        Step::At(kind, index) => Some(Mutation::InsertAtIndex {
            node: NodeData::new(kind.clone()),
            index: *index,
        }),
        Step::Nested(kind, pick) if !all.is_empty() => Some(Mutation::InsertIntoParent {
            node: NodeData::new(kind.clone()),
            parent_id: pick.get(&all).clone(),
        }),
        Step::Delete(pick) if !all.is_empty() => Some(Mutation::Delete {
            id: pick.get(&all).clone(),
        }),
        Step::Update(pick, title) if !all.is_empty() => Some(Mutation::Update {
            id: pick.get(&all).clone(),
            patch: NodePatch::props(
                json!({ "title": title }).as_object().cloned().unwrap_or_default(),
            ),
        }),
        Step::Reorder(a, b) if !roots.is_empty() => Some(Mutation::ReorderRoots {
            active_id: a.get(&roots).clone(),
            over_id: b.get(&roots).clone(),
        }),
        _ => None,
    }
}

proptest! {
    #[test]
    fn undo_every_recorded_edit_restores_empty(steps in prop::collection::vec(step(), 0..24)) {
        let mut builder = builder();

        for step in &steps {
            if let Some(mutation) = to_mutation(step, builder.document()) {
                prop_assert!(builder.apply(&mutation).is_ok());
            }
        }

        let recorded = builder.history().len() - 1;
        let final_doc = builder.document().clone();

        for _ in 0..recorded {
            prop_assert!(builder.undo());
        }
        prop_assert!(!builder.undo());
        prop_assert_eq!(builder.document(), &Document::new());

        for _ in 0..recorded {
            prop_assert!(builder.redo());
        }
        prop_assert_eq!(builder.document(), &final_doc);
    }

    #[test]
    fn ids_stay_unique(steps in prop::collection::vec(step(), 0..24)) {
        let mut builder = builder();

        for step in &steps {
            if let Some(mutation) = to_mutation(step, builder.document()) {
                let _ = builder.apply(&mutation);
            }
            let ids = builder.document().ids();
            let mut unique = ids.clone();
            unique.sort();
            unique.dedup();
            prop_assert_eq!(ids.len(), unique.len());
        }
    }
}
