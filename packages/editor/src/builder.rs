//! # Builder State
//!
//! Everything one editing session holds: the history (whose active snapshot
//! is the current document), the selected node, the theme and whether the
//! canvas is in preview mode.
//!
//! The application shell owns a single `Builder` and routes every user
//! action through it. Edits go through the pure functions in
//! [`crate::mutations`]; the builder's job is the bookkeeping around them:
//!
//! - record a snapshot after each edit that changed the document
//! - select freshly inserted nodes
//! - clear the selection when the selected node is deleted, or when undo
//!   and redo move to another snapshot
//! - treat unresolved ids as no-ops (logged, reported, never fatal)

use crate::errors::EditorResult;
use crate::history::History;
use crate::mutations::{Mutation, MutationError, NodePatch};
use serde_json::{Map, Value};
use sitebuilder_document::{
    serialize, ComponentNode, ComponentStyles, Document, IdGenerator, NodeData, Theme,
};

/// One client's editing session
#[derive(Debug)]
pub struct Builder {
    history: History,
    selected_id: Option<String>,
    theme: Theme,
    preview_mode: bool,
    ids: IdGenerator,
}

impl Builder {
    /// Empty document, default theme, edit mode
    pub fn new() -> Self {
        Self::with_ids(IdGenerator::new())
    }

    /// Builder drawing node ids from `ids`
    pub fn with_ids(ids: IdGenerator) -> Self {
        Self {
            history: History::default(),
            selected_id: None,
            theme: Theme::default(),
            preview_mode: false,
            ids,
        }
    }

    /// Keep at most `max_levels` undo steps (0 = unlimited)
    pub fn with_history_limit(mut self, max_levels: usize) -> Self {
        self.history = History::with_max_levels(self.history.current().clone(), max_levels);
        self
    }

    // ---- Reads ----

    /// The active document
    pub fn document(&self) -> &Document {
        self.history.current()
    }

    /// Root-level nodes in canvas order
    pub fn root_components(&self) -> Vec<&ComponentNode> {
        self.document().root_components()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// The selected node, if the selection still resolves
    pub fn selected_node(&self) -> Option<&ComponentNode> {
        self.selected().and_then(|id| self.document().find_by_id(id))
    }

    pub fn is_preview_mode(&self) -> bool {
        self.preview_mode
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // ---- Edits ----

    /// Apply `mutation`, record the result and update the selection.
    ///
    /// Returns the id of the inserted node, if any. An unresolved id leaves
    /// the document, history and selection as they were.
    pub fn apply(&mut self, mutation: &Mutation) -> Result<Option<String>, MutationError> {
        let result = match mutation.apply(self.history.current(), &mut self.ids) {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!("Ignoring {}: {}", mutation.name(), err);
                return Err(err);
            }
        };

        if &result.document != self.history.current() {
            self.history.record(result.document);
            tracing::debug!(
                "Recorded {} (history {}/{})",
                mutation.name(),
                self.history.cursor() + 1,
                self.history.len()
            );
        }

        match mutation {
            Mutation::Delete { id } if self.selected_id.as_deref() == Some(id.as_str()) => {
                self.selected_id = None;
            }
            _ => {}
        }

        if let Some(id) = &result.inserted_id {
            self.selected_id = Some(id.clone());
        }

        Ok(result.inserted_id)
    }

    /// Insert `node` at the end of the roots, or at the end of `parent_id`'s children
    pub fn add_component(
        &mut self,
        node: NodeData,
        parent_id: Option<&str>,
    ) -> Result<String, MutationError> {
        let mutation = match parent_id {
            Some(parent_id) => Mutation::InsertIntoParent {
                node,
                parent_id: parent_id.to_string(),
            },
            None => Mutation::InsertRoot { node },
        };
        self.apply_insert(&mutation)
    }

    /// Insert `node` among the roots at `index` (clamped)
    pub fn insert_at_index(&mut self, node: NodeData, index: usize) -> Result<String, MutationError> {
        self.apply_insert(&Mutation::InsertAtIndex { node, index })
    }

    pub fn insert_into_parent(
        &mut self,
        node: NodeData,
        parent_id: &str,
    ) -> Result<String, MutationError> {
        self.add_component(node, Some(parent_id))
    }

    pub fn update_component(&mut self, id: &str, patch: NodePatch) -> Result<(), MutationError> {
        self.apply(&Mutation::Update {
            id: id.to_string(),
            patch,
        })
        .map(|_| ())
    }

    /// Set one prop, keeping the others
    pub fn set_prop(&mut self, id: &str, key: &str, value: Value) -> Result<(), MutationError> {
        let mut props = self.node(id)?.props.clone();
        props.insert(key.to_string(), value);
        self.update_component(id, NodePatch::props(props))
    }

    /// Set one style key, keeping the others.
    ///
    /// A value that does not fit a typed style key (e.g. a string for
    /// `columns`) is stored as a raw key, the same way imports keep it.
    pub fn set_style(&mut self, id: &str, key: &str, value: Value) -> EditorResult<()> {
        let current = self.node(id)?.styles.clone().unwrap_or_default();

        let mut fields = match serde_json::to_value(current)? {
            Value::Object(fields) => fields,
            _ => Map::new(),
        };
        fields.insert(key.to_string(), value);

        self.update_component(id, NodePatch::styles(ComponentStyles::from_map(fields)))?;
        Ok(())
    }

    pub fn delete_component(&mut self, id: &str) -> Result<(), MutationError> {
        self.apply(&Mutation::Delete { id: id.to_string() })
            .map(|_| ())
    }

    /// Move root `active_id` to the position of root `over_id`
    pub fn reorder_components(&mut self, active_id: &str, over_id: &str) -> Result<(), MutationError> {
        self.apply(&Mutation::ReorderRoots {
            active_id: active_id.to_string(),
            over_id: over_id.to_string(),
        })
        .map(|_| ())
    }

    fn apply_insert(&mut self, mutation: &Mutation) -> Result<String, MutationError> {
        let inserted = self.apply(mutation)?;
        // Inserts always report the id they assigned
        Ok(inserted.unwrap_or_default())
    }

    fn node(&self, id: &str) -> Result<&ComponentNode, MutationError> {
        self.document().find_by_id(id).ok_or_else(|| {
            tracing::warn!("Ignoring edit of missing node {}", id);
            MutationError::NodeNotFound(id.to_string())
        })
    }

    // ---- Selection & mode ----

    /// Set the selection without checking that `id` exists
    pub fn select(&mut self, id: Option<&str>) {
        self.selected_id = id.map(str::to_string);
    }

    /// Flip preview mode; returns the new value
    pub fn toggle_preview(&mut self) -> bool {
        self.preview_mode = !self.preview_mode;
        self.preview_mode
    }

    /// Change the theme (not part of history)
    pub fn set_theme(&mut self, theme: Theme) {
        tracing::debug!("Theme set to {}", theme.name);
        self.theme = theme;
    }

    // ---- History ----

    pub fn undo(&mut self) -> bool {
        let moved = self.history.undo();
        if moved {
            self.selected_id = None;
            tracing::debug!("Undo to {}/{}", self.history.cursor() + 1, self.history.len());
        }
        moved
    }

    pub fn redo(&mut self) -> bool {
        let moved = self.history.redo();
        if moved {
            self.selected_id = None;
            tracing::debug!("Redo to {}/{}", self.history.cursor() + 1, self.history.len());
        }
        moved
    }

    // ---- Lifecycle ----

    /// Back to an empty document, default theme and edit mode
    pub fn reset(&mut self) {
        self.history.reset(Document::new());
        self.selected_id = None;
        self.theme = Theme::default();
        self.preview_mode = false;
    }

    /// Replace document and theme; the loaded document becomes the history base
    pub fn load_template(&mut self, components: Document, theme: Theme) {
        tracing::debug!(
            "Loading {} root components with theme {}",
            components.len(),
            theme.name
        );
        self.history.reset(components);
        self.theme = theme;
        self.selected_id = None;
    }

    /// Load an exported site file. On error nothing changes.
    pub fn import(&mut self, text: &str) -> EditorResult<()> {
        let (components, theme) = sitebuilder_document::deserialize(text)?;
        tracing::info!("Imported {} nodes", components.count_nodes());
        self.load_template(components, theme);
        Ok(())
    }

    /// Encode the current document and theme
    pub fn export(&self) -> EditorResult<String> {
        let text = serialize(self.document(), &self.theme)?;
        tracing::info!("Exported {} nodes", self.document().count_nodes());
        Ok(text)
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sitebuilder_document::ComponentType;

    fn builder() -> Builder {
        Builder::with_ids(IdGenerator::from_seed("b".to_string()))
    }

    #[test]
    fn test_builder_creation() {
        let builder = builder();
        assert!(builder.document().is_empty());
        assert_eq!(builder.selected(), None);
        assert!(!builder.is_preview_mode());
        assert_eq!(builder.theme(), &Theme::default());
        assert_eq!(builder.history().len(), 1);
    }

    #[test]
    fn test_insert_selects_new_node() {
        let mut builder = builder();
        let id = builder
            .add_component(NodeData::new(ComponentType::Header), None)
            .unwrap();

        assert_eq!(builder.selected(), Some(id.as_str()));
        assert_eq!(builder.history().len(), 2);
        assert_eq!(builder.history().cursor(), 1);
    }

    #[test]
    fn test_missing_parent_is_noop() {
        let mut builder = builder();
        builder
            .add_component(NodeData::new(ComponentType::Header), None)
            .unwrap();
        let before = builder.document().clone();

        let result = builder.add_component(NodeData::new(ComponentType::GridItem), Some("grid-x"));

        assert_eq!(result, Err(MutationError::ParentNotFound("grid-x".to_string())));
        assert_eq!(builder.document(), &before);
        assert_eq!(builder.history().len(), 2);
    }

    #[test]
    fn test_delete_selected_clears_selection() {
        let mut builder = builder();
        let a = builder.add_component(NodeData::new(ComponentType::Hero), None).unwrap();
        let b = builder.add_component(NodeData::new(ComponentType::Footer), None).unwrap();

        builder.select(Some(&a));
        builder.delete_component(&b).unwrap();
        assert_eq!(builder.selected(), Some(a.as_str()));

        builder.delete_component(&a).unwrap();
        assert_eq!(builder.selected(), None);
    }

    #[test]
    fn test_set_prop_merges() {
        let mut builder = builder();
        let id = builder
            .add_component(NodeData::from_library(ComponentType::Header), None)
            .unwrap();

        builder.set_prop(&id, "title", json!("Atelier")).unwrap();

        let node = builder.document().find_by_id(&id).unwrap();
        assert_eq!(node.prop_str("title"), Some("Atelier"));
        assert!(node.prop("navigation").is_some());
    }

    #[test]
    fn test_set_style_merges() {
        let mut builder = builder();
        let id = builder.add_component(NodeData::new(ComponentType::Grid), None).unwrap();

        builder.set_style(&id, "padding", json!("1rem")).unwrap();
        builder.set_style(&id, "columns", json!(3)).unwrap();

        let styles = builder.document().find_by_id(&id).unwrap().styles.clone().unwrap();
        assert_eq!(styles.padding.as_deref(), Some("1rem"));
        assert_eq!(styles.columns, Some(3));

        builder.set_style(&id, "columns", json!("many")).unwrap();
        let styles = builder.document().find_by_id(&id).unwrap().styles.clone().unwrap();
        assert_eq!(styles.columns, None);
        assert_eq!(styles.extra.get("columns"), Some(&json!("many")));
        assert_eq!(builder.history().len(), 5);
    }

    #[test]
    fn test_set_style_on_imported_raw_styles() {
        let mut builder = builder();
        let text = json!({
            "components": [ { "id": "a", "type": "grid", "styles": { "columns": "three" } } ],
            "theme": Theme::default()
        });
        builder.import(&text.to_string()).unwrap();

        builder.set_style("a", "backgroundColor", json!("#fff")).unwrap();
        let styles = builder.document().find_by_id("a").unwrap().styles.clone().unwrap();
        assert_eq!(styles.background_color.as_deref(), Some("#fff"));
        assert_eq!(styles.extra.get("columns"), Some(&json!("three")));

        builder.set_style("a", "columns", json!(3)).unwrap();
        let styles = builder.document().find_by_id("a").unwrap().styles.clone().unwrap();
        assert_eq!(styles.columns, Some(3));
        assert!(styles.extra.is_empty());
    }

    #[test]
    fn test_preview_keeps_selection() {
        let mut builder = builder();
        let id = builder.add_component(NodeData::new(ComponentType::Text), None).unwrap();

        assert!(builder.toggle_preview());
        assert_eq!(builder.selected(), Some(id.as_str()));
        assert!(!builder.toggle_preview());
    }

    #[test]
    fn test_undo_at_base_keeps_selection() {
        let mut builder = builder();
        builder.select(Some("stale"));
        assert!(!builder.undo());
        assert_eq!(builder.selected(), Some("stale"));
    }

    #[test]
    fn test_import_failure_leaves_state() {
        let mut builder = builder();
        builder.add_component(NodeData::new(ComponentType::Hero), None).unwrap();
        let before = builder.document().clone();

        assert!(builder.import(r#"{ "components": [] }"#).is_err());
        assert_eq!(builder.document(), &before);
        assert_eq!(builder.history().len(), 2);
    }

    #[test]
    fn test_reset() {
        let mut builder = builder();
        builder.add_component(NodeData::new(ComponentType::Hero), None).unwrap();
        builder.set_theme(Theme::creative_dark());
        builder.toggle_preview();

        builder.reset();

        assert!(builder.document().is_empty());
        assert_eq!(builder.theme(), &Theme::default());
        assert!(!builder.is_preview_mode());
        assert_eq!(builder.history().len(), 1);
    }
}
