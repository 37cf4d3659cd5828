//! # Tree Mutations
//!
//! Edit operations on a [`Document`].
//!
//! ## Design Principles
//!
//! 1. **Pure**: every operation takes a document and returns a new one; the
//!    input is never touched
//! 2. **Copy-on-write**: only the ancestor chain of the edited node is
//!    rebuilt, siblings and unrelated subtrees stay shared through `Arc`
//! 3. **Recoverable**: an id that resolves to nothing is an expected race
//!    (e.g. the node vanished after an undo), reported as a
//!    [`MutationError`] with the caller's document left as it was
//!
//! ## Mutation Semantics
//!
//! ### Insert
//! - Always assigns a fresh id; new nodes start with no children
//! - Root inserts append unless an index is given, which is clamped to
//!   `0..=len`
//! - Parent inserts append to the parent's children and never fall back to
//!   a root insert
//!
//! ### Update
//! - Shallow merge of `props` / `styles`; id, type and children are fixed
//!
//! ### Delete
//! - Removes the node and all descendants wherever it sits
//!
//! ### ReorderRoots
//! - Single-element move among root nodes only: take `active` out, then
//!   insert it at the index `over` held before the move

use serde::{Deserialize, Serialize};
use sitebuilder_document::{ComponentNode, ComponentStyles, Document, IdGenerator, NodeData, Props};
use std::sync::Arc;
use thiserror::Error;

/// Semantic edit operations, as the drag/drop surface and property panel issue them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Mutation {
    /// Append a new root node
    InsertRoot { node: NodeData },

    /// Insert a new root node at `index` (clamped)
    InsertAtIndex { node: NodeData, index: usize },

    /// Append a new node to the children of `parent_id`
    InsertIntoParent { node: NodeData, parent_id: String },

    /// Shallow-merge fields into an existing node
    Update { id: String, patch: NodePatch },

    /// Remove a node and its subtree
    Delete { id: String },

    /// Move root `active_id` to the position of root `over_id`
    ReorderRoots { active_id: String, over_id: String },
}

/// Fields an update may replace. Absent fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<Props>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<ComponentStyles>,
}

impl NodePatch {
    pub fn props(props: Props) -> Self {
        Self {
            props: Some(props),
            styles: None,
        }
    }

    pub fn styles(styles: ComponentStyles) -> Self {
        Self {
            props: None,
            styles: Some(styles),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_none() && self.styles.is_none()
    }

    fn apply_to(&self, node: &ComponentNode) -> ComponentNode {
        let mut updated = node.clone();
        if let Some(props) = &self.props {
            updated.props = props.clone();
        }
        if let Some(styles) = &self.styles {
            updated.styles = Some(styles.clone());
        }
        updated
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Parent not found: {0}")]
    ParentNotFound(String),

    #[error("Not a root node: {0}")]
    NotARootNode(String),
}

impl MutationError {
    /// The id that failed to resolve
    pub fn id(&self) -> &str {
        match self {
            MutationError::NodeNotFound(id)
            | MutationError::ParentNotFound(id)
            | MutationError::NotARootNode(id) => id,
        }
    }
}

/// Outcome of a successful mutation
#[derive(Debug, Clone, PartialEq)]
pub struct MutationResult {
    /// The edited document
    pub document: Document,

    /// Id assigned by insert operations
    pub inserted_id: Option<String>,
}

impl Mutation {
    /// Apply to `doc`, producing a new document
    pub fn apply(&self, doc: &Document, ids: &mut IdGenerator) -> Result<MutationResult, MutationError> {
        self.validate(doc)?;

        let result = match self {
            Mutation::InsertRoot { node } => {
                let (document, id) = insert_root(doc, node.clone(), ids);
                MutationResult {
                    document,
                    inserted_id: Some(id),
                }
            }

            Mutation::InsertAtIndex { node, index } => {
                let (document, id) = insert_at_index(doc, node.clone(), *index, ids);
                MutationResult {
                    document,
                    inserted_id: Some(id),
                }
            }

            Mutation::InsertIntoParent { node, parent_id } => {
                let (document, id) = insert_into_parent(doc, node.clone(), parent_id, ids)?;
                MutationResult {
                    document,
                    inserted_id: Some(id),
                }
            }

            Mutation::Update { id, patch } => MutationResult {
                document: update(doc, id, patch)?,
                inserted_id: None,
            },

            Mutation::Delete { id } => MutationResult {
                document: delete_node(doc, id)?,
                inserted_id: None,
            },

            Mutation::ReorderRoots { active_id, over_id } => MutationResult {
                document: reorder_root_siblings(doc, active_id, over_id)?,
                inserted_id: None,
            },
        };

        tracing::debug!("Applied {} ({} roots)", self.name(), result.document.len());
        Ok(result)
    }

    /// Check that every referenced id resolves, without applying
    pub fn validate(&self, doc: &Document) -> Result<(), MutationError> {
        match self {
            Mutation::InsertRoot { .. } | Mutation::InsertAtIndex { .. } => Ok(()),

            Mutation::InsertIntoParent { parent_id, .. } => {
                if doc.contains(parent_id) {
                    Ok(())
                } else {
                    Err(MutationError::ParentNotFound(parent_id.clone()))
                }
            }

            Mutation::Update { id, .. } | Mutation::Delete { id } => {
                if doc.contains(id) {
                    Ok(())
                } else {
                    Err(MutationError::NodeNotFound(id.clone()))
                }
            }

            Mutation::ReorderRoots { active_id, over_id } => {
                for id in [active_id, over_id] {
                    if doc.root_index(id).is_none() {
                        return Err(MutationError::NotARootNode(id.clone()));
                    }
                }
                Ok(())
            }
        }
    }

    /// Debug name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::InsertRoot { .. } => "insertRoot",
            Mutation::InsertAtIndex { .. } => "insertAtIndex",
            Mutation::InsertIntoParent { .. } => "insertIntoParent",
            Mutation::Update { .. } => "update",
            Mutation::Delete { .. } => "delete",
            Mutation::ReorderRoots { .. } => "reorderRoots",
        }
    }

    /// Whether this mutation creates a node
    pub fn is_insert(&self) -> bool {
        matches!(
            self,
            Mutation::InsertRoot { .. }
                | Mutation::InsertAtIndex { .. }
                | Mutation::InsertIntoParent { .. }
        )
    }
}

/// Draw ids until one is unused in `doc` (imported files may carry foreign ids)
fn fresh_id(doc: &Document, ids: &mut IdGenerator) -> String {
    loop {
        let id = ids.new_id();
        if !doc.contains(&id) {
            return id;
        }
        tracing::warn!("Generated id {} already present, drawing another", id);
    }
}

/// Append a new node at the end of the root sequence
pub fn insert_root(doc: &Document, node: NodeData, ids: &mut IdGenerator) -> (Document, String) {
    insert_at_index(doc, node, doc.len(), ids)
}

/// Insert a new root node at `index`, clamped to `0..=len`
pub fn insert_at_index(
    doc: &Document,
    node: NodeData,
    index: usize,
    ids: &mut IdGenerator,
) -> (Document, String) {
    let id = fresh_id(doc, ids);
    let mut roots = doc.roots().to_vec();

    let position = if index > roots.len() {
        tracing::warn!("Insert index {} past end ({}), clamping", index, roots.len());
        roots.len()
    } else {
        index
    };

    roots.insert(position, Arc::new(node.into_node(id.clone())));
    (Document::from_roots(roots), id)
}

/// Append a new node to the children of `parent_id`, searched at any depth
pub fn insert_into_parent(
    doc: &Document,
    node: NodeData,
    parent_id: &str,
    ids: &mut IdGenerator,
) -> Result<(Document, String), MutationError> {
    if !doc.contains(parent_id) {
        return Err(MutationError::ParentNotFound(parent_id.to_string()));
    }

    let id = fresh_id(doc, ids);
    let child = Arc::new(node.into_node(id.clone()));

    let roots = rewrite(doc.roots(), parent_id, &mut |parent: &ComponentNode| {
        let mut updated = parent.clone();
        updated
            .children
            .get_or_insert_with(Vec::new)
            .push(child.clone());
        updated
    })
    .ok_or_else(|| MutationError::ParentNotFound(parent_id.to_string()))?;

    Ok((Document::from_roots(roots), id))
}

/// Shallow-merge `patch` into the node with `id`
pub fn update(doc: &Document, id: &str, patch: &NodePatch) -> Result<Document, MutationError> {
    rewrite(doc.roots(), id, &mut |node: &ComponentNode| patch.apply_to(node))
        .map(Document::from_roots)
        .ok_or_else(|| MutationError::NodeNotFound(id.to_string()))
}

/// Remove the node with `id` and everything beneath it
pub fn delete_node(doc: &Document, id: &str) -> Result<Document, MutationError> {
    remove(doc.roots(), id)
        .map(Document::from_roots)
        .ok_or_else(|| MutationError::NodeNotFound(id.to_string()))
}

/// Move root `active_id` to the index `over_id` held before the move.
///
/// Moving down lands `active_id` just after `over_id`; moving up lands it just before.
pub fn reorder_root_siblings(
    doc: &Document,
    active_id: &str,
    over_id: &str,
) -> Result<Document, MutationError> {
    let from = doc
        .root_index(active_id)
        .ok_or_else(|| MutationError::NotARootNode(active_id.to_string()))?;
    let to = doc
        .root_index(over_id)
        .ok_or_else(|| MutationError::NotARootNode(over_id.to_string()))?;

    let mut roots = doc.roots().to_vec();
    let moved = roots.remove(from);
    roots.insert(to, moved);
    Ok(Document::from_roots(roots))
}

/// Replace the first node (pre-order) matching `id` with `edit(node)`,
/// rebuilding its ancestors. `None` if nothing matched.
fn rewrite(
    nodes: &[Arc<ComponentNode>],
    id: &str,
    edit: &mut dyn FnMut(&ComponentNode) -> ComponentNode,
) -> Option<Vec<Arc<ComponentNode>>> {
    for (index, node) in nodes.iter().enumerate() {
        let replacement = if node.id == id {
            edit(node)
        } else {
            match rewrite(node.children(), id, edit) {
                Some(children) => with_children(node, children),
                None => continue,
            }
        };

        let mut rebuilt = nodes.to_vec();
        rebuilt[index] = Arc::new(replacement);
        return Some(rebuilt);
    }
    None
}

/// Drop the first node (pre-order) matching `id`, rebuilding its ancestors
fn remove(nodes: &[Arc<ComponentNode>], id: &str) -> Option<Vec<Arc<ComponentNode>>> {
    for (index, node) in nodes.iter().enumerate() {
        if node.id == id {
            let mut rebuilt = nodes.to_vec();
            rebuilt.remove(index);
            return Some(rebuilt);
        }

        if let Some(children) = remove(node.children(), id) {
            let mut rebuilt = nodes.to_vec();
            rebuilt[index] = Arc::new(with_children(node, children));
            return Some(rebuilt);
        }
    }
    None
}

fn with_children(node: &ComponentNode, children: Vec<Arc<ComponentNode>>) -> ComponentNode {
    ComponentNode {
        id: node.id.clone(),
        kind: node.kind.clone(),
        props: node.props.clone(),
        styles: node.styles.clone(),
        children: Some(children),
    }
}
