//! Read-only lookups over a component forest.
//!
//! All searches are depth-first pre-order, so with unique ids the first
//! match is the only match.

use crate::model::{ComponentNode, Document};
use std::sync::Arc;

/// Find a node at any depth
pub fn find_by_id<'a>(nodes: &'a [Arc<ComponentNode>], id: &str) -> Option<&'a ComponentNode> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_by_id(node.children(), id) {
            return Some(found);
        }
    }
    None
}

/// True if `id` sits inside some node's children (i.e. it is not a root)
pub fn is_descendant(nodes: &[Arc<ComponentNode>], id: &str) -> bool {
    nodes.iter().any(|node| find_by_id(node.children(), id).is_some())
}

/// Parent of the node with `id`, or `None` for roots and unknown ids
pub fn find_parent<'a>(nodes: &'a [Arc<ComponentNode>], id: &str) -> Option<&'a ComponentNode> {
    for node in nodes {
        if node.children().iter().any(|child| child.id == id) {
            return Some(node);
        }
        if let Some(parent) = find_parent(node.children(), id) {
            return Some(parent);
        }
    }
    None
}

/// Pre-order iterator over every node in a forest
pub struct Walk<'a> {
    stack: Vec<&'a ComponentNode>,
}

impl<'a> Walk<'a> {
    pub fn new(nodes: &'a [Arc<ComponentNode>]) -> Self {
        Self {
            stack: nodes.iter().rev().map(|node| node.as_ref()).collect(),
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a ComponentNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack
            .extend(node.children().iter().rev().map(|child| child.as_ref()));
        Some(node)
    }
}

impl Document {
    pub fn find_by_id(&self, id: &str) -> Option<&ComponentNode> {
        find_by_id(self.roots(), id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find_by_id(id).is_some()
    }

    /// True if `id` is nested under another node anywhere in the document
    pub fn is_descendant(&self, id: &str) -> bool {
        is_descendant(self.roots(), id)
    }

    pub fn find_parent(&self, id: &str) -> Option<&ComponentNode> {
        find_parent(self.roots(), id)
    }

    /// Root-level components as the canvas shows them
    pub fn root_components(&self) -> Vec<&ComponentNode> {
        self.roots()
            .iter()
            .filter(|node| !self.is_descendant(&node.id))
            .map(|node| node.as_ref())
            .collect()
    }

    pub fn walk(&self) -> Walk<'_> {
        Walk::new(self.roots())
    }

    /// Total number of nodes at every depth
    pub fn count_nodes(&self) -> usize {
        self.walk().count()
    }

    /// Every id in pre-order
    pub fn ids(&self) -> Vec<&str> {
        self.walk().map(|node| node.id.as_str()).collect()
    }

    /// Ids of `id` and all of its descendants (empty if absent)
    pub fn subtree_ids(&self, id: &str) -> Vec<&str> {
        match self.find_by_id(id) {
            Some(node) => std::iter::once(node.id.as_str())
                .chain(Walk::new(node.children()).map(|child| child.id.as_str()))
                .collect(),
            None => Vec::new(),
        }
    }
}
