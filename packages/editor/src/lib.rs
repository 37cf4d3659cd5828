//! # Site Builder Editor
//!
//! Editing engine for site documents.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ document: component tree, site file format  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: mutations + history + builder state │
//! │  - Pure tree edits (insert/update/delete)   │
//! │  - Linear undo/redo over snapshots          │
//! │  - Selection, preview mode, theme           │
//! │  - Saved template store                     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ shell (cli / ui): renders, issues edits     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Snapshots are immutable**: an edit builds a new document that shares
//!    untouched subtrees with the old one
//! 2. **History is a linear log**: undo N times after N edits gets back the
//!    starting document
//! 3. **Missing ids are not fatal**: an edit that references a vanished node
//!    changes nothing
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sitebuilder_editor::Builder;
//! use sitebuilder_document::{ComponentType, NodeData};
//!
//! let mut builder = Builder::new();
//!
//! let grid = builder.add_component(NodeData::from_library(ComponentType::Grid), None)?;
//! builder.add_component(NodeData::from_library(ComponentType::GridItem), Some(&grid))?;
//!
//! builder.undo();
//! let json = builder.export()?;
//! ```

mod builder;
mod errors;
mod history;
mod mutations;
mod templates;

pub use builder::Builder;
pub use errors::{EditorError, EditorResult};
pub use history::History;
pub use mutations::{
    delete_node, insert_at_index, insert_into_parent, insert_root, reorder_root_siblings, update,
    Mutation, MutationError, MutationResult, NodePatch,
};
pub use templates::{SavedTemplate, TemplateStore};

// Re-export the document model for convenience
pub use sitebuilder_document as document;
