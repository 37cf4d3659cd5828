//! # Site Builder Document
//!
//! The component tree a site is built from, and its on-disk form.
//!
//! - [`model`]: `Document`, `ComponentNode`, `ComponentType`, styles
//! - [`query`]: read-only lookups (`find_by_id`, `is_descendant`, ...)
//! - [`id_generator`]: unique node ids for a session
//! - [`serializer`]: `{version, exportedAt, components, theme}` JSON
//! - [`library`], [`grid`], [`theme`], [`templates`]: built-in catalogue data

pub mod error;
pub mod grid;
pub mod id_generator;
pub mod library;
pub mod model;
pub mod query;
pub mod serializer;
pub mod templates;
pub mod theme;

pub use error::{FormatError, FormatResult};
pub use grid::adaptive_columns;
pub use id_generator::IdGenerator;
pub use library::{accepts_as_child, accepts_at_root, component_library, LibraryEntry};
pub use model::{
    Animation, AnimationSpec, ComponentNode, ComponentStyles, ComponentType, Document, NodeData,
    Props,
};
pub use serializer::{deserialize, serialize, SiteFile, FORMAT_VERSION};
pub use templates::{builtin_templates, find_template, SiteTemplate};
pub use theme::{builtin_themes, find_theme, Theme};
