//! Column count for grids that adapt to how many children they hold.

use crate::model::{ComponentNode, ComponentType};

pub const GRID_DEFAULT_COLUMNS: u32 = 2;
pub const SCROLLABLE_GRID_DEFAULT_COLUMNS: u32 = 3;

/// Columns a grid renders with for `child_count` children.
///
/// An empty grid keeps its configured count. Otherwise the count follows
/// the number of children, capped at four.
pub fn adaptive_columns(kind: &ComponentType, configured: Option<u32>, child_count: usize) -> u32 {
    let (default, three_up_to) = match kind {
        ComponentType::ScrollableGrid => (SCROLLABLE_GRID_DEFAULT_COLUMNS, 6),
        _ => (GRID_DEFAULT_COLUMNS, 4),
    };

    match child_count {
        0 => configured.filter(|columns| *columns > 0).unwrap_or(default),
        1 => 1,
        2 => 2,
        n if n <= three_up_to => 3,
        _ => 4,
    }
}

/// Adaptive columns for a grid node, reading `columns` from its props
pub fn node_columns(node: &ComponentNode) -> Option<u32> {
    if !node.kind.is_grid() {
        return None;
    }
    let configured = node
        .prop("columns")
        .and_then(|value| value.as_u64())
        .and_then(|columns| u32::try_from(columns).ok());
    Some(adaptive_columns(&node.kind, configured, node.child_count()))
}
