//! Selection Tracker
//!
//! Selected store indices as an explicit value with pure update functions. Tri-state
//! status for a tree node is derived from how many of its leaf indices are selected.

use crate::tree::{NodeId, Tree};
use crate::types::StoreIndex;
use serde::Serialize;
use std::collections::BTreeSet;

/// Checkbox state of a tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckState {
    Unchecked,
    Checked,
    Indeterminate,
}

/// Set of currently selected store indices
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: BTreeSet<StoreIndex>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, index: StoreIndex) -> bool {
        self.selected.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected indices in ascending order
    pub fn selected_indices(&self) -> Vec<StoreIndex> {
        self.selected.iter().copied().collect()
    }
}

/// Select or deselect every leaf under `node`.
///
/// When all leaves are already selected they are all removed; otherwise (including a
/// partial selection) they are all added.
pub fn toggle(state: &SelectionState, tree: &Tree, node: NodeId) -> SelectionState {
    let leaves = tree.all_leaf_indices(node);
    let mut next = state.clone();
    if leaves.iter().all(|i| state.selected.contains(i)) {
        for i in &leaves {
            next.selected.remove(i);
        }
    } else {
        next.selected.extend(leaves);
    }
    next
}

/// Tri-state status of `node` against the selection.
pub fn status_of(state: &SelectionState, tree: &Tree, node: NodeId) -> CheckState {
    let leaves = tree.all_leaf_indices(node);
    if leaves.is_empty() {
        return CheckState::Unchecked;
    }
    let selected = leaves
        .iter()
        .filter(|i| state.selected.contains(*i))
        .count();
    if selected == 0 {
        CheckState::Unchecked
    } else if selected == leaves.len() {
        CheckState::Checked
    } else {
        CheckState::Indeterminate
    }
}

/// Flip a single index from the flat list. Indices outside `0..len` are ignored.
pub fn toggle_index(state: &SelectionState, index: StoreIndex, len: usize) -> SelectionState {
    let mut next = state.clone();
    if index >= len {
        return next;
    }
    if !next.selected.remove(&index) {
        next.selected.insert(index);
    }
    next
}

/// Every index of a store of length `len`
pub fn select_all(len: usize) -> SelectionState {
    SelectionState {
        selected: (0..len).collect(),
    }
}

/// The empty selection
pub fn cleared() -> SelectionState {
    SelectionState::new()
}

/// Drop indices that no longer address a record.
pub fn retain_valid(state: &SelectionState, len: usize) -> SelectionState {
    SelectionState {
        selected: state.selected.range(..len).copied().collect(),
    }
}
