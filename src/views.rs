//! Collection Views
//!
//! Flat and hierarchical presentations of the store. Expansion state is an explicit value
//! updated by pure functions; rows are recomputed from the current tree on demand.

use crate::store::FileStore;
use crate::tree::{NodeId, Tree};
use crate::types::StoreIndex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// How the collection is presented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Flat,
    Tree,
}

/// Presentation state: mode plus the set of expanded folder paths
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub mode: ViewMode,
    pub expanded: BTreeSet<String>,
}

impl ViewState {
    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.contains(path)
    }
}

pub fn set_mode(state: &ViewState, mode: ViewMode) -> ViewState {
    ViewState {
        mode,
        expanded: state.expanded.clone(),
    }
}

/// Expand a collapsed folder or collapse an expanded one.
pub fn toggle_folder(state: &ViewState, path: &str) -> ViewState {
    let mut next = state.clone();
    if !next.expanded.remove(path) {
        next.expanded.insert(path.to_string());
    }
    next
}

pub fn expand_all(state: &ViewState, tree: &Tree) -> ViewState {
    let mut next = state.clone();
    next.expanded.extend(tree.folder_paths());
    next
}

pub fn collapse_all(state: &ViewState) -> ViewState {
    ViewState {
        mode: state.mode,
        expanded: BTreeSet::new(),
    }
}

/// One line of the flat list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatRow {
    pub index: StoreIndex,
    pub name: String,
    pub chars: usize,
}

pub fn flat_rows(store: &FileStore) -> Vec<FlatRow> {
    store
        .records()
        .iter()
        .enumerate()
        .map(|(index, record)| FlatRow {
            index,
            name: record.name.clone(),
            chars: record.content.chars().count(),
        })
        .collect()
}

/// One visible line of the hierarchical view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeRow {
    pub node: NodeId,
    pub depth: usize,
    pub name: String,
    pub path: String,
    pub is_folder: bool,
    pub expanded: bool,
    pub file_index: Option<StoreIndex>,
}

/// Visible rows in display order; children appear only under expanded folders.
pub fn tree_rows(tree: &Tree, state: &ViewState) -> Vec<TreeRow> {
    let mut rows = Vec::new();
    push_rows(tree, state, Tree::ROOT, 0, &mut rows);
    rows
}

fn push_rows(tree: &Tree, state: &ViewState, parent: NodeId, depth: usize, rows: &mut Vec<TreeRow>) {
    for (id, node) in tree.children(parent) {
        let expanded = node.is_folder && state.is_expanded(&node.path);
        rows.push(TreeRow {
            node: id,
            depth,
            name: node.name.clone(),
            path: node.path.clone(),
            is_folder: node.is_folder,
            expanded,
            file_index: node.file_index,
        });
        if expanded {
            push_rows(tree, state, id, depth + 1, rows);
        }
    }
}
