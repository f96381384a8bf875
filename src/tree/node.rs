//! Tree node types and the node arena

use crate::types::StoreIndex;
use serde::Serialize;
use std::collections::HashMap;

/// Arena handle for a tree node
pub type NodeId = usize;

/// Node identity: full path plus the folder flag.
///
/// A file and a folder with the same path are distinct nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeKey {
    pub path: String,
    pub is_folder: bool,
}

impl NodeKey {
    pub fn folder(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_folder: true,
        }
    }

    pub fn file(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_folder: false,
        }
    }
}

/// Folder or file node in the derived hierarchy
#[derive(Debug, Clone, Serialize)]
pub struct TreeNode {
    /// Last path segment
    pub name: String,
    /// Slash-joined path from the root; empty for the root itself
    pub path: String,
    pub is_folder: bool,
    pub children: Vec<NodeId>,
    /// Store index of the first record at this path (files only)
    pub file_index: Option<StoreIndex>,
    /// Store indices of later records sharing the same path
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub duplicate_indices: Vec<StoreIndex>,
}

impl TreeNode {
    pub(crate) fn new(name: &str, path: String, is_folder: bool) -> Self {
        Self {
            name: name.to_string(),
            path,
            is_folder,
            children: Vec::new(),
            file_index: None,
            duplicate_indices: Vec::new(),
        }
    }

    pub fn key(&self) -> NodeKey {
        NodeKey {
            path: self.path.clone(),
            is_folder: self.is_folder,
        }
    }

    /// Every store index bound to this node itself (not its descendants)
    pub fn own_indices(&self) -> impl Iterator<Item = StoreIndex> + '_ {
        self.file_index
            .into_iter()
            .chain(self.duplicate_indices.iter().copied())
    }
}

/// Hierarchy derived from the file store, addressed by `NodeId`
#[derive(Debug, Clone)]
pub struct Tree {
    pub(crate) nodes: Vec<TreeNode>,
    pub(crate) index: HashMap<NodeKey, NodeId>,
}

impl Tree {
    pub const ROOT: NodeId = 0;

    pub(crate) fn empty() -> Self {
        Self {
            nodes: vec![TreeNode::new("", String::new(), true)],
            index: HashMap::new(),
        }
    }

    pub fn root(&self) -> &TreeNode {
        &self.nodes[Self::ROOT]
    }

    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id)
    }

    /// Children of `id` in display order
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &TreeNode)> {
        self.nodes
            .get(id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(move |&child| (child, &self.nodes[child]))
    }

    /// Look up a node by its identity
    pub fn find(&self, path: &str, is_folder: bool) -> Option<NodeId> {
        self.index
            .get(&NodeKey {
                path: path.to_string(),
                is_folder,
            })
            .copied()
    }

    /// Number of nodes, root excluded
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn file_count(&self) -> usize {
        self.nodes.iter().filter(|n| !n.is_folder).count()
    }

    /// Paths of every folder node, root excluded
    pub fn folder_paths(&self) -> Vec<String> {
        self.nodes
            .iter()
            .skip(1)
            .filter(|n| n.is_folder)
            .map(|n| n.path.clone())
            .collect()
    }

    /// Store indices of every file under `id` (the node itself for a file).
    ///
    /// Depth-first; an unknown id yields nothing.
    pub fn all_leaf_indices(&self, id: NodeId) -> Vec<StoreIndex> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some(node) = self.nodes.get(current) else {
                continue;
            };
            if node.is_folder {
                stack.extend(node.children.iter().rev());
            } else {
                out.extend(node.own_indices());
            }
        }
        out
    }
}
