//! Tree Builder
//!
//! Rebuilds the folder/file hierarchy from scratch out of the store's path strings.
//! Nodes are interned by `(path, is_folder)`, so repeated folder prefixes across records
//! collapse into one node while a file and a folder of the same name stay distinct.

use super::node::{NodeId, NodeKey, Tree, TreeNode};
use super::order::locale_cmp;
use crate::types::{path_segments, FileRecord};
use std::cmp::Ordering;
use tracing::debug;

/// Build the sorted hierarchy for `records` in store order.
pub fn build_tree(records: &[FileRecord]) -> Tree {
    let mut tree = Tree::empty();

    for (index, record) in records.iter().enumerate() {
        let segments: Vec<&str> = path_segments(&record.name).collect();
        let (file_name, folders) = match segments.split_last() {
            Some((last, folders)) => (*last, folders),
            None => (record.name.as_str(), &[][..]),
        };

        let mut parent = Tree::ROOT;
        let mut path = String::new();
        for folder in folders {
            push_segment(&mut path, folder);
            parent = intern(&mut tree, parent, folder, &path, true);
        }

        push_segment(&mut path, file_name);
        let file = intern(&mut tree, parent, file_name, &path, false);
        let node = &mut tree.nodes[file];
        if node.file_index.is_none() {
            node.file_index = Some(index);
        } else {
            node.duplicate_indices.push(index);
        }
    }

    sort_children(&mut tree, Tree::ROOT);
    debug!(
        records = records.len(),
        nodes = tree.len(),
        "Rebuilt file tree"
    );
    tree
}

fn push_segment(path: &mut String, segment: &str) {
    if !path.is_empty() {
        path.push('/');
    }
    path.push_str(segment);
}

fn intern(tree: &mut Tree, parent: NodeId, name: &str, path: &str, is_folder: bool) -> NodeId {
    let key = if is_folder {
        NodeKey::folder(path)
    } else {
        NodeKey::file(path)
    };
    if let Some(&existing) = tree.index.get(&key) {
        return existing;
    }
    let id = tree.nodes.len();
    tree.nodes
        .push(TreeNode::new(name, path.to_string(), is_folder));
    tree.nodes[parent].children.push(id);
    tree.index.insert(key, id);
    id
}

/// Folders first, then locale order by name; applied top-down.
pub(crate) fn sibling_cmp(a: (&str, bool), b: (&str, bool)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| locale_cmp(a.0, b.0))
}

fn sort_children(tree: &mut Tree, id: NodeId) {
    let mut children = std::mem::take(&mut tree.nodes[id].children);
    children.sort_by(|&a, &b| {
        let (a, b) = (&tree.nodes[a], &tree.nodes[b]);
        sibling_cmp((&a.name, a.is_folder), (&b.name, b.is_folder))
    });
    for &child in &children {
        if tree.nodes[child].is_folder {
            sort_children(tree, child);
        }
    }
    tree.nodes[id].children = children;
}
