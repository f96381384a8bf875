use filestitch::selection::{self, CheckState, SelectionState};
use filestitch::tree::{build_tree, Tree};

use crate::integration::support::records;

fn child_names(tree: &Tree, id: usize) -> Vec<(String, bool)> {
    tree.children(id)
        .map(|(_, n)| (n.name.clone(), n.is_folder))
        .collect()
}

#[test]
fn three_path_example() {
    let tree = build_tree(&records(&["a/b.txt", "a/c.txt", "z.txt"]));
    assert_eq!(
        child_names(&tree, Tree::ROOT),
        vec![("a".to_string(), true), ("z.txt".to_string(), false)]
    );
    let a = tree.find("a", true).unwrap();
    assert_eq!(
        child_names(&tree, a),
        vec![("b.txt".to_string(), false), ("c.txt".to_string(), false)]
    );
    assert_eq!(tree.node(tree.find("z.txt", false).unwrap()).unwrap().file_index, Some(2));
}

#[test]
fn folders_sort_before_files_and_case_folds() {
    let tree = build_tree(&records(&["b.txt", "Zed/x", "alpha/y", "A.txt", "a.txt"]));
    let names: Vec<String> = child_names(&tree, Tree::ROOT)
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(names, vec!["alpha", "Zed", "a.txt", "A.txt", "b.txt"]);
}

#[test]
fn punctuation_and_digits_follow_collation_order() {
    let tree = build_tree(&records(&["src/a.txt", "a.txt", "a_b.txt", "a-b.txt", "1.txt", "_x.txt"]));
    let names: Vec<String> = child_names(&tree, Tree::ROOT)
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(names, vec!["src", "_x.txt", "1.txt", "a_b.txt", "a-b.txt", "a.txt"]);
}

#[test]
fn folders_merge_across_records() {
    let tree = build_tree(&records(&["x/1", "y/2", "x/sub/3", "x/4"]));
    let x = tree.find("x", true).unwrap();
    let mut leaves = tree.all_leaf_indices(x);
    leaves.sort_unstable();
    assert_eq!(leaves, vec![0, 2, 3]);
    assert_eq!(tree.file_count(), 4);
    assert_eq!(tree.folder_paths().len(), 3);
}

#[test]
fn tri_state_selection_over_folders() {
    let tree = build_tree(&records(&["a/b.txt", "a/c.txt", "z.txt"]));
    let a = tree.find("a", true).unwrap();
    let b = tree.find("a/b.txt", false).unwrap();

    let state = selection::toggle(&SelectionState::new(), &tree, a);
    assert_eq!(selection::status_of(&state, &tree, a), CheckState::Checked);
    assert_eq!(selection::status_of(&state, &tree, Tree::ROOT), CheckState::Indeterminate);

    let state = selection::toggle(&state, &tree, b);
    assert_eq!(selection::status_of(&state, &tree, a), CheckState::Indeterminate);

    // partial promotes to full
    let state = selection::toggle(&state, &tree, a);
    assert_eq!(selection::status_of(&state, &tree, a), CheckState::Checked);

    let state = selection::toggle(&state, &tree, a);
    assert!(state.is_empty());
}

#[test]
fn empty_tree_root_is_unchecked() {
    let tree = build_tree(&[]);
    let state = selection::select_all(0);
    assert_eq!(selection::status_of(&state, &tree, Tree::ROOT), CheckState::Unchecked);
}
