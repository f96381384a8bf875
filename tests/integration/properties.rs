use filestitch::{FileRecord, FileStore};
use proptest::prelude::*;

use crate::integration::support::session_with;

fn numbered(n: usize) -> FileStore {
    FileStore::from_records(
        (0..n)
            .map(|i| FileRecord::new(format!("dir{}/file{}.txt", i % 3, i), i.to_string()))
            .collect(),
    )
}

fn contents(store: &FileStore) -> Vec<String> {
    store.records().iter().map(|r| r.content.clone()).collect()
}

proptest! {
    #[test]
    fn proptest_boundary_moves_never_change_store(n in 1usize..20) {
        let mut store = numbered(n);
        let before = contents(&store);
        prop_assert!(!store.move_up(0).unwrap());
        prop_assert!(!store.move_down(n - 1).unwrap());
        prop_assert_eq!(contents(&store), before);
    }

    #[test]
    fn proptest_reorder_round_trip(n in 2usize..20, a in 0usize..20, b in 0usize..20) {
        let a = a % n;
        let b = b % n;
        let mut store = numbered(n);
        let before = contents(&store);
        store.reorder(a, b).unwrap();
        store.reorder(b, a).unwrap();
        prop_assert_eq!(contents(&store), before);
    }

    #[test]
    fn proptest_remove_many_ignores_listing_order(
        n in 1usize..20,
        picks in proptest::collection::vec(0usize..20, 0..10),
    ) {
        let picks: Vec<usize> = picks.into_iter().map(|i| i % n).collect();
        let mut forward = numbered(n);
        let mut backward = numbered(n);
        forward.remove_many(picks.iter().copied());
        backward.remove_many(picks.iter().rev().copied());
        prop_assert_eq!(contents(&forward), contents(&backward));

        let mut sorted = picks.clone();
        sorted.sort_unstable();
        sorted.dedup();
        let mut sequential = numbered(n);
        for index in sorted.into_iter().rev() {
            sequential.remove(index).unwrap();
        }
        prop_assert_eq!(contents(&forward), contents(&sequential));
    }

    #[test]
    fn proptest_append_is_a_suffix(n in 0usize..10, batch in proptest::collection::vec("[a-z]{1,8}", 0..10)) {
        let mut store = numbered(n);
        let records: Vec<FileRecord> = batch.iter().map(|s| FileRecord::new(s.as_str(), s.as_str())).collect();
        store.append(records.clone());
        prop_assert_eq!(store.len(), n + records.len());
        prop_assert_eq!(&store.records()[n..], records.as_slice());
    }

    #[test]
    fn proptest_mutation_clears_selection(n in 2usize..10, from in 0usize..10, to in 0usize..10) {
        let names: Vec<String> = (0..n).map(|i| format!("f{}", i)).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut session = session_with(&refs);
        session.select_all();
        let (from, to) = (from % n, to % n);
        let changed = session.reorder(from, to).unwrap();
        prop_assert_eq!(changed, from != to);
        prop_assert_eq!(session.selection().is_empty(), changed);
    }

    #[test]
    fn proptest_tree_leaves_cover_store(paths in proptest::collection::vec("[a-c]{1,2}(/[a-c]{1,2}){0,3}", 0..15)) {
        let mut session = session_with(&paths.iter().map(String::as_str).collect::<Vec<_>>());
        let mut leaves = session.tree().all_leaf_indices(filestitch::tree::Tree::ROOT);
        leaves.sort_unstable();
        prop_assert_eq!(leaves, (0..paths.len()).collect::<Vec<_>>());
        session.select_all();
        let root = filestitch::tree::Tree::ROOT;
        let expected = if paths.is_empty() {
            filestitch::selection::CheckState::Unchecked
        } else {
            filestitch::selection::CheckState::Checked
        };
        prop_assert_eq!(session.status_of(root), expected);
    }
}
