//! Hierarchical view of the file store
//!
//! The tree is a pure derived value: it is rebuilt in full from the store whenever the
//! store changes and never patched in place.

pub mod builder;
pub mod node;
pub mod order;

pub use builder::build_tree;
pub use node::{NodeId, NodeKey, Tree, TreeNode};
pub use order::locale_cmp;
