//! # Treesmith Core
//!
//! Data model for folder/file trees.
//!
//! A forest is an ordered sequence of root nodes, each node owning its
//! children. There are no parent back-references: parent context is always
//! derived from traversal, so every node is owned by exactly one sibling
//! list. The mutation engine (in `treesmith-editor`) treats the forest as a
//! value it replaces wholesale; this crate only provides the structure and
//! the queries the engine and the drag/drop resolver need.

pub mod id_generator;
pub mod tree;
pub mod visitor;

pub use id_generator::IdGenerator;
pub use tree::{DetachSite, Forest, NodeKind, TreeNode};
pub use visitor::{collect_ids, walk_forest, walk_node, Visitor};
