use crate::tree::{Forest, TreeNode};

/// Visitor pattern for traversing a forest immutably
///
/// The default implementation walks the entire forest depth-first in
/// sibling order (the same order the renderer emits). Override
/// `visit_node` to act on nodes; call [`walk_node`] from the override to
/// keep descending.
pub trait Visitor: Sized {
    fn visit_forest(&mut self, forest: &Forest) {
        walk_forest(self, forest);
    }

    fn visit_node(&mut self, node: &TreeNode) {
        walk_node(self, node);
    }
}

pub fn walk_forest<V: Visitor>(visitor: &mut V, forest: &Forest) {
    for root in &forest.roots {
        visitor.visit_node(root);
    }
}

pub fn walk_node<V: Visitor>(visitor: &mut V, node: &TreeNode) {
    for child in &node.children {
        visitor.visit_node(child);
    }
}

/// Collect every id in the forest, in traversal order
pub fn collect_ids(forest: &Forest) -> Vec<String> {
    struct Ids(Vec<String>);

    impl Visitor for Ids {
        fn visit_node(&mut self, node: &TreeNode) {
            self.0.push(node.id.clone());
            walk_node(self, node);
        }
    }

    let mut ids = Ids(Vec::new());
    ids.visit_forest(forest);
    ids.0
}
