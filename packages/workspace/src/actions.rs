//! Shell action surface
//!
//! The hosting UI speaks in user gestures; each gesture maps onto exactly
//! one engine mutation. Keeping the translation here means the editor
//! crate never grows UI-flavored variants.

use treesmith_core::NodeKind;
use treesmith_editor::{Mutation, Placement};

/// One user gesture from the hosting shell
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Append a new node to the root list
    AddRootNode { kind: NodeKind },

    /// Append a new node to a folder's children
    AddChild { parent_id: String, kind: NodeKind },

    /// Rename and annotate a node (the edit form submits both fields)
    Rename {
        node_id: String,
        name: String,
        comment: String,
    },

    /// Delete a node and its subtree
    Delete { node_id: String },

    /// Re-parent a node (root list for `None`), optionally at an index
    Move {
        node_id: String,
        target_parent_id: Option<String>,
        position: Option<usize>,
    },

    /// Reposition a node before/after a sibling
    Reorder {
        node_id: String,
        target_id: String,
        placement: Placement,
        parent_id: Option<String>,
    },

    /// Reset to an empty forest
    ClearAll,
}

impl Action {
    pub fn into_mutation(self) -> Mutation {
        match self {
            Action::AddRootNode { kind } => Mutation::InsertNode {
                parent_id: None,
                kind,
            },

            Action::AddChild { parent_id, kind } => Mutation::InsertNode {
                parent_id: Some(parent_id),
                kind,
            },

            Action::Rename {
                node_id,
                name,
                comment,
            } => Mutation::UpdateNode {
                node_id,
                name: Some(name),
                comment: Some(comment),
            },

            Action::Delete { node_id } => Mutation::DeleteNode { node_id },

            Action::Move {
                node_id,
                target_parent_id,
                position,
            } => Mutation::MoveNode {
                node_id,
                new_parent_id: target_parent_id,
                index: position,
            },

            Action::Reorder {
                node_id,
                target_id,
                placement,
                parent_id,
            } => Mutation::ReorderNode {
                node_id,
                target_id,
                placement,
                parent_id,
            },

            Action::ClearAll => Mutation::ClearAll,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_sets_both_fields() {
        let mutation = Action::Rename {
            node_id: "n-1".to_string(),
            name: "docs".to_string(),
            comment: "".to_string(),
        }
        .into_mutation();

        assert_eq!(
            mutation,
            Mutation::UpdateNode {
                node_id: "n-1".to_string(),
                name: Some("docs".to_string()),
                comment: Some("".to_string()),
            }
        );
    }

    #[test]
    fn test_add_root_targets_root_list() {
        let mutation = Action::AddRootNode {
            kind: NodeKind::File,
        }
        .into_mutation();

        assert_eq!(
            mutation,
            Mutation::InsertNode {
                parent_id: None,
                kind: NodeKind::File,
            }
        );
    }
}
