//! # Forest Mutations
//!
//! High-level semantic operations on a folder/file forest.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: Each mutation represents one user gesture
//! 2. **Validated**: All mutations validate structural constraints first
//! 3. **Atomic**: A mutation either fully applies or leaves the forest
//!    unchanged; a node is never duplicated nor lost
//!
//! ## Mutation Semantics
//!
//! ### MoveNode
//! - Detaches the node (with its subtree) and reinserts it under the new
//!   parent, at the given index or appended
//! - Fails if the target is the node itself or one of its descendants
//! - Fails if the target is a File (files cannot have children)
//!
//! ### ReorderNode
//! - Detaches the node, then inserts it immediately before/after the
//!   target within the named sibling list
//! - If the target is not found in that list at insertion time, the
//!   detached node is restored to its original site
//!
//! ### DeleteNode
//! - Removes the node and all descendants

use serde::{Deserialize, Serialize};
use thiserror::Error;
use treesmith_core::{Forest, IdGenerator, NodeKind, TreeNode};

/// Where to place a reordered node relative to its target sibling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    Before,
    After,
}

/// Semantic mutations (intent-preserving operations)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Create a new node under a folder (or at the root for `None`)
    InsertNode {
        parent_id: Option<String>,
        kind: NodeKind,
    },

    /// Replace name and/or comment of an existing node
    UpdateNode {
        node_id: String,
        name: Option<String>,
        comment: Option<String>,
    },

    /// Remove a node and its entire subtree
    DeleteNode { node_id: String },

    /// Relocate a node under a new parent (root list for `None`)
    MoveNode {
        node_id: String,
        new_parent_id: Option<String>,
        index: Option<usize>,
    },

    /// Reposition a node before/after a sibling in the named list
    ReorderNode {
        node_id: String,
        target_id: String,
        placement: Placement,
        parent_id: Option<String>,
    },

    /// Reset to an empty forest
    ClearAll,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Invalid move: {0}")]
    InvalidMove(String),

    #[error("Invalid structure: {0}")]
    InvalidStructure(String),
}

/// Result of applying a mutation through a document
#[derive(Debug, Clone, PartialEq)]
pub struct MutationResult {
    /// New document version
    pub version: u64,

    /// Id of the node created by an insert, so the caller can route focus
    pub created_id: Option<String>,
}

fn default_name(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Folder => "new-folder",
        NodeKind::File => "new-file.txt",
    }
}

impl Mutation {
    /// Apply mutation to the forest with validation
    ///
    /// Returns the created node id for inserts, `None` otherwise. On error
    /// the forest is guaranteed unchanged.
    pub fn apply(
        &self,
        forest: &mut Forest,
        ids: &mut IdGenerator,
    ) -> Result<Option<String>, MutationError> {
        // Validate first
        self.validate(forest)?;

        match self {
            Mutation::InsertNode { parent_id, kind } => {
                Self::apply_insert(forest, ids, parent_id.as_deref(), *kind).map(Some)
            }

            Mutation::UpdateNode {
                node_id,
                name,
                comment,
            } => {
                Self::apply_update(forest, node_id, name.as_deref(), comment.as_deref())?;
                Ok(None)
            }

            Mutation::DeleteNode { node_id } => {
                Self::apply_delete(forest, node_id)?;
                Ok(None)
            }

            Mutation::MoveNode {
                node_id,
                new_parent_id,
                index,
            } => {
                Self::apply_move(forest, node_id, new_parent_id.as_deref(), *index)?;
                Ok(None)
            }

            Mutation::ReorderNode {
                node_id,
                target_id,
                placement,
                parent_id,
            } => {
                Self::apply_reorder(forest, node_id, target_id, *placement, parent_id.as_deref())?;
                Ok(None)
            }

            Mutation::ClearAll => {
                forest.roots.clear();
                Ok(None)
            }
        }
    }

    fn apply_insert(
        forest: &mut Forest,
        ids: &mut IdGenerator,
        parent_id: Option<&str>,
        kind: NodeKind,
    ) -> Result<String, MutationError> {
        let id = ids.new_id();
        let node = TreeNode::new(id.clone(), default_name(kind).to_string(), kind);

        let list = forest
            .sibling_list_mut(parent_id)
            .ok_or_else(|| MutationError::NodeNotFound(parent_id.unwrap_or("").to_string()))?;
        list.push(node);

        Ok(id)
    }

    fn apply_update(
        forest: &mut Forest,
        node_id: &str,
        name: Option<&str>,
        comment: Option<&str>,
    ) -> Result<(), MutationError> {
        let node = forest
            .find_mut(node_id)
            .ok_or_else(|| MutationError::NodeNotFound(node_id.to_string()))?;

        if let Some(name) = name {
            node.name = name.to_string();
        }
        if let Some(comment) = comment {
            node.comment = comment.to_string();
        }

        Ok(())
    }

    fn apply_delete(forest: &mut Forest, node_id: &str) -> Result<(), MutationError> {
        forest
            .detach(node_id)
            .ok_or_else(|| MutationError::NodeNotFound(node_id.to_string()))?;
        Ok(())
    }

    fn apply_move(
        forest: &mut Forest,
        node_id: &str,
        new_parent_id: Option<&str>,
        index: Option<usize>,
    ) -> Result<(), MutationError> {
        let (node, site) = forest
            .detach(node_id)
            .ok_or_else(|| MutationError::NodeNotFound(node_id.to_string()))?;

        // Validation already rejected self/descendant and File targets, so
        // the target list still exists after the detach. Restore on the
        // impossible path rather than losing the node.
        let list = match forest.sibling_list_mut(new_parent_id) {
            Some(list) => list,
            None => {
                restore_or_report(forest, node, &site)?;
                return Err(MutationError::NodeNotFound(
                    new_parent_id.unwrap_or("").to_string(),
                ));
            }
        };

        let insert_index = index.unwrap_or(list.len()).min(list.len());
        list.insert(insert_index, node);

        Ok(())
    }

    fn apply_reorder(
        forest: &mut Forest,
        node_id: &str,
        target_id: &str,
        placement: Placement,
        parent_id: Option<&str>,
    ) -> Result<(), MutationError> {
        let (node, site) = forest
            .detach(node_id)
            .ok_or_else(|| MutationError::NodeNotFound(node_id.to_string()))?;

        // The target must be present in the named list at insertion time.
        // It is not when the caller named the wrong list, or when the
        // target sat inside the detached subtree.
        let position = forest
            .sibling_list(parent_id)
            .and_then(|list| list.iter().position(|sibling| sibling.id == target_id));

        let Some(position) = position else {
            let missing = if forest.sibling_list(parent_id).is_none() {
                parent_id.unwrap_or("").to_string()
            } else {
                target_id.to_string()
            };
            restore_or_report(forest, node, &site)?;
            return Err(MutationError::NodeNotFound(missing));
        };

        let insert_index = match placement {
            Placement::Before => position,
            Placement::After => position + 1,
        };
        match forest.sibling_list_mut(parent_id) {
            Some(list) => {
                list.insert(insert_index, node);
                Ok(())
            }
            None => {
                restore_or_report(forest, node, &site)?;
                Err(MutationError::NodeNotFound(
                    parent_id.unwrap_or("").to_string(),
                ))
            }
        }
    }

    /// Validate without applying
    pub fn validate(&self, forest: &Forest) -> Result<(), MutationError> {
        match self {
            Mutation::InsertNode { parent_id, .. } => match parent_id {
                None => Ok(()),
                Some(parent_id) => {
                    let parent = forest
                        .find(parent_id)
                        .ok_or_else(|| MutationError::NodeNotFound(parent_id.clone()))?;
                    ensure_folder(parent)
                }
            },

            Mutation::UpdateNode { node_id, .. } | Mutation::DeleteNode { node_id } => {
                forest
                    .find(node_id)
                    .ok_or_else(|| MutationError::NodeNotFound(node_id.clone()))?;
                Ok(())
            }

            Mutation::MoveNode {
                node_id,
                new_parent_id,
                ..
            } => {
                forest
                    .find(node_id)
                    .ok_or_else(|| MutationError::NodeNotFound(node_id.clone()))?;

                match new_parent_id {
                    None => Ok(()),
                    Some(parent_id) => {
                        let parent = forest
                            .find(parent_id)
                            .ok_or_else(|| MutationError::NodeNotFound(parent_id.clone()))?;
                        ensure_folder(parent)?;
                        ensure_not_cyclic(forest, node_id, parent_id)
                    }
                }
            }

            Mutation::ReorderNode {
                node_id, parent_id, ..
            } => {
                forest
                    .find(node_id)
                    .ok_or_else(|| MutationError::NodeNotFound(node_id.clone()))?;

                match parent_id {
                    None => Ok(()),
                    Some(parent_id) => {
                        let parent = forest
                            .find(parent_id)
                            .ok_or_else(|| MutationError::NodeNotFound(parent_id.clone()))?;
                        ensure_folder(parent)?;
                        ensure_not_cyclic(forest, node_id, parent_id)
                    }
                }
            }

            Mutation::ClearAll => Ok(()),
        }
    }
}

fn ensure_folder(node: &TreeNode) -> Result<(), MutationError> {
    if node.is_folder() {
        Ok(())
    } else {
        Err(MutationError::InvalidStructure(format!(
            "node {} is a file and cannot have children",
            node.id
        )))
    }
}

fn ensure_not_cyclic(
    forest: &Forest,
    node_id: &str,
    parent_id: &str,
) -> Result<(), MutationError> {
    if node_id == parent_id {
        return Err(MutationError::InvalidMove(format!(
            "cannot move node {} into itself",
            node_id
        )));
    }
    if forest.is_ancestor(node_id, parent_id) {
        return Err(MutationError::InvalidMove(format!(
            "cannot move node {} into its own subtree",
            node_id
        )));
    }
    Ok(())
}

fn restore_or_report(
    forest: &mut Forest,
    node: TreeNode,
    site: &treesmith_core::DetachSite,
) -> Result<(), MutationError> {
    forest.restore(node, site).map_err(|node| {
        MutationError::InvalidStructure(format!(
            "detached node {} could not be restored to its original site",
            node.id
        ))
    })
}
