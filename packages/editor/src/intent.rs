//! # Drag/Drop Intent Resolver
//!
//! Translates pointer geometry over a drop target into a concrete
//! [`Mutation`], performing the safety checks against the live forest.
//!
//! The hosting UI owns hit-testing: it knows which node's row the pointer
//! is over and the row's bounding box. This module owns the rest of the
//! contract: zone resolution (before / inside / after) and the
//! self-or-descendant check that keeps a folder from being dropped into
//! its own subtree. The ancestor query runs on the real forest and is
//! correct at arbitrary depth.

use crate::mutations::{Mutation, Placement};
use treesmith_core::Forest;

/// Drop zone within a target row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropIntent {
    /// Insert as a sibling above the target
    Before,
    /// Append as a child of the target (Folder targets only)
    Inside,
    /// Insert as a sibling below the target
    After,
}

/// Vertical extent of the target row, in the host's coordinate space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetBox {
    pub top: f32,
    pub height: f32,
}

impl TargetBox {
    /// Resolve the zone for a pointer inside this box
    ///
    /// Folder rows split into thirds (before / inside / after); file rows
    /// split into halves, since files cannot take children.
    pub fn zone(&self, pointer_y: f32, target_is_folder: bool) -> DropIntent {
        let offset = (pointer_y - self.top).clamp(0.0, self.height);

        if target_is_folder {
            let third = self.height / 3.0;
            if offset < third {
                DropIntent::Before
            } else if offset < third * 2.0 {
                DropIntent::Inside
            } else {
                DropIntent::After
            }
        } else if offset < self.height / 2.0 {
            DropIntent::Before
        } else {
            DropIntent::After
        }
    }
}

/// Resolve a drop gesture into the mutation to apply, if the drop is valid
///
/// Returns `None` when the gesture must be rejected: unknown ids, dropping
/// a node onto itself, or dropping a node anywhere inside its own subtree.
pub fn resolve_drop(
    forest: &Forest,
    dragged_id: &str,
    target_id: &str,
    pointer_y: f32,
    target_box: TargetBox,
) -> Option<Mutation> {
    if dragged_id == target_id {
        return None;
    }
    if !forest.contains(dragged_id) {
        return None;
    }
    let target = forest.find(target_id)?;
    if forest.is_ancestor(dragged_id, target_id) {
        return None;
    }

    match target_box.zone(pointer_y, target.is_folder()) {
        DropIntent::Inside => Some(Mutation::MoveNode {
            node_id: dragged_id.to_string(),
            new_parent_id: Some(target_id.to_string()),
            index: None,
        }),
        zone => {
            let parent_id = forest.parent_of(target_id)?.map(str::to_string);
            let placement = match zone {
                DropIntent::Before => Placement::Before,
                _ => Placement::After,
            };
            Some(Mutation::ReorderNode {
                node_id: dragged_id.to_string(),
                target_id: target_id.to_string(),
                placement,
                parent_id,
            })
        }
    }
}
