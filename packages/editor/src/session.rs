//! # Edit Session
//!
//! Transient view state layered over a document: which node currently has
//! focus. Selection is keyed by node id, lives outside the forest value
//! and is never persisted.

use crate::{Document, EditorError, Mutation, MutationResult};

/// Single edit session over one document
pub struct EditSession {
    /// Session identifier (host-assigned)
    pub id: String,

    /// Document being edited
    pub document: Document,

    /// Currently focused node, if any
    selected_node: Option<String>,
}

impl EditSession {
    pub fn new(id: String, document: Document) -> Self {
        Self {
            id,
            document,
            selected_node: None,
        }
    }

    /// Apply a mutation and keep the selection coherent
    ///
    /// An accepted insert moves focus to the created node so the host can
    /// route input to it. A selection pointing at a node that no longer
    /// exists (deleted directly or inside a deleted subtree) is cleared.
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationResult, EditorError> {
        let result = self.document.apply(mutation)?;

        if let Some(created) = &result.created_id {
            self.selected_node = Some(created.clone());
        } else if let Some(selected) = &self.selected_node {
            if !self.document.forest().contains(selected) {
                self.selected_node = None;
            }
        }

        Ok(result)
    }

    /// Focus a node; ids absent from the forest clear the selection
    pub fn set_selection(&mut self, node_id: Option<String>) {
        self.selected_node = node_id.filter(|id| self.document.forest().contains(id));
    }

    pub fn selection(&self) -> Option<&str> {
        self.selected_node.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use treesmith_core::NodeKind;

    fn session() -> EditSession {
        EditSession::new("session-1".to_string(), Document::starter("session"))
    }

    #[test]
    fn test_insert_routes_focus_to_new_node() {
        let mut session = session();

        let result = session
            .apply(Mutation::InsertNode {
                parent_id: None,
                kind: NodeKind::File,
            })
            .unwrap();

        assert_eq!(session.selection(), result.created_id.as_deref());
    }

    #[test]
    fn test_deleting_selected_subtree_clears_focus() {
        let mut session = session();
        let src_id = session.document.forest().roots[0].id.clone();
        let child_id = session.document.forest().roots[0].children[0].id.clone();

        session.set_selection(Some(child_id));
        session
            .apply(Mutation::DeleteNode { node_id: src_id })
            .unwrap();

        assert_eq!(session.selection(), None);
    }

    #[test]
    fn test_selection_requires_existing_node() {
        let mut session = session();

        session.set_selection(Some("ghost".to_string()));

        assert_eq!(session.selection(), None);
    }
}
