//! Workspace state
//!
//! Holds the single document a shell edits, plus the derived rendered
//! text, recomputed in full after every accepted mutation. Persistence is
//! fire-and-forget: a failed snapshot write is logged and absorbed, never
//! rolled back, and never blocks the in-memory state.

use std::path::PathBuf;

use treesmith_core::Forest;
use treesmith_editor::{
    resolve_drop, Document, EditSession, EditorError, MutationResult, TargetBox,
};
use treesmith_renderer::render;

use crate::actions::Action;

#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error("Editor error: {0}")]
    Editor(#[from] EditorError),
}

/// One open document plus its cached derived state
pub struct Workspace {
    session: EditSession,
    rendered: String,
}

impl Workspace {
    /// Open a file-backed workspace from a snapshot
    ///
    /// A missing or malformed snapshot falls back to the built-in starter
    /// forest; the broken snapshot is overwritten on the next accepted
    /// mutation.
    pub fn open(path: PathBuf) -> Self {
        let document = match Document::load(path.clone()) {
            Ok(document) => document,
            Err(err) => {
                tracing::warn!(
                    "Could not load snapshot {}, starting fresh: {}",
                    path.display(),
                    err
                );
                Document::create(path)
            }
        };
        Self::with_document(document)
    }

    /// Open a memory-backed workspace (no persistence)
    pub fn in_memory(label: &str) -> Self {
        Self::with_document(Document::starter(label))
    }

    fn with_document(document: Document) -> Self {
        let rendered = render(document.forest());
        Self {
            session: EditSession::new("local".to_string(), document),
            rendered,
        }
    }

    /// Apply one shell action
    ///
    /// On success the rendered text is recomputed and the snapshot is
    /// persisted best-effort. On failure nothing changes: not the forest,
    /// not the rendered text, not the version.
    pub fn dispatch(&mut self, action: Action) -> Result<MutationResult, WorkspaceError> {
        let result = self.session.apply(action.into_mutation())?;

        self.rendered = render(self.forest());
        self.persist();

        Ok(result)
    }

    /// Apply a drop gesture, if it resolves to a valid mutation
    ///
    /// Returns `Ok(None)` for rejected drops (self, own subtree, unknown
    /// ids); the shell simply ignores those.
    pub fn dispatch_drop(
        &mut self,
        dragged_id: &str,
        target_id: &str,
        pointer_y: f32,
        target_box: TargetBox,
    ) -> Result<Option<MutationResult>, WorkspaceError> {
        let Some(mutation) = resolve_drop(self.forest(), dragged_id, target_id, pointer_y, target_box)
        else {
            return Ok(None);
        };

        let result = self.session.apply(mutation)?;
        self.rendered = render(self.forest());
        self.persist();

        Ok(Some(result))
    }

    fn persist(&mut self) {
        if !self.session.document.is_file_backed() || !self.session.document.is_dirty() {
            return;
        }
        if let Err(err) = self.session.document.save() {
            tracing::warn!("Failed to persist snapshot: {}", err);
        }
    }

    /// The clipboard payload: the rendered ASCII text, verbatim
    pub fn export(&self) -> &str {
        &self.rendered
    }

    pub fn forest(&self) -> &Forest {
        self.session.document.forest()
    }

    pub fn version(&self) -> u64 {
        self.session.document.version
    }

    /// Currently focused node (routed to freshly inserted nodes)
    pub fn selection(&self) -> Option<&str> {
        self.session.selection()
    }
}
