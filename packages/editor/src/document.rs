//! # Document Handle
//!
//! A Document represents one editable forest and its editing state.
//! Documents can be:
//! - **Memory-backed**: Temporary, for testing or embedding hosts that
//!   manage persistence themselves
//! - **File-backed**: Snapshot persisted as a JSON document
//!
//! ## Lifecycle
//!
//! ```text
//! Load → Edit → Save
//!   ↓      ↓      ↓
//! JSON  Mutations JSON
//! ```
//!
//! The forest is the single source of truth; rendered text is a derived
//! view recomputed by the caller after every accepted mutation.

use std::path::PathBuf;

use treesmith_core::{Forest, IdGenerator, NodeKind, TreeNode};

use crate::{EditorError, Mutation, MutationResult};

/// Editable forest document
#[derive(Debug)]
pub struct Document {
    /// Current version number (increments on each accepted mutation)
    pub version: u64,

    /// Node id generator, unique for this document's lifetime
    ids: IdGenerator,

    /// Backing storage strategy
    storage: DocumentStorage,
}

/// Storage backend for a document
#[derive(Debug)]
pub enum DocumentStorage {
    /// In-memory only (for testing, temp documents)
    Memory { forest: Forest },

    /// Snapshot-file-backed
    File {
        path: PathBuf,
        forest: Forest,
        dirty: bool,
    },
}

impl Document {
    /// Create a memory-backed document from an existing forest
    pub fn from_forest(label: &str, forest: Forest) -> Self {
        let mut ids = IdGenerator::new(label);
        ids.resume(&forest);

        Self {
            version: 0,
            ids,
            storage: DocumentStorage::Memory { forest },
        }
    }

    /// Create a memory-backed document holding the starter forest
    pub fn starter(label: &str) -> Self {
        let mut ids = IdGenerator::new(label);
        let forest = starter_forest(&mut ids);

        Self {
            version: 0,
            ids,
            storage: DocumentStorage::Memory { forest },
        }
    }

    /// Load a file-backed document from a JSON snapshot
    ///
    /// Errors on a missing or malformed snapshot; callers that want the
    /// fallback behavior use [`Document::create`] on the error path.
    pub fn load(path: PathBuf) -> Result<Self, EditorError> {
        let source = std::fs::read_to_string(&path)?;
        let forest: Forest = serde_json::from_str(&source)?;

        let mut ids = IdGenerator::new(&path.to_string_lossy());
        ids.resume(&forest);

        Ok(Self {
            version: 0,
            ids,
            storage: DocumentStorage::File {
                path,
                forest,
                dirty: false,
            },
        })
    }

    /// Create a file-backed document holding the starter forest
    ///
    /// Marked dirty so the first accepted mutation (or an explicit save)
    /// writes the snapshot.
    pub fn create(path: PathBuf) -> Self {
        let mut ids = IdGenerator::new(&path.to_string_lossy());
        let forest = starter_forest(&mut ids);

        Self {
            version: 0,
            ids,
            storage: DocumentStorage::File {
                path,
                forest,
                dirty: true,
            },
        }
    }

    /// Current forest
    pub fn forest(&self) -> &Forest {
        match &self.storage {
            DocumentStorage::Memory { forest } => forest,
            DocumentStorage::File { forest, .. } => forest,
        }
    }

    /// Apply a mutation
    ///
    /// The version increments only when the mutation is accepted; a
    /// rejected mutation leaves the forest, the version and the dirty
    /// flag untouched.
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationResult, EditorError> {
        let created_id = match &mut self.storage {
            DocumentStorage::Memory { forest } => mutation.apply(forest, &mut self.ids)?,
            DocumentStorage::File { forest, .. } => mutation.apply(forest, &mut self.ids)?,
        };

        self.version += 1;
        if let DocumentStorage::File { dirty, .. } = &mut self.storage {
            *dirty = true;
        }

        Ok(MutationResult {
            version: self.version,
            created_id,
        })
    }

    /// Check if the document has unsaved changes
    pub fn is_dirty(&self) -> bool {
        match &self.storage {
            DocumentStorage::File { dirty, .. } => *dirty,
            DocumentStorage::Memory { .. } => false,
        }
    }

    pub fn is_file_backed(&self) -> bool {
        matches!(self.storage, DocumentStorage::File { .. })
    }

    /// Write the snapshot to disk (if file-backed)
    pub fn save(&mut self) -> Result<(), EditorError> {
        match &mut self.storage {
            DocumentStorage::File {
                path,
                forest,
                dirty,
            } => {
                let snapshot = serde_json::to_string_pretty(forest)?;
                std::fs::write(path, snapshot)?;
                *dirty = false;
                Ok(())
            }
            DocumentStorage::Memory { .. } => Err(EditorError::NotFileBacked),
        }
    }
}

/// Built-in default forest shown before the user has persisted anything
fn starter_forest(ids: &mut IdGenerator) -> Forest {
    let mut src = TreeNode::new(ids.new_id(), "src".to_string(), NodeKind::Folder);
    let mut entry = TreeNode::new(ids.new_id(), "index.ts".to_string(), NodeKind::File);
    entry.comment = "🚀 entry point".to_string();
    src.children.push(entry);

    let readme = TreeNode::new(ids.new_id(), "README.md".to_string(), NodeKind::File);

    Forest {
        roots: vec![src, readme],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_document() {
        let doc = Document::starter("starter");

        assert_eq!(doc.version, 0);
        assert!(!doc.is_dirty());
        assert!(!doc.is_file_backed());
        assert_eq!(doc.forest().node_count(), 3);
        assert_eq!(doc.forest().roots[0].name, "src");
        assert_eq!(doc.forest().roots[0].children[0].comment, "🚀 entry point");
    }

    #[test]
    fn test_version_increments_only_on_accepted_mutations() {
        let mut doc = Document::starter("versions");

        doc.apply(Mutation::InsertNode {
            parent_id: None,
            kind: NodeKind::File,
        })
        .unwrap();
        assert_eq!(doc.version, 1);

        let rejected = doc.apply(Mutation::DeleteNode {
            node_id: "ghost".to_string(),
        });
        assert!(rejected.is_err());
        assert_eq!(doc.version, 1);
    }

    #[test]
    fn test_insert_result_carries_created_id() {
        let mut doc = Document::starter("focus");

        let result = doc
            .apply(Mutation::InsertNode {
                parent_id: None,
                kind: NodeKind::Folder,
            })
            .unwrap();

        let created = result.created_id.unwrap();
        assert!(doc.forest().contains(&created));
    }

    #[test]
    fn test_memory_documents_cannot_save() {
        let mut doc = Document::starter("memory");
        assert!(matches!(doc.save(), Err(EditorError::NotFileBacked)));
    }

    #[test]
    fn test_loaded_ids_are_never_reused() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");

        let mut doc = Document::create(path.clone());
        let first = doc
            .apply(Mutation::InsertNode {
                parent_id: None,
                kind: NodeKind::File,
            })
            .unwrap()
            .created_id
            .unwrap();
        doc.save().unwrap();

        let mut reloaded = Document::load(path).unwrap();
        let second = reloaded
            .apply(Mutation::InsertNode {
                parent_id: None,
                kind: NodeKind::File,
            })
            .unwrap()
            .created_id
            .unwrap();

        assert_ne!(first, second);
    }
}
