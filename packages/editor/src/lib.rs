//! # Treesmith Editor
//!
//! Mutation engine for folder/file forests.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ core: TreeNode / Forest value + queries     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: Document lifecycle + mutations      │
//! │  - Load/save snapshot documents             │
//! │  - Apply mutations with validation          │
//! │  - Selection / focus routing (EditSession)  │
//! │  - Drag/drop intent resolution              │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ renderer: Forest → ASCII tree text          │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The forest is the source of truth**: rendered text is a derived
//!    view, recomputed in full after every accepted mutation
//! 2. **Mutations are atomic**: validate first, then apply; a rejected
//!    mutation leaves the forest unchanged
//! 3. **Errors are locally absorbed**: every mutation error is non-fatal
//!    and never reaches the render path
//!
//! ## Usage
//!
//! ```rust
//! use treesmith_editor::{Document, Mutation};
//! use treesmith_core::NodeKind;
//!
//! let mut doc = Document::starter("readme");
//!
//! let result = doc.apply(Mutation::InsertNode {
//!     parent_id: None,
//!     kind: NodeKind::Folder,
//! }).unwrap();
//!
//! // Route focus to the new node
//! let created = result.created_id.unwrap();
//! doc.apply(Mutation::UpdateNode {
//!     node_id: created,
//!     name: Some("docs".to_string()),
//!     comment: Some("user guides".to_string()),
//! }).unwrap();
//! ```

mod document;
mod errors;
mod intent;
mod mutations;
mod session;

pub use document::{Document, DocumentStorage};
pub use errors::EditorError;
pub use intent::{resolve_drop, DropIntent, TargetBox};
pub use mutations::{Mutation, MutationError, MutationResult, Placement};
pub use session::EditSession;

// Re-export core types for convenience
pub use treesmith_core::{Forest, NodeKind, TreeNode};
