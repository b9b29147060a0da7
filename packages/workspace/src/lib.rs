//! # Treesmith Workspace
//!
//! The surface a hosting shell talks to: one open document, the action
//! vocabulary of the UI, the cached ASCII rendering, and best-effort
//! snapshot persistence after every accepted mutation.
//!
//! Everything here is synchronous and single-threaded. Each user gesture
//! is one mutation call followed by one render call, and the forest value
//! is replaced wholesale on each change.

mod actions;
mod state;

pub use actions::Action;
pub use state::{Workspace, WorkspaceError};
