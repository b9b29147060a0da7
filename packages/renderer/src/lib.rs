//! # Treesmith Renderer
//!
//! Deterministic forest → ASCII tree text rendering. Pure and side-effect
//! free; the hosting shell recomputes the text from the full forest after
//! every change rather than diffing incrementally.

mod renderer;

pub use renderer::{render, Renderer};
