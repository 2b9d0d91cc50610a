#![forbid(unsafe_code)]

//! Headless core of the interactive graph editor and path explorer.
//!
//! An [`EditorSession`] owns one graph plus the most recent path search, and
//! exposes the validated operations the interaction layer calls: vertex and
//! edge insertion, bulk loading from a structured description (with circular
//! layout), and all-simple-paths queries with cheapest/costliest selection.
//! The rendering and matrix-table layers consume the read-only snapshots in
//! [`view`].

pub mod config;
pub mod error;
pub mod loader;
pub mod session;
pub mod view;

pub use config::SessionConfig;
pub use error::{Error, Result};
pub use loader::{DescriptionEntry, GraphDescription};
pub use session::{EditorSession, FoundPath, PathSearch};
pub use view::{HighlightKind, MatrixView, PathHighlight, SceneEdge, SceneVertex, SceneView};
