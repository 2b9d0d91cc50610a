//! Undirected weighted graph container plus exhaustive simple-path
//! enumeration.
//!
//! The container keeps vertices in insertion order (that order defines the
//! internal index used by the path algorithms) and stores each undirected
//! edge once under a canonical index pair, so the weight relation is
//! symmetric by construction.

pub mod error;
pub mod graph;
pub mod paths;

pub use error::VertexInsertError;
pub use graph::{DEFAULT_CAPACITY, Edge, Graph, Position};
pub use paths::{PathExtremes, find_all_paths, path_weight, select_extremes};
