//! Read-only snapshots consumed by the excluded rendering and matrix-table
//! layers.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneVertex {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneEdge {
    pub origin: String,
    pub destination: String,
    pub weight: f64,
}

/// Which of the two tracked extremes a highlighted path is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightKind {
    Cheapest,
    Costliest,
}

impl HighlightKind {
    /// Display color the renderer draws this highlight with.
    pub fn color(self) -> &'static str {
        match self {
            HighlightKind::Cheapest => "#1e88e5",
            HighlightKind::Costliest => "#e53935",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathHighlight {
    pub vertices: Vec<String>,
    pub kind: HighlightKind,
}

/// Everything the rendering surface needs to draw a frame: positioned
/// vertices, one entry per edge pair, and the optional highlighted paths.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SceneView {
    pub vertices: Vec<SceneVertex>,
    pub edges: Vec<SceneEdge>,
    pub highlights: Vec<PathHighlight>,
}

/// Adjacency matrix plus the header names, for the table layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatrixView {
    pub names: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}
