//! The editor session: one graph, the validated operations over it, and the
//! most recent path search.

use std::fmt::Write as _;

use tracing::debug;

use wayfarer_graph::{Graph, find_all_paths, path_weight, select_extremes};

use crate::config::SessionConfig;
use crate::error::{Error, Result};
use crate::loader::{self, GraphDescription};
use crate::view::{HighlightKind, MatrixView, PathHighlight, SceneEdge, SceneVertex, SceneView};

/// One enumerated path together with its total weight.
#[derive(Debug, Clone, PartialEq)]
pub struct FoundPath {
    pub vertices: Vec<String>,
    pub weight: f64,
}

/// Result of a path query: every simple path from `origin` to
/// `destination`, in enumeration order, plus which of them is cheapest and
/// costliest.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSearch {
    pub origin: String,
    pub destination: String,
    pub paths: Vec<FoundPath>,
    cheapest: usize,
    costliest: usize,
}

impl PathSearch {
    pub fn cheapest(&self) -> &FoundPath {
        &self.paths[self.cheapest]
    }

    pub fn costliest(&self) -> &FoundPath {
        &self.paths[self.costliest]
    }

    /// Human-readable report: every path with its weight, then the two
    /// extremes.
    pub fn summary(&self) -> String {
        let mut out = format!("Paths from {} to {}:\n\n", self.origin, self.destination);
        for path in &self.paths {
            let _ = writeln!(out, "• {} (weight: {})", path.vertices.join(" → "), path.weight);
        }
        let cheapest = self.cheapest();
        let costliest = self.costliest();
        let _ = writeln!(
            out,
            "\nCheapest path: {} (weight: {})",
            cheapest.vertices.join(" → "),
            cheapest.weight
        );
        let _ = write!(
            out,
            "Costliest path: {} (weight: {})",
            costliest.vertices.join(" → "),
            costliest.weight
        );
        out
    }
}

/// Owns the state the interaction layer works against: the graph and the
/// highlights from the last successful path query. One session per user;
/// everything is plain owned state, no globals.
#[derive(Debug, Clone)]
pub struct EditorSession {
    config: SessionConfig,
    graph: Graph,
    search: Option<PathSearch>,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            config,
            graph: Graph::with_capacity(config.capacity),
            search: None,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The last successful path query, until the graph is rebuilt.
    pub fn search(&self) -> Option<&PathSearch> {
        self.search.as_ref()
    }

    /// Adds a vertex at a canvas position. Empty and duplicate names and a
    /// full graph are reported, since the failure blocks a user action.
    pub fn add_vertex(&mut self, name: &str, x: f64, y: f64) -> Result<()> {
        self.graph.add_vertex(name, x, y)?;
        debug!(name, x, y, "vertex added");
        Ok(())
    }

    /// Connects two vertices with a symmetric weighted edge.
    ///
    /// The weight must be a finite positive number. Unknown endpoint names
    /// and self-loops keep the original system's permissive behavior: the
    /// call succeeds but stores nothing, and `Ok(false)` reports that.
    pub fn add_edge(&mut self, origin: &str, destination: &str, weight: f64) -> Result<bool> {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(Error::InvalidWeight { weight });
        }
        let stored = self.graph.set_edge(origin, destination, weight);
        if stored {
            debug!(origin, destination, weight, "edge set");
        }
        Ok(stored)
    }

    /// Enumerates every simple path between two existing vertices, computes
    /// their weights, and records the cheapest/costliest pair as the current
    /// highlights.
    ///
    /// Both names are validated up front (`VertexNotFound`); an empty
    /// enumeration is the recoverable `NoPathFound`.
    pub fn find_paths(&mut self, origin: &str, destination: &str) -> Result<&PathSearch> {
        for name in [origin, destination] {
            if !self.graph.has_vertex(name) {
                return Err(Error::VertexNotFound {
                    name: name.to_string(),
                });
            }
        }

        let found = find_all_paths(&self.graph, origin, destination);
        debug!(origin, destination, count = found.len(), "paths enumerated");
        let weights: Vec<f64> = found
            .iter()
            // Enumerated paths always follow edges, so the weight is defined.
            .map(|p| path_weight(&self.graph, p).unwrap_or(0.0))
            .collect();
        let Some(extremes) = select_extremes(&weights) else {
            return Err(Error::NoPathFound {
                origin: origin.to_string(),
                destination: destination.to_string(),
            });
        };

        let paths = found
            .into_iter()
            .zip(weights)
            .map(|(vertices, weight)| FoundPath { vertices, weight })
            .collect();
        let search = self.search.insert(PathSearch {
            origin: origin.to_string(),
            destination: destination.to_string(),
            paths,
            cheapest: extremes.cheapest,
            costliest: extremes.costliest,
        });
        Ok(&*search)
    }

    /// Rebuilds the graph from a structured description (see
    /// [`loader::load_description`]) and drops the current highlights.
    pub fn load_description(&mut self, description: &GraphDescription) -> Result<()> {
        loader::load_description(&mut self.graph, description, &self.config)?;
        self.search = None;
        debug!(
            vertices = self.graph.vertex_count(),
            edges = self.graph.edge_count(),
            "graph rebuilt from description"
        );
        Ok(())
    }

    /// Replaces the graph with the built-in six-vertex weighted example.
    pub fn load_weighted_sample(&mut self) -> Result<()> {
        const VERTICES: [(&str, f64, f64); 6] = [
            ("A", 150.0, 250.0),
            ("B", 300.0, 150.0),
            ("C", 300.0, 350.0),
            ("D", 450.0, 150.0),
            ("E", 450.0, 350.0),
            ("F", 600.0, 250.0),
        ];
        const EDGES: [(&str, &str, f64); 8] = [
            ("A", "B", 12.0),
            ("A", "C", 4.0),
            ("B", "C", 6.0),
            ("B", "D", 6.0),
            ("B", "E", 8.0),
            ("C", "E", 2.0),
            ("D", "F", 6.0),
            ("E", "F", 6.0),
        ];

        self.graph.clear();
        for (name, x, y) in VERTICES {
            self.graph.add_vertex(name, x, y)?;
        }
        for (origin, destination, weight) in EDGES {
            self.graph.set_edge(origin, destination, weight);
        }
        self.search = None;
        Ok(())
    }

    /// Drops all vertices, edges and highlights.
    pub fn clear(&mut self) {
        self.graph.clear();
        self.search = None;
    }

    /// Snapshot for the rendering layer.
    pub fn scene(&self) -> SceneView {
        let vertices = self
            .graph
            .vertices()
            .map(|(name, pos)| SceneVertex {
                name: name.to_string(),
                x: pos.x,
                y: pos.y,
            })
            .collect();
        let edges = self
            .graph
            .edges()
            .into_iter()
            .map(|e| SceneEdge {
                origin: e.origin,
                destination: e.destination,
                weight: e.weight,
            })
            .collect();
        let highlights = match &self.search {
            Some(search) => vec![
                PathHighlight {
                    vertices: search.cheapest().vertices.clone(),
                    kind: HighlightKind::Cheapest,
                },
                PathHighlight {
                    vertices: search.costliest().vertices.clone(),
                    kind: HighlightKind::Costliest,
                },
            ],
            None => Vec::new(),
        };
        SceneView {
            vertices,
            edges,
            highlights,
        }
    }

    /// Snapshot for the matrix-table layer.
    pub fn matrix(&self) -> MatrixView {
        MatrixView {
            names: self.graph.vertex_names().map(str::to_string).collect(),
            rows: self.graph.adjacency_matrix(),
        }
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
