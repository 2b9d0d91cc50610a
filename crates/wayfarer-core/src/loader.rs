//! Bulk loading: rebuilds a graph from a structured description, placing the
//! vertices evenly around a circle.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use wayfarer_graph::Graph;

use crate::config::SessionConfig;
use crate::error::Result;

/// Weight assigned to edges declared through a description.
pub const DESCRIPTION_EDGE_WEIGHT: f64 = 1.0;

/// One declared vertex and the neighbors it connects to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionEntry {
    pub name: String,
    #[serde(default)]
    pub neighbors: Vec<String>,
}

impl DescriptionEntry {
    pub fn new(
        name: impl Into<String>,
        neighbors: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            neighbors: neighbors.into_iter().map(Into::into).collect(),
        }
    }
}

/// Ordered list of vertex declarations, as supplied by the input layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GraphDescription {
    pub entries: Vec<DescriptionEntry>,
}

impl GraphDescription {
    pub fn new(entries: Vec<DescriptionEntry>) -> Self {
        Self { entries }
    }

    /// Every distinct name the description references, in first-seen order:
    /// each entry's own name, then its neighbors. A name that only ever
    /// appears inside a neighbor list still becomes a real vertex.
    pub fn vertex_names(&self) -> Vec<&str> {
        let mut names: IndexSet<&str> = IndexSet::new();
        for entry in &self.entries {
            names.insert(entry.name.as_str());
            for neighbor in &entry.neighbors {
                names.insert(neighbor.as_str());
            }
        }
        names.into_iter().collect()
    }
}

/// Replaces the graph's contents with the description: deduplicated vertices
/// on a layout circle around the canvas center (vertex `k` of `n` at angle
/// `2πk/n`), then one weight-1 symmetric edge per declared neighbor.
///
/// Prior vertices and edges are discarded entirely. Fails when a declared
/// name is empty or the description exceeds the graph's capacity; the prior
/// contents are already gone by then, so callers should treat a failed load
/// as a fresh, partially populated graph.
pub fn load_description(
    graph: &mut Graph,
    description: &GraphDescription,
    config: &SessionConfig,
) -> Result<()> {
    let names = description.vertex_names();
    let (cx, cy) = config.canvas_center();

    graph.clear();
    for (k, name) in names.iter().enumerate() {
        let angle = std::f64::consts::TAU * k as f64 / names.len() as f64;
        graph.add_vertex(
            *name,
            cx + config.layout_radius * angle.cos(),
            cy + config.layout_radius * angle.sin(),
        )?;
    }
    for entry in &description.entries {
        for neighbor in &entry.neighbors {
            graph.set_edge(&entry.name, neighbor, DESCRIPTION_EDGE_WEIGHT);
        }
    }
    Ok(())
}
