//! The graph container: named vertices with canvas positions and a symmetric
//! weighted edge relation.

use rustc_hash::FxBuildHasher;

use crate::error::VertexInsertError;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Soft limit on the number of vertices a fresh graph accepts.
pub const DEFAULT_CAPACITY: usize = 50;

/// Canvas position of a vertex. Cosmetic metadata for the rendering layer;
/// never read by the graph algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// One undirected edge, reported with its endpoints in insertion order of
/// the canonical pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub origin: String,
    pub destination: String,
    pub weight: f64,
}

#[derive(Debug, Clone)]
struct VertexEntry {
    name: String,
    pos: Position,
}

#[derive(Debug, Clone)]
struct EdgeEntry {
    // Canonical pair: a < b. Keeps the relation symmetric with one record.
    a: usize,
    b: usize,
    weight: f64,
}

/// Bounded undirected graph with uniquely named vertices.
///
/// Vertices are kept in insertion order; that order defines the index used
/// by [`neighbors`](Graph::neighbors) and therefore the enumeration order of
/// the path search. Vertices and edges are never removed individually, only
/// dropped wholesale via [`clear`](Graph::clear).
#[derive(Debug, Clone)]
pub struct Graph {
    capacity: usize,

    vertices: Vec<VertexEntry>,
    vertex_index: HashMap<String, usize>,

    edges: Vec<EdgeEntry>,
    edge_index: HashMap<(usize, usize), usize>,
}

impl Graph {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            vertices: Vec::new(),
            vertex_index: HashMap::default(),
            edges: Vec::new(),
            edge_index: HashMap::default(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends a vertex at the end of the insertion order.
    ///
    /// Fails when the name is empty or already taken, or when the graph is
    /// at capacity; the graph is left untouched in every failure case.
    pub fn add_vertex(
        &mut self,
        name: impl Into<String>,
        x: f64,
        y: f64,
    ) -> Result<(), VertexInsertError> {
        let name = name.into();
        if name.is_empty() {
            return Err(VertexInsertError::EmptyName);
        }
        if self.vertex_index.contains_key(&name) {
            return Err(VertexInsertError::DuplicateName(name));
        }
        if self.vertices.len() >= self.capacity {
            return Err(VertexInsertError::CapacityExceeded(self.capacity));
        }
        let idx = self.vertices.len();
        self.vertex_index.insert(name.clone(), idx);
        self.vertices.push(VertexEntry {
            name,
            pos: Position { x, y },
        });
        Ok(())
    }

    /// Sets the symmetric weight between two vertices, overwriting any
    /// previous weight for the pair.
    ///
    /// Unknown endpoint names and self-loops are ignored; the return value
    /// says whether anything was stored.
    pub fn set_edge(&mut self, origin: &str, destination: &str, weight: f64) -> bool {
        let (Some(&a), Some(&b)) = (
            self.vertex_index.get(origin),
            self.vertex_index.get(destination),
        ) else {
            return false;
        };
        if a == b {
            return false;
        }
        let key = Self::pair_key(a, b);
        if let Some(&idx) = self.edge_index.get(&key) {
            self.edges[idx].weight = weight;
            return true;
        }
        let idx = self.edges.len();
        self.edges.push(EdgeEntry {
            a: key.0,
            b: key.1,
            weight,
        });
        self.edge_index.insert(key, idx);
        true
    }

    pub fn has_vertex(&self, name: &str) -> bool {
        self.vertex_index.contains_key(name)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.vertex_index.get(name).copied()
    }

    pub fn vertex_name(&self, index: usize) -> Option<&str> {
        self.vertices.get(index).map(|v| v.name.as_str())
    }

    pub fn vertex_names(&self) -> impl Iterator<Item = &str> {
        self.vertices.iter().map(|v| v.name.as_str())
    }

    /// Vertices with their positions, in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = (&str, Position)> {
        self.vertices.iter().map(|v| (v.name.as_str(), v.pos))
    }

    pub fn position(&self, name: &str) -> Option<Position> {
        self.vertex_index.get(name).map(|&idx| self.vertices[idx].pos)
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All edges in insertion order, one entry per connected pair.
    pub fn edges(&self) -> Vec<Edge> {
        self.edges
            .iter()
            .map(|e| Edge {
                origin: self.vertices[e.a].name.clone(),
                destination: self.vertices[e.b].name.clone(),
                weight: e.weight,
            })
            .collect()
    }

    /// Symmetric weight lookup; `None` when the pair is unconnected (which
    /// includes every `(v, v)` pair, since self-loops are never stored).
    pub fn weight(&self, origin: &str, destination: &str) -> Option<f64> {
        let &a = self.vertex_index.get(origin)?;
        let &b = self.vertex_index.get(destination)?;
        if a == b {
            return None;
        }
        self.edge_index
            .get(&Self::pair_key(a, b))
            .map(|&idx| self.edges[idx].weight)
    }

    /// Adjacent vertex indices in ascending index order.
    ///
    /// This ordering is what makes path enumeration deterministic: each
    /// branch point expands neighbors in vertex insertion order.
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> {
        (0..self.vertices.len()).filter(move |&j| {
            j != index && self.edge_index.contains_key(&Self::pair_key(index, j))
        })
    }

    /// Square weight matrix over the populated vertices (`0.0` means
    /// unconnected), for the external table layer. Pure query.
    pub fn adjacency_matrix(&self) -> Vec<Vec<f64>> {
        let n = self.vertices.len();
        let mut rows = vec![vec![0.0; n]; n];
        for e in &self.edges {
            rows[e.a][e.b] = e.weight;
            rows[e.b][e.a] = e.weight;
        }
        rows
    }

    /// Drops all vertices and edges, keeping the configured capacity.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.vertex_index.clear();
        self.edges.clear();
        self.edge_index.clear();
    }

    fn pair_key(a: usize, b: usize) -> (usize, usize) {
        if a < b { (a, b) } else { (b, a) }
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
