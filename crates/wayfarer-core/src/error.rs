use wayfarer_graph::VertexInsertError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Vertex(#[from] VertexInsertError),

    #[error("unknown vertex `{name}`")]
    VertexNotFound { name: String },

    #[error("no path between `{origin}` and `{destination}`")]
    NoPathFound { origin: String, destination: String },

    #[error("edge weight must be a positive number, got {weight}")]
    InvalidWeight { weight: f64 },
}
