#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VertexInsertError {
    #[error("vertex name must not be empty")]
    EmptyName,
    #[error("vertex `{0}` already exists")]
    DuplicateName(String),
    #[error("vertex limit reached ({0})")]
    CapacityExceeded(usize),
}
