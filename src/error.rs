use thiserror::Error;

/// Errors crossing the JSON wire boundary with the backend workflow service.
#[derive(Error, Debug, Clone)]
pub enum WireError {
    #[error("Failed to parse workflow JSON: {0}")]
    Parse(String),

    #[error("Failed to serialize workflow JSON: {0}")]
    Serialize(String),
}

/// Errors from structural graph mutations in the editor model.
#[derive(Error, Debug, Clone)]
pub enum GraphError {
    #[error("A node with id '{0}' already exists in the graph")]
    DuplicateNodeId(String),

    #[error("Cannot connect '{source_id}' to '{target}': node '{missing}' does not exist")]
    UnknownNode {
        source_id: String,
        target: String,
        missing: String,
    },
}

/// Errors that can occur when converting a custom editor format into a
/// [`WorkflowGraph`](crate::graph::WorkflowGraph).
#[derive(Error, Debug, Clone)]
pub enum GraphConversionError {
    #[error("Invalid graph data: {0}")]
    ValidationError(String),
}
