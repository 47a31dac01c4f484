//! Error types for the reachgraph input and CLI surfaces.
//!
//! Graph operations themselves never fail; these errors only arise while
//! loading a graph from an edge list or snapshot.

use thiserror::Error;

/// All errors that can occur while loading or reporting on a graph.
#[derive(Error, Debug)]
pub enum GraphError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON snapshot.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An edge-list line that is neither a node nor an edge.
    #[error("Invalid edge-list entry on line {line}: {content:?}")]
    InvalidLine { line: usize, content: String },
}

/// Convenience result type for reachgraph I/O operations.
pub type GraphResult<T> = Result<T, GraphError>;
