//! Graph-output error type.

use thiserror::Error;

/// Errors produced when serializing or writing the finished graph.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Alias for `Result<T, GraphError>`.
pub type GraphResult<T> = Result<T, GraphError>;
