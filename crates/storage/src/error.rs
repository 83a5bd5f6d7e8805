//! Storage error types.

use genora_core::ToolId;
use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem error while reading or writing the store file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A result was filed under a tool that did not produce it.
    #[error("result for {actual} cannot be stored in {expected} history")]
    ResultMismatch { expected: ToolId, actual: ToolId },
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;
