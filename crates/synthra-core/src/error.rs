//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A field the direct creation path requires was absent.
    #[error("Campo obrigatório: {0}")]
    MissingField(&'static str),

    #[error("Post não encontrado")]
    NotFound { id: String },
}

/// Errors raised by a post store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Post collection could not be (de)serialized: {0}")]
    Serialization(#[from] serde_json::Error),
}
