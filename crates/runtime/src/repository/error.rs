//! Error types raised by record repositories.

use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("record not found: {0}")]
    NotFound(String),

    #[error("invalid session id '{0}'")]
    InvalidSessionId(String),
}
