//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Content failed to parse or is structurally invalid.
    #[error("validation error: {0}")]
    Validation(String),

    /// An I/O or other infrastructure failure.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
