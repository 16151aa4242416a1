//! Shared domain error type for the tipjar core.

use thiserror::Error;

/// Domain-level error for core operations.
///
/// Mapped to user-facing responses by the API layer; the core only
/// distinguishes the failure classes it can act on.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An achievement definition failed catalog validation. Rejects the
    /// whole catalog at load time.
    #[error("Invalid achievement definition: {0}")]
    InvalidDefinition(String),

    /// A referenced entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// Input failed a domain validation rule.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}
