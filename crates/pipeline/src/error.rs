//! Pipeline-level error type.

use thiserror::Error;
use tipjar_core::error::CoreError;

/// Error from an evaluation pass or one of its collaborators.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The metrics source could not produce a snapshot for the user.
    #[error("Metrics source error: {0}")]
    Metrics(String),

    /// The state store failed to load or save the user's state batch.
    #[error("State store error: {0}")]
    Store(String),

    /// A domain-level error from `tipjar_core`.
    #[error(transparent)]
    Core(#[from] CoreError),
}
