//! Tipjar evaluation pipeline.
//!
//! Orchestrates achievement evaluation around the pure engine in
//! `tipjar-core` (PRD-26):
//!
//! - [`MetricsSource`] — collaborator seam delivering one consistent
//!   metric snapshot per user per pass.
//! - [`StateStore`] — collaborator seam persisting a user's state map
//!   as one atomic batch; [`MemoryStateStore`] backs tests and local
//!   development.
//! - [`EvaluationPipeline`] — the load → evaluate → save → publish
//!   sequence, fanned out concurrently across independent users.

pub mod error;
pub mod runner;
pub mod source;
pub mod store;

pub use error::PipelineError;
pub use runner::{EvaluationPipeline, PassSummary};
pub use source::MetricsSource;
pub use store::{MemoryStateStore, StateStore};
