//! Metrics source collaborator seam (PRD-26).

use async_trait::async_trait;
use tipjar_core::metrics::MetricSnapshot;
use tipjar_core::types::UserId;

use crate::error::PipelineError;

/// Provider of raw activity metrics.
///
/// Implementations own freshness and consistency: every call must
/// return one internally consistent snapshot, so an evaluation pass
/// never observes a metric value that changes mid-batch. Achievements
/// the source has no data for are simply absent from the snapshot and
/// get skipped for that pass.
#[async_trait]
pub trait MetricsSource: Send + Sync {
    /// One consistent snapshot of the user's metrics.
    async fn snapshot(&self, user_id: UserId) -> Result<MetricSnapshot, PipelineError>;
}
