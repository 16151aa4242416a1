//! Evaluation pass orchestration (PRD-26).
//!
//! Wires the collaborators around the pure engine: load the user's
//! previous state, evaluate against one metric snapshot, persist the
//! full new state map, then announce the unlocks. State is saved before
//! events are published so a celebration is never delivered for state
//! that failed to persist.

use std::sync::Arc;

use chrono::Utc;
use tipjar_core::achievement::ReleasePhase;
use tipjar_core::catalog::Catalog;
use tipjar_core::evaluation::{evaluate_user, EvaluationOutcome};
use tipjar_core::types::UserId;
use tipjar_events::{publish_unlocks, EventBus};

use crate::error::PipelineError;
use crate::source::MetricsSource;
use crate::store::StateStore;

// ---------------------------------------------------------------------------
// PassSummary
// ---------------------------------------------------------------------------

/// Aggregate result of a multi-user evaluation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassSummary {
    pub users: usize,
    pub failed: usize,
    pub unlocks: usize,
}

// ---------------------------------------------------------------------------
// EvaluationPipeline
// ---------------------------------------------------------------------------

/// Runs evaluation passes against a fixed catalog and active phase.
pub struct EvaluationPipeline {
    catalog: Arc<Catalog>,
    active_phase: ReleasePhase,
    metrics: Arc<dyn MetricsSource>,
    store: Arc<dyn StateStore>,
    bus: Arc<EventBus>,
}

impl EvaluationPipeline {
    pub fn new(
        catalog: Arc<Catalog>,
        active_phase: ReleasePhase,
        metrics: Arc<dyn MetricsSource>,
        store: Arc<dyn StateStore>,
        bus: Arc<EventBus>,
    ) -> Self {
        Self {
            catalog,
            active_phase,
            metrics,
            store,
            bus,
        }
    }

    /// Run one evaluation pass for a single user.
    ///
    /// Sequence: snapshot metrics, load previous state, evaluate, save
    /// the complete new state map, publish the unlock events.
    pub async fn run_user(&self, user_id: UserId) -> Result<EvaluationOutcome, PipelineError> {
        let snapshot = self.metrics.snapshot(user_id).await?;
        let previous = self.store.load(user_id).await?;

        let outcome = evaluate_user(
            &self.catalog,
            self.active_phase,
            user_id,
            &snapshot,
            &previous,
            Utc::now(),
        );

        self.store.save(user_id, &outcome.states).await?;
        publish_unlocks(&self.bus, &outcome.events);

        tracing::debug!(
            user_id,
            evaluated = outcome.states.len(),
            unlocks = outcome.events.len(),
            "Evaluation pass complete"
        );
        Ok(outcome)
    }

    /// Run one evaluation pass for each user, concurrently.
    ///
    /// Users are fully independent: one user's collaborator failure is
    /// logged and counted, never propagated to the others.
    pub async fn run_users(&self, user_ids: &[UserId]) -> PassSummary {
        let passes = user_ids.iter().map(|&user_id| async move {
            let result = self.run_user(user_id).await;
            (user_id, result)
        });

        let mut summary = PassSummary {
            users: user_ids.len(),
            failed: 0,
            unlocks: 0,
        };
        for (user_id, result) in futures::future::join_all(passes).await {
            match result {
                Ok(outcome) => summary.unlocks += outcome.events.len(),
                Err(e) => {
                    summary.failed += 1;
                    tracing::error!(user_id, error = %e, "Evaluation pass failed");
                }
            }
        }
        summary
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
