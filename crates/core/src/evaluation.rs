//! Whole-user evaluation pass (PRD-23).
//!
//! Combines the catalog, a consistent metric snapshot, and the user's
//! previous state into a fresh state map plus the unlock events earned
//! this pass. The pass is pure: callers own loading the previous state
//! and persisting the returned map, and a returned map is always a
//! complete replacement, so readers never observe a half-applied pass.

use std::collections::BTreeMap;

use serde::Serialize;
use uuid::Uuid;

use crate::achievement::{AchievementTier, ReleasePhase};
use crate::catalog::Catalog;
use crate::metrics::MetricSnapshot;
use crate::progress::completion_ratio;
use crate::types::{Timestamp, UserId};
use crate::unlock::{apply_progress, StepOutcome, UserAchievementState};

/// Per-user achievement state keyed by achievement id.
pub type UserStateMap = BTreeMap<String, UserAchievementState>;

// ---------------------------------------------------------------------------
// UnlockEvent
// ---------------------------------------------------------------------------

/// Emitted exactly once per genuine transition into `unlocked`.
///
/// `event_id` is a fresh v4 UUID minted at the transition, letting
/// downstream consumers deduplicate deliveries.
#[derive(Debug, Clone, Serialize)]
pub struct UnlockEvent {
    pub event_id: Uuid,
    pub user_id: UserId,
    pub achievement_id: String,
    pub tier: AchievementTier,
    pub xp_awarded: i64,
    pub unlocked_at: Timestamp,
}

// ---------------------------------------------------------------------------
// EvaluationOutcome
// ---------------------------------------------------------------------------

/// Result of one evaluation pass for one user.
#[derive(Debug, Clone)]
pub struct EvaluationOutcome {
    /// The complete new state map, to be persisted as one batch.
    pub states: UserStateMap,
    /// Unlock events earned this pass, in catalog order.
    pub events: Vec<UnlockEvent>,
}

// ---------------------------------------------------------------------------
// evaluate_user
// ---------------------------------------------------------------------------

/// Run one evaluation pass for a user.
///
/// For every catalog definition live under `active_phase`:
/// - With no metric in the snapshot, the achievement is skipped this
///   pass and any prior record is carried forward untouched. One
///   missing metric never affects sibling achievements.
/// - Otherwise the state record (created lazily on first evaluation) is
///   advanced through the unlock transition step.
///
/// Records for achievements outside the active phase, or no longer in
/// the catalog, are carried forward verbatim: historical unlocks are
/// never deleted.
pub fn evaluate_user(
    catalog: &Catalog,
    active_phase: ReleasePhase,
    user_id: UserId,
    snapshot: &MetricSnapshot,
    previous: &UserStateMap,
    now: Timestamp,
) -> EvaluationOutcome {
    let mut states = previous.clone();
    let mut events = Vec::new();

    for definition in catalog.active(active_phase) {
        let Some(metric) = snapshot.get(&definition.id) else {
            if previous.contains_key(&definition.id) {
                tracing::debug!(
                    achievement_id = %definition.id,
                    user_id,
                    "Metric missing, carrying prior state forward"
                );
            }
            continue;
        };

        let raw = metric.as_f64();
        let ratio = completion_ratio(definition, metric);

        let state = states
            .entry(definition.id.clone())
            .or_insert_with(|| UserAchievementState::new(user_id, &definition.id));

        match apply_progress(state, definition, raw, ratio, now) {
            StepOutcome::Unlocked => {
                let unlocked_at = state.unlocked_at.unwrap_or(now);
                tracing::info!(
                    achievement_id = %definition.id,
                    user_id,
                    xp = definition.xp_reward(),
                    "Achievement unlocked"
                );
                events.push(UnlockEvent {
                    event_id: Uuid::new_v4(),
                    user_id,
                    achievement_id: definition.id.clone(),
                    tier: definition.tier,
                    xp_awarded: definition.xp_reward(),
                    unlocked_at,
                });
            }
            StepOutcome::ExpiredAtTarget => {
                tracing::info!(
                    achievement_id = %definition.id,
                    user_id,
                    "Target reached after expiry, unlock suppressed"
                );
            }
            StepOutcome::Progressed | StepOutcome::Unchanged => {}
        }
    }

    EvaluationOutcome { states, events }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
