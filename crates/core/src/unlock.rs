//! Per-user achievement state and the unlock transition step (PRD-23).
//!
//! A [`UserAchievementState`] record exists per user × achievement pair,
//! created lazily on the first evaluation that has a metric for it.
//! Status only ever advances locked → in_progress → unlocked; once
//! unlocked, status and `unlocked_at` are frozen for the lifetime of the
//! record, even if the underlying metric later regresses.

use serde::{Deserialize, Serialize};

use crate::achievement::AchievementDefinition;
use crate::types::{Timestamp, UserId};

// ---------------------------------------------------------------------------
// AchievementStatus
// ---------------------------------------------------------------------------

/// Unlock status of one achievement for one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementStatus {
    Locked,
    InProgress,
    Unlocked,
}

impl AchievementStatus {
    /// String representation for storage and telemetry.
    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementStatus::Locked => "locked",
            AchievementStatus::InProgress => "in_progress",
            AchievementStatus::Unlocked => "unlocked",
        }
    }

    /// Parse from a string, defaulting to `Locked` for unknown values.
    pub fn from_str(s: &str) -> Self {
        match s {
            "unlocked" => AchievementStatus::Unlocked,
            "in_progress" => AchievementStatus::InProgress,
            _ => AchievementStatus::Locked,
        }
    }
}

// ---------------------------------------------------------------------------
// UserAchievementState
// ---------------------------------------------------------------------------

/// Mutable per-user progress record for one achievement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAchievementState {
    pub user_id: UserId,
    pub achievement_id: String,
    /// Latest observed raw metric value.
    pub current_value: f64,
    /// Derived progress, always in `0.0..=1.0`.
    pub completion_ratio: f64,
    pub status: AchievementStatus,
    /// Set exactly once, on the transition into `unlocked`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocked_at: Option<Timestamp>,
}

impl UserAchievementState {
    /// Fresh record for a user/achievement pair that has never been
    /// evaluated.
    pub fn new(user_id: UserId, achievement_id: impl Into<String>) -> Self {
        Self {
            user_id,
            achievement_id: achievement_id.into(),
            current_value: 0.0,
            completion_ratio: 0.0,
            status: AchievementStatus::Locked,
            unlocked_at: None,
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.status == AchievementStatus::Unlocked
    }
}

// ---------------------------------------------------------------------------
// Transition step
// ---------------------------------------------------------------------------

/// What a single evaluation step did to one state record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Transitioned into `unlocked`; exactly one unlock event is due.
    Unlocked,
    /// Progress was recorded without reaching the target.
    Progressed,
    /// Nothing changed, or the record was already unlocked.
    Unchanged,
    /// The target was reached after `expires_at`; the unlock was
    /// suppressed and only progress recorded.
    ExpiredAtTarget,
}

/// Apply one evaluation pass to a state record.
///
/// `ratio` is the freshly computed completion ratio and `raw` the raw
/// metric behind it; both are always recorded for display freshness.
/// Status moves strictly forward: an already-unlocked record never
/// changes status or `unlocked_at`, and a record in progress never
/// regresses to locked even if the ratio falls back to zero.
pub fn apply_progress(
    state: &mut UserAchievementState,
    definition: &AchievementDefinition,
    raw: f64,
    ratio: f64,
    now: Timestamp,
) -> StepOutcome {
    state.current_value = raw;

    if state.status == AchievementStatus::Unlocked {
        // Frozen: record the ratio for display, nothing else moves.
        state.completion_ratio = ratio;
        return StepOutcome::Unchanged;
    }

    state.completion_ratio = ratio;

    if ratio >= 1.0 {
        if definition.is_expired_at(now) {
            state.status = AchievementStatus::InProgress;
            return StepOutcome::ExpiredAtTarget;
        }
        state.status = AchievementStatus::Unlocked;
        state.unlocked_at = Some(now);
        return StepOutcome::Unlocked;
    }

    if ratio > 0.0 {
        state.status = AchievementStatus::InProgress;
        return StepOutcome::Progressed;
    }

    StepOutcome::Unchanged
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
