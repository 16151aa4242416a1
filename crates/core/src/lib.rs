//! Tipjar achievement engine domain logic.
//!
//! This crate holds the achievement progress and unlock engine
//! (PRD-21 through PRD-24) with no I/O and no internal dependencies:
//!
//! - [`catalog::Catalog`] — the validated, immutable definition set.
//! - [`tier`] — the static tier reward and presentation policy.
//! - [`progress`] — raw metric → completion ratio evaluation.
//! - [`unlock`] — per-user state records and the unlock transition step.
//! - [`evaluation`] — the whole-user batch pass producing a fresh state
//!   map plus unlock events.
//! - [`showcase`] — the bounded home-screen selection.
//! - [`seed`] — the built-in default catalog.
//!
//! Persistence, metric retrieval, and notification delivery are
//! collaborator seams owned by `tipjar-pipeline`.

pub mod achievement;
pub mod catalog;
pub mod error;
pub mod evaluation;
pub mod metrics;
pub mod progress;
pub mod seed;
pub mod showcase;
pub mod tier;
pub mod types;
pub mod unlock;

pub use achievement::{
    AchievementCategory, AchievementDefinition, AchievementTier, ProgressType, ReleasePhase,
    Visibility,
};
pub use catalog::Catalog;
pub use error::CoreError;
pub use evaluation::{evaluate_user, EvaluationOutcome, UnlockEvent, UserStateMap};
pub use metrics::{MetricSnapshot, MetricValue};
pub use showcase::{compose_showcase, xp_total, Showcase, ShowcaseEntry};
pub use unlock::{AchievementStatus, UserAchievementState};
