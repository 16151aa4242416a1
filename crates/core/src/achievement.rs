//! Achievement definition model and validation (PRD-21).
//!
//! An [`AchievementDefinition`] is one immutable entry of the achievement
//! catalog: its unlock rule, threshold, reward metadata, and display
//! eligibility. Definitions are loaded once at startup and never mutated.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::tier;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum length of an achievement id slug.
const MAX_ID_LEN: usize = 64;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Grouping used by the achievements screen to section the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementCategory {
    Milestone,
    Earnings,
    Consistency,
    Skill,
    Mood,
    Seasonal,
}

impl AchievementCategory {
    /// String representation for storage and telemetry.
    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementCategory::Milestone => "milestone",
            AchievementCategory::Earnings => "earnings",
            AchievementCategory::Consistency => "consistency",
            AchievementCategory::Skill => "skill",
            AchievementCategory::Mood => "mood",
            AchievementCategory::Seasonal => "seasonal",
        }
    }
}

// ---------------------------------------------------------------------------
// Tier
// ---------------------------------------------------------------------------

/// Reward tier of an achievement.
///
/// Ordered from most to least attainable; the derived ordering is used
/// when the showcase prefers an attainable teaser over a legendary one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementTier {
    Bronze,
    Silver,
    Gold,
    Legendary,
}

impl AchievementTier {
    /// String representation for storage and telemetry.
    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementTier::Bronze => "bronze",
            AchievementTier::Silver => "silver",
            AchievementTier::Gold => "gold",
            AchievementTier::Legendary => "legendary",
        }
    }
}

// ---------------------------------------------------------------------------
// Progress type
// ---------------------------------------------------------------------------

/// How a raw activity metric maps onto a completion ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressType {
    /// Number of occurrences, normalised against `target_value`.
    Count,
    /// Monetary amount, normalised against `target_value`.
    Amount,
    /// Metric is already a 0..=100 percentage.
    Percentage,
    /// Consecutive-day streak length, normalised against `target_value`.
    Streak,
    /// Metric is pre-normalised to 0..=1 and passed through.
    Ratio,
    /// Boolean metric; no partial credit.
    Condition,
}

impl ProgressType {
    /// String representation for storage and telemetry.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressType::Count => "count",
            ProgressType::Amount => "amount",
            ProgressType::Percentage => "percentage",
            ProgressType::Streak => "streak",
            ProgressType::Ratio => "ratio",
            ProgressType::Condition => "condition",
        }
    }
}

// ---------------------------------------------------------------------------
// Visibility
// ---------------------------------------------------------------------------

/// Default display eligibility of a definition before any per-user state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Always listed, progress shown.
    Visible,
    /// Never shown until unlocked (surprise achievements).
    Hidden,
    /// Listed as a locked entry without progress detail.
    Locked,
}

// ---------------------------------------------------------------------------
// Release phase
// ---------------------------------------------------------------------------

/// Release-stage gate restricting which definitions are currently live.
///
/// Ordered: a deployment whose active phase is `Phase1` evaluates `Mvp`
/// and `Phase1` definitions and treats `Phase2` ones as non-existent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ReleasePhase {
    #[serde(rename = "mvp")]
    Mvp,
    #[serde(rename = "phase_1")]
    Phase1,
    #[serde(rename = "phase_2")]
    Phase2,
}

impl ReleasePhase {
    /// String representation for storage and telemetry.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleasePhase::Mvp => "mvp",
            ReleasePhase::Phase1 => "phase_1",
            ReleasePhase::Phase2 => "phase_2",
        }
    }

    /// Parse from a string, defaulting to `Mvp` for unknown values.
    pub fn from_str(s: &str) -> Self {
        match s {
            "phase_2" => ReleasePhase::Phase2,
            "phase_1" => ReleasePhase::Phase1,
            _ => ReleasePhase::Mvp,
        }
    }
}

// ---------------------------------------------------------------------------
// AchievementDefinition
// ---------------------------------------------------------------------------

/// One immutable achievement catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementDefinition {
    /// Stable slug, unique across the catalog (e.g. `"first_hundred_earned"`).
    pub id: String,
    /// Display name shown on the achievements screen.
    pub name: String,
    /// Display copy describing how to earn the achievement.
    pub description: String,
    pub category: AchievementCategory,
    pub tier: AchievementTier,
    pub progress_type: ProgressType,
    /// Threshold that constitutes completion. Must be positive.
    pub target_value: f64,
    pub visibility: Visibility,
    pub phase: ReleasePhase,
    /// After this instant the achievement can no longer be newly
    /// unlocked. Existing unlocks are retained.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<Timestamp>,
    /// Overrides the tier policy XP reward when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xp_override: Option<i64>,
}

impl AchievementDefinition {
    /// XP awarded on unlock: the override when present, otherwise the
    /// tier policy value.
    pub fn xp_reward(&self) -> i64 {
        self.xp_override.unwrap_or_else(|| tier::xp_for_tier(self.tier))
    }

    /// Whether the achievement can no longer be newly unlocked at `now`.
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        match self.expires_at {
            Some(expiry) => now > expiry,
            None => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a single definition.
///
/// Rules:
/// - `id` must be a non-empty slug of at most `MAX_ID_LEN` lowercase
///   alphanumeric or underscore characters.
/// - `name` must not be empty.
/// - `target_value` must be a finite positive number.
/// - The resolved XP reward must not be negative.
pub fn validate_definition(definition: &AchievementDefinition) -> Result<(), CoreError> {
    let id = &definition.id;
    if id.is_empty() {
        return Err(CoreError::InvalidDefinition(
            "Achievement id must not be empty".to_string(),
        ));
    }
    if id.len() > MAX_ID_LEN {
        return Err(CoreError::InvalidDefinition(format!(
            "Achievement id '{id}' exceeds {MAX_ID_LEN} characters"
        )));
    }
    if !id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        return Err(CoreError::InvalidDefinition(format!(
            "Achievement id '{id}' may only contain lowercase alphanumeric or underscore characters"
        )));
    }
    if definition.name.trim().is_empty() {
        return Err(CoreError::InvalidDefinition(format!(
            "Achievement '{id}' must have a non-empty name"
        )));
    }
    if !definition.target_value.is_finite() || definition.target_value <= 0.0 {
        return Err(CoreError::InvalidDefinition(format!(
            "Achievement '{id}' must have a positive target_value, got {}",
            definition.target_value
        )));
    }
    if definition.xp_reward() < 0 {
        return Err(CoreError::InvalidDefinition(format!(
            "Achievement '{id}' must not have a negative XP reward"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
