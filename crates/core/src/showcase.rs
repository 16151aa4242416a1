//! Achievement showcase composition (PRD-24).
//!
//! Selects the bounded set of achievements the home screen surfaces
//! prominently: one fresh unlock to celebrate, one nearly-complete
//! achievement to chase, and one locked teaser to entice. Each slot is
//! filled best-effort; the selection criteria relax rather than return
//! a silently wrong pick, and a user with nothing evaluable gets an
//! explicitly empty showcase.

use serde::Serialize;

use crate::achievement::{AchievementDefinition, AchievementTier, ReleasePhase, Visibility};
use crate::catalog::Catalog;
use crate::evaluation::UserStateMap;
use crate::tier;
use crate::types::Timestamp;
use crate::unlock::{AchievementStatus, UserAchievementState};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minimum completion ratio for the near-complete slot. Below this the
/// slot falls back to the highest-ratio in-progress achievement.
pub const NEAR_COMPLETE_THRESHOLD: f64 = 0.70;

/// How far back an unlock still counts as recent for the celebration
/// slot. Older unlocks are only shown when nothing newer exists.
pub const RECENT_UNLOCK_WINDOW_HOURS: i64 = 24;

// ---------------------------------------------------------------------------
// Showcase types
// ---------------------------------------------------------------------------

/// One achievement surfaced by the showcase.
#[derive(Debug, Clone, Serialize)]
pub struct ShowcaseEntry {
    pub achievement_id: String,
    pub name: String,
    pub tier: AchievementTier,
    /// Sort weight from the tier policy, for the presentation layer.
    pub display_weight: u8,
    pub completion_ratio: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlocked_at: Option<Timestamp>,
}

impl ShowcaseEntry {
    fn from_state(definition: &AchievementDefinition, state: &UserAchievementState) -> Self {
        Self {
            achievement_id: definition.id.clone(),
            name: definition.name.clone(),
            tier: definition.tier,
            display_weight: tier::display_weight(definition.tier),
            completion_ratio: state.completion_ratio,
            unlocked_at: state.unlocked_at,
        }
    }

    fn from_definition(definition: &AchievementDefinition) -> Self {
        Self {
            achievement_id: definition.id.clone(),
            name: definition.name.clone(),
            tier: definition.tier,
            display_weight: tier::display_weight(definition.tier),
            completion_ratio: 0.0,
            unlocked_at: None,
        }
    }
}

/// The bounded selection surfaced on the home screen.
///
/// Every slot is independently best-effort. All three are `None` only
/// when the user has zero evaluable achievements (empty catalog for the
/// active phase); presentation degrades gracefully via
/// [`is_empty`](Self::is_empty) instead of receiving a wrong selection.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Showcase {
    /// Most recent unlock, preferring the last 24 hours.
    pub recent_unlock: Option<ShowcaseEntry>,
    /// Highest-ratio in-progress achievement, preferring those at or
    /// above [`NEAR_COMPLETE_THRESHOLD`].
    pub near_complete: Option<ShowcaseEntry>,
    /// A locked, non-hidden achievement to entice completion.
    pub teaser: Option<ShowcaseEntry>,
}

impl Showcase {
    /// True when no slot could be filled.
    pub fn is_empty(&self) -> bool {
        self.recent_unlock.is_none() && self.near_complete.is_none() && self.teaser.is_none()
    }
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Compose the showcase from a user's current achievement state.
pub fn compose_showcase(
    catalog: &Catalog,
    active_phase: ReleasePhase,
    states: &UserStateMap,
    now: Timestamp,
) -> Showcase {
    let live: Vec<(&AchievementDefinition, Option<&UserAchievementState>)> = catalog
        .active(active_phase)
        .map(|d| (d, states.get(&d.id)))
        .collect();

    Showcase {
        recent_unlock: pick_recent_unlock(&live, now),
        near_complete: pick_near_complete(&live),
        teaser: pick_teaser(&live),
    }
}

/// The unlocked achievement with the most recent `unlocked_at` inside
/// the recency window, falling back to the most recent unlock overall
/// so the slot is never silently empty while unlocks exist.
fn pick_recent_unlock(
    live: &[(&AchievementDefinition, Option<&UserAchievementState>)],
    now: Timestamp,
) -> Option<ShowcaseEntry> {
    let unlocked: Vec<(&AchievementDefinition, &UserAchievementState, Timestamp)> = live
        .iter()
        .filter_map(|(d, s)| {
            let state = (*s)?;
            let at = state.unlocked_at?;
            state.is_unlocked().then_some((*d, state, at))
        })
        .collect();

    let window_start = now - chrono::Duration::hours(RECENT_UNLOCK_WINDOW_HOURS);
    let in_window = unlocked
        .iter()
        .filter(|(_, _, at)| *at >= window_start)
        .max_by_key(|(_, _, at)| *at);

    in_window
        .or_else(|| unlocked.iter().max_by_key(|(_, _, at)| *at))
        .map(|(d, s, _)| ShowcaseEntry::from_state(d, s))
}

/// The highest-ratio in-progress achievement at or above the threshold,
/// relaxed to the highest-ratio in-progress achievement when none
/// qualifies.
fn pick_near_complete(
    live: &[(&AchievementDefinition, Option<&UserAchievementState>)],
) -> Option<ShowcaseEntry> {
    let in_progress: Vec<(&AchievementDefinition, &UserAchievementState)> = live
        .iter()
        .filter_map(|(d, s)| {
            let state = (*s)?;
            (state.status == AchievementStatus::InProgress).then_some((*d, state))
        })
        .collect();

    let qualifying = in_progress
        .iter()
        .filter(|(_, s)| s.completion_ratio >= NEAR_COMPLETE_THRESHOLD)
        .max_by(|a, b| a.1.completion_ratio.total_cmp(&b.1.completion_ratio));

    qualifying
        .or_else(|| {
            in_progress
                .iter()
                .max_by(|a, b| a.1.completion_ratio.total_cmp(&b.1.completion_ratio))
        })
        .map(|(d, s)| ShowcaseEntry::from_state(d, s))
}

/// A locked, non-hidden achievement, preferring the most attainable
/// tier so the teaser invites action rather than intimidates.
fn pick_teaser(
    live: &[(&AchievementDefinition, Option<&UserAchievementState>)],
) -> Option<ShowcaseEntry> {
    live.iter()
        .filter(|(d, s)| {
            let locked = match s {
                Some(state) => state.status == AchievementStatus::Locked,
                // No state record yet means never progressed: locked.
                None => true,
            };
            locked && d.visibility != Visibility::Hidden
        })
        .min_by_key(|(d, _)| (d.tier, d.id.as_str()))
        .map(|(d, s)| match s {
            Some(state) => ShowcaseEntry::from_state(d, state),
            None => ShowcaseEntry::from_definition(d),
        })
}

// ---------------------------------------------------------------------------
// XP summary
// ---------------------------------------------------------------------------

/// Total XP earned across a user's unlocked achievements.
///
/// Counts every unlocked record with a definition still in the catalog,
/// regardless of phase gating: XP earned while a phase was live is kept.
pub fn xp_total(catalog: &Catalog, states: &UserStateMap) -> i64 {
    states
        .values()
        .filter(|s| s.is_unlocked())
        .filter_map(|s| catalog.get(&s.achievement_id))
        .map(|d| d.xp_reward())
        .sum()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievement::{
        AchievementCategory, AchievementTier, ProgressType,
    };
    use chrono::{Duration, Utc};

    fn definition(id: &str, tier: AchievementTier, visibility: Visibility) -> AchievementDefinition {
        AchievementDefinition {
            id: id.to_string(),
            name: format!("Achievement {id}"),
            description: "Test achievement".to_string(),
            category: AchievementCategory::Milestone,
            tier,
            progress_type: ProgressType::Count,
            target_value: 10.0,
            visibility,
            phase: ReleasePhase::Mvp,
            expires_at: None,
            xp_override: None,
        }
    }

    fn state(id: &str, status: AchievementStatus, ratio: f64) -> UserAchievementState {
        UserAchievementState {
            user_id: 1,
            achievement_id: id.to_string(),
            current_value: ratio * 10.0,
            completion_ratio: ratio,
            status,
            unlocked_at: None,
        }
    }

    fn unlocked(id: &str, at: Timestamp) -> UserAchievementState {
        let mut s = state(id, AchievementStatus::Unlocked, 1.0);
        s.unlocked_at = Some(at);
        s
    }

    fn states(records: Vec<UserAchievementState>) -> UserStateMap {
        records
            .into_iter()
            .map(|s| (s.achievement_id.clone(), s))
            .collect()
    }

    // -- full composition -----------------------------------------------------

    #[test]
    fn all_three_slots_fill_when_available() {
        let now = Utc::now();
        let catalog = Catalog::load(vec![
            definition("done_recently", AchievementTier::Silver, Visibility::Visible),
            definition("nearly_there", AchievementTier::Gold, Visibility::Visible),
            definition("not_started", AchievementTier::Bronze, Visibility::Visible),
        ])
        .expect("load");
        let states = states(vec![
            unlocked("done_recently", now - Duration::hours(2)),
            state("nearly_there", AchievementStatus::InProgress, 0.85),
        ]);

        let showcase = compose_showcase(&catalog, ReleasePhase::Mvp, &states, now);

        assert_eq!(
            showcase.recent_unlock.expect("unlock slot").achievement_id,
            "done_recently"
        );
        assert_eq!(
            showcase.near_complete.expect("near slot").achievement_id,
            "nearly_there"
        );
        assert_eq!(
            showcase.teaser.expect("teaser slot").achievement_id,
            "not_started"
        );
    }

    // -- recent unlock --------------------------------------------------------

    #[test]
    fn recent_unlock_prefers_window_then_recency() {
        let now = Utc::now();
        let catalog = Catalog::load(vec![
            definition("old_unlock", AchievementTier::Bronze, Visibility::Visible),
            definition("fresh_unlock", AchievementTier::Bronze, Visibility::Visible),
        ])
        .expect("load");
        let states = states(vec![
            unlocked("old_unlock", now - Duration::days(10)),
            unlocked("fresh_unlock", now - Duration::hours(3)),
        ]);

        let showcase = compose_showcase(&catalog, ReleasePhase::Mvp, &states, now);
        assert_eq!(
            showcase.recent_unlock.expect("slot").achievement_id,
            "fresh_unlock"
        );
    }

    #[test]
    fn stale_unlock_still_shown_when_nothing_newer() {
        let now = Utc::now();
        let catalog = Catalog::load(vec![definition(
            "old_unlock",
            AchievementTier::Bronze,
            Visibility::Visible,
        )])
        .expect("load");
        let states = states(vec![unlocked("old_unlock", now - Duration::days(30))]);

        let showcase = compose_showcase(&catalog, ReleasePhase::Mvp, &states, now);
        assert_eq!(
            showcase.recent_unlock.expect("fallback").achievement_id,
            "old_unlock"
        );
    }

    // -- near complete --------------------------------------------------------

    #[test]
    fn near_complete_picks_highest_above_threshold() {
        let catalog = Catalog::load(vec![
            definition("at_threshold", AchievementTier::Bronze, Visibility::Visible),
            definition("almost_done", AchievementTier::Bronze, Visibility::Visible),
        ])
        .expect("load");
        let states = states(vec![
            state("at_threshold", AchievementStatus::InProgress, 0.70),
            state("almost_done", AchievementStatus::InProgress, 0.95),
        ]);

        let showcase = compose_showcase(&catalog, ReleasePhase::Mvp, &states, Utc::now());
        assert_eq!(
            showcase.near_complete.expect("slot").achievement_id,
            "almost_done"
        );
    }

    #[test]
    fn near_complete_relaxes_below_threshold() {
        let catalog = Catalog::load(vec![
            definition("barely_started", AchievementTier::Bronze, Visibility::Visible),
            definition("halfway", AchievementTier::Bronze, Visibility::Visible),
        ])
        .expect("load");
        let states = states(vec![
            state("barely_started", AchievementStatus::InProgress, 0.10),
            state("halfway", AchievementStatus::InProgress, 0.50),
        ]);

        // Nothing reaches 0.70; the slot relaxes to the best in progress.
        let showcase = compose_showcase(&catalog, ReleasePhase::Mvp, &states, Utc::now());
        assert_eq!(showcase.near_complete.expect("slot").achievement_id, "halfway");
    }

    #[test]
    fn near_complete_empty_without_in_progress() {
        let catalog = Catalog::load(vec![definition(
            "not_started",
            AchievementTier::Bronze,
            Visibility::Visible,
        )])
        .expect("load");

        let showcase =
            compose_showcase(&catalog, ReleasePhase::Mvp, &UserStateMap::new(), Utc::now());
        assert!(showcase.near_complete.is_none());
    }

    // -- teaser ---------------------------------------------------------------

    #[test]
    fn teaser_prefers_attainable_tier() {
        let catalog = Catalog::load(vec![
            definition("legendary_goal", AchievementTier::Legendary, Visibility::Visible),
            definition("bronze_goal", AchievementTier::Bronze, Visibility::Visible),
            definition("silver_goal", AchievementTier::Silver, Visibility::Visible),
        ])
        .expect("load");

        let showcase =
            compose_showcase(&catalog, ReleasePhase::Mvp, &UserStateMap::new(), Utc::now());
        assert_eq!(showcase.teaser.expect("slot").achievement_id, "bronze_goal");
    }

    #[test]
    fn teaser_never_reveals_hidden_achievements() {
        let catalog = Catalog::load(vec![
            definition("surprise", AchievementTier::Bronze, Visibility::Hidden),
            definition("listed_goal", AchievementTier::Gold, Visibility::Locked),
        ])
        .expect("load");

        let showcase =
            compose_showcase(&catalog, ReleasePhase::Mvp, &UserStateMap::new(), Utc::now());
        assert_eq!(showcase.teaser.expect("slot").achievement_id, "listed_goal");
    }

    #[test]
    fn teaser_skips_achievements_already_in_progress() {
        let catalog = Catalog::load(vec![
            definition("underway", AchievementTier::Bronze, Visibility::Visible),
            definition("untouched", AchievementTier::Gold, Visibility::Visible),
        ])
        .expect("load");
        let states = states(vec![state(
            "underway",
            AchievementStatus::InProgress,
            0.30,
        )]);

        let showcase = compose_showcase(&catalog, ReleasePhase::Mvp, &states, Utc::now());
        assert_eq!(showcase.teaser.expect("slot").achievement_id, "untouched");
    }

    // -- empty case -----------------------------------------------------------

    #[test]
    fn empty_catalog_yields_explicit_empty_showcase() {
        let catalog = Catalog::load(Vec::new()).expect("load");
        let showcase =
            compose_showcase(&catalog, ReleasePhase::Mvp, &UserStateMap::new(), Utc::now());
        assert!(showcase.is_empty());
    }

    #[test]
    fn phase_gating_applies_to_the_showcase() {
        let mut gated = definition("later_goal", AchievementTier::Bronze, Visibility::Visible);
        gated.phase = ReleasePhase::Phase2;
        let catalog = Catalog::load(vec![gated]).expect("load");

        let showcase =
            compose_showcase(&catalog, ReleasePhase::Mvp, &UserStateMap::new(), Utc::now());
        assert!(showcase.is_empty());
    }

    // -- xp_total -------------------------------------------------------------

    #[test]
    fn xp_total_sums_unlocked_only() {
        let now = Utc::now();
        let catalog = Catalog::load(vec![
            definition("bronze_done", AchievementTier::Bronze, Visibility::Visible),
            definition("gold_done", AchievementTier::Gold, Visibility::Visible),
            definition("underway", AchievementTier::Legendary, Visibility::Visible),
        ])
        .expect("load");
        let states = states(vec![
            unlocked("bronze_done", now),
            unlocked("gold_done", now),
            state("underway", AchievementStatus::InProgress, 0.9),
        ]);

        assert_eq!(xp_total(&catalog, &states), 50 + 300);
    }

    #[test]
    fn xp_total_zero_for_new_user() {
        let catalog = Catalog::load(Vec::new()).expect("load");
        assert_eq!(xp_total(&catalog, &UserStateMap::new()), 0);
    }
}
