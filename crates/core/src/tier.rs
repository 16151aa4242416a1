//! Tier reward policy and presentation table (PRD-21).
//!
//! Maps each achievement tier to its XP reward, showcase weight, and the
//! styling keys consumed by the presentation layer. Pure lookup data.

use crate::achievement::AchievementTier;

// ---------------------------------------------------------------------------
// XP rewards
// ---------------------------------------------------------------------------

/// XP awarded for unlocking a bronze achievement.
pub const XP_BRONZE: i64 = 50;
/// XP awarded for unlocking a silver achievement.
pub const XP_SILVER: i64 = 150;
/// XP awarded for unlocking a gold achievement.
pub const XP_GOLD: i64 = 300;
/// XP awarded for unlocking a legendary achievement.
pub const XP_LEGENDARY: i64 = 500;

// ---------------------------------------------------------------------------
// Policy table
// ---------------------------------------------------------------------------

/// Presentation policy for one tier.
pub struct TierPolicy {
    pub tier: AchievementTier,
    pub xp_reward: i64,
    /// Sort weight on the achievements screen; higher tiers sort first.
    pub display_weight: u8,
    /// Gradient styling key for the badge background.
    pub gradient: &'static str,
    /// Border styling key for the badge frame.
    pub border: &'static str,
    /// Glow styling key applied to freshly unlocked badges.
    pub glow: &'static str,
}

/// The static tier policy table, matching the app's badge styling keys.
pub const TIER_POLICY: &[TierPolicy] = &[
    TierPolicy {
        tier: AchievementTier::Bronze,
        xp_reward: XP_BRONZE,
        display_weight: 1,
        gradient: "badge-gradient-bronze",
        border: "badge-border-bronze",
        glow: "badge-glow-bronze",
    },
    TierPolicy {
        tier: AchievementTier::Silver,
        xp_reward: XP_SILVER,
        display_weight: 2,
        gradient: "badge-gradient-silver",
        border: "badge-border-silver",
        glow: "badge-glow-silver",
    },
    TierPolicy {
        tier: AchievementTier::Gold,
        xp_reward: XP_GOLD,
        display_weight: 3,
        gradient: "badge-gradient-gold",
        border: "badge-border-gold",
        glow: "badge-glow-gold",
    },
    TierPolicy {
        tier: AchievementTier::Legendary,
        xp_reward: XP_LEGENDARY,
        display_weight: 4,
        gradient: "badge-gradient-legendary",
        border: "badge-border-legendary",
        glow: "badge-glow-legendary",
    },
];

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

/// XP reward for a tier per the static policy.
pub fn xp_for_tier(tier: AchievementTier) -> i64 {
    match tier {
        AchievementTier::Bronze => XP_BRONZE,
        AchievementTier::Silver => XP_SILVER,
        AchievementTier::Gold => XP_GOLD,
        AchievementTier::Legendary => XP_LEGENDARY,
    }
}

/// Showcase sort weight for a tier; higher sorts first.
pub fn display_weight(tier: AchievementTier) -> u8 {
    match tier {
        AchievementTier::Bronze => 1,
        AchievementTier::Silver => 2,
        AchievementTier::Gold => 3,
        AchievementTier::Legendary => 4,
    }
}

/// Full policy row for a tier.
pub fn policy_for_tier(tier: AchievementTier) -> &'static TierPolicy {
    // The table covers every tier variant, so the lookup cannot miss.
    TIER_POLICY
        .iter()
        .find(|p| p.tier == tier)
        .unwrap_or(&TIER_POLICY[0])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
