//! Built-in achievement catalog (PRD-21).
//!
//! The default definition set shipped with the app, used when no
//! catalog config file is provided. Mirrors the live catalog config:
//! one entry per achievement across all six categories and all three
//! release phases.

use chrono::TimeZone;

use crate::achievement::{
    AchievementCategory as Cat, AchievementDefinition, AchievementTier as Tier,
    ProgressType as Kind, ReleasePhase as Phase, Visibility as Vis,
};
use crate::types::Timestamp;

fn entry(
    id: &str,
    name: &str,
    description: &str,
    category: Cat,
    tier: Tier,
    progress_type: Kind,
    target_value: f64,
    visibility: Vis,
    phase: Phase,
) -> AchievementDefinition {
    AchievementDefinition {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category,
        tier,
        progress_type,
        target_value,
        visibility,
        phase,
        expires_at: None,
        xp_override: None,
    }
}

/// Last second of a UTC day, for seasonal expiry windows.
fn day_end(year: i32, month: u32, day: u32) -> Option<Timestamp> {
    chrono::Utc
        .with_ymd_and_hms(year, month, day, 23, 59, 59)
        .single()
}

/// The default achievement catalog of the app.
pub fn default_catalog() -> Vec<AchievementDefinition> {
    let mut holiday_hustle = entry(
        "holiday_hustle",
        "Holiday Hustle",
        "Earn $1,000 in tips during the holiday season",
        Cat::Seasonal,
        Tier::Gold,
        Kind::Amount,
        1_000.0,
        Vis::Visible,
        Phase::Phase1,
    );
    holiday_hustle.expires_at = day_end(2026, 12, 31);

    let mut new_year_kickoff = entry(
        "new_year_kickoff",
        "New Year Kickoff",
        "Log a shift on New Year's Day",
        Cat::Seasonal,
        Tier::Silver,
        Kind::Condition,
        1.0,
        Vis::Hidden,
        Phase::Phase2,
    );
    new_year_kickoff.expires_at = day_end(2027, 1, 31);

    vec![
        // Milestones
        entry(
            "first_shift_logged",
            "First Shift",
            "Log your first shift",
            Cat::Milestone,
            Tier::Bronze,
            Kind::Count,
            1.0,
            Vis::Visible,
            Phase::Mvp,
        ),
        entry(
            "ten_shifts_logged",
            "Regular",
            "Log 10 shifts",
            Cat::Milestone,
            Tier::Silver,
            Kind::Count,
            10.0,
            Vis::Visible,
            Phase::Mvp,
        ),
        entry(
            "fifty_shifts_logged",
            "Veteran",
            "Log 50 shifts",
            Cat::Milestone,
            Tier::Gold,
            Kind::Count,
            50.0,
            Vis::Visible,
            Phase::Phase1,
        ),
        // Earnings
        entry(
            "first_hundred_earned",
            "First $100",
            "Earn your first $100 in tips",
            Cat::Earnings,
            Tier::Bronze,
            Kind::Amount,
            100.0,
            Vis::Visible,
            Phase::Mvp,
        ),
        entry(
            "first_thousand_earned",
            "Four Figures",
            "Earn $1,000 in lifetime tips",
            Cat::Earnings,
            Tier::Silver,
            Kind::Amount,
            1_000.0,
            Vis::Visible,
            Phase::Mvp,
        ),
        entry(
            "five_k_club",
            "$5K Club",
            "Earn $5,000 in lifetime tips",
            Cat::Earnings,
            Tier::Gold,
            Kind::Amount,
            5_000.0,
            Vis::Visible,
            Phase::Phase1,
        ),
        entry(
            "tip_titan",
            "Tip Titan",
            "Earn $25,000 in lifetime tips",
            Cat::Earnings,
            Tier::Legendary,
            Kind::Amount,
            25_000.0,
            Vis::Locked,
            Phase::Phase1,
        ),
        // Consistency
        entry(
            "three_day_streak",
            "Warming Up",
            "Log earnings three days in a row",
            Cat::Consistency,
            Tier::Bronze,
            Kind::Streak,
            3.0,
            Vis::Visible,
            Phase::Mvp,
        ),
        entry(
            "week_streak",
            "Full Week",
            "Log earnings seven days in a row",
            Cat::Consistency,
            Tier::Silver,
            Kind::Streak,
            7.0,
            Vis::Visible,
            Phase::Mvp,
        ),
        entry(
            "month_streak",
            "Iron Habit",
            "Log earnings thirty days in a row",
            Cat::Consistency,
            Tier::Gold,
            Kind::Streak,
            30.0,
            Vis::Locked,
            Phase::Phase1,
        ),
        // Skill
        entry(
            "goal_getter",
            "Goal Getter",
            "Hit 100% of your weekly earnings goal",
            Cat::Skill,
            Tier::Silver,
            Kind::Percentage,
            100.0,
            Vis::Visible,
            Phase::Mvp,
        ),
        entry(
            "savings_habit",
            "Saver",
            "Reach a 20% savings rate for a month",
            Cat::Skill,
            Tier::Gold,
            Kind::Ratio,
            1.0,
            Vis::Visible,
            Phase::Phase1,
        ),
        entry(
            "steady_earner",
            "Steady Hands",
            "Keep your tip consistency index at its target",
            Cat::Skill,
            Tier::Bronze,
            Kind::Ratio,
            1.0,
            Vis::Visible,
            Phase::Phase1,
        ),
        // Mood
        entry(
            "good_vibes",
            "Good Vibes",
            "Log a positive mood after a shift",
            Cat::Mood,
            Tier::Bronze,
            Kind::Condition,
            1.0,
            Vis::Visible,
            Phase::Mvp,
        ),
        entry(
            "mood_historian",
            "Mood Historian",
            "Track your mood for 14 shifts",
            Cat::Mood,
            Tier::Silver,
            Kind::Count,
            14.0,
            Vis::Hidden,
            Phase::Phase1,
        ),
        // Seasonal
        holiday_hustle,
        new_year_kickoff,
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
