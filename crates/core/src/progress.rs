//! Completion ratio evaluation (PRD-22).
//!
//! Maps a raw activity metric onto a normalised completion ratio for one
//! achievement definition. Pure functions; the target is validated
//! positive at catalog load, so evaluation never divides by zero.

use crate::achievement::{AchievementDefinition, ProgressType};
use crate::metrics::MetricValue;

/// Scale divisor for percentage-type metrics (raw values are 0..=100).
pub const PERCENTAGE_SCALE: f64 = 100.0;

/// Compute the completion ratio for one definition.
///
/// Always returns a value in `0.0..=1.0`:
/// - `count`, `amount`, `streak`: `raw / target_value`.
/// - `percentage`: `raw / 100`.
/// - `ratio`: pre-normalised input, passed through.
/// - `condition`: exactly `1.0` or `0.0`, no partial credit.
///
/// Negative and NaN raw values clamp to `0.0`; values past the target
/// clamp to `1.0`.
pub fn completion_ratio(definition: &AchievementDefinition, metric: MetricValue) -> f64 {
    let ratio = match definition.progress_type {
        ProgressType::Count | ProgressType::Amount | ProgressType::Streak => {
            metric.as_f64() / definition.target_value
        }
        ProgressType::Percentage => metric.as_f64() / PERCENTAGE_SCALE,
        ProgressType::Ratio => metric.as_f64(),
        ProgressType::Condition => {
            if metric.as_flag() {
                1.0
            } else {
                0.0
            }
        }
    };

    if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(0.0, 1.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
