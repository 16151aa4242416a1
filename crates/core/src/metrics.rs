//! Raw activity metric types (PRD-22).
//!
//! The metrics source collaborator delivers one consistent
//! [`MetricSnapshot`] per user per evaluation pass: a map from
//! achievement id to the raw metric backing that achievement.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// MetricValue
// ---------------------------------------------------------------------------

/// A single raw metric sample.
///
/// Numeric for count/amount/percentage/streak/ratio achievements,
/// boolean for condition achievements. Inputs of the other kind are
/// coerced tolerantly: flags read as 0/1, numbers are true iff > 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Flag(bool),
    Number(f64),
}

impl MetricValue {
    /// Numeric view of the sample.
    pub fn as_f64(self) -> f64 {
        match self {
            MetricValue::Number(n) => n,
            MetricValue::Flag(true) => 1.0,
            MetricValue::Flag(false) => 0.0,
        }
    }

    /// Boolean view of the sample.
    pub fn as_flag(self) -> bool {
        match self {
            MetricValue::Flag(b) => b,
            MetricValue::Number(n) => n > 0.0,
        }
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        MetricValue::Number(value)
    }
}

impl From<bool> for MetricValue {
    fn from(value: bool) -> Self {
        MetricValue::Flag(value)
    }
}

// ---------------------------------------------------------------------------
// MetricSnapshot
// ---------------------------------------------------------------------------

/// One consistent set of raw metrics for a user.
///
/// All reads during a single evaluation pass come from one snapshot, so
/// no achievement can observe a metric value that changes mid-batch.
/// Achievements with no entry are skipped for that pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricSnapshot {
    values: BTreeMap<String, MetricValue>,
}

impl MetricSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the metric for one achievement id.
    pub fn set(&mut self, achievement_id: impl Into<String>, value: impl Into<MetricValue>) {
        self.values.insert(achievement_id.into(), value.into());
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, achievement_id: impl Into<String>, value: impl Into<MetricValue>) -> Self {
        self.set(achievement_id, value);
        self
    }

    /// The metric recorded for an achievement id, if any.
    pub fn get(&self, achievement_id: &str) -> Option<MetricValue> {
        self.values.get(achievement_id).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- MetricValue coercions ------------------------------------------------

    #[test]
    fn number_as_f64_is_identity() {
        assert_eq!(MetricValue::Number(42.5).as_f64(), 42.5);
    }

    #[test]
    fn flags_read_as_zero_or_one() {
        assert_eq!(MetricValue::Flag(true).as_f64(), 1.0);
        assert_eq!(MetricValue::Flag(false).as_f64(), 0.0);
    }

    #[test]
    fn positive_numbers_read_as_true() {
        assert!(MetricValue::Number(0.1).as_flag());
        assert!(!MetricValue::Number(0.0).as_flag());
        assert!(!MetricValue::Number(-3.0).as_flag());
    }

    #[test]
    fn metric_value_deserializes_untagged() {
        let number: MetricValue = serde_json::from_str("125.5").expect("number");
        assert_eq!(number, MetricValue::Number(125.5));

        let flag: MetricValue = serde_json::from_str("true").expect("flag");
        assert_eq!(flag, MetricValue::Flag(true));
    }

    // -- MetricSnapshot -------------------------------------------------------

    #[test]
    fn snapshot_get_returns_recorded_value() {
        let snapshot = MetricSnapshot::new()
            .with("first_hundred_earned", 45.0)
            .with("good_vibes", true);

        assert_eq!(
            snapshot.get("first_hundred_earned"),
            Some(MetricValue::Number(45.0))
        );
        assert_eq!(snapshot.get("good_vibes"), Some(MetricValue::Flag(true)));
        assert_eq!(snapshot.len(), 2);
    }

    #[test]
    fn snapshot_get_missing_is_none() {
        let snapshot = MetricSnapshot::new();
        assert!(snapshot.get("week_streak").is_none());
        assert!(snapshot.is_empty());
    }

    #[test]
    fn snapshot_set_overwrites() {
        let mut snapshot = MetricSnapshot::new();
        snapshot.set("week_streak", 3.0);
        snapshot.set("week_streak", 4.0);
        assert_eq!(snapshot.get("week_streak"), Some(MetricValue::Number(4.0)));
        assert_eq!(snapshot.len(), 1);
    }
}
