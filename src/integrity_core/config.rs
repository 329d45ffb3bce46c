//! Scoring configuration from environment variables
//!
//! Every constant of the penalty model lives here so it can be tuned without a rebuild.

use std::env;

/// Tunable constants for window, decay and per-confidence base penalties
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    /// Last day after a trade on which a filing still counts (inclusive)
    pub window_days: i64,

    /// Filings up to this many days after the trade take the full base penalty
    pub full_penalty_days: i64,

    /// Multiplier reached at the far edge of the window
    pub min_multiplier: f64,

    pub high_penalty: f64,
    pub moderate_penalty: f64,

    /// Also applied to unrecognized confidence labels
    pub low_penalty: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            window_days: 30,
            full_penalty_days: 3,
            min_multiplier: 0.3,
            high_penalty: 20.0,
            moderate_penalty: 15.0,
            low_penalty: 8.0,
        }
    }
}

impl ScoringConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `INTEGRITY_WINDOW_DAYS` (default: 30)
    /// - `INTEGRITY_FULL_PENALTY_DAYS` (default: 3)
    /// - `INTEGRITY_MIN_MULTIPLIER` (default: 0.3)
    /// - `INTEGRITY_HIGH_PENALTY` (default: 20)
    /// - `INTEGRITY_MODERATE_PENALTY` (default: 15)
    /// - `INTEGRITY_LOW_PENALTY` (default: 8)
    ///
    /// Unparsable or out-of-range values fall back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            window_days: env::var("INTEGRITY_WINDOW_DAYS")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|v: &i64| *v >= 0)
                .unwrap_or(defaults.window_days),

            full_penalty_days: env::var("INTEGRITY_FULL_PENALTY_DAYS")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|v: &i64| *v >= 0)
                .unwrap_or(defaults.full_penalty_days),

            min_multiplier: env::var("INTEGRITY_MIN_MULTIPLIER")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|v: &f64| *v > 0.0 && *v <= 1.0)
                .unwrap_or(defaults.min_multiplier),

            high_penalty: positive_f64("INTEGRITY_HIGH_PENALTY").unwrap_or(defaults.high_penalty),

            moderate_penalty: positive_f64("INTEGRITY_MODERATE_PENALTY")
                .unwrap_or(defaults.moderate_penalty),

            low_penalty: positive_f64("INTEGRITY_LOW_PENALTY").unwrap_or(defaults.low_penalty),
        }
    }
}

fn positive_f64(key: &str) -> Option<f64> {
    env::var(key)
        .ok()
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
}
