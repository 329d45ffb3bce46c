//! Confidence- and distance-weighted penalty for one suspicious pair

use super::config::ScoringConfig;
use super::types::Confidence;

pub struct PenaltyFunction {
    config: ScoringConfig,
}

impl PenaltyFunction {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(ScoringConfig::default())
    }

    pub fn base_penalty(&self, confidence: Confidence) -> f64 {
        match confidence {
            Confidence::High => self.config.high_penalty,
            Confidence::Moderate => self.config.moderate_penalty,
            Confidence::Low | Confidence::Unrecognized => self.config.low_penalty,
        }
    }

    /// Distance multiplier in `[min_multiplier, 1.0]`
    ///
    /// Full weight up to `full_penalty_days`, then linear decay reaching
    /// `min_multiplier` at `window_days`.
    pub fn distance_multiplier(&self, gap_days: i64) -> f64 {
        let full = self.config.full_penalty_days;
        let floor = self.config.min_multiplier;

        if gap_days <= full {
            return 1.0;
        }

        let span = self.config.window_days - full;
        if span <= 0 {
            return floor;
        }

        // Anchored at the far edge so gap == window_days lands on `floor` exactly
        let remaining = (self.config.window_days - gap_days) as f64 / span as f64;
        (floor + (1.0 - floor) * remaining).clamp(floor, 1.0)
    }

    /// Snapped to 1e-9 so sums of decayed penalties keep their exact .5 ties
    pub fn penalty(&self, confidence: Confidence, gap_days: i64) -> f64 {
        snap(self.base_penalty(confidence) * self.distance_multiplier(gap_days))
    }
}

/// Round to nine decimal places, clearing float noise from decimal arithmetic
pub fn snap(value: f64) -> f64 {
    (value * 1e9).round() / 1e9
}
