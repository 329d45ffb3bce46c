//! Suspicion detection for correlated (trade, filing) pairs
//!
//! The rule set is closed: only profit-motivated anticipatory trading is flagged.
//! Neutral filings, unrecognized impacts, and trades against the direction of the
//! news never match. Extending it is a model change, not a fix.

use super::types::{Impact, TradeDirection};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SuspicionPattern {
    #[serde(rename = "BOUGHT_BEFORE_GOOD_NEWS")]
    BoughtBeforeGoodNews,
    #[serde(rename = "SOLD_BEFORE_BAD_NEWS")]
    SoldBeforeBadNews,
}

impl SuspicionPattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuspicionPattern::BoughtBeforeGoodNews => "bought ahead of good news",
            SuspicionPattern::SoldBeforeBadNews => "sold ahead of bad news",
        }
    }
}

pub struct SuspicionDetector;

impl SuspicionDetector {
    pub fn new() -> Self {
        Self
    }

    /// Classify an in-window pair
    ///
    /// # Rules
    /// - **BOUGHT_BEFORE_GOOD_NEWS**: `STOCK_UP` filing after an acquisition
    /// - **SOLD_BEFORE_BAD_NEWS**: `STOCK_DOWN` filing after a disposal
    pub fn classify(&self, impact: Impact, direction: TradeDirection) -> Option<SuspicionPattern> {
        match (impact, direction) {
            (Impact::StockUp, TradeDirection::Acquired) => Some(SuspicionPattern::BoughtBeforeGoodNews),
            (Impact::StockDown, TradeDirection::Disposed) => Some(SuspicionPattern::SoldBeforeBadNews),
            _ => None,
        }
    }
}

impl Default for SuspicionDetector {
    fn default() -> Self {
        Self::new()
    }
}
