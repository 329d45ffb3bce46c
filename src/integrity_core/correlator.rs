//! Temporal correlation between a trade and a later filing

use super::types::{FilingPrediction, Trade};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrelationError {
    MalformedTradeDate,
    MalformedFilingDate,
}

impl std::fmt::Display for CorrelationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorrelationError::MalformedTradeDate => write!(f, "malformed trade date"),
            CorrelationError::MalformedFilingDate => write!(f, "malformed filing date"),
        }
    }
}

impl std::error::Error for CorrelationError {}

/// Outcome of placing one (trade, filing) pair on the timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correlation {
    InWindow(i64),
    OutOfWindow(i64),
    Uncorrelatable(CorrelationError),
}

/// Parse a disclosure date.
///
/// Accepts plain `YYYY-MM-DD`, RFC 3339 timestamps (normalised to UTC) and naive
/// `YYYY-MM-DDTHH:MM:SS` / `YYYY-MM-DD HH:MM:SS` timestamps. Date-only values are
/// taken as midnight.
pub fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

pub struct TemporalCorrelator {
    window_days: i64,
}

impl TemporalCorrelator {
    pub fn new(window_days: i64) -> Self {
        Self { window_days }
    }

    /// Signed whole days from trade to filing, floored.
    ///
    /// Negative when the filing predates the trade.
    pub fn gap_days(
        &self,
        trade: &Trade,
        filing: &FilingPrediction,
    ) -> Result<i64, CorrelationError> {
        let trade_at = parse_date(&trade.date).ok_or(CorrelationError::MalformedTradeDate)?;
        let filed_at =
            parse_date(&filing.filing_date).ok_or(CorrelationError::MalformedFilingDate)?;

        let seconds = (filed_at - trade_at).num_seconds();
        Ok(seconds.div_euclid(SECONDS_PER_DAY))
    }

    /// Both ends inclusive: `0 <= gap <= window_days`
    pub fn in_window(&self, gap_days: i64) -> bool {
        (0..=self.window_days).contains(&gap_days)
    }

    pub fn correlate(&self, trade: &Trade, filing: &FilingPrediction) -> Correlation {
        match self.gap_days(trade, filing) {
            Ok(gap) if self.in_window(gap) => Correlation::InWindow(gap),
            Ok(gap) => Correlation::OutOfWindow(gap),
            Err(err) => Correlation::Uncorrelatable(err),
        }
    }
}
