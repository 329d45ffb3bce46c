//! Derived scoring output: findings, per-level reports, display bands

use super::detector::SuspicionPattern;
use super::types::{FilingPrediction, Person, Trade};
use serde::Serialize;

/// A flagged (trade, filing) pair. Borrows both inputs; never outlives the batch.
#[derive(Debug, Clone, Serialize)]
pub struct SuspiciousFinding<'a> {
    #[serde(skip)]
    pub trade: &'a Trade,
    pub filing: &'a FilingPrediction,
    pub pattern: SuspicionPattern,
    pub days_before_filing: i64,
    pub penalty: f64,
    pub reason: String,
}

/// Pairs that did not take part in scoring, kept for auditability
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExclusionStats {
    /// Trade or filing date could not be parsed
    pub malformed_pairs: usize,
    /// Filing predates the trade or lands past the window
    pub out_of_window_pairs: usize,
}

impl ExclusionStats {
    pub fn merge(&mut self, other: ExclusionStats) {
        self.malformed_pairs += other.malformed_pairs;
        self.out_of_window_pairs += other.out_of_window_pairs;
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TradeReport<'a> {
    pub trade: &'a Trade,
    pub score: f64,
    pub total_penalty: f64,
    pub findings: Vec<SuspiciousFinding<'a>>,
    pub excluded: ExclusionStats,
}

impl TradeReport<'_> {
    pub fn is_suspicious(&self) -> bool {
        !self.findings.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PersonReport<'a> {
    pub name: &'a str,
    pub cik: &'a str,
    pub roles: &'a [String],
    pub score: f64,
    pub band: IntegrityBand,
    pub trades: Vec<TradeReport<'a>>,
    pub excluded: ExclusionStats,
}

impl<'a> PersonReport<'a> {
    pub fn new(person: &'a Person, score: f64, trades: Vec<TradeReport<'a>>) -> Self {
        let mut excluded = ExclusionStats::default();
        for trade in &trades {
            excluded.merge(trade.excluded);
        }

        Self {
            name: &person.name,
            cik: &person.cik,
            roles: &person.roles,
            score,
            band: IntegrityBand::from_score(score),
            trades,
            excluded,
        }
    }

    pub fn suspicious_trade_count(&self) -> usize {
        self.trades.iter().filter(|t| t.is_suspicious()).count()
    }

    pub fn total_penalty(&self) -> f64 {
        self.trades.iter().map(|t| t.total_penalty).sum()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyReport<'a> {
    pub company: &'a str,
    pub score: f64,
    pub standing: CompanyStanding,
    pub filings_considered: usize,
    pub persons: Vec<PersonReport<'a>>,
    pub excluded: ExclusionStats,
}

impl CompanyReport<'_> {
    pub fn finding_count(&self) -> usize {
        self.persons
            .iter()
            .flat_map(|p| p.trades.iter())
            .map(|t| t.findings.len())
            .sum()
    }
}

/// Insider-level display band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IntegrityBand {
    #[serde(rename = "HIGH_INTEGRITY")]
    High,
    #[serde(rename = "MEDIUM_INTEGRITY")]
    Medium,
    #[serde(rename = "LOW_INTEGRITY")]
    Low,
    #[serde(rename = "VERY_LOW_INTEGRITY")]
    VeryLow,
}

impl IntegrityBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            IntegrityBand::High
        } else if score >= 60.0 {
            IntegrityBand::Medium
        } else if score >= 40.0 {
            IntegrityBand::Low
        } else {
            IntegrityBand::VeryLow
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IntegrityBand::High => "High Integrity",
            IntegrityBand::Medium => "Medium Integrity",
            IntegrityBand::Low => "Low Integrity",
            IntegrityBand::VeryLow => "Very Low Integrity",
        }
    }
}

/// Company-level display band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CompanyStanding {
    #[serde(rename = "HIGH_INTEGRITY")]
    HighIntegrity,
    #[serde(rename = "MODERATE_SCRUTINY")]
    ModerateScrutiny,
    #[serde(rename = "HIGH_ANOMALY_RISK")]
    HighAnomalyRisk,
}

impl CompanyStanding {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            CompanyStanding::HighIntegrity
        } else if score >= 50.0 {
            CompanyStanding::ModerateScrutiny
        } else {
            CompanyStanding::HighAnomalyRisk
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompanyStanding::HighIntegrity => "High Integrity",
            CompanyStanding::ModerateScrutiny => "Moderate Scrutiny",
            CompanyStanding::HighAnomalyRisk => "High Anomaly Risk",
        }
    }
}
