//! Integrity scoring: trade → person → company
//!
//! # Scores
//! - **trade**: `max(0, 100 - Σ penalty)` over every suspicious filing pair
//! - **person**: mean of trade scores, rounded; 100 with no trades
//! - **company**: mean of person scores, rounded; 100 with no persons
//!
//! Penalties and scores are summed in ascending order so permuting trades or
//! filings yields bit-identical output. Totals and means are snapped to 1e-9
//! before rounding so half-point ties round up as exact decimals would.

use super::config::ScoringConfig;
use super::correlator::{Correlation, TemporalCorrelator};
use super::detector::{SuspicionDetector, SuspicionPattern};
use super::penalty::{snap, PenaltyFunction};
use super::report::{
    CompanyReport, CompanyStanding, ExclusionStats, PersonReport, SuspiciousFinding, TradeReport,
};
use super::types::{transaction_code_label, CompanyBatch, FilingPrediction, Person, Trade, TradeDirection};
use rayon::prelude::*;

pub const PERFECT_SCORE: f64 = 100.0;

pub struct IntegrityScorer {
    correlator: TemporalCorrelator,
    detector: SuspicionDetector,
    penalty: PenaltyFunction,
}

impl IntegrityScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            correlator: TemporalCorrelator::new(config.window_days),
            detector: SuspicionDetector::new(),
            penalty: PenaltyFunction::new(config),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(ScoringConfig::default())
    }

    /// Every suspicious finding for `trade`, plus counts of pairs left out
    pub fn findings_for_trade<'a>(
        &self,
        trade: &'a Trade,
        filings: &'a [FilingPrediction],
    ) -> (Vec<SuspiciousFinding<'a>>, ExclusionStats) {
        let mut findings = Vec::new();
        let mut excluded = ExclusionStats::default();

        for filing in filings {
            let gap = match self.correlator.correlate(trade, filing) {
                Correlation::InWindow(gap) => gap,
                Correlation::OutOfWindow(_) => {
                    excluded.out_of_window_pairs += 1;
                    continue;
                }
                Correlation::Uncorrelatable(err) => {
                    log::debug!(
                        "Skipping pair (trade {:?}, filing {:?}): {}",
                        trade.date,
                        filing.filing_date,
                        err
                    );
                    excluded.malformed_pairs += 1;
                    continue;
                }
            };

            let Some(pattern) = self.detector.classify(filing.impact, trade.direction) else {
                continue;
            };

            let penalty = self.penalty.penalty(filing.confidence, gap);
            let reason = describe_finding(trade, filing, pattern, gap);

            log::debug!("Finding: {} (penalty {:.2})", reason, penalty);

            findings.push(SuspiciousFinding {
                trade,
                filing,
                pattern,
                days_before_filing: gap,
                penalty,
                reason,
            });
        }

        (findings, excluded)
    }

    pub fn evaluate_trade<'a>(
        &self,
        trade: &'a Trade,
        filings: &'a [FilingPrediction],
    ) -> TradeReport<'a> {
        let (findings, excluded) = self.findings_for_trade(trade, filings);

        let total_penalty = snap(sorted_sum(findings.iter().map(|f| f.penalty)));
        let score = snap(PERFECT_SCORE - total_penalty).max(0.0);

        TradeReport {
            trade,
            score,
            total_penalty,
            findings,
            excluded,
        }
    }

    pub fn trade_score(&self, trade: &Trade, filings: &[FilingPrediction]) -> f64 {
        self.evaluate_trade(trade, filings).score
    }

    pub fn evaluate_person<'a>(
        &self,
        person: &'a Person,
        filings: &'a [FilingPrediction],
    ) -> PersonReport<'a> {
        let trades: Vec<TradeReport<'a>> = person
            .trades
            .iter()
            .map(|trade| self.evaluate_trade(trade, filings))
            .collect();

        let score = rounded_mean(trades.iter().map(|t| t.score)).unwrap_or(PERFECT_SCORE);
        let report = PersonReport::new(person, score, trades);

        let suspicious = report.suspicious_trade_count();
        if suspicious > 0 {
            log::info!(
                "Insider {} has {} suspicious trade(s) with total penalty of {:.1}. Integrity score: {}",
                person.name,
                suspicious,
                report.total_penalty(),
                score
            );
        }

        report
    }

    pub fn person_score(&self, person: &Person, filings: &[FilingPrediction]) -> f64 {
        self.evaluate_person(person, filings).score
    }

    pub fn company_score(&self, persons: &[Person], filings: &[FilingPrediction]) -> f64 {
        company_score_from(
            persons
                .par_iter()
                .map(|person| Some(self.person_score(person, filings)))
                .collect::<Vec<_>>(),
        )
    }

    /// Full drill-down for one company. Persons are scored in parallel; output keeps input order.
    pub fn evaluate_company<'a>(&self, batch: &'a CompanyBatch) -> CompanyReport<'a> {
        let persons: Vec<PersonReport<'a>> = batch
            .persons
            .par_iter()
            .map(|person| self.evaluate_person(person, &batch.filings))
            .collect();

        let score = company_score_from(persons.iter().map(|p| Some(p.score)));

        let mut excluded = ExclusionStats::default();
        for person in &persons {
            excluded.merge(person.excluded);
        }

        if excluded.malformed_pairs > 0 {
            log::warn!(
                "{}: {} trade/filing pair(s) excluded for malformed dates",
                batch.company,
                excluded.malformed_pairs
            );
        }

        CompanyReport {
            company: &batch.company,
            score,
            standing: CompanyStanding::from_score(score),
            filings_considered: batch.filings.len(),
            persons,
            excluded,
        }
    }
}

impl Default for IntegrityScorer {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Company score from per-person scores.
///
/// `None` entries are left out of the denominator rather than counted as zero.
pub fn company_score_from<I>(person_scores: I) -> f64
where
    I: IntoIterator<Item = Option<f64>>,
{
    rounded_mean(person_scores.into_iter().flatten()).unwrap_or(PERFECT_SCORE)
}

fn sorted_sum(values: impl Iterator<Item = f64>) -> f64 {
    let mut values: Vec<f64> = values.collect();
    values.sort_by(f64::total_cmp);
    values.iter().sum()
}

fn rounded_mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let values: Vec<f64> = values.collect();
    if values.is_empty() {
        return None;
    }

    let count = values.len() as f64;
    // Snap before rounding so an exact .5 mean always rounds up
    Some(snap(sorted_sum(values.into_iter()) / count).round())
}

fn describe_finding(
    trade: &Trade,
    filing: &FilingPrediction,
    pattern: SuspicionPattern,
    gap_days: i64,
) -> String {
    let action = match trade.direction {
        TradeDirection::Acquired => "Acquired",
        TradeDirection::Disposed => "Disposed of",
    };
    let when = match gap_days {
        0 => "on the same day as".to_string(),
        1 => "1 day before".to_string(),
        n => format!("{} days before", n),
    };

    format!(
        "{} {} shares of {} ({}) on {}, {} a {}-confidence {} filing dated {}: {}",
        action,
        trade.shares,
        trade.security,
        transaction_code_label(&trade.transaction_code),
        trade.date,
        when,
        filing.confidence.as_str(),
        filing.impact.as_str(),
        filing.filing_date,
        pattern.as_str()
    )
}
