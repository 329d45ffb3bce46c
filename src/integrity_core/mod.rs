//! Integrity Core - Trade/Filing Suspicion Scoring Engine
//!
//! Correlates each insider trade with the company's later filings (already classified
//! for predicted market impact) and rolls penalties up into trade, person and company
//! integrity scores.
//!
//! # Architecture
//!
//! ```text
//! CompanyBatch (persons + trades, filing predictions)
//!     ↓
//! TemporalCorrelator (gap_days, 0..=30 day window)
//!     ↓
//! SuspicionDetector (STOCK_UP after buy, STOCK_DOWN after sale)
//!     ↓
//! PenaltyFunction (confidence base × distance multiplier)
//!     ↓
//! IntegrityScorer (trade → person → company, pure reductions)
//!     ↓
//! CompanyReport (scores, findings, exclusion counts)
//! ```
//!
//! Nothing here holds state between calls. Caching belongs to the caller.

pub mod batch;
pub mod config;
pub mod correlator;
pub mod detector;
pub mod penalty;
pub mod report;
pub mod scorer;
pub mod types;

pub use batch::BatchError;
pub use config::ScoringConfig;
pub use correlator::{parse_date, Correlation, CorrelationError, TemporalCorrelator};
pub use detector::{SuspicionDetector, SuspicionPattern};
pub use penalty::PenaltyFunction;
pub use report::{
    CompanyReport, CompanyStanding, ExclusionStats, IntegrityBand, PersonReport,
    SuspiciousFinding, TradeReport,
};
pub use scorer::{company_score_from, IntegrityScorer, PERFECT_SCORE};
pub use types::{
    transaction_code_label, CompanyBatch, Confidence, FilingPrediction, Impact, Person, Trade,
    TradeDirection, TradeKind,
};
