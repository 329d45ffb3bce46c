//! Integrity Scan Binary - Insider Trade / Filing Suspicion Scoring
//!
//! Scores one company's batch of insider trades against its classified filings and
//! prints the integrity report as JSON.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release --bin integrity_scan -- data/aapl_batch.json
//! cargo run --release --bin integrity_scan -- data/aapl_batch.json --summary
//! ```
//!
//! ## Environment Variables
//!
//! - INTEGRITY_BATCH_PATH - Batch JSON path when no argument is given
//! - INTEGRITY_WINDOW_DAYS - Days after a trade a filing still counts (default: 30)
//! - INTEGRITY_FULL_PENALTY_DAYS - Days with undiminished penalty (default: 3)
//! - INTEGRITY_MIN_MULTIPLIER - Distance multiplier at the window edge (default: 0.3)
//! - INTEGRITY_HIGH_PENALTY / INTEGRITY_MODERATE_PENALTY / INTEGRITY_LOW_PENALTY (default: 20 / 15 / 8)
//! - RUST_LOG - Logging level (optional, default: info)

use insider_integrity::integrity_core::{CompanyBatch, IntegrityScorer, ScoringConfig};
use serde::Serialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug)]
struct ScanArgs {
    batch_path: PathBuf,
    summary_only: bool,
}

impl ScanArgs {
    fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let args: Vec<String> = env::args().skip(1).collect();
        let summary_only = args.iter().any(|a| a == "--summary");

        let batch_path = args
            .iter()
            .find(|a| !a.starts_with("--"))
            .cloned()
            .or_else(|| env::var("INTEGRITY_BATCH_PATH").ok())
            .ok_or("no batch file given (pass a path or set INTEGRITY_BATCH_PATH)")?;

        Ok(Self {
            batch_path: batch_path.into(),
            summary_only,
        })
    }
}

#[derive(Serialize)]
struct PersonSummary<'a> {
    name: &'a str,
    cik: &'a str,
    score: f64,
    band: &'static str,
}

#[derive(Serialize)]
struct ScanSummary<'a> {
    company: &'a str,
    score: f64,
    standing: &'static str,
    people: Vec<PersonSummary<'a>>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    dotenv::dotenv().ok();

    let args = ScanArgs::from_env()?;
    let config = ScoringConfig::from_env();

    log::info!("🔎 Starting Integrity Scan");
    log::info!("   Batch: {}", args.batch_path.display());
    log::info!(
        "   Window: {} days (full penalty ≤ {} days, floor ×{})",
        config.window_days,
        config.full_penalty_days,
        config.min_multiplier
    );
    log::info!(
        "   Base penalties: High {} / Moderate {} / Low {}",
        config.high_penalty,
        config.moderate_penalty,
        config.low_penalty
    );

    let batch = CompanyBatch::load(&args.batch_path).map_err(|e| {
        log::error!("Failed to load batch {}: {}", args.batch_path.display(), e);
        e
    })?;

    log::info!(
        "📖 Loaded {}: {} insiders, {} trades, {} filings",
        batch.company,
        batch.persons.len(),
        batch.trade_count(),
        batch.filings.len()
    );

    let scorer = IntegrityScorer::new(config);
    let report = scorer.evaluate_company(&batch);

    log::info!(
        "✅ {} integrity score: {} ({}) - {} finding(s), {} pair(s) out of window, {} malformed",
        report.company,
        report.score,
        report.standing.label(),
        report.finding_count(),
        report.excluded.out_of_window_pairs,
        report.excluded.malformed_pairs
    );

    let output = if args.summary_only {
        let summary = ScanSummary {
            company: report.company,
            score: report.score,
            standing: report.standing.label(),
            people: report
                .persons
                .iter()
                .map(|p| PersonSummary {
                    name: p.name,
                    cik: p.cik,
                    score: p.score,
                    band: p.band.label(),
                })
                .collect(),
        };
        serde_json::to_string_pretty(&summary)?
    } else {
        serde_json::to_string_pretty(&report)?
    };

    println!("{}", output);
    Ok(())
}
