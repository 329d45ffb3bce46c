//! Integration tests for the integrity scoring engine
//!
//! Tests verify end-to-end scoring over a full company batch:
//! - Reference scenarios (one-day gap, window edge, contrarian trade, person mean)
//! - Window boundaries on both sides
//! - Empty inputs at every level
//! - Output invariance under permutation of trades, filings and persons

#[cfg(test)]
mod integrity_scoring_tests {
    use insider_integrity::integrity_core::{
        CompanyBatch, CompanyStanding, Confidence, FilingPrediction, Impact, IntegrityScorer,
        Person, Trade, TradeDirection, TradeKind,
    };

    fn trade(date: &str, direction: TradeDirection) -> Trade {
        Trade {
            security: "Common Stock".to_string(),
            date: date.to_string(),
            transaction_code: match direction {
                TradeDirection::Acquired => "P".to_string(),
                TradeDirection::Disposed => "S".to_string(),
            },
            shares: 1_000,
            price_per_share: None,
            direction,
            shares_owned_after: 10_000,
            kind: TradeKind::NonDerivative,
            exercise_price: None,
            underlying_shares: None,
        }
    }

    fn filing(date: &str, impact: Impact, confidence: Confidence) -> FilingPrediction {
        FilingPrediction {
            filing_date: date.to_string(),
            url: format!("https://www.sec.gov/Archives/{}", date),
            impact,
            confidence,
            summary: String::new(),
        }
    }

    fn person(name: &str, trades: Vec<Trade>) -> Person {
        Person {
            name: name.to_string(),
            cik: format!("cik-{}", name),
            roles: vec!["Officer".to_string()],
            trades,
        }
    }

    fn sample_batch() -> CompanyBatch {
        CompanyBatch {
            company: "0000000001".to_string(),
            persons: vec![
                person(
                    "alpha",
                    vec![
                        trade("2024-01-01", TradeDirection::Acquired),
                        trade("2024-01-20", TradeDirection::Disposed),
                        trade("2024-03-05", TradeDirection::Acquired),
                    ],
                ),
                person(
                    "bravo",
                    vec![
                        trade("2024-02-01", TradeDirection::Disposed),
                        trade("2024-02-02", TradeDirection::Disposed),
                        trade("garbage", TradeDirection::Disposed),
                    ],
                ),
                person("charlie", vec![]),
                person("delta", vec![trade("2024-01-15", TradeDirection::Acquired)]),
            ],
            filings: vec![
                filing("2024-01-02", Impact::StockUp, Confidence::High),
                filing("2024-01-31", Impact::StockUp, Confidence::Moderate),
                filing("2024-02-03", Impact::StockDown, Confidence::High),
                filing("2024-02-20", Impact::StockDown, Confidence::Low),
                filing("2024-03-01", Impact::Neutral, Confidence::High),
                filing("2024/03/06", Impact::StockUp, Confidence::High),
                filing("2024-03-10", Impact::StockUp, Confidence::Unrecognized),
            ],
        }
    }

    fn company_scores(scorer: &IntegrityScorer, batch: &CompanyBatch) -> (f64, Vec<(String, f64)>) {
        let report = scorer.evaluate_company(batch);
        let mut persons: Vec<(String, f64)> = report
            .persons
            .iter()
            .map(|p| (p.cik.to_string(), p.score))
            .collect();
        persons.sort_by(|a, b| a.0.cmp(&b.0));
        (report.score, persons)
    }

    #[test]
    fn test_scenario_a_one_day_gap() {
        let scorer = IntegrityScorer::with_defaults();
        let t = trade("2024-01-01", TradeDirection::Acquired);
        let filings = vec![filing("2024-01-02", Impact::StockUp, Confidence::High)];

        let report = scorer.evaluate_trade(&t, &filings);
        assert_eq!(report.findings[0].days_before_filing, 1);
        assert_eq!(report.findings[0].penalty, 20.0);
        assert_eq!(report.score, 80.0);
    }

    #[test]
    fn test_scenario_b_window_edge() {
        let scorer = IntegrityScorer::with_defaults();
        let t = trade("2024-01-01", TradeDirection::Acquired);
        let filings = vec![filing("2024-01-31", Impact::StockUp, Confidence::High)];

        let report = scorer.evaluate_trade(&t, &filings);
        assert_eq!(report.findings[0].days_before_filing, 30);
        assert!((report.findings[0].penalty - 6.0).abs() < 1e-9);
        assert!((report.score - 94.0).abs() < 1e-9);
    }

    #[test]
    fn test_scenario_c_sale_before_good_news() {
        let scorer = IntegrityScorer::with_defaults();
        let t = trade("2024-01-01", TradeDirection::Disposed);
        let filings = vec![filing("2024-01-02", Impact::StockUp, Confidence::High)];

        assert_eq!(scorer.trade_score(&t, &filings), 100.0);
    }

    #[test]
    fn test_scenario_d_person_mean() {
        let scorer = IntegrityScorer::with_defaults();
        let filings = vec![filing("2024-01-02", Impact::StockUp, Confidence::High)];
        let p = person(
            "echo",
            vec![
                trade("2024-01-01", TradeDirection::Acquired),
                trade("2023-06-01", TradeDirection::Acquired),
            ],
        );

        assert_eq!(scorer.person_score(&p, &filings), 90.0);
    }

    #[test]
    fn test_window_boundaries() {
        let scorer = IntegrityScorer::with_defaults();
        let t = trade("2024-01-01", TradeDirection::Acquired);

        for (date, flagged) in [
            ("2024-01-01", true),  // gap 0
            ("2024-01-31", true),  // gap 30
            ("2024-02-01", false), // gap 31
            ("2023-12-31", false), // gap -1
        ] {
            let filings = vec![filing(date, Impact::StockUp, Confidence::High)];
            let report = scorer.evaluate_trade(&t, &filings);
            assert_eq!(report.is_suspicious(), flagged, "filing dated {}", date);
        }
    }

    #[test]
    fn test_filings_before_trade_never_flagged() {
        let scorer = IntegrityScorer::with_defaults();
        let t = trade("2024-06-15", TradeDirection::Disposed);
        let filings: Vec<FilingPrediction> = (1..=14)
            .map(|d| filing(&format!("2024-06-{:02}", d), Impact::StockDown, Confidence::High))
            .collect();

        let report = scorer.evaluate_trade(&t, &filings);
        assert!(report.findings.is_empty());
        assert_eq!(report.excluded.out_of_window_pairs, 14);
        assert_eq!(report.score, 100.0);
    }

    #[test]
    fn test_empty_inputs_score_perfect() {
        let scorer = IntegrityScorer::with_defaults();

        let t = trade("2024-01-01", TradeDirection::Acquired);
        assert_eq!(scorer.trade_score(&t, &[]), 100.0);

        let filings = vec![filing("2024-01-02", Impact::StockUp, Confidence::High)];
        assert_eq!(scorer.person_score(&person("idle", vec![]), &filings), 100.0);

        let empty = CompanyBatch {
            company: "empty".to_string(),
            persons: vec![],
            filings,
        };
        let report = scorer.evaluate_company(&empty);
        assert_eq!(report.score, 100.0);
        assert_eq!(report.standing, CompanyStanding::HighIntegrity);
    }

    #[test]
    fn test_full_batch() {
        let scorer = IntegrityScorer::with_defaults();
        let batch = sample_batch();

        let report = scorer.evaluate_company(&batch);

        // alpha: Jan 1 buy → Jan 2 High (gap 1, 20) + Jan 31 Moderate (gap 30, 4.5) = 75.5
        //        Jan 20 sale → Feb 3 High STOCK_DOWN at gap 14 (≈14.30) → ≈85.70
        //        Mar 5 buy → Mar 10 unrecognized confidence at gap 5, Low base (≈7.59) → ≈92.41
        //        mean ≈84.54
        assert_eq!(report.persons[0].score, 85.0);

        // bravo: Feb 1 sale → Feb 3 High (gap 2, 20) + Feb 20 Low (gap 19, ≈4.68) → ≈75.32
        //        Feb 2 sale → Feb 3 High (gap 1, 20) + Feb 20 Low (gap 18, ≈4.89) → ≈75.11
        //        garbage date → 100; mean ≈83.48
        assert_eq!(report.persons[1].score, 83.0);

        assert_eq!(report.persons[2].score, 100.0);

        // delta: Jan 15 buy → Jan 31 Moderate at gap 16 (≈9.94) → ≈90.06
        assert_eq!(report.persons[3].score, 90.0);

        // (85 + 83 + 100 + 90) / 4 = 89.5, rounds up
        assert_eq!(report.score, 90.0);

        // 7 filings against "garbage" plus the slash-dated filing against the other 6 trades
        assert_eq!(report.excluded.malformed_pairs, 7 + 6);
        assert_eq!(report.filings_considered, 7);
    }

    #[test]
    fn test_order_independence() {
        let scorer = IntegrityScorer::with_defaults();
        let batch = sample_batch();
        let baseline = company_scores(&scorer, &batch);

        let mut reversed = batch.clone();
        reversed.filings.reverse();
        reversed.persons.reverse();
        for p in reversed.persons.iter_mut() {
            p.trades.reverse();
        }
        assert_eq!(company_scores(&scorer, &reversed), baseline);

        let mut rotated = batch.clone();
        rotated.filings.rotate_left(3);
        rotated.persons.rotate_left(1);
        for p in rotated.persons.iter_mut() {
            let len = p.trades.len();
            if len > 1 {
                p.trades.rotate_left(len / 2);
            }
        }
        assert_eq!(company_scores(&scorer, &rotated), baseline);
    }

    #[test]
    fn test_trade_scores_bit_identical_under_filing_permutation() {
        let scorer = IntegrityScorer::with_defaults();
        let t = trade("2024-01-01", TradeDirection::Acquired);
        let mut filings: Vec<FilingPrediction> = [1, 7, 13, 22, 29]
            .iter()
            .map(|d| filing(&format!("2024-01-{:02}", d + 1), Impact::StockUp, Confidence::Moderate))
            .collect();

        let forward = scorer.trade_score(&t, &filings);
        filings.reverse();
        let backward = scorer.trade_score(&t, &filings);
        filings.swap(0, 3);
        let shuffled = scorer.trade_score(&t, &filings);

        assert_eq!(forward.to_bits(), backward.to_bits());
        assert_eq!(forward.to_bits(), shuffled.to_bits());
    }

    #[test]
    fn test_report_serializes() {
        let scorer = IntegrityScorer::with_defaults();
        let batch = sample_batch();
        let report = scorer.evaluate_company(&batch);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["company"], "0000000001");
        assert_eq!(json["persons"][0]["name"], "alpha");
        assert_eq!(
            json["persons"][0]["trades"][0]["findings"][0]["pattern"],
            "BOUGHT_BEFORE_GOOD_NEWS"
        );
        assert_eq!(
            json["persons"][0]["trades"][0]["findings"][0]["filing"]["impact"],
            "STOCK_UP"
        );
    }
}
