//! Trade evaluation scenarios and properties across the whole crate

use std::io::Write;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::{
    Catalog, CatalogRow, DataError, EvaluatorConfig, LineItem, Selection, Team, TradeEvaluator,
    TradeSession, ValuationMode, Verdict, UNEVEN_ADJUSTMENT_LABEL,
};

const VALUE_TABLE: &str = "\
Name,POS,Team,Age,Trade Value,SF Trade Value
X,,,,50.0,60.0
Y,,,,80.0,90.0
Josh Allen,QB,BUF,29,72.3,118.6
Bijan Robinson,RB,ATL,23,95.1,93.4
2026 Mid 1st,,,,40.2,44.8
Z,,,,50.0,10.0
";

fn create_test_evaluator() -> TradeEvaluator {
    TradeEvaluator::new(Catalog::from_reader(VALUE_TABLE.as_bytes()).unwrap())
}

fn dec(value: &str) -> Decimal {
    value.parse().unwrap()
}

fn select(evaluator: &TradeEvaluator, labels: &[&str]) -> Selection {
    let mut selection = Selection::new();
    for label in labels {
        evaluator.add_asset(&mut selection, label);
    }
    selection
}

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn test_one_for_one_trade() {
        let evaluator = create_test_evaluator();
        let team_a = select(&evaluator, &["X"]);
        let team_b = select(&evaluator, &["Y"]);

        let summary = evaluator.evaluate(&team_a, &team_b, ValuationMode::SingleQB);

        assert_eq!(summary.team_a.total, Decimal::from(50));
        assert_eq!(summary.team_b.total, Decimal::from(80));
        assert_eq!(summary.verdict, Verdict::BHeavier { margin: Decimal::from(30) });
    }

    #[test]
    fn test_two_for_nothing_trade() {
        let evaluator = create_test_evaluator();
        let team_a = select(&evaluator, &["X", "Y"]);
        let team_b = Selection::new();

        let summary = evaluator.evaluate(&team_a, &team_b, ValuationMode::SingleQB);

        assert_eq!(summary.team_a.total, Decimal::from(130));
        assert_eq!(summary.team_b.total, Decimal::from(200));
        assert_eq!(
            summary.team_b.line_items,
            vec![LineItem::new(UNEVEN_ADJUSTMENT_LABEL, Decimal::from(200))]
        );
        assert_eq!(summary.verdict, Verdict::BHeavier { margin: Decimal::from(70) });
    }

    #[test]
    fn test_equal_totals_are_balanced() {
        let evaluator = create_test_evaluator();
        let team_a = select(&evaluator, &["X"]);
        let team_b = select(&evaluator, &["Z"]);

        let summary = evaluator.evaluate(&team_a, &team_b, ValuationMode::SingleQB);

        assert_eq!(summary.team_a.total, summary.team_b.total);
        assert_eq!(summary.verdict, Verdict::Balanced);
        assert_eq!(summary.verdict.margin(), Decimal::ZERO);
    }

    #[test]
    fn test_remove_from_empty_selection() {
        let evaluator = create_test_evaluator();
        let mut selection = Selection::new();

        assert!(!evaluator.remove_asset(&mut selection, "Not In Catalog"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_missing_value_column_fails_load() {
        let rows = vec![CatalogRow {
            name: Some("X".to_string()),
            value_1qb: Some("50".to_string()),
            value_superflex: None,
            ..Default::default()
        }];

        let result = TradeEvaluator::load_catalog(rows);
        assert!(matches!(result, Err(DataError::MissingColumn { .. })));
    }

    #[test]
    fn test_superflex_trade() {
        let evaluator = create_test_evaluator();
        let team_a = select(&evaluator, &["Josh Allen (BUF - QB - Age - 29)"]);
        let team_b = select(&evaluator, &["Bijan Robinson (ATL - RB - Age - 23)"]);

        let one_qb = evaluator.evaluate(&team_a, &team_b, ValuationMode::SingleQB);
        assert_eq!(one_qb.verdict, Verdict::BHeavier { margin: dec("22.8") });

        let superflex = evaluator.evaluate(&team_a, &team_b, ValuationMode::Superflex);
        assert_eq!(superflex.verdict, Verdict::AHeavier { margin: dec("25.2") });
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;

    const ALL_LABELS: [&str; 6] = [
        "X",
        "Y",
        "Josh Allen (BUF - QB - Age - 29)",
        "Bijan Robinson (ATL - RB - Age - 23)",
        "2026 Mid 1st",
        "Z",
    ];

    #[test]
    fn test_compute_total_is_additive() {
        let evaluator = create_test_evaluator();

        for split in 0..=ALL_LABELS.len() {
            let (left, right) = ALL_LABELS.split_at(split);
            let union = select(&evaluator, &ALL_LABELS);

            for mode in [ValuationMode::SingleQB, ValuationMode::Superflex] {
                let whole = evaluator.compute_total(&union, mode).total;
                let parts = evaluator.compute_total(&select(&evaluator, left), mode).total
                    + evaluator.compute_total(&select(&evaluator, right), mode).total;
                assert_eq!(whole, parts, "split at {split} in {mode}");
            }
        }
    }

    #[test]
    fn test_add_is_idempotent() {
        let evaluator = create_test_evaluator();
        let once = select(&evaluator, &["X", "2026 Mid 1st"]);
        let twice = select(&evaluator, &["X", "2026 Mid 1st", "X", "2026 Mid 1st"]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_remove_then_add_restores_total() {
        let evaluator = create_test_evaluator();
        let mut team_a = select(&evaluator, &["X", "Y"]);
        let team_b = select(&evaluator, &["Z"]);
        let before = evaluator.evaluate(&team_a, &team_b, ValuationMode::SingleQB);

        evaluator.remove_asset(&mut team_a, "Y");
        let during = evaluator.evaluate(&team_a, &team_b, ValuationMode::SingleQB);
        assert_ne!(during.team_a.total, before.team_a.total);

        evaluator.add_asset(&mut team_a, "Y");
        let after = evaluator.evaluate(&team_a, &team_b, ValuationMode::SingleQB);

        assert_eq!(after.team_a, before.team_a);
        assert_eq!(after.team_b, before.team_b);
        assert_eq!(after.verdict, before.verdict);
    }

    #[test]
    fn test_adjustment_applied_once_to_smaller_side() {
        let evaluator = create_test_evaluator();

        for a_count in 0..=3 {
            for b_count in 0..=3 {
                let team_a = select(&evaluator, &ALL_LABELS[..a_count]);
                let team_b = select(&evaluator, &ALL_LABELS[3..3 + b_count]);
                let summary = evaluator.evaluate(&team_a, &team_b, ValuationMode::SingleQB);

                let adjustments = |items: &[LineItem]| {
                    items.iter().filter(|item| item.label == UNEVEN_ADJUSTMENT_LABEL).count()
                };
                let a_adjustments = adjustments(summary.team_a.line_items.as_slice());
                let b_adjustments = adjustments(summary.team_b.line_items.as_slice());

                match a_count.cmp(&b_count) {
                    std::cmp::Ordering::Equal => assert_eq!(a_adjustments + b_adjustments, 0),
                    std::cmp::Ordering::Less => {
                        assert_eq!((a_adjustments, b_adjustments), (1, 0));
                        let expected = Decimal::from((b_count - a_count) * 100);
                        assert_eq!(summary.team_a.line_items.last().unwrap().value, expected);
                    }
                    std::cmp::Ordering::Greater => {
                        assert_eq!((a_adjustments, b_adjustments), (0, 1));
                    }
                }
            }
        }
    }

    #[test]
    fn test_compare_is_antisymmetric() {
        let totals = ["0", "0.1", "50", "130.0", "200", "333.3"].map(dec);
        for a in totals {
            for b in totals {
                let forward = TradeEvaluator::compare(a, b);
                let backward = TradeEvaluator::compare(b, a);
                assert_eq!(forward.swapped(), backward);
                assert_eq!(forward.margin(), backward.margin());
            }
        }
    }
}

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_session_from_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let catalog_path = dir.path().join("values.csv");
        std::fs::write(&catalog_path, VALUE_TABLE).unwrap();

        let config_path = dir.path().join("trade.toml");
        let mut config_file = std::fs::File::create(&config_path).unwrap();
        writeln!(
            config_file,
            "[data]\ncatalog_path = {:?}\n\n[valuation]\ndefault_mode = \"sf\"\n",
            catalog_path.display().to_string()
        )
        .unwrap();

        let config = EvaluatorConfig::from_file(&config_path).unwrap();
        let evaluator = Arc::new(TradeEvaluator::from_config(&config).unwrap());
        let mut session = TradeSession::new(evaluator, config.valuation.default_mode);

        session.add(Team::A, "X");
        session.add(Team::B, "Y");
        session.add(Team::B, "not a real asset");

        let summary = session.summary();
        assert_eq!(summary.mode, ValuationMode::Superflex);
        assert_eq!(summary.team_a.total, Decimal::from(60));
        assert_eq!(summary.team_b.total, Decimal::from(90));
        assert_eq!(summary.verdict, Verdict::BHeavier { margin: Decimal::from(30) });
    }

    #[test]
    fn test_summary_serializes_for_display() {
        let evaluator = Arc::new(create_test_evaluator());
        let mut session = TradeSession::new(evaluator, ValuationMode::SingleQB);
        session.add(Team::A, "X");
        session.add(Team::A, "Y");

        let json = session.summary().to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["mode"], "single_qb");
        assert_eq!(value["team_a"]["total"], 130.0);
        assert_eq!(value["team_b"]["line_items"][0]["label"], UNEVEN_ADJUSTMENT_LABEL);
        assert_eq!(value["verdict"]["outcome"], "b_heavier");
        assert_eq!(value["verdict"]["margin"], 70.0);
    }

    #[test]
    fn test_missing_catalog_file() {
        let mut config = EvaluatorConfig::default();
        config.data.catalog_path = "definitely/not/here.csv".into();
        assert!(TradeEvaluator::from_config(&config).is_err());
    }
}
