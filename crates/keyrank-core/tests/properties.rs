// Property-based tests for scoring and selection.
// CI: 256 cases (default). Override with PROPTEST_CASES.

use keyrank_core::{score_keywords, select_top};
use keyrank_model::{Row, ScoreWeights, Table};
use proptest::prelude::*;

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

fn arb_metric() -> impl Strategy<Value = Option<f64>> {
    prop::option::of(-1_000.0f64..1_000_000.0)
}

/// Joined table with mostly positive metrics, some negative or missing.
fn arb_joined() -> impl Strategy<Value = Table> {
    prop::collection::vec(
        (arb_metric(), arb_metric(), prop::option::of(0.0f64..1.0), arb_metric()),
        0..60,
    )
    .prop_map(|rows| {
        let mut table = Table::new(
            ["关键词", "月搜索量", "月购买量", "购买率", "周搜索量"]
                .iter()
                .map(|c| (*c).to_string())
                .collect(),
        );
        for (idx, (monthly, purchases, rate, weekly)) in rows.into_iter().enumerate() {
            table.push_row(
                Row::new()
                    .with("关键词", format!("kw{idx}"))
                    .with("月搜索量", monthly)
                    .with("月购买量", purchases)
                    .with("购买率", rate)
                    .with("周搜索量", weekly),
            );
        }
        table
    })
}

proptest! {
    #![proptest_config(config())]

    #[test]
    fn scores_lie_in_unit_interval(table in arb_joined()) {
        for keyword in score_keywords(&table, &ScoreWeights::default()) {
            prop_assert!((0.0..=1.0 + 1e-9).contains(&keyword.score), "score {}", keyword.score);
        }
    }

    #[test]
    fn selection_is_sorted_and_sized(table in arb_joined(), n in 1usize..80) {
        let ranked = score_keywords(&table, &ScoreWeights::default());
        let selected = select_top(ranked, n);

        prop_assert_eq!(selected.len(), n.min(table.height()));
        for pair in selected.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].row_index < pair[1].row_index, "ties keep table order");
            }
        }
    }

    #[test]
    fn scoring_is_deterministic(table in arb_joined()) {
        let weights = ScoreWeights::default();
        prop_assert_eq!(score_keywords(&table, &weights), score_keywords(&table, &weights));
    }
}
