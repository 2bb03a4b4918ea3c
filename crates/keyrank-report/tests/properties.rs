// Property-based tests for serialized records.
// CI: 256 cases (default). Override with PROPTEST_CASES.

use keyrank_model::{CellValue, Row, Table};
use keyrank_report::{parse_records, render_json};
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

const COLUMNS: [&str; 3] = ["关键词", "月搜索量", "备注"];

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// Trimmed, non-empty text mixing ASCII and CJK.
fn arb_text() -> impl Strategy<Value = String> {
    r"[a-zA-Z0-9拖鞋女士冬季毛绒]{1,12}"
}

/// Integral, fractional, tiny and very large finite numbers.
fn arb_number() -> impl Strategy<Value = f64> {
    prop_oneof![
        (0i64..2_000_000).prop_map(|n| n as f64),
        -1.0e12..1.0e12f64,
        0.0..1.0f64,
        prop::num::f64::NORMAL,
    ]
}

fn arb_cell() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        2 => arb_text().prop_map(CellValue::Text),
        2 => arb_number().prop_map(CellValue::Number),
        1 => Just(CellValue::Missing),
    ]
}

fn arb_table() -> impl Strategy<Value = Table> {
    prop::collection::vec(prop::collection::vec(arb_cell(), COLUMNS.len()), 0..20).prop_map(
        |rows| {
            let mut table = Table::new(COLUMNS.iter().map(|c| (*c).to_string()).collect());
            for cells in rows {
                let mut row = Row::new();
                for (column, cell) in COLUMNS.iter().zip(cells) {
                    if !cell.is_missing() {
                        row.set(*column, cell);
                    }
                }
                table.push_row(row);
            }
            table
        },
    )
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config())]

    #[test]
    fn serialized_records_round_trip(table in arb_table()) {
        let json = render_json(&table, None).unwrap();
        prop_assert!(!json.contains("NaN"));

        let parsed = parse_records(&json).unwrap();
        prop_assert_eq!(parsed.height(), table.height());
        if !table.is_empty() {
            prop_assert_eq!(&parsed.columns, &table.columns);
        }
        for (source, back) in table.rows.iter().zip(&parsed.rows) {
            for column in COLUMNS {
                prop_assert_eq!(back.get(column), source.get(column), "column {}", column);
            }
        }
    }
}
