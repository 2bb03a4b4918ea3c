//! Record renderings: serialized JSON and native ordered records.

use keyrank_model::{CellValue, Row, Table};
use serde_json::{Map, Value};

use crate::error::{ReportError, Result};

/// One row as ordered `(column, value)` pairs.
pub type Record = Vec<(String, CellValue)>;

/// Native records in table order. Every record lists every column.
pub fn to_records(table: &Table, max_rows: Option<usize>) -> Vec<Record> {
    let limit = max_rows.unwrap_or(usize::MAX);
    table
        .rows
        .iter()
        .take(limit)
        .map(|row| {
            table
                .columns
                .iter()
                .map(|column| (column.clone(), row.get(column).clone()))
                .collect()
        })
        .collect()
}

/// JSON value of a cell. Missing is `null`; integral numbers are written
/// without a fraction.
pub fn cell_to_json(value: &CellValue) -> Value {
    match value {
        CellValue::Text(s) => Value::String(s.clone()),
        CellValue::Number(n) => {
            if n.fract() == 0.0 && n.abs() < 9.0e15 {
                Value::from(*n as i64)
            } else {
                serde_json::Number::from_f64(*n).map_or(Value::Null, Value::Number)
            }
        }
        CellValue::Missing => Value::Null,
    }
}

/// Records as a JSON array of objects with keys in column order.
pub fn records_value(table: &Table, max_rows: Option<usize>) -> Value {
    let limit = max_rows.unwrap_or(usize::MAX);
    Value::Array(
        table
            .rows
            .iter()
            .take(limit)
            .map(|row| {
                let object: Map<String, Value> = table
                    .columns
                    .iter()
                    .map(|column| (column.clone(), cell_to_json(row.get(column))))
                    .collect();
                Value::Object(object)
            })
            .collect(),
    )
}

/// Pretty-printed JSON records. Non-ASCII text is written as-is.
pub fn render_json(table: &Table, max_rows: Option<usize>) -> Result<String> {
    Ok(serde_json::to_string_pretty(&records_value(table, max_rows))?)
}

/// Parses serialized records back into a table.
///
/// Columns appear in first-seen key order. `null` becomes Missing; nested
/// values are kept as their JSON text.
pub fn parse_records(json: &str) -> Result<Table> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Array(items) = value else {
        return Err(ReportError::InvalidRecords(
            "expected a JSON array of objects".to_string(),
        ));
    };

    let mut table = Table::default();
    for (idx, item) in items.into_iter().enumerate() {
        let Value::Object(object) = item else {
            return Err(ReportError::InvalidRecords(format!(
                "record {idx} is not an object"
            )));
        };
        let mut row = Row::new();
        for (column, value) in object {
            table.ensure_column(&column);
            let cell = json_to_cell(value);
            if !cell.is_missing() {
                row.set(column, cell);
            }
        }
        table.push_row(row);
    }
    Ok(table)
}

fn json_to_cell(value: Value) -> CellValue {
    match value {
        Value::Null => CellValue::Missing,
        Value::String(s) => CellValue::from_text(&s),
        Value::Number(n) => CellValue::from_option(n.as_f64()),
        Value::Bool(b) => CellValue::Text(if b { "TRUE" } else { "FALSE" }.to_string()),
        other @ (Value::Array(_) | Value::Object(_)) => CellValue::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let mut table = Table::new(vec![
            "关键词".to_string(),
            "月搜索量".to_string(),
            "购买率".to_string(),
        ]);
        table.push_row(
            Row::new()
                .with("关键词", "拖鞋")
                .with("月搜索量", 10000.0)
                .with("购买率", 0.05),
        );
        table.push_row(Row::new().with("关键词", "boots"));
        table
    }

    #[test]
    fn test_json_keeps_column_order_and_unicode() {
        let json = render_json(&sample(), None).unwrap();
        let first = json.find("关键词").unwrap();
        let second = json.find("月搜索量").unwrap();
        let third = json.find("购买率").unwrap();
        assert!(first < second && second < third);
        assert!(json.contains("拖鞋"));
        assert!(json.contains("\"月搜索量\": 10000,"));
        assert!(json.contains("null"));
        assert!(!json.contains("NaN"));
    }

    #[test]
    fn test_round_trip_preserves_rows_and_values() {
        let table = sample();
        let parsed = parse_records(&render_json(&table, None).unwrap()).unwrap();
        assert_eq!(parsed.height(), table.height());
        assert_eq!(parsed.columns, table.columns);
        assert_eq!(parsed.rows[0].get("月搜索量"), &CellValue::Number(10000.0));
        assert_eq!(parsed.rows[0].get("购买率"), &CellValue::Number(0.05));
        assert!(parsed.rows[1].get("购买率").is_missing());
    }

    #[test]
    fn test_parse_rejects_non_records() {
        assert!(matches!(
            parse_records("{\"a\": 1}"),
            Err(ReportError::InvalidRecords(_))
        ));
        assert!(matches!(parse_records("[1, 2]"), Err(ReportError::InvalidRecords(_))));
        assert!(matches!(parse_records("not json"), Err(ReportError::Json(_))));
    }

    #[test]
    fn test_native_records_list_every_column() {
        let records = to_records(&sample(), Some(1));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].len(), 3);
        assert_eq!(records[0][0], ("关键词".to_string(), CellValue::Text("拖鞋".into())));
    }
}
