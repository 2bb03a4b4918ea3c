//! Per-column descriptive statistics.

use keyrank_model::{CellValue, Table};

/// Summary statistics of one numeric column. Missing cells are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStats {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; `None` with fewer than two values.
    pub std: Option<f64>,
    pub min: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub max: f64,
}

impl ColumnStats {
    /// Statistic labels in display order.
    pub const LABELS: [&'static str; 8] =
        ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

    /// Values in the order of [`ColumnStats::LABELS`].
    pub fn values(&self) -> [Option<f64>; 8] {
        [
            Some(self.count as f64),
            Some(self.mean),
            self.std,
            Some(self.min),
            Some(self.p25),
            Some(self.p50),
            Some(self.p75),
            Some(self.max),
        ]
    }
}

/// Columns holding at least one number and no text.
pub fn numeric_columns(table: &Table) -> Vec<&str> {
    table
        .columns
        .iter()
        .filter(|column| {
            let mut any_number = false;
            for cell in table.column_values(column) {
                match cell {
                    CellValue::Text(_) => return false,
                    CellValue::Number(_) => any_number = true,
                    CellValue::Missing => {}
                }
            }
            any_number
        })
        .map(String::as_str)
        .collect()
}

/// Statistics for every numeric column, in column order.
pub fn describe(table: &Table) -> Vec<ColumnStats> {
    numeric_columns(table)
        .into_iter()
        .filter_map(|column| {
            let values: Vec<f64> = table
                .column_values(column)
                .filter_map(CellValue::as_number)
                .collect();
            column_stats(column, values)
        })
        .collect()
}

fn column_stats(column: &str, mut values: Vec<f64>) -> Option<ColumnStats> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;
    let std = (count > 1).then(|| {
        let variance =
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
        variance.sqrt()
    });

    Some(ColumnStats {
        column: column.to_string(),
        count,
        mean,
        std,
        min: values[0],
        p25: quantile(&values, 0.25),
        p50: quantile(&values, 0.50),
        p75: quantile(&values, 0.75),
        max: values[count - 1],
    })
}

/// Linear-interpolated quantile of sorted, non-empty values.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let weight = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * weight
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyrank_model::Row;

    fn table() -> Table {
        let mut table = Table::new(vec!["kw".to_string(), "v".to_string()]);
        for (kw, v) in [
            ("a", Some(10000.0)),
            ("b", Some(8000.0)),
            ("c", None),
            ("d", Some(5000.0)),
            ("e", Some(3000.0)),
        ] {
            table.push_row(Row::new().with("kw", kw).with("v", v));
        }
        table
    }

    #[test]
    fn test_numeric_columns_excludes_text() {
        assert_eq!(numeric_columns(&table()), vec!["v"]);
    }

    #[test]
    fn test_describe_matches_interpolated_quartiles() {
        let stats = describe(&table());
        assert_eq!(stats.len(), 1);
        let v = &stats[0];
        assert_eq!(v.count, 4);
        assert!((v.mean - 6500.0).abs() < 1e-9);
        assert_eq!(v.min, 3000.0);
        assert_eq!(v.max, 10000.0);
        assert!((v.p25 - 4500.0).abs() < 1e-9);
        assert!((v.p50 - 6500.0).abs() < 1e-9);
        assert!((v.p75 - 8500.0).abs() < 1e-9);
        let std = v.std.unwrap();
        assert!((std - 3109.126351029605).abs() < 1e-6);
    }

    #[test]
    fn test_single_value_has_no_std() {
        let stats = column_stats("x", vec![4.0]).unwrap();
        assert_eq!(stats.std, None);
        assert_eq!(stats.p75, 4.0);
    }
}
