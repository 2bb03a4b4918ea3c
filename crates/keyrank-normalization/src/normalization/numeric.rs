//! Numeric coercion and ordering.

use std::cmp::Ordering;

use keyrank_model::CellValue;

/// Coerce-or-null: numbers pass through, text is parsed, failures become Missing.
pub fn coerce_numeric(cell: &CellValue) -> CellValue {
    CellValue::from_option(cell.coerce_f64())
}

/// Descending order on optional numbers with `None` last.
pub fn compare_descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_numeric() {
        assert_eq!(
            coerce_numeric(&CellValue::Text(" 1,234 ".into())),
            CellValue::Number(1234.0)
        );
        assert_eq!(coerce_numeric(&CellValue::Text("N/A".into())), CellValue::Missing);
        assert_eq!(coerce_numeric(&CellValue::Text("nan".into())), CellValue::Missing);
        assert_eq!(coerce_numeric(&CellValue::Number(0.05)), CellValue::Number(0.05));
        assert_eq!(coerce_numeric(&CellValue::Missing), CellValue::Missing);
    }

    #[test]
    fn test_compare_descending_missing_last() {
        let mut values = vec![Some(3.0), None, Some(10.0), Some(5.0), None];
        values.sort_by(|a, b| compare_descending(*a, *b));
        assert_eq!(values, vec![Some(10.0), Some(5.0), Some(3.0), None, None]);
    }
}
