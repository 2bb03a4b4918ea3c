//! Percent strings to fractions.

use keyrank_model::{CellValue, parse_numeric};

/// Parses a share cell's text.
///
/// `"3.4512%"` is read as percentage points and returned as a fraction. Text
/// without a `%` sign is returned as-is, matching what a workbook number cell
/// holds.
pub fn parse_percentage(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    match trimmed.strip_suffix('%') {
        Some(points) => parse_numeric(points).map(|points| points / 100.0),
        None => parse_numeric(trimmed),
    }
}

/// Converts a text percentage to a fraction.
///
/// Number cells are returned unchanged, so text and number cells holding the
/// same value agree.
pub fn percent_to_fraction(cell: &CellValue) -> CellValue {
    match cell {
        CellValue::Text(value) => CellValue::from_option(parse_percentage(value)),
        CellValue::Number(_) | CellValue::Missing => cell.clone(),
    }
}
