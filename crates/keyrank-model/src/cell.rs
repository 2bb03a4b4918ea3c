//! Typed cell values.
//!
//! Spreadsheet cells arrive as text, numbers or nothing at all. Every table in
//! the pipeline stores one of these three tags per cell; conversion between them
//! is always explicit.

use std::fmt;

/// A single cell in a [`Table`](crate::Table).
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Number(f64),
    #[default]
    Missing,
}

/// Shared Missing value handed out for absent columns.
pub static MISSING: CellValue = CellValue::Missing;

impl CellValue {
    /// Builds a cell from raw text, trimming it and mapping blanks to Missing.
    pub fn from_text(value: &str) -> Self {
        let trimmed = value.trim().trim_matches('\u{feff}');
        if trimmed.is_empty() {
            Self::Missing
        } else {
            Self::Text(trimmed.to_string())
        }
    }

    /// Builds a numeric cell; non-finite numbers become Missing.
    pub fn from_number(value: f64) -> Self {
        if value.is_finite() {
            Self::Number(value)
        } else {
            Self::Missing
        }
    }

    /// Builds a numeric cell from an optional value.
    pub fn from_option(value: Option<f64>) -> Self {
        value.map_or(Self::Missing, Self::from_number)
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Numeric view with coerce-or-null semantics: numbers pass through, text is
    /// parsed, anything unparsable is `None`.
    pub fn coerce_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(value) => parse_numeric(value),
            Self::Missing => None,
        }
    }

    /// Text view of the cell, or `None` when missing.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::Text(value) => Some(value.clone()),
            Self::Number(value) => Some(format_numeric(*value)),
            Self::Missing => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Number(value) => f.write_str(&format_numeric(*value)),
            Self::Missing => f.write_str("null"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::from_text(value)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::from_text(&value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::from_number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<Option<f64>> for CellValue {
    fn from(value: Option<f64>) -> Self {
        Self::from_option(value)
    }
}

/// Parses a numeric string.
///
/// Handles surrounding whitespace and thousands separators ("1,234,567").
/// Returns `None` for empty, unparsable or non-finite input; `nan` and `inf`
/// spellings are rejected so missing values never leak in as NaN.
pub fn parse_numeric(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let cleaned = trimmed
        .replace(',', "")
        .replace(' ', "")
        .replace('\u{a0}', "");

    let parsed: f64 = cleaned.parse().ok()?;
    parsed.is_finite().then_some(parsed)
}

/// Formats a float without trailing zeros after the decimal point.
///
/// Integer-valued floats like `40.0` are formatted as `"40"`.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    } else {
        s
    }
}
