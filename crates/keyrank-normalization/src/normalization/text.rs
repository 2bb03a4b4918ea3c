//! Key and identifier-list cleanup.

use keyrank_model::CellValue;

/// Trimmed key text, or `None` when the key is blank or missing.
pub fn normalize_key(cell: &CellValue) -> Option<String> {
    let text = cell.to_text()?;
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Keeps an identifier list as trimmed text without splitting it.
pub fn trim_list(cell: &CellValue) -> CellValue {
    match cell.to_text() {
        Some(text) => CellValue::from_text(&text),
        None => CellValue::Missing,
    }
}
