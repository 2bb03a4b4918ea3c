//! Schema profile detection from header names.
//!
//! Detection is a subset test of each profile's required columns against the
//! header set. Cell values are never inspected.

use keyrank_model::{FormatProfile, Table};

/// Classifies a header set. Seller metrics are checked before search frequency.
pub fn detect_profile<S: AsRef<str>>(columns: &[S]) -> FormatProfile {
    FormatProfile::KNOWN
        .into_iter()
        .find(|profile| missing_columns(*profile, columns).is_empty())
        .unwrap_or(FormatProfile::Unknown)
}

/// Classifies a loaded table by its header.
pub fn detect_table_profile(table: &Table) -> FormatProfile {
    detect_profile(&table.columns)
}

/// Required columns of `profile` that are absent from `columns`.
pub fn missing_columns<S: AsRef<str>>(profile: FormatProfile, columns: &[S]) -> Vec<&'static str> {
    profile
        .required_columns()
        .iter()
        .copied()
        .filter(|required| !columns.iter().any(|c| c.as_ref() == *required))
        .collect()
}
