//! Table normalization execution.

use keyrank_model::{CellValue, FormatProfile, Table};

use crate::error::{NormalizationError, Result};
use crate::inference::infer_normalization_rules;
use crate::normalization::{
    coerce_numeric, compare_descending, normalize_key, percent_to_fraction, trim_list,
};
use crate::types::{NormalizationPipeline, NormalizationRule, NormalizationType};

/// Execute a normalization pipeline on a table.
///
/// Returns a new table; the input is never modified. Rules whose column is
/// absent are skipped, except the key rule, which fails.
pub fn execute_normalization(source: &Table, pipeline: &NormalizationPipeline) -> Result<Table> {
    let _span = tracing::info_span!("normalize", profile = %pipeline.profile).entered();

    let mut table = source.clone();
    for rule in pipeline.rules_ordered() {
        execute_rule(&mut table, rule)?;
    }

    tracing::info!(
        rows_in = source.height(),
        rows_out = table.height(),
        rules = pipeline.len(),
        "Normalized table"
    );
    Ok(table)
}

/// Infers the rules for `profile` and executes them.
pub fn normalize_table(source: &Table, profile: FormatProfile) -> Result<Table> {
    let pipeline = infer_normalization_rules(profile, source);
    execute_normalization(source, &pipeline)
}

fn execute_rule(table: &mut Table, rule: &NormalizationRule) -> Result<()> {
    let column = rule.column.as_str();

    if !table.has_column(column) {
        if rule.transform_type == NormalizationType::KeyColumn {
            return Err(NormalizationError::MissingKeyColumn {
                column: column.to_string(),
            });
        }
        if rule.transform_type == NormalizationType::SortDescending {
            tracing::warn!(column, "Sort column absent; keeping input order");
        } else {
            tracing::debug!(
                column,
                rule = rule.transform_type.as_str(),
                "Column absent; rule skipped"
            );
        }
        return Ok(());
    }

    match rule.transform_type {
        NormalizationType::KeyColumn => execute_key(table, column),
        NormalizationType::NumericConversion => map_column(table, column, coerce_numeric),
        NormalizationType::PercentToFraction => map_column(table, column, percent_to_fraction),
        NormalizationType::TrimList => map_column(table, column, trim_list),
        NormalizationType::SortDescending => execute_sort(table, column),
    }

    tracing::debug!(column, rule = rule.transform_type.as_str(), "Applied rule");
    Ok(())
}

fn execute_key(table: &mut Table, column: &str) {
    let before = table.height();
    table.rows.retain_mut(|row| match normalize_key(row.get(column)) {
        Some(key) => {
            row.set(column, key.into());
            true
        }
        None => false,
    });

    let dropped = before - table.height();
    if dropped > 0 {
        tracing::debug!(column, dropped, "Dropped rows with empty key");
    }
}

fn map_column(table: &mut Table, column: &str, normalize: impl Fn(&CellValue) -> CellValue) {
    for row in &mut table.rows {
        let value = normalize(row.get(column));
        if value.is_missing() {
            row.cells.remove(column);
        } else {
            row.set(column, value);
        }
    }
}

fn execute_sort(table: &mut Table, column: &str) {
    // sort_by is stable: equal volumes keep their input order.
    table.rows.sort_by(|a, b| {
        compare_descending(a.get(column).coerce_f64(), b.get(column).coerce_f64())
    });
}
