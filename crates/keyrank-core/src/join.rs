//! Left join of seller metrics against projected search frequency columns.

use std::collections::HashMap;
use std::fmt;

use keyrank_model::profile::frequency;
use keyrank_model::{KEYWORD, Row, Table};
use thiserror::Error;

/// Suffix added to a projected column whose name already exists on the left.
pub const RIGHT_SUFFIX: &str = "_y";

/// Which input of a join.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinSide {
    Left,
    Right,
}

impl fmt::Display for JoinSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JoinError {
    #[error("{side} table has no key column '{column}'")]
    MissingKeyColumn { side: JoinSide, column: String },
}

/// Left-joins `left` with `projection` columns of `right` on `key`.
///
/// Every left row appears at least once; a left row whose key matches several
/// right rows appears once per match. Missing keys never match. Projected
/// columns absent from `right` are filled with Missing.
pub fn left_join(
    left: &Table,
    right: &Table,
    key: &str,
    projection: &[&str],
) -> Result<Table, JoinError> {
    for (side, table) in [(JoinSide::Left, left), (JoinSide::Right, right)] {
        if !table.has_column(key) {
            return Err(JoinError::MissingKeyColumn {
                side,
                column: key.to_string(),
            });
        }
    }

    // (right column, output column)
    let projected: Vec<(&str, String)> = projection
        .iter()
        .copied()
        .filter(|column| *column != key)
        .map(|column| {
            let output = if left.has_column(column) {
                format!("{column}{RIGHT_SUFFIX}")
            } else {
                column.to_string()
            };
            (column, output)
        })
        .collect();

    let mut index: HashMap<String, Vec<usize>> = HashMap::new();
    for (idx, row) in right.rows.iter().enumerate() {
        if let Some(value) = join_key(row, key) {
            index.entry(value).or_default().push(idx);
        }
    }

    let mut columns = left.columns.clone();
    columns.extend(projected.iter().map(|(_, output)| output.clone()));
    let mut joined = Table::new(columns);

    let mut matched = 0usize;
    for row in &left.rows {
        let matches = join_key(row, key).and_then(|value| index.get(&value));
        match matches {
            Some(indices) => {
                matched += 1;
                for &idx in indices {
                    let mut out = row.clone();
                    for (source, output) in &projected {
                        let value = right.rows[idx].get(source);
                        if !value.is_missing() {
                            out.set(output.clone(), value.clone());
                        }
                    }
                    joined.push_row(out);
                }
            }
            None => joined.push_row(row.clone()),
        }
    }

    tracing::debug!(
        left_rows = left.height(),
        right_rows = right.height(),
        matched,
        joined_rows = joined.height(),
        "Joined tables"
    );
    Ok(joined)
}

/// Joins normalized seller metrics with the search frequency projection.
pub fn join_profiles(seller: &Table, frequency: &Table) -> Result<Table, JoinError> {
    left_join(seller, frequency, KEYWORD, frequency::JOIN_PROJECTION)
}

fn join_key(row: &Row, key: &str) -> Option<String> {
    let text = row.get(key).to_text()?;
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
