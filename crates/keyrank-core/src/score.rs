//! Composite relevance scoring.

use keyrank_model::profile::seller;
use keyrank_model::{
    CellValue, KEYWORD, KeywordMetrics, RankedKeyword, ScoreMetric, ScoreWeights, Table,
};

/// Column holding the composite score in rendered selections.
pub const SCORE_COLUMN: &str = "relevance_score";

/// Column maxima used to scale each metric into `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MetricMaxima {
    values: KeywordMetrics,
}

impl MetricMaxima {
    /// Maximum of each metric column; `None` when the column is absent or empty.
    pub fn from_table(table: &Table) -> Self {
        let mut values = KeywordMetrics::default();
        for metric in ScoreMetric::ALL {
            let max = table
                .column_values(metric.column())
                .filter_map(CellValue::coerce_f64)
                .reduce(f64::max);
            values.set(metric, max);
        }
        Self { values }
    }

    pub fn get(&self, metric: ScoreMetric) -> Option<f64> {
        self.values.get(metric)
    }

    /// `value / max` clamped to `[0, 1]`, or 0 when either is missing or the
    /// maximum is not positive.
    pub fn normalize(&self, metric: ScoreMetric, value: Option<f64>) -> f64 {
        match (value, self.get(metric)) {
            (Some(value), Some(max)) if max > 0.0 => (value / max).clamp(0.0, 1.0),
            _ => 0.0,
        }
    }
}

/// Scores every row of a joined table, in table order.
///
/// Values are read through numeric coercion, so unnormalized tables score the
/// same as normalized ones. Weekly volume counts in favour of a keyword.
pub fn score_keywords(table: &Table, weights: &ScoreWeights) -> Vec<RankedKeyword> {
    let _span = tracing::info_span!("score", rows = table.height()).entered();

    let maxima = MetricMaxima::from_table(table);
    let ranked: Vec<RankedKeyword> = table
        .rows
        .iter()
        .enumerate()
        .map(|(row_index, row)| {
            let mut metrics = KeywordMetrics::default();
            let mut score = 0.0;
            for metric in ScoreMetric::ALL {
                let value = row.get(metric.column()).coerce_f64();
                metrics.set(metric, value);
                score += weights.weight(metric) * maxima.normalize(metric, value);
            }
            RankedKeyword {
                keyword: row.get(KEYWORD).to_text().unwrap_or_default(),
                score,
                metrics,
                top_asins: row.get(seller::TOP_ASINS).to_text(),
                row_index,
            }
        })
        .collect();

    tracing::debug!(scored = ranked.len(), ?maxima, "Scored keywords");
    ranked
}

/// Rows of `table` for `ranked`, in ranking order, with the score appended.
pub fn scored_rows(table: &Table, ranked: &[RankedKeyword]) -> Table {
    let indices: Vec<usize> = ranked.iter().map(|keyword| keyword.row_index).collect();
    let mut selection = table.subset(&indices);
    selection.ensure_column(SCORE_COLUMN);
    for (row, keyword) in selection.rows.iter_mut().zip(ranked) {
        row.set(SCORE_COLUMN, CellValue::from_number(keyword.score));
    }
    selection
}
