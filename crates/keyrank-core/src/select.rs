//! Top-N selection.

use keyrank_model::RankedKeyword;

/// Keeps the `n` highest-scoring keywords, highest first.
///
/// The sort is stable, so equal scores keep their table order. Fewer than `n`
/// keywords are returned as-is.
pub fn select_top(mut ranked: Vec<RankedKeyword>, n: usize) -> Vec<RankedKeyword> {
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(n);
    ranked
}
