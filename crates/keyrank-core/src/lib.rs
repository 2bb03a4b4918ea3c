//! Keyword ranking core.
//!
//! Joins normalized seller metrics with search frequency data, scores each
//! keyword with a weighted composite of five metrics, selects the top N and
//! assembles the input bundle for content generation.
//!
//! Every stage is a pure function over [`keyrank_model::Table`] values;
//! [`run_pipeline`] chains them after loading both exports from disk.

pub mod aggregate;
pub mod error;
pub mod join;
pub mod pipeline;
pub mod score;
pub mod select;

pub use aggregate::{
    COMPETITOR_TITLE_COUNT, MAX_COMPETITOR_ASINS, build_bundle, collect_asins,
    competitor_titles, five_points,
};
pub use error::{ErrorKind, PipelineError, Result};
pub use join::{JoinError, JoinSide, RIGHT_SUFFIX, join_profiles, left_join};
pub use pipeline::{PipelineOutput, rank_loaded, run_pipeline};
pub use score::{MetricMaxima, SCORE_COLUMN, score_keywords, scored_rows};
pub use select::select_top;
