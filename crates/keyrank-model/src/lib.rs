//! Data model for keyword ranking.
//!
//! - [`cell`]: tagged cell values and numeric coercion
//! - [`table`]: rows and tables shared by every pipeline stage
//! - [`profile`]: the two source schemas and their literal column names
//! - [`ranking`]: score weights and ranked keywords
//! - [`bundle`]: the input bundle handed to content generation
//! - [`options`]: pipeline configuration

pub mod bundle;
pub mod cell;
pub mod error;
pub mod options;
pub mod profile;
pub mod ranking;
pub mod table;

pub use bundle::{BundleMetadata, InputBundle, WordFrequency};
pub use cell::{CellValue, MISSING, format_numeric, parse_numeric};
pub use error::{ModelError, Result};
pub use options::{
    DEFAULT_COMPETITOR_BRANDS, DEFAULT_FEATURE_REQUIREMENTS, DEFAULT_TOP_N, OutputForm,
    PipelineOptions,
};
pub use profile::{FormatProfile, KEYWORD};
pub use ranking::{KeywordMetrics, RankedKeyword, ScoreMetric, ScoreWeights};
pub use table::{Row, Table};
