//! Rendering of keyword tables for downstream consumers.
//!
//! Three output forms are supported:
//! - descriptive text: data summary, markdown table and numeric statistics
//! - serialized records: pretty JSON array of objects in column order
//! - native records: ordered `(column, value)` pairs
//!
//! Missing values are written as JSON `null` and as `null` in text.

mod error;
mod options;
mod records;
mod render;
mod stats;
mod text;

pub use error::{ReportError, Result};
pub use options::{DEFAULT_TEXT_ROWS, RenderOptions};
pub use records::{Record, cell_to_json, parse_records, records_value, render_json, to_records};
pub use render::{FileSection, Rendering, render, render_many};
pub use stats::{ColumnStats, describe, numeric_columns};
pub use text::{NULL_TOKEN, markdown_table, render_text};
