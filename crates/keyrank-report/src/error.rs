//! Error types for rendering.

use thiserror::Error;

/// Errors that can occur while rendering or parsing records.
#[derive(Debug, Error)]
pub enum ReportError {
    /// JSON serialization or parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Parsed JSON is not an array of flat objects.
    #[error("invalid records: {0}")]
    InvalidRecords(String),
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, ReportError>;
