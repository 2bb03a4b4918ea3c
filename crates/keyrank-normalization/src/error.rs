//! Error types for keyword table normalization.

use thiserror::Error;

/// Errors that can occur during normalization.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum NormalizationError {
    /// The join-key column is absent, so rows cannot be identified.
    #[error("key column '{column}' not found")]
    MissingKeyColumn {
        /// Name of the absent key column.
        column: String,
    },
}

/// Result type for normalization operations.
pub type Result<T> = std::result::Result<T, NormalizationError>;
