//! Keyword table normalization.
//!
//! Provides a rule-based normalization system for the two keyword export
//! profiles. Rules are derived from the profile's column lists (and, for
//! competitor share columns, from the table header) and then executed against
//! a [`keyrank_model::Table`].
//!
//! # Example
//!
//! ```ignore
//! use keyrank_model::FormatProfile;
//! use keyrank_normalization::{execute_normalization, infer_normalization_rules};
//!
//! let pipeline = infer_normalization_rules(FormatProfile::SearchFrequency, &raw);
//! let normalized = execute_normalization(&raw, &pipeline)?;
//! ```
//!
//! Normalization is idempotent: running it on its own output changes nothing.

mod error;
mod executor;
mod inference;
mod types;

pub mod normalization;

// Core types
pub use types::{NormalizationPipeline, NormalizationRule, NormalizationType};

// Error type
pub use error::{NormalizationError, Result};

// Pipeline building
pub use inference::infer_normalization_rules;

// Execution
pub use executor::{execute_normalization, normalize_table};
