//! Keyword data ingestion.
//!
//! Loads keyword-research exports into [`keyrank_model::Table`]s and classifies
//! them by header.
//!
//! # Features
//!
//! - **Workbook Loading**: xlsx, xlsm, xlsb, xls and ods via calamine
//! - **CSV Loading**: all-text reads via Polars
//! - **Header Offsets**: per-profile header row, blank and duplicate header cleanup
//! - **Profile Detection**: exact header subset matching
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use keyrank_ingest::{LoadOptions, load_and_detect};
//! use keyrank_model::FormatProfile;
//!
//! let options = LoadOptions::for_profile(FormatProfile::SearchFrequency);
//! let loaded = load_and_detect(Path::new("sif.xlsx"), &options)?;
//! assert_eq!(loaded.detected, FormatProfile::SearchFrequency);
//! ```

mod detection;
mod error;
mod loader;

// === Error Types ===
pub use error::{IngestError, Result};

// === Loading ===
pub use loader::{
    LoadOptions, LoadedTable, MAX_FILE_SIZE, SheetSelector, WORKBOOK_EXTENSIONS, check_file,
    check_file_with_limit, load_and_detect, load_table, table_from_grid,
};

// === Detection ===
pub use detection::{detect_profile, detect_table_profile, missing_columns};
