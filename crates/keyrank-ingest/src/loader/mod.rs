//! Table loading from workbooks and CSV files.

mod csv;
mod header;
mod workbook;

use std::path::{Path, PathBuf};

use keyrank_model::{CellValue, FormatProfile, Row, Table};
use serde::{Deserialize, Serialize};

use crate::detection::detect_table_profile;
use crate::error::{IngestError, Result};

use csv::read_csv_table;
use header::{dedupe_headers, header_name};
use workbook::read_sheet_grid;

/// Maximum source file size (200 MB).
pub const MAX_FILE_SIZE: u64 = 200 * 1024 * 1024;

/// Extensions read through calamine.
pub const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Which worksheet to read from a workbook. Ignored for CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetSelector {
    Index(usize),
    Name(String),
}

impl Default for SheetSelector {
    fn default() -> Self {
        Self::Index(0)
    }
}

impl SheetSelector {
    /// Parses a CLI-style selector: all digits select by index, anything else by name.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        match trimmed.parse::<usize>() {
            Ok(idx) => Self::Index(idx),
            Err(_) => Self::Name(trimmed.to_string()),
        }
    }
}

/// Options for loading one table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadOptions {
    pub sheet: SheetSelector,
    /// Zero-based row holding the column names; rows above it are discarded.
    pub header_row: usize,
    /// Keep at most this many data rows.
    pub max_rows: Option<usize>,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with the header offset the given profile's export uses.
    pub fn for_profile(profile: FormatProfile) -> Self {
        Self::default().with_header_row(profile.header_row())
    }

    #[must_use]
    pub fn with_sheet(mut self, sheet: SheetSelector) -> Self {
        self.sheet = sheet;
        self
    }

    #[must_use]
    pub fn with_header_row(mut self, header_row: usize) -> Self {
        self.header_row = header_row;
        self
    }

    #[must_use]
    pub fn with_max_rows(mut self, max_rows: Option<usize>) -> Self {
        self.max_rows = max_rows;
        self
    }
}

/// A loaded table together with the profile detected from its header.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedTable {
    pub path: PathBuf,
    pub table: Table,
    pub detected: FormatProfile,
}

/// Checks that the file exists, is readable and below the size limit.
pub fn check_file(path: &Path) -> Result<()> {
    check_file_with_limit(path, MAX_FILE_SIZE)
}

/// Same as [`check_file`] with a custom size limit.
pub fn check_file_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    if !metadata.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default()
}

/// Loads a workbook sheet or CSV file into a [`Table`].
pub fn load_table(path: &Path, options: &LoadOptions) -> Result<Table> {
    let _span = tracing::info_span!("load_table", path = %path.display()).entered();

    check_file(path)?;

    let extension = extension_of(path);
    let table = if WORKBOOK_EXTENSIONS.contains(&extension.as_str()) {
        let grid = read_sheet_grid(path, &options.sheet)?;
        table_from_grid(path, grid, options.header_row, options.max_rows)?
    } else if extension == "csv" {
        read_csv_table(path, options.header_row, options.max_rows)?
    } else {
        return Err(IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension,
        });
    };

    tracing::info!(
        rows = table.height(),
        columns = table.width(),
        header_row = options.header_row,
        "Loaded table"
    );
    Ok(table)
}

/// Loads a table and classifies its header.
pub fn load_and_detect(path: &Path, options: &LoadOptions) -> Result<LoadedTable> {
    let table = load_table(path, options)?;
    let detected = detect_table_profile(&table);
    tracing::debug!(path = %path.display(), profile = %detected, "Detected profile");
    Ok(LoadedTable {
        path: path.to_path_buf(),
        table,
        detected,
    })
}

/// Builds a table from a raw cell grid.
///
/// `header_row` selects the header line; rows above it are discarded and fully
/// empty rows below it are skipped. Cells beyond the header width are dropped.
pub fn table_from_grid(
    path: &Path,
    grid: Vec<Vec<CellValue>>,
    header_row: usize,
    max_rows: Option<usize>,
) -> Result<Table> {
    if header_row >= grid.len() {
        return Err(IngestError::HeaderRowOutOfRange {
            path: path.to_path_buf(),
            header_row,
            rows: grid.len(),
        });
    }

    let mut lines = grid.into_iter().skip(header_row);
    let header_cells = lines.next().unwrap_or_default();
    let names = dedupe_headers(
        header_cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| header_name(cell, idx))
            .collect(),
    );

    let mut table = Table::new(names);
    let limit = max_rows.unwrap_or(usize::MAX);

    for line in lines {
        if table.height() >= limit {
            break;
        }
        let mut row = Row::new();
        for (name, cell) in table.columns.iter().zip(line) {
            if !cell.is_missing() {
                row.set(name.clone(), cell);
            }
        }
        if row.cells.is_empty() {
            continue;
        }
        table.push_row(row);
    }

    Ok(table)
}
