//! CSV reading via Polars.
//!
//! Every column is read as text; typing is the normalizer's job. The header
//! line is read as an ordinary row so CSV and workbook headers are cleaned by
//! the same rules.

use std::path::Path;

use keyrank_model::{CellValue, Table};
use polars::prelude::*;

use crate::error::{IngestError, Result};

use super::table_from_grid;

/// Reads a CSV file whose header sits `header_row` lines from the top.
pub fn read_csv_table(path: &Path, header_row: usize, max_rows: Option<usize>) -> Result<Table> {
    let df = CsvReadOptions::default()
        .with_has_header(false)
        .with_skip_rows(header_row)
        .with_infer_schema_length(Some(0))
        .map_parse_options(|options| options.with_truncate_ragged_lines(true))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let grid = dataframe_to_grid(&df)?;
    table_from_grid(path, grid, 0, max_rows)
}

/// Converts a header-less DataFrame into a row-major cell grid.
pub fn dataframe_to_grid(df: &DataFrame) -> Result<Vec<Vec<CellValue>>> {
    let mut grid: Vec<Vec<CellValue>> = vec![Vec::with_capacity(df.width()); df.height()];
    for col in df.get_columns() {
        let as_text = col.cast(&DataType::String)?;
        let values = as_text.str()?;
        for (row, value) in grid.iter_mut().zip(values.iter()) {
            row.push(value.map_or(CellValue::Missing, CellValue::from_text));
        }
    }
    Ok(grid)
}
