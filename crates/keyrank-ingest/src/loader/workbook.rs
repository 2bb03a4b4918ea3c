//! Workbook (xlsx, xlsm, xlsb, xls, ods) reading via calamine.

use std::path::Path;

use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};
use keyrank_model::CellValue;

use crate::error::{IngestError, Result};

use super::SheetSelector;

/// Reads one sheet into a grid of cells.
///
/// The grid is anchored at A1: if the used range starts further down or to the
/// right, leading rows and columns are padded with Missing so header offsets
/// count physical sheet rows.
pub fn read_sheet_grid(path: &Path, sheet: &SheetSelector) -> Result<Vec<Vec<CellValue>>> {
    let mut workbook: Sheets<_> = open_workbook_auto(path).map_err(|e| IngestError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let range = match sheet {
        SheetSelector::Index(idx) => workbook
            .worksheet_range_at(*idx)
            .ok_or_else(|| IngestError::SheetNotFound {
                path: path.to_path_buf(),
                sheet: format!("#{idx}"),
            })?
            .map_err(|e| IngestError::Workbook {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?,
        SheetSelector::Name(name) => {
            let sheet_names: Vec<String> = workbook.sheet_names().to_vec();
            if !sheet_names.iter().any(|candidate| candidate == name) {
                return Err(IngestError::SheetNotFound {
                    path: path.to_path_buf(),
                    sheet: name.clone(),
                });
            }
            workbook
                .worksheet_range(name)
                .map_err(|e| IngestError::Workbook {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?
        }
    };

    Ok(range_to_grid(&range))
}

fn range_to_grid(range: &Range<Data>) -> Vec<Vec<CellValue>> {
    let (start_row, start_col) = range.start().unwrap_or((0, 0));
    let start_row = start_row as usize;
    let start_col = start_col as usize;

    let mut grid: Vec<Vec<CellValue>> = vec![Vec::new(); start_row];
    for row in range.rows() {
        let mut cells = vec![CellValue::Missing; start_col];
        cells.extend(row.iter().map(data_to_cell));
        grid.push(cells);
    }
    grid
}

/// Maps a calamine cell onto the tagged cell model.
pub fn data_to_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Missing,
        Data::String(s) => CellValue::from_text(s),
        Data::Float(n) => CellValue::from_number(*n),
        Data::Int(n) => CellValue::Number(*n as f64),
        Data::Bool(b) => CellValue::Text(if *b { "TRUE" } else { "FALSE" }.to_string()),
        // Excel error cells (#N/A, #DIV/0!, ...) carry no usable value.
        Data::Error(_) => CellValue::Missing,
        Data::DateTime(dt) => CellValue::from_number(dt.as_f64()),
        Data::DateTimeIso(s) => CellValue::from_text(s),
        Data::DurationIso(s) => CellValue::from_text(s),
    }
}
