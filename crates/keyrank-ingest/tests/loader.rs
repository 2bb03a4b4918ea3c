//! Integration tests for loading keyword exports from disk.

use std::io::Write;
use std::path::Path;

use keyrank_ingest::{IngestError, LoadOptions, SheetSelector, load_and_detect, load_table};
use keyrank_model::{CellValue, FormatProfile};
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

/// Writes one sheet per entry; numeric-looking cells become numbers, empty cells are skipped.
fn write_workbook(path: &Path, sheets: &[(&str, &[&[&str]])]) {
    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).unwrap();
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                if value.is_empty() {
                    continue;
                }
                match value.parse::<f64>() {
                    Ok(n) => worksheet.write_number(r as u32, c as u16, n).unwrap(),
                    Err(_) => worksheet.write_string(r as u32, c as u16, *value).unwrap(),
                };
            }
        }
    }
    workbook.save(path).unwrap();
}

const SELLER_ROWS: &[&[&str]] = &[
    &["关键词", "月搜索量", "月购买量", "购买率", "流量占比", "前十ASIN"],
    &["womens slippers", "10000", "500", "0.05", "0.12", "B01,B02"],
    &["", "", "", "", "", ""],
    &["house shoes", "8000", "300", "0.04", "0.08", "B02,B03"],
];

const FREQUENCY_ROWS: &[&[&str]] = &[
    &["Search frequency export 2024-W10"],
    &["关键词", "周搜索量", "周搜索量排名", "在售商品数", "B0AAA", "B0AAA-关键词类型"],
    &["womens slippers", "2500", "12", "3400", "3.4512%", "自然"],
];

const NOTES_ROWS: &[&[&str]] = &[&["readme"]];

const DUPLICATE_HEADER_ROWS: &[&[&str]] = &[&["A", "B", "A", ""], &["1", "2", "3", "4"]];

#[test]
fn loads_seller_workbook_and_detects_profile() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("seller.xlsx");
    write_workbook(&path, &[("Sheet1", SELLER_ROWS)]);

    let loaded = load_and_detect(&path, &LoadOptions::new()).unwrap();

    assert_eq!(loaded.detected, FormatProfile::SellerMetrics);
    assert_eq!(loaded.table.height(), 2, "fully empty rows are skipped");
    assert_eq!(loaded.table.rows[0].get("月搜索量"), &CellValue::Number(10000.0));
    assert_eq!(
        loaded.table.rows[1].get("前十ASIN"),
        &CellValue::Text("B02,B03".to_string())
    );
}

#[test]
fn frequency_workbook_needs_header_offset() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sif.xlsx");
    write_workbook(&path, &[("Sheet1", FREQUENCY_ROWS)]);

    let at_top = load_and_detect(&path, &LoadOptions::new()).unwrap();
    assert_eq!(at_top.detected, FormatProfile::Unknown);

    let options = LoadOptions::for_profile(FormatProfile::SearchFrequency);
    let loaded = load_and_detect(&path, &options).unwrap();
    assert_eq!(loaded.detected, FormatProfile::SearchFrequency);
    assert_eq!(loaded.table.height(), 1);
    assert_eq!(
        loaded.table.rows[0].get("B0AAA"),
        &CellValue::Text("3.4512%".to_string())
    );
}

#[test]
fn selects_sheet_by_name_and_index() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("multi.xlsx");
    write_workbook(&path, &[("Notes", NOTES_ROWS), ("Data", SELLER_ROWS)]);

    let by_name = load_table(
        &path,
        &LoadOptions::new().with_sheet(SheetSelector::Name("Data".to_string())),
    )
    .unwrap();
    let by_index =
        load_table(&path, &LoadOptions::new().with_sheet(SheetSelector::Index(1))).unwrap();
    assert_eq!(by_name, by_index);
    assert_eq!(by_name.height(), 2);

    let err = load_table(
        &path,
        &LoadOptions::new().with_sheet(SheetSelector::Name("Missing".to_string())),
    )
    .unwrap_err();
    assert!(matches!(err, IngestError::SheetNotFound { .. }));
}

#[test]
fn max_rows_caps_data_rows() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("seller.xlsx");
    write_workbook(&path, &[("Sheet1", SELLER_ROWS)]);

    let table = load_table(&path, &LoadOptions::new().with_max_rows(Some(1))).unwrap();
    assert_eq!(table.height(), 1);
}

#[test]
fn loads_csv_as_text() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("seller.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        "关键词,月搜索量,月购买量,购买率,前十ASIN\nslippers,\"1,200\",40,0.03,\"B01,B02\"\n"
    )
    .unwrap();

    let loaded = load_and_detect(&path, &LoadOptions::new()).unwrap();
    assert_eq!(loaded.detected, FormatProfile::SellerMetrics);
    assert_eq!(
        loaded.table.rows[0].get("月搜索量"),
        &CellValue::Text("1,200".to_string())
    );
}

#[test]
fn csv_and_workbook_headers_match() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("dupes.csv");
    let mut file = std::fs::File::create(&csv_path).unwrap();
    write!(file, "A,B,A,\n1,2,3,4\n").unwrap();
    let xlsx_path = dir.path().join("dupes.xlsx");
    write_workbook(&xlsx_path, &[("Sheet1", DUPLICATE_HEADER_ROWS)]);

    let from_csv = load_table(&csv_path, &LoadOptions::new()).unwrap();
    let from_xlsx = load_table(&xlsx_path, &LoadOptions::new()).unwrap();

    assert_eq!(from_csv.columns, vec!["A", "B", "A.1", "Unnamed: 3"]);
    assert_eq!(from_csv.columns, from_xlsx.columns);
}

#[test]
fn file_access_errors() {
    let dir = TempDir::new().unwrap();

    let err = load_table(&dir.path().join("absent.xlsx"), &LoadOptions::new()).unwrap_err();
    assert!(err.is_file_access());

    let txt = dir.path().join("notes.txt");
    std::fs::write(&txt, "hello").unwrap();
    let err = load_table(&txt, &LoadOptions::new()).unwrap_err();
    assert!(matches!(
        err,
        IngestError::UnsupportedFormat { ref extension, .. } if extension == "txt"
    ));
    assert!(!err.is_file_access());
}

#[test]
fn corrupt_workbook_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.xlsx");
    std::fs::write(&path, b"not a zip archive").unwrap();

    let err = load_table(&path, &LoadOptions::new()).unwrap_err();
    assert!(matches!(err, IngestError::Workbook { .. }));
}
