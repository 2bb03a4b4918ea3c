//! Integration tests for the inspect module.

use std::io::Write;
use std::path::PathBuf;

use keyrank_cli::inspect::{InspectOptions, inspect_files, load_section};
use keyrank_model::{CellValue, FormatProfile, OutputForm};
use keyrank_report::Rendering;
use tempfile::{NamedTempFile, TempDir};

fn write_csv(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, "{content}").unwrap();
    path
}

const SELLER_CSV: &str = "关键词,月搜索量,月购买量,购买率,前十ASIN,流量占比\n\
                          house shoes,\"1,200\",30,2.5%,\"B01,B02\",10%\n\
                          ,500,5,1%,B03,1%\n\
                          slippers for women,9000,400,4.5%,B02,20%\n";

const FREQUENCY_CSV: &str = "Weekly export,,,,\n\
                             关键词,周搜索量,在售商品数,周搜索量排名,B0AAAA\n\
                             slippers for women,800,1200,5,3.4512%\n";

fn options() -> InspectOptions {
    InspectOptions {
        normalize: true,
        include_stats: true,
        ..InspectOptions::default()
    }
}

#[test]
fn test_detects_and_normalizes_seller_file() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "seller.csv", SELLER_CSV);

    let section = load_section(&path, &options()).unwrap();

    assert_eq!(section.label, "seller.csv");
    assert_eq!(section.profile, FormatProfile::SellerMetrics);
    assert_eq!(section.table.height(), 2);
    assert_eq!(
        section.table.rows[0].get("关键词"),
        &CellValue::Text("slippers for women".to_string())
    );
    assert_eq!(section.table.rows[1].get("月搜索量"), &CellValue::Number(1200.0));
}

#[test]
fn test_no_normalize_keeps_raw_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "seller.csv", SELLER_CSV);
    let options = InspectOptions {
        normalize: false,
        ..options()
    };

    let section = load_section(&path, &options).unwrap();
    assert_eq!(section.table.height(), 3);
    assert_eq!(
        section.table.rows[0].get("月搜索量"),
        &CellValue::Text("1,200".to_string())
    );
}

#[test]
fn test_forced_frequency_profile_uses_second_row_header() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "weekly.csv", FREQUENCY_CSV);
    let options = InspectOptions {
        profile: Some(FormatProfile::SearchFrequency),
        ..options()
    };

    let section = load_section(&path, &options).unwrap();
    assert_eq!(section.profile, FormatProfile::SearchFrequency);
    let share = section.table.rows[0].get("B0AAAA").as_number().unwrap();
    assert!((share - 0.034512).abs() < 1e-5);
}

#[test]
fn test_undetected_file_is_rendered_unchanged() {
    let mut file = NamedTempFile::with_suffix(".csv").unwrap();
    write!(file, "a,b\n1,x\n").unwrap();

    let section = load_section(file.path(), &options()).unwrap();
    assert_eq!(section.profile, FormatProfile::Unknown);
    assert_eq!(section.table.rows[0].get("a"), &CellValue::Text("1".to_string()));
}

#[test]
fn test_single_file_text_rendering() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "seller.csv", SELLER_CSV);

    let rendering = inspect_files(&[path], &options()).unwrap();
    let Rendering::Text(text) = rendering else {
        panic!("expected text rendering");
    };
    assert!(text.starts_with("## Data Summary"));
    assert!(text.contains("- **Total Rows**: 2"));
    assert!(!text.contains("# File:"));
}

#[test]
fn test_multiple_files_combined_text() {
    let dir = TempDir::new().unwrap();
    let seller = write_csv(&dir, "seller.csv", SELLER_CSV);
    let other = write_csv(&dir, "other.csv", "a\n1\n");

    let rendering = inspect_files(&[seller, other], &options()).unwrap();
    let text = rendering.to_display_string();
    assert!(text.starts_with("# File: seller.csv"));
    assert!(text.contains("\n\n---\n\n# File: other.csv"));
}

#[test]
fn test_multiple_files_combined_json() {
    let dir = TempDir::new().unwrap();
    let seller = write_csv(&dir, "seller.csv", SELLER_CSV);
    let other = write_csv(&dir, "other.csv", "a\n1\n");
    let options = InspectOptions {
        form: OutputForm::SerializedRecords,
        ..options()
    };

    let rendering = inspect_files(&[seller, other], &options).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendering.to_display_string()).unwrap();
    let files = value.as_array().unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0]["file"], "seller.csv");
    assert_eq!(files[0]["format_type"], "seller_metrics");
    assert_eq!(files[1]["format_type"], "unknown");
    assert_eq!(files[0]["data"].as_array().unwrap().len(), 2);
}

#[test]
fn test_max_rows_caps_loaded_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "seller.csv", SELLER_CSV);
    let options = InspectOptions {
        max_rows: Some(1),
        normalize: false,
        ..options()
    };

    let section = load_section(&path, &options).unwrap();
    assert_eq!(section.table.height(), 1);
}

#[test]
fn test_missing_file_names_path() {
    let err = load_section(&PathBuf::from("/nonexistent/seller.xlsx"), &options()).unwrap_err();
    assert!(format!("{err:#}").contains("/nonexistent/seller.xlsx"));
}
