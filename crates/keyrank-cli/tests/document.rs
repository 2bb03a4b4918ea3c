//! Integration tests for the bundle document.

use std::time::Duration;

use chrono::{TimeZone, Utc};
use keyrank_cli::document::BundleDocument;
use keyrank_model::{BundleMetadata, InputBundle, WordFrequency};
use tempfile::TempDir;

fn bundle() -> InputBundle {
    let mut word_frequency = WordFrequency::new();
    word_frequency.insert("slippers for women", 800);
    word_frequency.insert("house shoes", 0);
    InputBundle {
        brand_name: "Amazing Cosy".to_string(),
        product_type: "Women's Slippers".to_string(),
        competitor_brands: vec!["UGG".to_string()],
        core_keywords: vec!["slippers for women".to_string(), "house shoes".to_string()],
        word_frequency,
        competitor_titles: vec!["UGG slippers for women comfortable".to_string()],
        five_points_requirements: vec!["Plush comfort".to_string()],
        metadata: BundleMetadata {
            total_keywords_analyzed: 3,
            top_keywords_selected: 2,
            average_monthly_search: 5100.0,
            average_purchase_rate: 0.035,
            competitor_asins: vec!["B01".to_string(), "B02".to_string()],
        },
    }
}

fn document() -> BundleDocument {
    let generated_at = Utc.with_ymd_and_hms(2026, 10, 16, 8, 30, 0).unwrap();
    BundleDocument::new(bundle(), generated_at, Duration::from_millis(1234))
}

#[test]
fn test_document_fields_are_flattened() {
    let json = document().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["generated_at"], "2026-10-16T08:30:00Z");
    assert_eq!(value["duration_seconds"], 1.234);
    assert_eq!(value["brand_name"], "Amazing Cosy");
    assert_eq!(value["metadata"]["top_keywords_selected"], 2);

    let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(&keys[..3], &["generated_at", "duration_seconds", "brand_name"]);
}

#[test]
fn test_word_frequency_keeps_rank_order() {
    let json = document().to_json().unwrap();
    let first = json.find("\"slippers for women\": 800").unwrap();
    let second = json.find("\"house shoes\": 0").unwrap();
    assert!(first < second);
}

#[test]
fn test_write_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out").join("bundle.json");

    document().write_to(&path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    let back: BundleDocument = serde_json::from_str(&written).unwrap();
    assert_eq!(back, document());
}
