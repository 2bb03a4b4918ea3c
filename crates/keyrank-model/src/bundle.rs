//! The input bundle handed to content generation.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Keyword to frequency mapping that keeps insertion (score) order.
///
/// Serializes as a JSON object whose keys appear in ranking order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequency {
    entries: Vec<(String, i64)>,
}

impl WordFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a keyword. A keyword seen before keeps its first position and value.
    pub fn insert(&mut self, keyword: impl Into<String>, frequency: i64) -> bool {
        let keyword = keyword.into();
        if self.entries.iter().any(|(existing, _)| *existing == keyword) {
            return false;
        }
        self.entries.push((keyword, frequency));
        true
    }

    pub fn get(&self, keyword: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == keyword)
            .map(|(_, frequency)| *frequency)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(keyword, _)| keyword.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries
            .iter()
            .map(|(keyword, frequency)| (keyword.as_str(), *frequency))
    }
}

impl Serialize for WordFrequency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (keyword, frequency) in &self.entries {
            map.serialize_entry(keyword, frequency)?;
        }
        map.end()
    }
}

struct WordFrequencyVisitor;

impl<'de> Visitor<'de> for WordFrequencyVisitor {
    type Value = WordFrequency;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map of keyword to integer frequency")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut frequency = WordFrequency::new();
        while let Some((keyword, value)) = access.next_entry::<String, i64>()? {
            frequency.insert(keyword, value);
        }
        Ok(frequency)
    }
}

impl<'de> Deserialize<'de> for WordFrequency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(WordFrequencyVisitor)
    }
}

/// Summary figures describing how the bundle was selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleMetadata {
    /// Rows in the joined table that were scored.
    pub total_keywords_analyzed: usize,
    /// The requested N (not the number actually selected).
    pub top_keywords_selected: usize,
    /// Mean monthly search volume over the selection.
    pub average_monthly_search: f64,
    /// Mean purchase rate over the selection.
    pub average_purchase_rate: f64,
    /// Distinct competitor ASINs in first-seen order, at most ten.
    pub competitor_asins: Vec<String>,
}

/// Structured payload for downstream content generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputBundle {
    pub brand_name: String,
    pub product_type: String,
    pub competitor_brands: Vec<String>,
    /// Selected keywords, highest score first.
    pub core_keywords: Vec<String>,
    pub word_frequency: WordFrequency,
    pub competitor_titles: Vec<String>,
    pub five_points_requirements: Vec<String>,
    pub metadata: BundleMetadata,
}
