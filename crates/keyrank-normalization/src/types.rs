//! Normalization pipeline types.

use keyrank_model::FormatProfile;
use serde::{Deserialize, Serialize};

/// What a rule does to its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationType {
    /// Trim the key to text and drop rows whose key is empty.
    KeyColumn,
    /// Coerce to a number; unparsable cells become Missing.
    NumericConversion,
    /// Parse `"3.4512%"` text as the fraction `0.034512`; numbers are kept as-is.
    PercentToFraction,
    /// Keep a comma-separated identifier list as trimmed text.
    TrimList,
    /// Stable descending sort, Missing last.
    SortDescending,
}

impl NormalizationType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::KeyColumn => "key_column",
            Self::NumericConversion => "numeric_conversion",
            Self::PercentToFraction => "percent_to_fraction",
            Self::TrimList => "trim_list",
            Self::SortDescending => "sort_descending",
        }
    }
}

/// One column-level normalization step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationRule {
    pub column: String,
    pub transform_type: NormalizationType,
    /// Execution order; lower runs first.
    pub order: u32,
}

impl NormalizationRule {
    pub fn new(column: impl Into<String>, transform_type: NormalizationType, order: u32) -> Self {
        Self {
            column: column.into(),
            transform_type,
            order,
        }
    }
}

/// Ordered rules for one profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationPipeline {
    pub profile: FormatProfile,
    pub rules: Vec<NormalizationRule>,
}

impl NormalizationPipeline {
    pub fn new(profile: FormatProfile) -> Self {
        Self {
            profile,
            rules: Vec::new(),
        }
    }

    pub fn add_rule(&mut self, rule: NormalizationRule) {
        self.rules.push(rule);
    }

    /// Rules sorted by `order`; rules with equal order keep insertion order.
    pub fn rules_ordered(&self) -> Vec<&NormalizationRule> {
        let mut rules: Vec<&NormalizationRule> = self.rules.iter().collect();
        rules.sort_by_key(|rule| rule.order);
        rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Rules of one type, in execution order.
    pub fn rules_of(&self, transform_type: NormalizationType) -> Vec<&NormalizationRule> {
        self.rules_ordered()
            .into_iter()
            .filter(|rule| rule.transform_type == transform_type)
            .collect()
    }
}
