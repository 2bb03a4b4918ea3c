//! Configuration accepted by the ranking pipeline.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::ranking::ScoreWeights;

/// Default number of keywords kept in the bundle.
pub const DEFAULT_TOP_N: usize = 50;

/// Competitor brands used when the caller supplies none.
pub const DEFAULT_COMPETITOR_BRANDS: &[&str] =
    &["UGG", "Bearpaw", "Dearfoams", "Skechers", "Crocs"];

/// Product feature requirements appended after the keyword-driven points.
pub const DEFAULT_FEATURE_REQUIREMENTS: &[&str] = &[
    "Plush, cozy comfort (faux fur/fleece lining)",
    "Durable, non-slip rubber outsole",
    "True-to-size fit with wide-width options",
];

/// How a table or row subset is rendered for consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputForm {
    /// Markdown-style summary, table and statistics.
    #[default]
    DescriptiveText,
    /// Pretty JSON array of records.
    SerializedRecords,
    /// In-memory records for callers that post-process themselves.
    NativeRecords,
}

impl FromStr for OutputForm {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "markdown" | "descriptive_text" => Ok(Self::DescriptiveText),
            "json" | "serialized_records" => Ok(Self::SerializedRecords),
            "records" | "dict" | "native_records" => Ok(Self::NativeRecords),
            other => Err(ModelError::UnknownOutputForm(other.to_string())),
        }
    }
}

/// Options for a full ranking run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineOptions {
    pub brand_name: String,
    pub product_type: String,
    /// Number of keywords to select.
    pub top_n: usize,
    /// Rendering of the selected rows returned next to the bundle.
    pub output_form: OutputForm,
    /// Apply profile normalization before joining.
    pub normalize: bool,
    pub competitor_brands: Vec<String>,
    pub feature_requirements: Vec<String>,
    pub weights: ScoreWeights,
}

impl PipelineOptions {
    pub fn new(brand_name: impl Into<String>, product_type: impl Into<String>) -> Self {
        Self {
            brand_name: brand_name.into(),
            product_type: product_type.into(),
            top_n: DEFAULT_TOP_N,
            output_form: OutputForm::default(),
            normalize: true,
            competitor_brands: DEFAULT_COMPETITOR_BRANDS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            feature_requirements: DEFAULT_FEATURE_REQUIREMENTS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            weights: ScoreWeights::default(),
        }
    }

    #[must_use]
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    #[must_use]
    pub fn with_output_form(mut self, form: OutputForm) -> Self {
        self.output_form = form;
        self
    }

    #[must_use]
    pub fn with_normalize(mut self, enable: bool) -> Self {
        self.normalize = enable;
        self
    }

    #[must_use]
    pub fn with_competitor_brands(mut self, brands: Vec<String>) -> Self {
        self.competitor_brands = brands;
        self
    }

    #[must_use]
    pub fn with_feature_requirements(mut self, requirements: Vec<String>) -> Self {
        self.feature_requirements = requirements;
        self
    }

    #[must_use]
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Checks the options before any file is touched.
    pub fn validate(&self) -> Result<()> {
        if self.brand_name.trim().is_empty() {
            return Err(ModelError::EmptyBrandName);
        }
        if self.product_type.trim().is_empty() {
            return Err(ModelError::EmptyProductType);
        }
        if self.top_n == 0 {
            return Err(ModelError::ZeroTopN);
        }
        if !self.weights.is_normalized() {
            return Err(ModelError::InvalidWeights {
                total: self.weights.total(),
            });
        }
        Ok(())
    }
}
