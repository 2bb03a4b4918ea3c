//! Bundle document written by `keyrank rank`.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use keyrank_model::InputBundle;
use serde::{Deserialize, Serialize};

/// The input bundle wrapped with run metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleDocument {
    /// RFC 3339 UTC timestamp of the run.
    pub generated_at: String,
    pub duration_seconds: f64,
    #[serde(flatten)]
    pub bundle: InputBundle,
}

impl BundleDocument {
    pub fn new(bundle: InputBundle, generated_at: DateTime<Utc>, duration: Duration) -> Self {
        Self {
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            duration_seconds: round_millis(duration.as_secs_f64()),
            bundle,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serialize bundle document")
    }

    /// Writes the document as pretty JSON, creating parent directories.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output directory {}", parent.display()))?;
        }
        let json = self.to_json()?;
        std::fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
        tracing::info!(path = %path.display(), "Wrote bundle document");
        Ok(())
    }
}

fn round_millis(seconds: f64) -> f64 {
    (seconds * 1000.0).round() / 1000.0
}
