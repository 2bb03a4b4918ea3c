//! Loading, detecting and rendering arbitrary export files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use keyrank_ingest::{LoadOptions, SheetSelector, load_and_detect};
use keyrank_model::{FormatProfile, OutputForm};
use keyrank_normalization::normalize_table;
use keyrank_report::{FileSection, RenderOptions, Rendering, render, render_many};

/// Options for `keyrank inspect`.
#[derive(Debug, Clone, Default)]
pub struct InspectOptions {
    pub sheet: Option<String>,
    /// Overrides the header row implied by the profile.
    pub header_row: Option<usize>,
    /// Caps both loaded and rendered rows.
    pub max_rows: Option<usize>,
    /// Treat every file as this profile instead of detecting it.
    pub profile: Option<FormatProfile>,
    pub normalize: bool,
    pub include_stats: bool,
    pub form: OutputForm,
}

impl InspectOptions {
    fn load_options(&self) -> LoadOptions {
        let base = match self.profile {
            Some(profile) => LoadOptions::for_profile(profile),
            None => LoadOptions::new(),
        };
        let base = match self.header_row {
            Some(row) => base.with_header_row(row),
            None => base,
        };
        let base = match &self.sheet {
            Some(sheet) => base.with_sheet(SheetSelector::parse(sheet)),
            None => base,
        };
        base.with_max_rows(self.max_rows)
    }

    fn render_options(&self) -> RenderOptions {
        let options = RenderOptions::new().with_stats(self.include_stats);
        match self.max_rows {
            Some(rows) => options.with_max_rows(Some(rows)),
            None => options,
        }
    }
}

/// Loads one file into a labelled section.
pub fn load_section(path: &Path, options: &InspectOptions) -> Result<FileSection> {
    let _span = tracing::info_span!("inspect", path = %path.display()).entered();

    let loaded = load_and_detect(path, &options.load_options())
        .with_context(|| format!("load {}", path.display()))?;
    let profile = options.profile.unwrap_or(loaded.detected);
    if options.profile.is_some() && loaded.detected != profile {
        tracing::warn!(
            detected = %loaded.detected,
            forced = %profile,
            "Forced profile differs from detected profile"
        );
    }

    let table = if options.normalize {
        normalize_table(&loaded.table, profile)
            .with_context(|| format!("normalize {}", path.display()))?
    } else {
        loaded.table
    };

    Ok(FileSection::new(label_for(path), profile, table))
}

/// Renders one or more files. Several files produce a combined document.
pub fn inspect_files(paths: &[PathBuf], options: &InspectOptions) -> Result<Rendering> {
    let sections = paths
        .iter()
        .map(|path| load_section(path, options))
        .collect::<Result<Vec<_>>>()?;
    let render_options = options.render_options();

    let rendering = match sections.as_slice() {
        [single] => render(&single.table, options.form, &render_options),
        _ => render_many(&sections, options.form, &render_options),
    }
    .context("render inspection output")?;
    Ok(rendering)
}

fn label_for(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_sets_header_row() {
        let options = InspectOptions {
            profile: Some(FormatProfile::SearchFrequency),
            ..InspectOptions::default()
        };
        assert_eq!(options.load_options().header_row, 1);

        let options = InspectOptions {
            profile: Some(FormatProfile::SearchFrequency),
            header_row: Some(0),
            ..InspectOptions::default()
        };
        assert_eq!(options.load_options().header_row, 0);
    }

    #[test]
    fn test_render_options_default_row_cap() {
        let options = InspectOptions::default();
        assert_eq!(options.render_options().max_rows, Some(100));
        assert!(!options.render_options().include_stats);
    }

    #[test]
    fn test_label_is_file_name() {
        assert_eq!(label_for(Path::new("/tmp/data/seller.xlsx")), "seller.xlsx");
    }
}
