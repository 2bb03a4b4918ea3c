//! End-to-end ranking run: load, normalize, join, score, select, aggregate.

use std::path::Path;

use keyrank_ingest::{LoadOptions, LoadedTable, load_and_detect, missing_columns};
use keyrank_model::{FormatProfile, InputBundle, PipelineOptions, RankedKeyword, Table};
use keyrank_normalization::normalize_table;
use keyrank_report::{RenderOptions, Rendering, render};

use crate::aggregate::build_bundle;
use crate::error::{PipelineError, Result};
use crate::join::{JoinError, JoinSide, join_profiles};
use crate::score::{score_keywords, scored_rows};
use crate::select::select_top;

/// Result of a ranking run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub bundle: InputBundle,
    /// Selected keywords, highest score first.
    pub selected: Vec<RankedKeyword>,
    /// The selected rows with their scores, in the requested output form.
    pub rendering: Rendering,
}

/// Loads both exports and ranks their keywords.
///
/// Options are validated before any file is opened. The search frequency
/// export is read with its header on the second row.
pub fn run_pipeline(
    seller_path: &Path,
    frequency_path: &Path,
    options: &PipelineOptions,
) -> Result<PipelineOutput> {
    options.validate()?;

    let seller = {
        let _span = tracing::info_span!("load", role = "seller").entered();
        load_and_detect(
            seller_path,
            &LoadOptions::for_profile(FormatProfile::SellerMetrics),
        )?
    };
    let frequency = {
        let _span = tracing::info_span!("load", role = "frequency").entered();
        load_and_detect(
            frequency_path,
            &LoadOptions::for_profile(FormatProfile::SearchFrequency),
        )?
    };

    rank_loaded(&seller, &frequency, options)
}

/// Ranks keywords of two already loaded tables.
pub fn rank_loaded(
    seller: &LoadedTable,
    frequency: &LoadedTable,
    options: &PipelineOptions,
) -> Result<PipelineOutput> {
    options.validate()?;

    warn_on_profile_mismatch(seller, FormatProfile::SellerMetrics);
    warn_on_profile_mismatch(frequency, FormatProfile::SearchFrequency);

    let (seller_table, frequency_table) = if options.normalize {
        let _span = tracing::info_span!("normalize").entered();
        (
            normalize_by_role(seller, FormatProfile::SellerMetrics)?,
            normalize_by_role(frequency, FormatProfile::SearchFrequency)?,
        )
    } else {
        (seller.table.clone(), frequency.table.clone())
    };

    let joined = {
        let _span = tracing::info_span!("join").entered();
        join_profiles(&seller_table, &frequency_table).map_err(|source| {
            let JoinError::MissingKeyColumn { side, .. } = &source;
            let path = match side {
                JoinSide::Left => seller.path.clone(),
                JoinSide::Right => frequency.path.clone(),
            };
            PipelineError::Join { path, source }
        })?
    };

    let ranked = score_keywords(&joined, &options.weights);
    let total_analyzed = ranked.len();
    let selected = {
        let _span = tracing::info_span!("select", top_n = options.top_n).entered();
        select_top(ranked, options.top_n)
    };
    if selected.len() < options.top_n {
        tracing::info!(
            requested = options.top_n,
            available = selected.len(),
            "Fewer keywords than requested"
        );
    }

    let bundle = {
        let _span = tracing::info_span!("aggregate").entered();
        build_bundle(&selected, total_analyzed, options)
    };

    let rendering = {
        let _span = tracing::info_span!("render").entered();
        let selection = scored_rows(&joined, &selected);
        render(
            &selection,
            options.output_form,
            &RenderOptions::new().with_max_rows(None),
        )?
    };

    tracing::info!(
        analyzed = total_analyzed,
        selected = selected.len(),
        competitor_asins = bundle.metadata.competitor_asins.len(),
        "Ranking complete"
    );

    Ok(PipelineOutput {
        bundle,
        selected,
        rendering,
    })
}

fn normalize_by_role(loaded: &LoadedTable, role: FormatProfile) -> Result<Table> {
    normalize_table(&loaded.table, role).map_err(|source| PipelineError::Normalization {
        path: loaded.path.clone(),
        source,
    })
}

fn warn_on_profile_mismatch(loaded: &LoadedTable, expected: FormatProfile) {
    if loaded.detected == expected {
        return;
    }
    let missing = missing_columns(expected, &loaded.table.columns);
    tracing::warn!(
        path = %loaded.path.display(),
        expected = %expected,
        detected = %loaded.detected,
        missing = ?missing,
        "Table does not match its expected profile; normalizing by role"
    );
}
