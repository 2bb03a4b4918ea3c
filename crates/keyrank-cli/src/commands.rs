//! Subcommand implementations.

use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Utc;
use comfy_table::Table;
use keyrank_cli::document::BundleDocument;
use keyrank_cli::inspect::{InspectOptions, inspect_files};
use keyrank_core::run_pipeline;
use keyrank_model::{FormatProfile, PipelineOptions};

use crate::cli::{InspectArgs, RankArgs};
use crate::summary::apply_table_style;
use crate::types::RankResult;

pub fn run_rank(args: &RankArgs) -> Result<RankResult> {
    let _span = tracing::info_span!(
        "rank",
        seller = %args.seller_file.display(),
        frequency = %args.frequency_file.display()
    )
    .entered();

    let mut options = PipelineOptions::new(&args.brand, &args.product)
        .with_top_n(args.top_n)
        .with_output_form(args.format.into())
        .with_normalize(!args.no_normalize);
    if !args.competitor_brands.is_empty() {
        options = options.with_competitor_brands(args.competitor_brands.clone());
    }
    if !args.features.is_empty() {
        options = options.with_feature_requirements(args.features.clone());
    }

    let started = Instant::now();
    let output = run_pipeline(&args.seller_file, &args.frequency_file, &options)
        .context("rank keywords")?;
    let document = BundleDocument::new(output.bundle.clone(), Utc::now(), started.elapsed());

    if let Some(path) = &args.output {
        document.write_to(path)?;
    }

    Ok(RankResult {
        document,
        selected: output.selected,
        rendering: args.show_rows.then_some(output.rendering),
        output_path: args.output.clone(),
    })
}

pub fn run_inspect(args: &InspectArgs) -> Result<String> {
    let options = InspectOptions {
        sheet: args.sheet.clone(),
        header_row: args.header_row,
        max_rows: args.max_rows,
        profile: args.profile.map(Into::into),
        normalize: !args.no_normalize,
        include_stats: !args.no_stats,
        form: args.format.into(),
    };
    let rendering = inspect_files(&args.files, &options)?;
    Ok(rendering.to_display_string())
}

pub fn run_profiles() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Profile", "Header Row", "Required Columns", "Description"]);
    apply_table_style(&mut table);
    for profile in FormatProfile::KNOWN {
        table.add_row(vec![
            profile.as_str().to_string(),
            profile.header_row().to_string(),
            profile.required_columns().join(", "),
            profile.description().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}
