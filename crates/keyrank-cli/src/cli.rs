//! CLI argument definitions for keyrank.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use keyrank_model::{FormatProfile, OutputForm};

#[derive(Parser)]
#[command(
    name = "keyrank",
    version,
    about = "Rank marketplace keywords from seller and search frequency exports",
    long_about = "Rank marketplace keywords from seller and search frequency exports.\n\n\
                  Joins the two exports on the keyword column, scores every keyword with a\n\
                  weighted composite of five metrics and assembles an input bundle for\n\
                  listing generation."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Rank keywords and build the input bundle.
    Rank(RankArgs),

    /// Load, detect and render one or more export files.
    Inspect(InspectArgs),

    /// List the known export profiles and their required columns.
    Profiles,
}

#[derive(Parser)]
pub struct RankArgs {
    /// Seller metrics export (monthly search, purchases, top ASINs).
    #[arg(value_name = "SELLER_FILE")]
    pub seller_file: PathBuf,

    /// Search frequency export (weekly search volume and rank).
    #[arg(value_name = "FREQUENCY_FILE")]
    pub frequency_file: PathBuf,

    /// Brand name written into the bundle.
    #[arg(long = "brand")]
    pub brand: String,

    /// Product type written into the bundle.
    #[arg(long = "product")]
    pub product: String,

    /// Number of keywords to select.
    #[arg(long = "top-n", default_value_t = keyrank_model::DEFAULT_TOP_N)]
    pub top_n: usize,

    /// Rendering of the selected rows shown with --show-rows.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormatArg,

    /// Print the selected rows in the chosen format.
    #[arg(long = "show-rows")]
    pub show_rows: bool,

    /// Skip profile normalization before joining.
    #[arg(long = "no-normalize")]
    pub no_normalize: bool,

    /// Competitor brand (repeatable; replaces the default list).
    #[arg(long = "competitor-brand", value_name = "BRAND")]
    pub competitor_brands: Vec<String>,

    /// Product feature requirement (repeatable; replaces the default list).
    #[arg(long = "feature", value_name = "TEXT")]
    pub features: Vec<String>,

    /// Write the bundle document to this file instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Export files (xlsx, xlsm, xlsb, xls, ods or csv).
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormatArg,

    /// Worksheet name or zero-based index.
    #[arg(long = "sheet")]
    pub sheet: Option<String>,

    /// Zero-based header row (defaults to the profile's offset).
    #[arg(long = "header-row", value_name = "ROW")]
    pub header_row: Option<usize>,

    /// Maximum number of data rows to read and render.
    #[arg(long = "max-rows", value_name = "N")]
    pub max_rows: Option<usize>,

    /// Treat every file as this profile instead of detecting it.
    #[arg(long = "profile", value_enum)]
    pub profile: Option<ProfileArg>,

    /// Skip profile normalization.
    #[arg(long = "no-normalize")]
    pub no_normalize: bool,

    /// Omit the data summary and numeric statistics from text output.
    #[arg(long = "no-stats")]
    pub no_stats: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Text,
    Json,
    Records,
}

impl From<OutputFormatArg> for OutputForm {
    fn from(value: OutputFormatArg) -> Self {
        match value {
            OutputFormatArg::Text => OutputForm::DescriptiveText,
            OutputFormatArg::Json => OutputForm::SerializedRecords,
            OutputFormatArg::Records => OutputForm::NativeRecords,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ProfileArg {
    Seller,
    Frequency,
}

impl From<ProfileArg> for FormatProfile {
    fn from(value: ProfileArg) -> Self {
        match value {
            ProfileArg::Seller => FormatProfile::SellerMetrics,
            ProfileArg::Frequency => FormatProfile::SearchFrequency,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
