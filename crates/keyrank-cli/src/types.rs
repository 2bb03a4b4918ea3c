use std::path::PathBuf;

use keyrank_cli::document::BundleDocument;
use keyrank_model::RankedKeyword;
use keyrank_report::Rendering;

#[derive(Debug)]
pub struct RankResult {
    pub document: BundleDocument,
    pub selected: Vec<RankedKeyword>,
    /// Selected rows in the requested form, when asked for.
    pub rendering: Option<Rendering>,
    /// Where the document was written; printed to stdout otherwise.
    pub output_path: Option<PathBuf>,
}
