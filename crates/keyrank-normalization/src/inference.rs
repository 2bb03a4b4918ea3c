//! Derives normalization rules from a profile and the table header.

use keyrank_model::profile::{frequency, seller};
use keyrank_model::{FormatProfile, KEYWORD, Table};

use crate::types::{NormalizationPipeline, NormalizationRule, NormalizationType};

const ORDER_KEY: u32 = 0;
const ORDER_VALUES: u32 = 10;
const ORDER_SORT: u32 = 100;

/// Builds the rule list for `profile`.
///
/// Per-competitor share columns of the search frequency export are named after
/// ASINs, so they are discovered from the table header. Unknown tables get an
/// empty pipeline and pass through unchanged.
pub fn infer_normalization_rules(profile: FormatProfile, table: &Table) -> NormalizationPipeline {
    let mut pipeline = NormalizationPipeline::new(profile);

    match profile {
        FormatProfile::SellerMetrics => {
            pipeline.add_rule(key_rule());
            for column in seller::NUMERIC.iter().chain(seller::SHARE) {
                pipeline.add_rule(NormalizationRule::new(
                    *column,
                    NormalizationType::NumericConversion,
                    ORDER_VALUES,
                ));
            }
            for column in seller::IDENTIFIER_LISTS {
                pipeline.add_rule(NormalizationRule::new(
                    *column,
                    NormalizationType::TrimList,
                    ORDER_VALUES,
                ));
            }
        }
        FormatProfile::SearchFrequency => {
            pipeline.add_rule(key_rule());
            for column in frequency::NUMERIC {
                pipeline.add_rule(NormalizationRule::new(
                    *column,
                    NormalizationType::NumericConversion,
                    ORDER_VALUES,
                ));
            }
            for column in table
                .columns
                .iter()
                .filter(|c| frequency::is_competitor_share(c))
            {
                pipeline.add_rule(NormalizationRule::new(
                    column.as_str(),
                    NormalizationType::PercentToFraction,
                    ORDER_VALUES,
                ));
            }
        }
        FormatProfile::Unknown => return pipeline,
    }

    if let Some(volume) = profile.volume_column() {
        pipeline.add_rule(NormalizationRule::new(
            volume,
            NormalizationType::SortDescending,
            ORDER_SORT,
        ));
    }

    tracing::debug!(profile = %profile, rules = pipeline.len(), "Inferred normalization rules");
    pipeline
}

fn key_rule() -> NormalizationRule {
    NormalizationRule::new(KEYWORD, NormalizationType::KeyColumn, ORDER_KEY)
}
