//! Input bundle assembly from the selected keywords.

use keyrank_model::{BundleMetadata, InputBundle, PipelineOptions, RankedKeyword, WordFrequency};

/// Most competitor ASINs carried in the bundle metadata.
pub const MAX_COMPETITOR_ASINS: usize = 10;

/// Number of keywords turned into competitor title placeholders.
pub const COMPETITOR_TITLE_COUNT: usize = 5;

const TITLE_SUFFIX: &str = " - Premium Quality";
const FALLBACK_PRIMARY_KEYWORD: &str = "slippers";
const FALLBACK_SECONDARY_KEYWORD: &str = "comfortable";

/// Builds the bundle from keywords already ordered by score.
///
/// `total_analyzed` is the number of rows that were scored. Pure computation.
pub fn build_bundle(
    selected: &[RankedKeyword],
    total_analyzed: usize,
    options: &PipelineOptions,
) -> InputBundle {
    let mut word_frequency = WordFrequency::new();
    let mut core_keywords = Vec::with_capacity(selected.len());
    for keyword in selected {
        let frequency = keyword.monthly_volume().map_or(0, |volume| volume.trunc() as i64);
        if word_frequency.insert(keyword.keyword.clone(), frequency) {
            core_keywords.push(keyword.keyword.clone());
        }
    }

    let competitor_asins = collect_asins(
        selected.iter().filter_map(|keyword| keyword.top_asins.as_deref()),
        MAX_COMPETITOR_ASINS,
    );

    let metadata = BundleMetadata {
        total_keywords_analyzed: total_analyzed,
        top_keywords_selected: options.top_n,
        average_monthly_search: mean(selected.iter().map(RankedKeyword::monthly_volume)),
        average_purchase_rate: mean(selected.iter().map(RankedKeyword::purchase_rate)),
        competitor_asins,
    };

    InputBundle {
        brand_name: options.brand_name.clone(),
        product_type: options.product_type.clone(),
        competitor_brands: options.competitor_brands.clone(),
        competitor_titles: competitor_titles(&core_keywords),
        five_points_requirements: five_points(&core_keywords, &options.feature_requirements),
        core_keywords,
        word_frequency,
        metadata,
    }
}

/// Splits comma-separated ASIN lists, keeping distinct values in first-seen order.
pub fn collect_asins<'a>(lists: impl IntoIterator<Item = &'a str>, limit: usize) -> Vec<String> {
    let mut asins: Vec<String> = Vec::new();
    for list in lists {
        for asin in list.split(',').map(str::trim).filter(|asin| !asin.is_empty()) {
            if asins.len() >= limit {
                return asins;
            }
            if !asins.iter().any(|seen| seen == asin) {
                asins.push(asin.to_string());
            }
        }
    }
    asins
}

/// Placeholder titles for the first few keywords.
pub fn competitor_titles(keywords: &[String]) -> Vec<String> {
    keywords
        .iter()
        .take(COMPETITOR_TITLE_COUNT)
        .map(|keyword| format!("{keyword}{TITLE_SUFFIX}"))
        .collect()
}

/// Two keyword-driven points followed by the product feature requirements.
pub fn five_points(keywords: &[String], feature_requirements: &[String]) -> Vec<String> {
    let primary = keywords.first().map_or(FALLBACK_PRIMARY_KEYWORD, String::as_str);
    let secondary = keywords.get(1).map_or(FALLBACK_SECONDARY_KEYWORD, String::as_str);

    let mut points = vec![
        format!("Optimized for top keyword: {primary}"),
        format!("Target high-conversion terms like '{secondary}'"),
    ];
    points.extend(feature_requirements.iter().cloned());
    points
}

/// Arithmetic mean of the present values; 0 when there are none.
fn mean(values: impl Iterator<Item = Option<f64>>) -> f64 {
    let (sum, count) = values
        .flatten()
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
    if count == 0 { 0.0 } else { sum / count as f64 }
}
