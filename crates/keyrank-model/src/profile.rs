//! Source schema profiles.
//!
//! Two keyword-research exports are understood. Their header names are matched
//! literally (including the Chinese headers the tools emit) and are never
//! translated, because profile detection depends on exact header equality.

use std::fmt;

/// Keyword column shared by both profiles; the join key.
pub const KEYWORD: &str = "关键词";

/// Seller metrics export columns.
pub mod seller {
    pub const MONTHLY_VOLUME: &str = "月搜索量";
    pub const MONTHLY_PURCHASES: &str = "月购买量";
    pub const PURCHASE_RATE: &str = "购买率";
    pub const TRAFFIC_SHARE: &str = "流量占比";
    pub const TOP_ASINS: &str = "前十ASIN";

    pub const REQUIRED: &[&str] = &[
        super::KEYWORD,
        MONTHLY_VOLUME,
        MONTHLY_PURCHASES,
        PURCHASE_RATE,
        TOP_ASINS,
    ];

    pub const NUMERIC: &[&str] = &[
        MONTHLY_VOLUME,
        MONTHLY_PURCHASES,
        PURCHASE_RATE,
        "展示量",
        "点击量",
        "商品数",
        "需供比",
        "广告竞品数",
        "ABA周排名",
        "预估周曝光量",
    ];

    /// Share columns exported as fractions already; coerced, never rescaled.
    pub const SHARE: &[&str] = &[
        TRAFFIC_SHARE,
        "点击总占比",
        "转化总占比",
        "#1 点击共享",
        "#1 转化共享",
        "#2 点击共享",
        "#2 转化共享",
        "#3 点击共享",
        "#3 转化共享",
    ];

    /// Comma-separated identifier lists, kept as trimmed text.
    pub const IDENTIFIER_LISTS: &[&str] = &[
        "相关ASIN",
        TOP_ASINS,
        "#1 前三ASIN",
        "#2 前三ASIN",
        "#3 前三ASIN",
    ];
}

/// Search frequency export columns.
pub mod frequency {
    pub const WEEKLY_VOLUME: &str = "周搜索量";
    pub const ACTIVE_LISTINGS: &str = "在售商品数";
    pub const WEEKLY_RANK: &str = "周搜索量排名";

    pub const REQUIRED: &[&str] = &[super::KEYWORD, WEEKLY_VOLUME, ACTIVE_LISTINGS, WEEKLY_RANK];

    pub const NUMERIC: &[&str] = &[WEEKLY_VOLUME, ACTIVE_LISTINGS, WEEKLY_RANK, "有效竞品数"];

    /// Columns carried into the joined table, key first.
    pub const JOIN_PROJECTION: &[&str] =
        &[super::KEYWORD, WEEKLY_VOLUME, WEEKLY_RANK, ACTIVE_LISTINGS];

    /// Per-competitor percentage columns are named after the competitor's ASIN.
    pub const COMPETITOR_PREFIX: &str = "B0";

    /// Suffix marking a per-competitor classification column (not a percentage).
    pub const CLASSIFICATION_MARKER: &str = "关键词类型";

    /// Header row offset of the export: a banner row sits above the real header.
    pub const HEADER_ROW: usize = 1;

    /// Returns true for per-competitor percentage columns.
    pub fn is_competitor_share(column: &str) -> bool {
        column.starts_with(COMPETITOR_PREFIX) && !column.contains(CLASSIFICATION_MARKER)
    }
}

/// Schema a loaded table conforms to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FormatProfile {
    /// Monthly keyword metrics with competitor ASIN lists.
    SellerMetrics,
    /// Weekly search frequency with per-competitor share columns.
    SearchFrequency,
    #[default]
    Unknown,
}

impl FormatProfile {
    /// Profiles in detection priority order.
    pub const KNOWN: [FormatProfile; 2] = [Self::SellerMetrics, Self::SearchFrequency];

    pub fn required_columns(self) -> &'static [&'static str] {
        match self {
            Self::SellerMetrics => seller::REQUIRED,
            Self::SearchFrequency => frequency::REQUIRED,
            Self::Unknown => &[],
        }
    }

    /// Column the normalized table is sorted on (descending).
    pub fn volume_column(self) -> Option<&'static str> {
        match self {
            Self::SellerMetrics => Some(seller::MONTHLY_VOLUME),
            Self::SearchFrequency => Some(frequency::WEEKLY_VOLUME),
            Self::Unknown => None,
        }
    }

    /// Header row offset the export uses.
    pub fn header_row(self) -> usize {
        match self {
            Self::SearchFrequency => frequency::HEADER_ROW,
            Self::SellerMetrics | Self::Unknown => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SellerMetrics => "seller_metrics",
            Self::SearchFrequency => "search_frequency",
            Self::Unknown => "unknown",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::SellerMetrics => "Monthly search, purchase and traffic-share metrics per keyword",
            Self::SearchFrequency => "Weekly search volume, rank and per-competitor shares",
            Self::Unknown => "Unrecognized column layout",
        }
    }

    pub fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for FormatProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
