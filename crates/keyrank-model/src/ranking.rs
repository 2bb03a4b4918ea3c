//! Relevance scoring types.

use crate::profile::{frequency, seller};

/// Metric feeding the composite relevance score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreMetric {
    MonthlyVolume,
    MonthlyPurchases,
    PurchaseRate,
    TrafficShare,
    WeeklyVolume,
}

impl ScoreMetric {
    pub const ALL: [ScoreMetric; 5] = [
        Self::MonthlyVolume,
        Self::MonthlyPurchases,
        Self::PurchaseRate,
        Self::TrafficShare,
        Self::WeeklyVolume,
    ];

    /// Source column in the joined table.
    pub fn column(self) -> &'static str {
        match self {
            Self::MonthlyVolume => seller::MONTHLY_VOLUME,
            Self::MonthlyPurchases => seller::MONTHLY_PURCHASES,
            Self::PurchaseRate => seller::PURCHASE_RATE,
            Self::TrafficShare => seller::TRAFFIC_SHARE,
            Self::WeeklyVolume => frequency::WEEKLY_VOLUME,
        }
    }
}

/// Fixed policy weights for the composite score.
///
/// Demand and purchase signals dominate; weekly volume and traffic share only
/// separate otherwise close keywords. Weekly volume is used as-is (higher is
/// better), not inverted.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScoreWeights {
    pub monthly_volume: f64,
    pub monthly_purchases: f64,
    pub purchase_rate: f64,
    pub traffic_share: f64,
    pub weekly_volume: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            monthly_volume: 0.30,
            monthly_purchases: 0.25,
            purchase_rate: 0.20,
            traffic_share: 0.15,
            weekly_volume: 0.10,
        }
    }
}

impl ScoreWeights {
    pub fn weight(&self, metric: ScoreMetric) -> f64 {
        match metric {
            ScoreMetric::MonthlyVolume => self.monthly_volume,
            ScoreMetric::MonthlyPurchases => self.monthly_purchases,
            ScoreMetric::PurchaseRate => self.purchase_rate,
            ScoreMetric::TrafficShare => self.traffic_share,
            ScoreMetric::WeeklyVolume => self.weekly_volume,
        }
    }

    pub fn total(&self) -> f64 {
        ScoreMetric::ALL.iter().map(|m| self.weight(*m)).sum()
    }

    /// True when the weights are non-negative and sum to 1.0.
    pub fn is_normalized(&self) -> bool {
        ScoreMetric::ALL.iter().all(|m| self.weight(*m) >= 0.0)
            && (self.total() - 1.0).abs() < 1e-9
    }
}

/// Raw metric values of one keyword row, as read from the joined table.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct KeywordMetrics {
    pub monthly_volume: Option<f64>,
    pub monthly_purchases: Option<f64>,
    pub purchase_rate: Option<f64>,
    pub traffic_share: Option<f64>,
    pub weekly_volume: Option<f64>,
}

impl KeywordMetrics {
    pub fn get(&self, metric: ScoreMetric) -> Option<f64> {
        match metric {
            ScoreMetric::MonthlyVolume => self.monthly_volume,
            ScoreMetric::MonthlyPurchases => self.monthly_purchases,
            ScoreMetric::PurchaseRate => self.purchase_rate,
            ScoreMetric::TrafficShare => self.traffic_share,
            ScoreMetric::WeeklyVolume => self.weekly_volume,
        }
    }

    pub fn set(&mut self, metric: ScoreMetric, value: Option<f64>) {
        match metric {
            ScoreMetric::MonthlyVolume => self.monthly_volume = value,
            ScoreMetric::MonthlyPurchases => self.monthly_purchases = value,
            ScoreMetric::PurchaseRate => self.purchase_rate = value,
            ScoreMetric::TrafficShare => self.traffic_share = value,
            ScoreMetric::WeeklyVolume => self.weekly_volume = value,
        }
    }
}

/// A scored keyword row.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RankedKeyword {
    pub keyword: String,
    /// Composite relevance score, in `[0, 1]` whenever the weights sum to 1.
    pub score: f64,
    pub metrics: KeywordMetrics,
    /// Raw comma-separated competitor identifier list, if present.
    pub top_asins: Option<String>,
    /// Position of the row in the scored table.
    pub row_index: usize,
}

impl RankedKeyword {
    pub fn monthly_volume(&self) -> Option<f64> {
        self.metrics.monthly_volume
    }

    pub fn purchase_rate(&self) -> Option<f64> {
        self.metrics.purchase_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        let weights = ScoreWeights::default();
        assert!(weights.is_normalized());
        assert!((weights.weight(ScoreMetric::MonthlyVolume) - 0.30).abs() < f64::EPSILON);
    }

    #[test]
    fn skewed_weights_are_rejected() {
        let weights = ScoreWeights {
            weekly_volume: 0.5,
            ..ScoreWeights::default()
        };
        assert!(!weights.is_normalized());
    }
}
