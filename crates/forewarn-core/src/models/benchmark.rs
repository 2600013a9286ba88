use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Average/median pair for one benchmark metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MetricStat {
    pub average: f64,
    pub median: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BenchmarkMetrics {
    pub revenue: MetricStat,
    pub expenses: MetricStat,
    pub customers: MetricStat,
    pub profit_margin: MetricStat,
}

/// Share of businesses per alert level, in percent. Sums to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub struct RiskDistribution {
    pub green: u8,
    pub yellow: u8,
    pub orange: u8,
    pub red: u8,
}

/// Industry reference numbers served by `GET /benchmark`. `industry` holds
/// the display name, not the request code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BenchmarkProfile {
    pub industry: String,
    pub region: String,
    pub average_risk_score: f64,
    pub metrics: BenchmarkMetrics,
    pub risk_distribution: RiskDistribution,
}

/// User-vs-benchmark delta for one metric. `percent_difference` is `None`
/// when the benchmark average is zero and the ratio is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MetricComparison {
    pub user: f64,
    pub average: f64,
    pub percent_difference: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MetricComparisons {
    pub revenue: MetricComparison,
    pub expenses: MetricComparison,
    pub customers: MetricComparison,
}

/// Outcome of `POST /benchmark/compare`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ComparisonResult {
    pub user_score: f64,
    pub industry_average: f64,
    /// Estimated standing among industry peers, `1..=99`. Higher is better.
    pub percentile: u8,
    pub comparison: MetricComparisons,
    pub insights: Vec<String>,
}
