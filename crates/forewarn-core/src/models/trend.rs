use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Unchanged,
}

/// Period-over-period movement of the overall score. `change` is strictly
/// latest minus previous; direction follows its sign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "status", rename_all = "snake_case", rename_all_fields = "camelCase")]
#[ts(export)]
pub enum TrendAnalysis {
    /// Fewer than two diagnoses on record; no trend can be computed.
    InsufficientHistory,
    Trend {
        direction: TrendDirection,
        change: f64,
        latest_score: f64,
        previous_score: f64,
    },
}
