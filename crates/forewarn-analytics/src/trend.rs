//! Period-over-period trend over a user's two most recent diagnoses.

use forewarn_core::models::trend::{TrendAnalysis, TrendDirection};
use forewarn_core::DiagnosisRecord;

/// Trend between the latest record and the one before it. `change` is the
/// raw signed score delta; direction follows its strict sign.
pub fn analyze(latest: &DiagnosisRecord, previous: &DiagnosisRecord) -> TrendAnalysis {
    let latest_score = latest.result.overall_score;
    let previous_score = previous.result.overall_score;
    let change = latest_score - previous_score;
    let direction = if change > 0.0 {
        TrendDirection::Increasing
    } else if change < 0.0 {
        TrendDirection::Decreasing
    } else {
        TrendDirection::Unchanged
    };
    TrendAnalysis::Trend {
        direction,
        change,
        latest_score,
        previous_score,
    }
}

/// Trend over records as returned by the store's `latest_two` (newest
/// first). Fewer than two records is a normal outcome, not an error.
pub fn analyze_history(records: &[DiagnosisRecord]) -> TrendAnalysis {
    match records {
        [latest, previous, ..] => analyze(latest, previous),
        _ => TrendAnalysis::InsufficientHistory,
    }
}
