//! Benchmark comparison: user metrics against an industry profile.

use forewarn_core::models::benchmark::{
    BenchmarkProfile, ComparisonResult, MetricComparison, MetricComparisons,
};
use forewarn_core::DiagnosisRecord;

/// The user-side numbers a comparison runs over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UserMetrics {
    pub revenue: f64,
    pub expenses: f64,
    pub customers: f64,
    pub overall_score: f64,
}

impl UserMetrics {
    /// Metrics of a stored diagnosis, for comparing a past record against
    /// the current benchmark.
    pub fn from_record(record: &DiagnosisRecord) -> Self {
        Self {
            revenue: record.request.monthly_revenue,
            expenses: record.request.monthly_expenses,
            customers: f64::from(record.request.customer_count),
            overall_score: record.result.overall_score,
        }
    }
}

/// Relative difference in percent, `None` when the benchmark average is
/// zero and the ratio is undefined.
pub fn percent_difference(user: f64, average: f64) -> Option<f64> {
    (average != 0.0).then(|| (user - average) / average * 100.0)
}

/// Estimated standing among industry peers, `1..=99`.
///
/// `overall_score` is safety-ascending, so a score above the industry
/// average places the business above the 50th percentile. The mapping is
/// monotone in the score; two points per score point, saturating at the
/// ends.
pub fn estimate_percentile(overall_score: f64, profile: &BenchmarkProfile) -> u8 {
    let raw = 50.0 + 2.0 * (overall_score - profile.average_risk_score);
    raw.round().clamp(1.0, 99.0) as u8
}

const REVENUE_ABOVE: &str = "귀하의 매출은 업종 평균보다 높습니다.";
const REVENUE_BELOW: &str = "귀하의 매출은 업종 평균보다 낮습니다. 판매 전략 점검이 필요합니다.";
const EXPENSES_ABOVE: &str = "지출이 업종 평균보다 높습니다. 비용 구조 점검이 필요합니다.";
const EXPENSES_BELOW: &str = "지출이 업종 평균보다 낮게 유지되고 있습니다.";
const CUSTOMERS_ABOVE: &str = "고객 수가 업종 평균보다 많습니다.";
const CUSTOMERS_BELOW: &str = "고객 수가 평균 이하입니다. 마케팅 강화가 필요합니다.";

/// Compare user metrics against an industry profile. At most one insight
/// per metric, so never more than three.
pub fn compare(user: &UserMetrics, profile: &BenchmarkProfile) -> ComparisonResult {
    let revenue = metric_comparison(user.revenue, profile.metrics.revenue.average);
    let expenses = metric_comparison(user.expenses, profile.metrics.expenses.average);
    let customers = metric_comparison(user.customers, profile.metrics.customers.average);

    let mut insights = Vec::new();
    push_insight(&mut insights, &revenue, REVENUE_ABOVE, REVENUE_BELOW);
    push_insight(&mut insights, &expenses, EXPENSES_ABOVE, EXPENSES_BELOW);
    push_insight(&mut insights, &customers, CUSTOMERS_ABOVE, CUSTOMERS_BELOW);

    ComparisonResult {
        user_score: user.overall_score,
        industry_average: profile.average_risk_score,
        percentile: estimate_percentile(user.overall_score, profile),
        comparison: MetricComparisons {
            revenue,
            expenses,
            customers,
        },
        insights,
    }
}

fn metric_comparison(user: f64, average: f64) -> MetricComparison {
    MetricComparison {
        user,
        average,
        percent_difference: percent_difference(user, average),
    }
}

fn push_insight(insights: &mut Vec<String>, metric: &MetricComparison, above: &str, below: &str) {
    match metric.percent_difference {
        Some(d) if d > 0.0 => insights.push(above.to_string()),
        Some(d) if d < 0.0 => insights.push(below.to_string()),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::profile_for;

    #[test]
    fn percent_difference_doubles_when_twice_the_average() {
        assert_eq!(percent_difference(100.0, 50.0), Some(100.0));
    }

    #[test]
    fn percent_difference_is_signed() {
        assert_eq!(percent_difference(25.0, 50.0), Some(-50.0));
        assert_eq!(percent_difference(50.0, 50.0), Some(0.0));
    }

    #[test]
    fn zero_average_yields_no_difference() {
        assert_eq!(percent_difference(100.0, 0.0), None);
        assert_eq!(percent_difference(0.0, 0.0), None);
    }

    #[test]
    fn percentile_is_fifty_at_the_industry_average() {
        let profile = profile_for(None, None);
        assert_eq!(estimate_percentile(profile.average_risk_score, &profile), 50);
    }

    #[test]
    fn percentile_tracks_the_score() {
        let profile = profile_for(None, None);
        // average_risk_score is 65: 72 scores seven points above average.
        assert_eq!(estimate_percentile(72.0, &profile), 64);
        assert_eq!(estimate_percentile(0.0, &profile), 1);
        assert_eq!(estimate_percentile(100.0, &profile), 99);
    }

    #[test]
    fn percentile_is_monotone_in_the_score() {
        let profile = profile_for(None, None);
        let mut last = 0;
        for score in 0..=100 {
            let p = estimate_percentile(f64::from(score), &profile);
            assert!(p >= last, "percentile dropped at score {score}");
            assert!((1..=99).contains(&p));
            last = p;
        }
    }

    #[test]
    fn compare_fills_every_metric() {
        let profile = profile_for(Some("cafe"), None);
        let user = UserMetrics {
            revenue: profile.metrics.revenue.average * 2.0,
            expenses: profile.metrics.expenses.average,
            customers: profile.metrics.customers.average / 2.0,
            overall_score: 72.0,
        };
        let result = compare(&user, &profile);

        assert_eq!(result.user_score, 72.0);
        assert_eq!(result.industry_average, profile.average_risk_score);
        assert_eq!(result.comparison.revenue.percent_difference, Some(100.0));
        assert_eq!(result.comparison.expenses.percent_difference, Some(0.0));
        assert_eq!(result.comparison.customers.percent_difference, Some(-50.0));
    }

    #[test]
    fn insights_cover_notable_metrics_only() {
        let profile = profile_for(None, None);
        let user = UserMetrics {
            revenue: profile.metrics.revenue.average + 1.0,
            expenses: profile.metrics.expenses.average,
            customers: profile.metrics.customers.average - 1.0,
            overall_score: 60.0,
        };
        let insights = compare(&user, &profile).insights;
        assert_eq!(
            insights,
            [
                "귀하의 매출은 업종 평균보다 높습니다.",
                "고객 수가 평균 이하입니다. 마케팅 강화가 필요합니다.",
            ]
        );
    }

    #[test]
    fn insights_never_exceed_three() {
        let profile = profile_for(None, None);
        let user = UserMetrics {
            revenue: 1.0,
            expenses: 1.0,
            customers: 1.0,
            overall_score: 10.0,
        };
        assert_eq!(compare(&user, &profile).insights.len(), 3);
    }
}
