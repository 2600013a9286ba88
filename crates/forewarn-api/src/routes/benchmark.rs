use axum::extract::Query;
use axum::Json;
use serde::Deserialize;

use forewarn_analytics::{compare, profile_for, UserMetrics};
use forewarn_core::models::benchmark::{BenchmarkProfile, ComparisonResult};

#[derive(Deserialize)]
pub struct BenchmarkQuery {
    pub industry: Option<String>,
    pub region: Option<String>,
}

/// Benchmark profile from the built-in catalog. Unknown industries fall
/// back to the nationwide default, never a 404.
pub async fn get_benchmark(Query(query): Query<BenchmarkQuery>) -> Json<BenchmarkProfile> {
    Json(profile_for(query.industry.as_deref(), query.region.as_deref()))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    pub industry: Option<String>,
    pub region: Option<String>,
    pub revenue: f64,
    pub expenses: f64,
    pub customers: f64,
    pub risk_score: f64,
}

/// Compare caller metrics against the matching industry profile. Derived
/// and ephemeral; nothing is stored.
pub async fn compare_benchmark(Json(req): Json<CompareRequest>) -> Json<ComparisonResult> {
    let profile = profile_for(req.industry.as_deref(), req.region.as_deref());
    let user = UserMetrics {
        revenue: req.revenue,
        expenses: req.expenses,
        customers: req.customers,
        overall_score: req.risk_score,
    };
    Json(compare(&user, &profile))
}
