use axum::extract::State;
use axum::{Extension, Json};
use jiff::Timestamp;
use serde::Serialize;
use uuid::Uuid;

use forewarn_bedrock::narrative::generate_diagnosis_narrative;
use forewarn_core::models::trend::TrendAnalysis;
use forewarn_core::{
    AlertLevel, DiagnosisInput, DiagnosisRecord, Recommendation, RiskComponents,
};
use forewarn_diagnosis::diagnose_narrative;

use crate::error::ApiError;
use crate::middleware::identity::Identity;
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnoseResponse {
    pub id: Uuid,
    pub overall_score: f64,
    pub alert_level: AlertLevel,
    pub components: RiskComponents,
    pub recommendations: Vec<Recommendation>,
    pub insights: Vec<String>,
    pub created_at: Timestamp,
}

impl From<DiagnosisRecord> for DiagnoseResponse {
    fn from(record: DiagnosisRecord) -> Self {
        Self {
            id: record.id,
            overall_score: record.result.overall_score,
            alert_level: record.result.alert_level,
            components: record.result.components,
            recommendations: record.result.recommendations,
            insights: record.result.insights,
            created_at: record.created_at,
        }
    }
}

/// The write path: validate, generate the narrative, extract and classify,
/// append. A failed or timed-out narrative degrades to the deterministic
/// fallback diagnosis; only validation and persistence fail the call.
pub async fn diagnose(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(input): Json<DiagnosisInput>,
) -> Result<Json<DiagnoseResponse>, ApiError> {
    let request = input.validate(identity.user_id)?;

    let narrative = match generate_diagnosis_narrative(state.generator.as_ref(), &request).await {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(error = %err, "narrative generation failed, degrading to fallback");
            String::new()
        }
    };

    let result = diagnose_narrative(&narrative);
    let record = state.store.append(request, result).await?;

    Ok(Json(record.into()))
}

/// Full diagnosis history for the signed-in user, oldest first.
pub async fn history(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<Vec<DiagnosisRecord>>, ApiError> {
    if identity.is_anonymous() {
        return Err(ApiError::Unauthorized(
            "diagnosis history requires a signed-in user".to_string(),
        ));
    }
    let records = state.store.history(&identity.user_id).await?;
    Ok(Json(records))
}

/// Score movement between the user's two most recent diagnoses. Fewer than
/// two records is a normal `insufficient_history` outcome, not an error.
pub async fn trend(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<TrendAnalysis>, ApiError> {
    if identity.is_anonymous() {
        return Err(ApiError::Unauthorized(
            "trend analysis requires a signed-in user".to_string(),
        ));
    }
    let latest = state.store.latest_two(&identity.user_id).await?;
    Ok(Json(forewarn_analytics::analyze_history(&latest)))
}
