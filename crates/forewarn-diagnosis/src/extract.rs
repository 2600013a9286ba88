//! Fault-tolerant extraction of a structured assessment from a model
//! narrative.
//!
//! The model is prompted to answer with a single JSON object, usually inside
//! a ```json fence, but replies routinely wrap it in prose or drop the fence.
//! Extraction therefore cascades: fenced block first, then the widest brace
//! span, then a strict parse of whichever candidate was found. Callers that
//! must not fail substitute [`fallback_diagnosis`] for any extraction error.
//! The model's self-reported risk level is carried along for cross-checking,
//! but the alert level is derived from the score downstream.

use serde::Deserialize;
use serde_json::Value;

use forewarn_core::{
    AlertLevel, DiagnosisResult, Priority, Recommendation, RiskComponent, RiskComponents,
};

use crate::error::ExtractError;

/// Validated but not yet classified assessment. Scores are whatever the
/// model produced; clamping happens in [`crate::classify::finalize`].
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub overall_score: f64,
    /// The model's self-reported risk level, verbatim. Cross-checked against
    /// the derived level during classification, never stored.
    pub reported_level: String,
    pub components: RiskComponents,
    pub recommendations: Vec<Recommendation>,
    pub insights: Vec<String>,
}

// ── Wire shape of the model reply ───────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAssessment {
    overall_score: Option<f64>,
    risk_level: Option<String>,
    components: Option<RawComponents>,
    // Loose values so one malformed entry drops alone instead of failing
    // the whole parse.
    #[serde(default)]
    recommendations: Vec<Value>,
    #[serde(default)]
    insights: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct RawComponents {
    sales: Option<RawComponent>,
    customer: Option<RawComponent>,
    market: Option<RawComponent>,
}

#[derive(Debug, Deserialize)]
struct RawComponent {
    score: Option<f64>,
    #[serde(default)]
    trend: String,
}

#[derive(Debug, Deserialize)]
struct RawRecommendation {
    title: Option<String>,
    description: Option<String>,
    priority: Option<String>,
}

// ── Extraction ──────────────────────────────────────────────────────────────

/// Extracts an assessment from the narrative, surfacing why extraction
/// failed. The diagnosis pipeline never propagates the error; it substitutes
/// [`fallback_diagnosis`] instead.
pub fn parse_assessment(narrative: &str) -> Result<Assessment, ExtractError> {
    let candidate = fenced_json(narrative)
        .or_else(|| brace_span(narrative))
        .ok_or(ExtractError::NoJson)?;
    let raw: RawAssessment = serde_json::from_str(candidate)?;
    assessment_from_raw(raw)
}

/// Body of the first ```json fence, if the narrative has one.
fn fenced_json(text: &str) -> Option<&str> {
    let start = text.find("```json")?;
    let body = &text[start + "```json".len()..];
    let end = body.find("```")?;
    Some(body[..end].trim())
}

/// Widest span from the first `{` to the last `}`.
fn brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

fn assessment_from_raw(raw: RawAssessment) -> Result<Assessment, ExtractError> {
    let overall_score = raw
        .overall_score
        .ok_or(ExtractError::MissingField("overallScore"))?;
    let reported_level = raw
        .risk_level
        .ok_or(ExtractError::MissingField("riskLevel"))?;
    let components = raw
        .components
        .ok_or(ExtractError::MissingField("components"))?;

    Ok(Assessment {
        overall_score,
        reported_level,
        components: RiskComponents {
            sales: component_from_raw(components.sales, "components.sales")?,
            customer: component_from_raw(components.customer, "components.customer")?,
            market: component_from_raw(components.market, "components.market")?,
        },
        recommendations: raw
            .recommendations
            .into_iter()
            .filter_map(|value| serde_json::from_value::<RawRecommendation>(value).ok())
            .filter_map(recommendation_from_raw)
            .collect(),
        insights: raw
            .insights
            .into_iter()
            .filter_map(|value| match value {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
    })
}

fn component_from_raw(
    raw: Option<RawComponent>,
    field: &'static str,
) -> Result<RiskComponent, ExtractError> {
    let raw = raw.ok_or(ExtractError::MissingField(field))?;
    let score = raw.score.ok_or(ExtractError::MissingField(field))?;
    Ok(RiskComponent {
        score,
        trend: raw.trend,
    })
}

/// Recommendations missing a title or description are dropped; an unknown
/// priority label degrades to `MEDIUM` rather than discarding the entry.
fn recommendation_from_raw(raw: RawRecommendation) -> Option<Recommendation> {
    let title = raw.title.filter(|t| !t.trim().is_empty())?;
    let description = raw.description.filter(|d| !d.trim().is_empty())?;
    let priority = raw
        .priority
        .as_deref()
        .and_then(Priority::parse_reported)
        .unwrap_or(Priority::Medium);
    Some(Recommendation {
        title,
        description,
        priority,
    })
}

// ── Fallback ────────────────────────────────────────────────────────────────

const FALLBACK_SCORE: f64 = 50.0;
const FALLBACK_TREND: &str = "분석 중 오류가 발생했습니다.";

/// The deterministic mid-range diagnosis substituted when the narrative is
/// unusable. Every call returns the same value, so two failed diagnoses
/// serialize byte-identically.
///
/// The fallback is a finished [`DiagnosisResult`], never classified: its
/// YELLOW level is part of the fallback contract and is pinned directly,
/// not derived from the midpoint score (which the threshold table would map
/// to ORANGE).
pub fn fallback_diagnosis() -> DiagnosisResult {
    let component = RiskComponent {
        score: FALLBACK_SCORE,
        trend: FALLBACK_TREND.to_owned(),
    };
    DiagnosisResult {
        overall_score: FALLBACK_SCORE,
        alert_level: AlertLevel::Yellow,
        components: RiskComponents {
            sales: component.clone(),
            customer: component.clone(),
            market: component,
        },
        recommendations: vec![Recommendation {
            title: "재분석 필요".to_owned(),
            description: "데이터를 다시 확인해주세요.".to_owned(),
            priority: Priority::Medium,
        }],
        insights: vec!["분석 중 오류가 발생했습니다. 다시 시도해주세요.".to_owned()],
    }
}
