//! Score clamping and alert classification.

use forewarn_core::{AlertLevel, DiagnosisResult, RiskComponent, RiskComponents};

use crate::extract::Assessment;

/// Clamps every score into `0.0..=100.0` and derives the alert level from
/// the clamped overall score. The level in the result always agrees with the
/// threshold table in [`AlertLevel::from_score`]; the model's self-reported
/// level is only cross-checked, never trusted.
pub fn finalize(assessment: Assessment) -> DiagnosisResult {
    let overall_score = clamp_score(assessment.overall_score);
    let alert_level = AlertLevel::from_score(overall_score);

    match AlertLevel::parse_reported(&assessment.reported_level) {
        Some(reported) if reported != alert_level => {
            tracing::warn!(
                reported = reported.as_str(),
                derived = alert_level.as_str(),
                overall_score,
                "self-reported risk level disagrees with score, keeping derived level"
            );
        }
        Some(_) => {}
        None => {
            tracing::warn!(
                reported = %assessment.reported_level,
                "self-reported risk level is not a known level"
            );
        }
    }

    DiagnosisResult {
        overall_score,
        alert_level,
        components: RiskComponents {
            sales: clamp_component(assessment.components.sales),
            customer: clamp_component(assessment.components.customer),
            market: clamp_component(assessment.components.market),
        },
        recommendations: assessment.recommendations,
        insights: assessment.insights,
    }
}

fn clamp_component(component: RiskComponent) -> RiskComponent {
    RiskComponent {
        score: clamp_score(component.score),
        trend: component.trend,
    }
}

/// Non-finite scores collapse to the neutral midpoint instead of poisoning
/// the comparison math downstream.
fn clamp_score(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        50.0
    }
}
