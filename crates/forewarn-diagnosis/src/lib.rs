//! forewarn-diagnosis
//!
//! Turns a free-form model narrative into a classified [`DiagnosisResult`].
//! The pipeline never fails: a narrative that yields no usable JSON
//! collapses to the deterministic fallback diagnosis instead of an error.
//!
//! [`DiagnosisResult`]: forewarn_core::DiagnosisResult

pub mod classify;
pub mod error;
pub mod extract;

pub use classify::finalize;
pub use error::ExtractError;
pub use extract::{fallback_diagnosis, parse_assessment, Assessment};

use forewarn_core::DiagnosisResult;

/// Full narrative-to-result pipeline. Parsed assessments are clamped and
/// classified; anything unusable becomes [`fallback_diagnosis`], which
/// carries its own pinned alert level.
pub fn diagnose_narrative(narrative: &str) -> DiagnosisResult {
    match extract::parse_assessment(narrative) {
        Ok(assessment) => classify::finalize(assessment),
        Err(err) => {
            tracing::warn!(error = %err, "narrative yielded no usable assessment, using fallback diagnosis");
            extract::fallback_diagnosis()
        }
    }
}
