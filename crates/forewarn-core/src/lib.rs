//! forewarn-core
//!
//! Pure domain types, request validation, and store key conventions shared
//! by every Forewarn crate. No AWS or HTTP dependency lives here.

pub mod keys;
pub mod models;

pub use models::diagnosis::{
    AlertLevel, DiagnosisResult, Priority, Recommendation, RiskComponent, RiskComponents,
};
pub use models::record::DiagnosisRecord;
pub use models::request::{DiagnosisInput, DiagnosisRequest, FieldError, ValidationError, ANONYMOUS_USER};
