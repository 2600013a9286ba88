use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::diagnosis::DiagnosisResult;
use super::request::DiagnosisRequest;

/// One persisted diagnosis. `id` and `created_at` are assigned by the store
/// at append time, never by the caller; records are immutable once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DiagnosisRecord {
    pub id: Uuid,
    pub user_id: String,
    pub request: DiagnosisRequest,
    pub result: DiagnosisResult,
    pub created_at: Timestamp,
}
