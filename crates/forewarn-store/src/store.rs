//! The store seam and the creation-time discipline shared by backends.

use async_trait::async_trait;
use jiff::{SignedDuration, Timestamp};

use forewarn_core::{DiagnosisRecord, DiagnosisRequest, DiagnosisResult};

use crate::error::StoreError;

/// Append-only store of diagnosis records.
///
/// The store, never the caller, assigns `id` and `created_at` at append
/// time. Within one user, assigned creation times are strictly increasing.
/// Records written under [`forewarn_core::ANONYMOUS_USER`] are accepted but
/// never listed back out.
#[async_trait]
pub trait DiagnosisStore: Send + Sync {
    /// Persist one diagnosis and return the stored record.
    async fn append(
        &self,
        request: DiagnosisRequest,
        result: DiagnosisResult,
    ) -> Result<DiagnosisRecord, StoreError>;

    /// Full history for a user, oldest first.
    async fn history(&self, user_id: &str) -> Result<Vec<DiagnosisRecord>, StoreError>;

    /// Up to two most recent records, newest first. Backends with ordered
    /// listings override this to avoid loading the full history.
    async fn latest_two(&self, user_id: &str) -> Result<Vec<DiagnosisRecord>, StoreError> {
        let mut history = self.history(user_id).await?;
        let tail = history.split_off(history.len().saturating_sub(2));
        Ok(tail.into_iter().rev().collect())
    }
}

/// Next creation time for a user: now, bumped by one nanosecond past the
/// previous record whenever the clock has not advanced.
pub(crate) fn next_created_at(last: Option<Timestamp>) -> Timestamp {
    let now = Timestamp::now();
    match last {
        Some(last) if last >= now => last + SignedDuration::from_nanos(1),
        _ => now,
    }
}
