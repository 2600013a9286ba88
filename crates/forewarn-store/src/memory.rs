//! In-memory store backend for local development and tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use forewarn_core::{DiagnosisRecord, DiagnosisRequest, DiagnosisResult, ANONYMOUS_USER};

use crate::error::StoreError;
use crate::store::{next_created_at, DiagnosisStore};

/// Keeps each user's records in append order behind one lock.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<String, Vec<DiagnosisRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DiagnosisStore for MemoryStore {
    async fn append(
        &self,
        request: DiagnosisRequest,
        result: DiagnosisResult,
    ) -> Result<DiagnosisRecord, StoreError> {
        let mut records = self.records.lock().unwrap();
        let user_records = records.entry(request.user_id.clone()).or_default();
        let created_at = next_created_at(user_records.last().map(|r| r.created_at));
        let record = DiagnosisRecord {
            id: Uuid::new_v4(),
            user_id: request.user_id.clone(),
            request,
            result,
            created_at,
        };
        user_records.push(record.clone());
        Ok(record)
    }

    async fn history(&self, user_id: &str) -> Result<Vec<DiagnosisRecord>, StoreError> {
        if user_id == ANONYMOUS_USER {
            return Ok(Vec::new());
        }
        let records = self.records.lock().unwrap();
        Ok(records.get(user_id).cloned().unwrap_or_default())
    }
}
