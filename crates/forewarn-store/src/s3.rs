//! S3-backed diagnosis store.
//!
//! One JSON object per record under `diagnoses/{user}/`, keyed so that a
//! lexicographic listing is chronological (see [`forewarn_core::keys`]).
//! A process-local cursor per user keeps assigned creation times strictly
//! increasing even when the wall clock stalls between appends.

use std::collections::HashMap;
use std::env;
use std::sync::Mutex;

use async_trait::async_trait;
use jiff::Timestamp;
use serde::{de::DeserializeOwned, Serialize};
use tracing::info;
use uuid::Uuid;

use forewarn_core::{keys, DiagnosisRecord, DiagnosisRequest, DiagnosisResult, ANONYMOUS_USER};

use crate::error::StoreError;
use crate::objects;
use crate::store::{next_created_at, DiagnosisStore};

const DEFAULT_BUCKET: &str = "forewarn-diagnoses";

pub struct S3Store {
    client: aws_sdk_s3::Client,
    bucket: String,
    cursors: Mutex<HashMap<String, Timestamp>>,
}

impl S3Store {
    pub fn new(config: &aws_config::SdkConfig, bucket: impl Into<String>) -> Self {
        Self {
            client: aws_sdk_s3::Client::new(config),
            bucket: bucket.into(),
            cursors: Mutex::new(HashMap::new()),
        }
    }

    /// Bucket name from `FOREWARN_BUCKET`, or the default.
    pub fn bucket_from_env() -> String {
        env::var("FOREWARN_BUCKET").unwrap_or_else(|_| DEFAULT_BUCKET.to_string())
    }

    async fn load_json<T: DeserializeOwned>(&self, key: &str) -> Result<T, StoreError> {
        let body = objects::get_object(&self.client, &self.bucket, key).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn save_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let body = serde_json::to_vec_pretty(value)?;
        objects::put_object(
            &self.client,
            &self.bucket,
            key,
            body,
            Some("application/json"),
        )
        .await
    }

    /// Assign the next creation time for this user. The cursor lock is not
    /// held across the S3 call; key order alone carries the ordering.
    fn assign_created_at(&self, user_id: &str) -> Timestamp {
        let mut cursors = self.cursors.lock().unwrap();
        let created_at = next_created_at(cursors.get(user_id).copied());
        cursors.insert(user_id.to_string(), created_at);
        created_at
    }
}

#[async_trait]
impl DiagnosisStore for S3Store {
    async fn append(
        &self,
        request: DiagnosisRequest,
        result: DiagnosisResult,
    ) -> Result<DiagnosisRecord, StoreError> {
        let created_at = self.assign_created_at(&request.user_id);
        let record = DiagnosisRecord {
            id: Uuid::new_v4(),
            user_id: request.user_id.clone(),
            request,
            result,
            created_at,
        };

        let key = keys::diagnosis_record(&record.user_id, record.created_at, record.id);
        self.save_json(&key, &record).await?;

        info!(record_id = %record.id, key, "diagnosis record stored");
        Ok(record)
    }

    async fn history(&self, user_id: &str) -> Result<Vec<DiagnosisRecord>, StoreError> {
        if user_id == ANONYMOUS_USER {
            return Ok(Vec::new());
        }

        let prefix = keys::user_history_prefix(user_id);
        let keys = objects::list_objects(&self.client, &self.bucket, &prefix).await?;

        let mut records = Vec::with_capacity(keys.len());
        for key in &keys {
            records.push(self.load_json(key).await?);
        }

        info!(count = records.len(), "diagnosis history loaded");
        Ok(records)
    }

    async fn latest_two(&self, user_id: &str) -> Result<Vec<DiagnosisRecord>, StoreError> {
        if user_id == ANONYMOUS_USER {
            return Ok(Vec::new());
        }

        let prefix = keys::user_history_prefix(user_id);
        let keys = objects::list_objects(&self.client, &self.bucket, &prefix).await?;

        let mut records = Vec::new();
        for key in keys.iter().rev().take(2) {
            records.push(self.load_json(key).await?);
        }
        Ok(records)
    }
}
