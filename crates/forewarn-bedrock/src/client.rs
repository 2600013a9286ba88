//! Shared AWS SDK configuration loading.

use std::env;

use aws_config::{BehaviorVersion, Region, SdkConfig};

/// Region used when `AWS_REGION` is unset. The service runs out of Seoul.
pub const DEFAULT_REGION: &str = "ap-northeast-2";

/// Inference profile used when `FOREWARN_MODEL_ID` is unset. The Converse
/// API requires an inference profile ID, so the APAC-scoped profile is the
/// default, not the bare foundation model ID.
pub const DEFAULT_MODEL_ID: &str = "apac.anthropic.claude-sonnet-4-20250514-v1:0";

/// Load the AWS SDK config, honoring `AWS_REGION` when present.
pub async fn load_config() -> SdkConfig {
    let region = env::var("AWS_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string());
    aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region))
        .load()
        .await
}

/// Model to invoke, from `FOREWARN_MODEL_ID` or the default profile.
pub fn model_id_from_env() -> String {
    env::var("FOREWARN_MODEL_ID").unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string())
}
