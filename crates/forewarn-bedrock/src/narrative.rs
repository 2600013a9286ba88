//! Narrative generation over the Bedrock Converse API.
//!
//! The diagnosis flow asks the model for a Korean consulting narrative
//! carrying a JSON assessment. One attempt is bounded by
//! [`NARRATIVE_TIMEOUT`]; a failed or timed-out attempt is retried exactly
//! once after [`RETRY_BACKOFF`]. Callers decide what a second failure means
//! (the diagnosis route degrades to an empty narrative, chat surfaces the
//! error).

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message, SystemContentBlock,
};
use tracing::{info, warn};
use uuid::Uuid;

use forewarn_core::DiagnosisRequest;

use crate::chat::{ChatMessage, ChatRole};
use crate::error::BedrockError;
use crate::prompt;

pub const NARRATIVE_TIMEOUT: Duration = Duration::from_secs(20);
pub const RETRY_BACKOFF: Duration = Duration::from_millis(400);

/// Sampling parameters for one Converse call.
#[derive(Debug, Clone, Copy)]
pub struct GenerationParams {
    pub max_tokens: i32,
    pub temperature: f32,
}

/// Diagnosis narratives get room for the full JSON assessment.
pub const DIAGNOSIS_PARAMS: GenerationParams = GenerationParams {
    max_tokens: 1500,
    temperature: 0.7,
};

/// Chat replies are capped short; the prompt asks for 3-5 sentences.
pub const CHAT_PARAMS: GenerationParams = GenerationParams {
    max_tokens: 500,
    temperature: 0.7,
};

/// Seam between the pipeline and the model. The production implementation
/// is [`BedrockGenerator`]; tests script their own.
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    async fn converse(
        &self,
        params: GenerationParams,
        system_prompt: &str,
        messages: &[ChatMessage],
    ) -> Result<String, BedrockError>;
}

/// Generate the diagnosis narrative for a validated request.
pub async fn generate_diagnosis_narrative(
    generator: &dyn NarrativeGenerator,
    request: &DiagnosisRequest,
) -> Result<String, BedrockError> {
    let generation_id = Uuid::new_v4();
    info!(generation_id = %generation_id, industry = %request.industry, "starting diagnosis narrative");

    let messages = [ChatMessage {
        role: ChatRole::User,
        content: prompt::build_diagnosis_message(request),
    }];
    let text = converse_with_retry(
        generator,
        DIAGNOSIS_PARAMS,
        prompt::DIAGNOSIS_SYSTEM_PROMPT,
        &messages,
    )
    .await?;

    info!(generation_id = %generation_id, chars = text.len(), "diagnosis narrative complete");
    Ok(text)
}

/// One bounded attempt, then exactly one more after a short backoff.
pub async fn converse_with_retry(
    generator: &dyn NarrativeGenerator,
    params: GenerationParams,
    system_prompt: &str,
    messages: &[ChatMessage],
) -> Result<String, BedrockError> {
    match converse_bounded(generator, params, system_prompt, messages).await {
        Ok(text) => Ok(text),
        Err(first) => {
            warn!(error = %first, "narrative attempt failed, retrying once");
            tokio::time::sleep(RETRY_BACKOFF).await;
            converse_bounded(generator, params, system_prompt, messages).await
        }
    }
}

/// Single attempt bounded by [`NARRATIVE_TIMEOUT`].
pub async fn converse_bounded(
    generator: &dyn NarrativeGenerator,
    params: GenerationParams,
    system_prompt: &str,
    messages: &[ChatMessage],
) -> Result<String, BedrockError> {
    tokio::time::timeout(
        NARRATIVE_TIMEOUT,
        generator.converse(params, system_prompt, messages),
    )
    .await
    .map_err(|_| BedrockError::Timeout(NARRATIVE_TIMEOUT))?
}

/// Production generator backed by the Bedrock Converse API.
pub struct BedrockGenerator {
    client: aws_sdk_bedrockruntime::Client,
    model_id: String,
}

impl BedrockGenerator {
    pub fn new(config: &aws_config::SdkConfig, model_id: impl Into<String>) -> Self {
        Self {
            client: aws_sdk_bedrockruntime::Client::new(config),
            model_id: model_id.into(),
        }
    }
}

#[async_trait]
impl NarrativeGenerator for BedrockGenerator {
    async fn converse(
        &self,
        params: GenerationParams,
        system_prompt: &str,
        messages: &[ChatMessage],
    ) -> Result<String, BedrockError> {
        let mut converse_messages: Vec<Message> = Vec::new();
        for msg in messages {
            let role = match msg.role {
                ChatRole::User => ConversationRole::User,
                ChatRole::Assistant => ConversationRole::Assistant,
            };
            let message = Message::builder()
                .role(role)
                .content(ContentBlock::Text(msg.content.clone()))
                .build()
                .map_err(|e| BedrockError::Invocation(e.to_string()))?;
            converse_messages.push(message);
        }

        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .system(SystemContentBlock::Text(system_prompt.to_string()))
            .set_messages(Some(converse_messages))
            .inference_config(
                InferenceConfiguration::builder()
                    .max_tokens(params.max_tokens)
                    .temperature(params.temperature)
                    .build(),
            )
            .send()
            .await
            .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

        let output_message = response
            .output()
            .and_then(|o| o.as_message().ok())
            .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

        let response_text = output_message
            .content()
            .iter()
            .filter_map(|block| {
                if let ContentBlock::Text(text) = block {
                    Some(text.as_str())
                } else {
                    None
                }
            })
            .collect::<Vec<_>>()
            .join("");

        Ok(response_text)
    }
}
