//! The consulting chat: multi-turn conversation grounded in the user's
//! latest diagnosis context.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::BedrockError;
use crate::narrative::{converse_bounded, NarrativeGenerator, CHAT_PARAMS};
use crate::prompt;

/// A single message in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

/// Diagnosis context the dashboard sends along with a chat conversation.
/// Every field is optional free text; missing fields render as "정보 없음"
/// in the system prompt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatContext {
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub business_period: Option<String>,
    #[serde(default)]
    pub sales_change: Option<String>,
    #[serde(default)]
    pub customer_change: Option<String>,
    #[serde(default)]
    pub delivery_ratio: Option<String>,
}

/// Send the conversation to the model and return the assistant's reply.
/// Single bounded attempt; chat failures surface directly to the caller.
pub async fn consult(
    generator: &dyn NarrativeGenerator,
    messages: &[ChatMessage],
    context: Option<&ChatContext>,
) -> Result<String, BedrockError> {
    let system_prompt = prompt::build_chat_system_prompt(context);
    let reply = converse_bounded(generator, CHAT_PARAMS, &system_prompt, messages).await?;
    info!(turns = messages.len(), chars = reply.len(), "chat reply complete");
    Ok(reply)
}
