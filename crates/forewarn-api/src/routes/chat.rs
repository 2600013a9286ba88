use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use forewarn_bedrock::{consult, ChatContext, ChatMessage};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub context: Option<ChatContext>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub message: String,
}

/// Consultation chat. Unlike diagnosis there is no meaningful fallback
/// reply, so generation failures surface as 502.
pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    if req.messages.is_empty() {
        return Err(ApiError::BadRequest("messages must not be empty".to_string()));
    }

    let message = consult(state.generator.as_ref(), &req.messages, req.context.as_ref()).await?;
    Ok(Json(ChatResponse { message }))
}
