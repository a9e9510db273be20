//! Axum route handler for the career-advisor chat.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::chat::history::build_chat_messages;
use crate::errors::AppError;
use crate::llm_client::{ChatMessage, CompletionOptions};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
}

/// POST /api/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    request: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = request.map_err(|e| AppError::Validation(e.body_text()))?;
    if request.message.is_empty() {
        return Err(AppError::Validation("Message is required".to_string()));
    }

    let messages = build_chat_messages(&request.history, &request.message);
    let response = state
        .llm
        .complete(&messages, &CompletionOptions::CHAT)
        .await
        .inspect_err(|e| error!("Error in chat: {e}"))?;

    Ok(Json(ChatResponse {
        success: true,
        response,
    }))
}
