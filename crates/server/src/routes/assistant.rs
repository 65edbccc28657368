use crate::chat::ChatIntent;
use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub intent: ChatIntent,
    pub reply: &'static str,
}

/// Classify a chat message and return the matching guidance
pub async fn chat(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<ChatRequest>,
) -> ServerResult<impl IntoResponse> {
    let message = request.message.trim();
    if message.is_empty() {
        return Err(ServerError::BadRequest("message must not be empty".into()));
    }

    let intent = state
        .classifier
        .classify(message)
        .await
        .map_err(|err| ServerError::Chat(err.to_string()))?;

    tracing::debug!(intent = ?intent, "chat_classified");

    Ok(Json(ChatResponse {
        intent,
        reply: intent.reply(),
    }))
}
