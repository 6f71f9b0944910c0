//! # Chat API
//!
//! Backs the floating chat widget. Replies come from the placeholder
//! responder; nothing is stored.

use axum::{extract::State, Json};
use portfolio_core::chat::ChatMessage;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::SharedState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatRequest {
    message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChatMessageResponse {
    text: String,
    is_bot: bool,
}

impl From<ChatMessage> for ChatMessageResponse {
    fn from(message: ChatMessage) -> Self {
        Self {
            text: message.text,
            is_bot: message.is_bot,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChatResponse {
    /// Messages to append to the transcript; empty for blank input
    messages: Vec<ChatMessageResponse>,
}

/// Send a chat message
#[utoipa::path(
    post,
    path = "/api/v1/chat",
    tag = "chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Messages to append to the transcript", body = ChatResponse)
    )
)]
pub async fn send_message(
    State(state): State<SharedState>,
    Json(req): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let messages = state.chat.respond(&req.message);
    tracing::debug!(replies = messages.len(), "Chat message handled");

    Json(ChatResponse {
        messages: messages.into_iter().map(ChatMessageResponse::from).collect(),
    })
}
