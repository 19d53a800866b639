//! Chat message endpoint.
//!
//! POST /api/v1/chat/messages
//!
//! Accepts a user message, optionally targeted at an existing session,
//! and returns the assistant's reply together with the session id the
//! turn was recorded under. When no session id is supplied a fresh
//! session is created for the caller.

use std::time::Instant;

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use uuid::Uuid;

use confab_types::chat::SessionId;

use crate::http::error::AppError;
use crate::http::extractors::identity::CallerIdentity;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Request body for sending a chat message.
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    /// The user's message text.
    pub message: String,
    /// Target session. Omit to start a new conversation.
    pub session_id: Option<String>,
}

/// POST /api/v1/chat/messages - run one conversation turn.
pub async fn send_message(
    State(state): State<AppState>,
    identity: CallerIdentity,
    Json(body): Json<SendMessageRequest>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let session_id = body
        .session_id
        .as_deref()
        .map(|s| {
            s.parse::<SessionId>()
                .map_err(|_| AppError::Validation(format!("Invalid session id: {s}")))
        })
        .transpose()?;

    let outcome = state
        .conversation_service
        .send_message(&identity.0, &body.message, session_id)
        .await?;

    let data = serde_json::json!({
        "response": outcome.reply,
        "session_id": outcome.session_id.to_string(),
    });

    let response = ApiResponse::success(data, request_id, start.elapsed().as_millis() as u64)
        .with_link("self", "/api/v1/chat/messages")
        .with_link(
            "messages",
            &format!("/api/v1/sessions/{}/messages", outcome.session_id),
        );

    Ok(Json(response))
}
