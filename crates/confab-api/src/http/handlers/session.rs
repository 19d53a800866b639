//! Session HTTP handlers.
//!
//! Endpoints:
//! - GET    /api/v1/sessions               - List the caller's sessions
//! - GET    /api/v1/sessions/{id}/messages - Get messages for a session
//! - DELETE /api/v1/sessions/{id}          - Delete a session

use std::time::Instant;

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use confab_core::chat::repository::ChatRepository;
use confab_types::chat::SessionId;

use crate::http::error::AppError;
use crate::http::extractors::identity::CallerIdentity;
use crate::http::response::ApiResponse;
use crate::state::AppState;

fn parse_session_id(s: &str) -> Result<SessionId, AppError> {
    s.parse::<SessionId>()
        .map_err(|_| AppError::Validation(format!("Invalid session id: {s}")))
}

/// GET /api/v1/sessions - list the caller's sessions, newest first.
pub async fn list_sessions(
    State(state): State<AppState>,
    identity: CallerIdentity,
) -> Result<Json<ApiResponse<Vec<serde_json::Value>>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let user = state.user_directory.sync_user(&identity.0).await?;
    let sessions = state.chat_service.list_sessions(&user.id).await?;

    let mut data = Vec::with_capacity(sessions.len());
    for session in &sessions {
        let message_count = state
            .chat_service
            .chat_repo()
            .get_message_count(&session.id)
            .await?;
        data.push(serde_json::json!({
            "id": session.id.to_string(),
            "title": session.title,
            "created_at": session.created_at.to_rfc3339(),
            "message_count": message_count,
        }));
    }

    let response = ApiResponse::success(data, request_id, start.elapsed().as_millis() as u64)
        .with_link("self", "/api/v1/sessions");

    Ok(Json(response))
}

/// GET /api/v1/sessions/{id}/messages - full transcript, oldest first.
pub async fn get_messages(
    State(state): State<AppState>,
    _identity: CallerIdentity,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Vec<serde_json::Value>>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let session_id = parse_session_id(&id)?;
    let messages = state.conversation_service.transcript(&session_id).await?;

    let data: Vec<serde_json::Value> = messages
        .iter()
        .map(|m| {
            serde_json::json!({
                "id": m.id.to_string(),
                "role": m.role,
                "content": m.content,
                "created_at": m.created_at.to_rfc3339(),
            })
        })
        .collect();

    let response = ApiResponse::success(data, request_id, start.elapsed().as_millis() as u64)
        .with_link("self", &format!("/api/v1/sessions/{id}/messages"))
        .with_link("sessions", "/api/v1/sessions");

    Ok(Json(response))
}

/// DELETE /api/v1/sessions/{id} - delete a session and its messages.
pub async fn delete_session(
    State(state): State<AppState>,
    _identity: CallerIdentity,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let session_id = parse_session_id(&id)?;
    state.chat_service.delete_session(&session_id).await?;

    let response = ApiResponse::success(
        serde_json::json!({"deleted": true}),
        request_id,
        start.elapsed().as_millis() as u64,
    )
    .with_link("sessions", "/api/v1/sessions");

    Ok(Json(response))
}
