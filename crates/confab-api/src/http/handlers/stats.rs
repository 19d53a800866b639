//! Instance statistics endpoint.
//!
//! GET /api/v1/stats - Aggregate counts across users, sessions, and messages.

use std::time::Instant;

use axum::Json;
use axum::extract::State;
use uuid::Uuid;

use confab_core::chat::repository::ChatRepository;
use confab_core::user::repository::UserRepository;

use crate::http::error::AppError;
use crate::http::extractors::identity::CallerIdentity;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/stats - aggregate instance statistics.
pub async fn get_stats(
    State(state): State<AppState>,
    _identity: CallerIdentity,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let total_users = state.user_directory.user_repo().count_users().await?;
    let total_sessions = state.chat_service.chat_repo().count_sessions().await?;
    let total_messages = state.chat_service.chat_repo().count_messages().await?;

    let data = serde_json::json!({
        "total_users": total_users,
        "total_sessions": total_sessions,
        "total_messages": total_messages,
        "provider_model": state.config.provider_model,
    });

    let response = ApiResponse::success(data, request_id, start.elapsed().as_millis() as u64)
        .with_link("self", "/api/v1/stats");

    Ok(Json(response))
}
