//! Direct messaging handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use streamgate_core::error::AppError;

use crate::dto::request::SendMessageRequest;
use crate::dto::response::{ApiResponse, MessagePayload, MessagesPayload, StatusMessage};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/messages — the caller's conversation; admins see all.
pub async fn list_messages(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<MessagesPayload>>, AppError> {
    let messages = state.chat_service.list_messages(auth.context()).await?;
    Ok(Json(ApiResponse::ok(MessagesPayload { messages })))
}

/// POST /api/messages
pub async fn send_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<SendMessageRequest>,
) -> Result<Json<ApiResponse<MessagePayload>>, AppError> {
    let message = state
        .chat_service
        .send_message(auth.context(), &req.content, req.receiver_id)
        .await?;
    Ok(Json(ApiResponse::ok(MessagePayload { message })))
}

/// PUT /api/messages/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<StatusMessage>>, AppError> {
    state.chat_service.mark_read(auth.context(), id).await?;
    Ok(Json(ApiResponse::ok(StatusMessage {
        message: "Message read".to_string(),
    })))
}
