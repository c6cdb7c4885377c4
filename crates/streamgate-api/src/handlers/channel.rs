//! Live TV channel handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use streamgate_core::error::AppError;
use streamgate_entity::catalog::channel::ChannelInput;

use crate::dto::response::{ApiResponse, ChannelPayload, ChannelsPayload, StatusMessage};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/channels
pub async fn list_channels(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<ChannelsPayload>>, AppError> {
    let channels = state.channel_service.list().await?;
    Ok(Json(ApiResponse::ok(ChannelsPayload { channels })))
}

/// GET /api/channels/{id}
pub async fn get_channel(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ChannelPayload>>, AppError> {
    let channel = state.channel_service.get(id).await?;
    Ok(Json(ApiResponse::ok(ChannelPayload { channel })))
}

/// POST /api/channels
pub async fn create_channel(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<ChannelInput>,
) -> Result<Json<ApiResponse<ChannelPayload>>, AppError> {
    let channel = state.channel_service.create(auth.context(), input).await?;
    Ok(Json(ApiResponse::ok(ChannelPayload { channel })))
}

/// PUT /api/channels/{id}
pub async fn update_channel(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(input): Json<ChannelInput>,
) -> Result<Json<ApiResponse<ChannelPayload>>, AppError> {
    let channel = state
        .channel_service
        .update(auth.context(), id, input)
        .await?;
    Ok(Json(ApiResponse::ok(ChannelPayload { channel })))
}

/// DELETE /api/channels/{id}
pub async fn delete_channel(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<StatusMessage>>, AppError> {
    state.channel_service.delete(auth.context(), id).await?;
    Ok(Json(ApiResponse::ok(StatusMessage {
        message: "Channel deleted".to_string(),
    })))
}
