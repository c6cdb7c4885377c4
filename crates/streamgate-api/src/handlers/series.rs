//! Series catalog handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use streamgate_core::error::AppError;
use streamgate_entity::catalog::series::SeriesInput;

use crate::dto::response::{ApiResponse, SeriesListPayload, SeriesPayload, StatusMessage};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/series — every series with its season/episode tree.
pub async fn list_series(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<SeriesListPayload>>, AppError> {
    let series = state.series_service.list_with_seasons().await?;
    Ok(Json(ApiResponse::ok(SeriesListPayload { series })))
}

/// GET /api/series/{id}
pub async fn get_series(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SeriesPayload>>, AppError> {
    let series = state.series_service.get_with_seasons(id).await?;
    Ok(Json(ApiResponse::ok(SeriesPayload { series })))
}

/// POST /api/series
pub async fn create_series(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<SeriesInput>,
) -> Result<Json<ApiResponse<SeriesPayload>>, AppError> {
    let created = state.series_service.create(auth.context(), input).await?;
    let series = state.series_service.get_with_seasons(created.id).await?;
    Ok(Json(ApiResponse::ok(SeriesPayload { series })))
}

/// PUT /api/series/{id}
pub async fn update_series(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(input): Json<SeriesInput>,
) -> Result<Json<ApiResponse<SeriesPayload>>, AppError> {
    state
        .series_service
        .update(auth.context(), id, input)
        .await?;
    let series = state.series_service.get_with_seasons(id).await?;
    Ok(Json(ApiResponse::ok(SeriesPayload { series })))
}

/// DELETE /api/series/{id}
pub async fn delete_series(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<StatusMessage>>, AppError> {
    state.series_service.delete(auth.context(), id).await?;
    Ok(Json(ApiResponse::ok(StatusMessage {
        message: "Series deleted".to_string(),
    })))
}
