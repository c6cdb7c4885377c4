//! Season handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use uuid::Uuid;

use streamgate_core::error::AppError;
use streamgate_entity::catalog::season::SeasonInput;

use crate::dto::response::{ApiResponse, SeasonPayload, SeasonsPayload, StatusMessage};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// Query filter for season listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonListQuery {
    /// Restrict to one series; absent means every season.
    #[serde(default)]
    pub series_id: Option<Uuid>,
}

/// GET /api/seasons, optionally filtered with ?seriesId=…
pub async fn list_seasons(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<SeasonListQuery>,
) -> Result<Json<ApiResponse<SeasonsPayload>>, AppError> {
    let seasons = match query.series_id {
        Some(series_id) => state.season_service.list_by_series(series_id).await?,
        None => state.season_service.list_all().await?,
    };
    Ok(Json(ApiResponse::ok(SeasonsPayload { seasons })))
}

/// GET /api/seasons/{id}
pub async fn get_season(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SeasonPayload>>, AppError> {
    let season = state.season_service.get_with_episodes(id).await?;
    Ok(Json(ApiResponse::ok(SeasonPayload { season })))
}

/// POST /api/seasons
pub async fn create_season(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<SeasonInput>,
) -> Result<Json<ApiResponse<SeasonPayload>>, AppError> {
    let created = state.season_service.create(auth.context(), input).await?;
    let season = state.season_service.get_with_episodes(created.id).await?;
    Ok(Json(ApiResponse::ok(SeasonPayload { season })))
}

/// PUT /api/seasons/{id}
pub async fn update_season(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(input): Json<SeasonInput>,
) -> Result<Json<ApiResponse<SeasonPayload>>, AppError> {
    state
        .season_service
        .update(auth.context(), id, input)
        .await?;
    let season = state.season_service.get_with_episodes(id).await?;
    Ok(Json(ApiResponse::ok(SeasonPayload { season })))
}

/// DELETE /api/seasons/{id}
pub async fn delete_season(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<StatusMessage>>, AppError> {
    state.season_service.delete(auth.context(), id).await?;
    Ok(Json(ApiResponse::ok(StatusMessage {
        message: "Season deleted".to_string(),
    })))
}
