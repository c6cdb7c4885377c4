//! Episode handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use uuid::Uuid;

use streamgate_core::error::AppError;
use streamgate_entity::catalog::episode::EpisodeInput;

use crate::dto::response::{ApiResponse, EpisodePayload, EpisodesPayload, StatusMessage};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// Query filter for episode listing. `seasonId` wins when both are
/// present; with neither, every episode is returned.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeListQuery {
    /// Restrict to one season.
    #[serde(default)]
    pub season_id: Option<Uuid>,
    /// Restrict to one series, across all its seasons.
    #[serde(default)]
    pub series_id: Option<Uuid>,
}

/// GET /api/episodes, optionally filtered with ?seasonId=… or ?seriesId=…
pub async fn list_episodes(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<EpisodeListQuery>,
) -> Result<Json<ApiResponse<EpisodesPayload>>, AppError> {
    let episodes = match (query.season_id, query.series_id) {
        (Some(season_id), _) => state.episode_service.list_by_season(season_id).await?,
        (None, Some(series_id)) => state.episode_service.list_by_series(series_id).await?,
        (None, None) => state.episode_service.list_all().await?,
    };
    Ok(Json(ApiResponse::ok(EpisodesPayload { episodes })))
}

/// GET /api/episodes/{id}
pub async fn get_episode(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<EpisodePayload>>, AppError> {
    let episode = state.episode_service.get(id).await?;
    Ok(Json(ApiResponse::ok(EpisodePayload { episode })))
}

/// POST /api/episodes
pub async fn create_episode(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<EpisodeInput>,
) -> Result<Json<ApiResponse<EpisodePayload>>, AppError> {
    let episode = state.episode_service.create(auth.context(), input).await?;
    Ok(Json(ApiResponse::ok(EpisodePayload { episode })))
}

/// PUT /api/episodes/{id}
pub async fn update_episode(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(input): Json<EpisodeInput>,
) -> Result<Json<ApiResponse<EpisodePayload>>, AppError> {
    let episode = state
        .episode_service
        .update(auth.context(), id, input)
        .await?;
    Ok(Json(ApiResponse::ok(EpisodePayload { episode })))
}

/// DELETE /api/episodes/{id}
pub async fn delete_episode(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<StatusMessage>>, AppError> {
    state.episode_service.delete(auth.context(), id).await?;
    Ok(Json(ApiResponse::ok(StatusMessage {
        message: "Episode deleted".to_string(),
    })))
}
