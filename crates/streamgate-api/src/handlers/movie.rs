//! Movie catalog handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use streamgate_core::error::AppError;
use streamgate_entity::catalog::movie::MovieInput;

use crate::dto::response::{ApiResponse, MoviePayload, MoviesPayload, StatusMessage};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/movies
pub async fn list_movies(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<MoviesPayload>>, AppError> {
    let movies = state.movie_service.list().await?;
    Ok(Json(ApiResponse::ok(MoviesPayload { movies })))
}

/// GET /api/movies/{id}
pub async fn get_movie(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MoviePayload>>, AppError> {
    let movie = state.movie_service.get(id).await?;
    Ok(Json(ApiResponse::ok(MoviePayload { movie })))
}

/// POST /api/movies
pub async fn create_movie(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<MovieInput>,
) -> Result<Json<ApiResponse<MoviePayload>>, AppError> {
    let movie = state.movie_service.create(auth.context(), input).await?;
    Ok(Json(ApiResponse::ok(MoviePayload { movie })))
}

/// PUT /api/movies/{id}
pub async fn update_movie(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(input): Json<MovieInput>,
) -> Result<Json<ApiResponse<MoviePayload>>, AppError> {
    let movie = state
        .movie_service
        .update(auth.context(), id, input)
        .await?;
    Ok(Json(ApiResponse::ok(MoviePayload { movie })))
}

/// DELETE /api/movies/{id}
pub async fn delete_movie(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<StatusMessage>>, AppError> {
    state.movie_service.delete(auth.context(), id).await?;
    Ok(Json(ApiResponse::ok(StatusMessage {
        message: "Movie deleted".to_string(),
    })))
}
