//! Movie catalog management.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use streamgate_core::error::AppError;
use streamgate_database::repositories::movie::MovieRepository;
use streamgate_entity::catalog::movie::{Movie, MovieInput};

use crate::context::RequestContext;

use super::require_admin;

/// Handles movie catalog operations.
#[derive(Debug, Clone)]
pub struct MovieService {
    /// Movie repository.
    movie_repo: Arc<MovieRepository>,
}

impl MovieService {
    /// Creates a new movie service.
    pub fn new(movie_repo: Arc<MovieRepository>) -> Self {
        Self { movie_repo }
    }

    /// Lists all movies, newest first.
    pub async fn list(&self) -> Result<Vec<Movie>, AppError> {
        self.movie_repo.find_all().await
    }

    /// Gets a single movie by ID.
    pub async fn get(&self, id: Uuid) -> Result<Movie, AppError> {
        self.movie_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Movie not found"))
    }

    /// Creates a movie.
    pub async fn create(&self, ctx: &RequestContext, input: MovieInput) -> Result<Movie, AppError> {
        require_admin(ctx)?;
        validate(&input)?;

        let movie = self.movie_repo.create(&input).await?;
        info!(admin_id = %ctx.user_id(), movie_id = %movie.id, title = %movie.title, "Movie created");
        Ok(movie)
    }

    /// Replaces a movie's fields.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        input: MovieInput,
    ) -> Result<Movie, AppError> {
        require_admin(ctx)?;
        validate(&input)?;

        let movie = self
            .movie_repo
            .update(id, &input)
            .await?
            .ok_or_else(|| AppError::not_found("Movie not found"))?;

        info!(admin_id = %ctx.user_id(), movie_id = %id, "Movie updated");
        Ok(movie)
    }

    /// Deletes a movie.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        require_admin(ctx)?;

        if !self.movie_repo.delete(id).await? {
            return Err(AppError::not_found("Movie not found"));
        }

        info!(admin_id = %ctx.user_id(), movie_id = %id, "Movie deleted");
        Ok(())
    }
}

fn validate(input: &MovieInput) -> Result<(), AppError> {
    if input.title.trim().is_empty() {
        return Err(AppError::validation("Title is required"));
    }
    if input.video_url.trim().is_empty() {
        return Err(AppError::validation("Video URL is required"));
    }
    Ok(())
}
