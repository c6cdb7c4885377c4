//! Movie repository implementation.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use streamgate_core::error::{AppError, ErrorKind};
use streamgate_core::result::AppResult;
use streamgate_entity::catalog::{Movie, MovieInput};

/// Repository for movie CRUD operations.
#[derive(Debug, Clone)]
pub struct MovieRepository {
    pool: PgPool,
}

impl MovieRepository {
    /// Create a new movie repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a movie by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Movie>> {
        sqlx::query_as::<_, Movie>("SELECT * FROM movies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find movie", e))
    }

    /// List all movies, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<Movie>> {
        sqlx::query_as::<_, Movie>("SELECT * FROM movies ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list movies", e))
    }

    /// Create a new movie.
    pub async fn create(&self, input: &MovieInput) -> AppResult<Movie> {
        sqlx::query_as::<_, Movie>(
            "INSERT INTO movies \
                 (title, synopsis, genre, year, duration, ranking, cover_url, video_url, is_recommended) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
        )
        .bind(&input.title)
        .bind(&input.synopsis)
        .bind(&input.genre)
        .bind(input.year)
        .bind(input.duration)
        .bind(input.ranking)
        .bind(&input.cover_url)
        .bind(&input.video_url)
        .bind(input.is_recommended)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create movie", e))
    }

    /// Update a movie. Returns `None` when the id does not exist.
    pub async fn update(&self, id: Uuid, input: &MovieInput) -> AppResult<Option<Movie>> {
        sqlx::query_as::<_, Movie>(
            "UPDATE movies SET \
                 title = $2, synopsis = $3, genre = $4, year = $5, duration = $6, \
                 ranking = $7, cover_url = $8, video_url = $9, is_recommended = $10, \
                 updated_at = $11 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.synopsis)
        .bind(&input.genre)
        .bind(input.year)
        .bind(input.duration)
        .bind(input.ranking)
        .bind(&input.cover_url)
        .bind(&input.video_url)
        .bind(input.is_recommended)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update movie", e))
    }

    /// Delete a movie. Returns `true` if a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete movie", e))?;

        Ok(result.rows_affected() > 0)
    }
}
