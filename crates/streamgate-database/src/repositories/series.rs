//! Series repository implementation.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use streamgate_core::error::{AppError, ErrorKind};
use streamgate_core::result::AppResult;
use streamgate_entity::catalog::{Series, SeriesInput};

/// Repository for series CRUD operations.
///
/// The denormalized `seasons`/`episodes` counters on the series row are
/// written only by [`CounterRepository`](super::counters::CounterRepository).
#[derive(Debug, Clone)]
pub struct SeriesRepository {
    pool: PgPool,
}

impl SeriesRepository {
    /// Create a new series repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a series by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Series>> {
        sqlx::query_as::<_, Series>("SELECT * FROM series WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find series", e))
    }

    /// List all series, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<Series>> {
        sqlx::query_as::<_, Series>("SELECT * FROM series ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list series", e))
    }

    /// Create a new series with zeroed counters.
    pub async fn create(&self, input: &SeriesInput) -> AppResult<Series> {
        sqlx::query_as::<_, Series>(
            "INSERT INTO series \
                 (title, synopsis, genre, year, ranking, cover_url, video_url, is_recommended) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(&input.title)
        .bind(&input.synopsis)
        .bind(&input.genre)
        .bind(input.year)
        .bind(input.ranking)
        .bind(&input.cover_url)
        .bind(&input.video_url)
        .bind(input.is_recommended)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create series", e))
    }

    /// Update the editable series fields. Counters are untouched.
    pub async fn update(&self, id: Uuid, input: &SeriesInput) -> AppResult<Option<Series>> {
        sqlx::query_as::<_, Series>(
            "UPDATE series SET \
                 title = $2, synopsis = $3, genre = $4, year = $5, ranking = $6, \
                 cover_url = $7, video_url = $8, is_recommended = $9, updated_at = $10 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.synopsis)
        .bind(&input.genre)
        .bind(input.year)
        .bind(input.ranking)
        .bind(&input.cover_url)
        .bind(&input.video_url)
        .bind(input.is_recommended)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update series", e))
    }

    /// Delete a series; its seasons and episodes cascade in the store.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM series WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete series", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
