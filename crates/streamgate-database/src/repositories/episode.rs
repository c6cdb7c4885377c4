//! Episode repository implementation.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use streamgate_core::error::{AppError, ErrorKind};
use streamgate_core::result::AppResult;
use streamgate_entity::catalog::{Episode, EpisodeInput};

use super::conflict_or_database;

/// Error message for the `(season_id, number)` uniqueness constraint.
const DUPLICATE_NUMBER: &str = "An episode with that number already exists in this season";

/// Repository for episode CRUD and sibling queries.
#[derive(Debug, Clone)]
pub struct EpisodeRepository {
    pool: PgPool,
}

impl EpisodeRepository {
    /// Create a new episode repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an episode by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Episode>> {
        sqlx::query_as::<_, Episode>("SELECT * FROM episodes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find episode", e))
    }

    /// List a season's episodes ordered by number.
    pub async fn find_by_season(&self, season_id: Uuid) -> AppResult<Vec<Episode>> {
        sqlx::query_as::<_, Episode>(
            "SELECT * FROM episodes WHERE season_id = $1 ORDER BY number ASC",
        )
        .bind(season_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list episodes for season", e)
        })
    }

    /// List every episode in the catalog, grouped by series and season.
    pub async fn find_all(&self) -> AppResult<Vec<Episode>> {
        sqlx::query_as::<_, Episode>(
            "SELECT e.* FROM episodes e \
             JOIN seasons s ON e.season_id = s.id \
             ORDER BY s.series_id, s.number ASC, e.number ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list episodes", e))
    }

    /// List every episode of a series, ordered by season then episode number.
    pub async fn find_by_series(&self, series_id: Uuid) -> AppResult<Vec<Episode>> {
        sqlx::query_as::<_, Episode>(
            "SELECT e.* FROM episodes e \
             JOIN seasons s ON e.season_id = s.id \
             WHERE s.series_id = $1 \
             ORDER BY s.number ASC, e.number ASC",
        )
        .bind(series_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list episodes for series", e)
        })
    }

    /// Find the sibling episode holding a given number, if any.
    pub async fn find_by_number(&self, season_id: Uuid, number: i32) -> AppResult<Option<Episode>> {
        sqlx::query_as::<_, Episode>(
            "SELECT * FROM episodes WHERE season_id = $1 AND number = $2",
        )
        .bind(season_id)
        .bind(number)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find episode by number", e)
        })
    }

    /// Create a new episode. A `(season_id, number)` collision surfaces as
    /// a conflict.
    pub async fn create(&self, season_id: Uuid, input: &EpisodeInput) -> AppResult<Episode> {
        sqlx::query_as::<_, Episode>(
            "INSERT INTO episodes \
                 (season_id, number, title, synopsis, duration, video_url, thumbnail_url, air_date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(season_id)
        .bind(input.number)
        .bind(&input.title)
        .bind(input.synopsis.as_deref())
        .bind(input.duration)
        .bind(&input.video_url)
        .bind(input.thumbnail_url.as_deref())
        .bind(input.air_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| conflict_or_database(e, DUPLICATE_NUMBER, "Failed to create episode"))
    }

    /// Update an episode's editable fields.
    pub async fn update(&self, id: Uuid, input: &EpisodeInput) -> AppResult<Option<Episode>> {
        sqlx::query_as::<_, Episode>(
            "UPDATE episodes SET \
                 number = $2, title = $3, synopsis = $4, duration = $5, video_url = $6, \
                 thumbnail_url = $7, air_date = $8, updated_at = $9 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(input.number)
        .bind(&input.title)
        .bind(input.synopsis.as_deref())
        .bind(input.duration)
        .bind(&input.video_url)
        .bind(input.thumbnail_url.as_deref())
        .bind(input.air_date)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| conflict_or_database(e, DUPLICATE_NUMBER, "Failed to update episode"))
    }

    /// Delete an episode. Returns `true` if a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM episodes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete episode", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
