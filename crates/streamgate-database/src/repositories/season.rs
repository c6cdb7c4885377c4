//! Season repository implementation.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use streamgate_core::error::{AppError, ErrorKind};
use streamgate_core::result::AppResult;
use streamgate_entity::catalog::{Season, SeasonInput};

use super::conflict_or_database;

/// Error message for the `(series_id, number)` uniqueness constraint.
const DUPLICATE_NUMBER: &str = "A season with that number already exists in this series";

/// Repository for season CRUD and sibling queries.
#[derive(Debug, Clone)]
pub struct SeasonRepository {
    pool: PgPool,
}

impl SeasonRepository {
    /// Create a new season repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a season by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Season>> {
        sqlx::query_as::<_, Season>("SELECT * FROM seasons WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find season", e))
    }

    /// List a series' seasons ordered by number.
    pub async fn find_by_series(&self, series_id: Uuid) -> AppResult<Vec<Season>> {
        sqlx::query_as::<_, Season>(
            "SELECT * FROM seasons WHERE series_id = $1 ORDER BY number ASC",
        )
        .bind(series_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list seasons for series", e)
        })
    }

    /// List all seasons grouped by series.
    pub async fn find_all(&self) -> AppResult<Vec<Season>> {
        sqlx::query_as::<_, Season>("SELECT * FROM seasons ORDER BY series_id, number ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list seasons", e))
    }

    /// Find the sibling season holding a given number, if any.
    pub async fn find_by_number(&self, series_id: Uuid, number: i32) -> AppResult<Option<Season>> {
        sqlx::query_as::<_, Season>(
            "SELECT * FROM seasons WHERE series_id = $1 AND number = $2",
        )
        .bind(series_id)
        .bind(number)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find season by number", e)
        })
    }

    /// Create a new season. A `(series_id, number)` collision surfaces as
    /// a conflict.
    pub async fn create(&self, series_id: Uuid, input: &SeasonInput) -> AppResult<Season> {
        sqlx::query_as::<_, Season>(
            "INSERT INTO seasons (series_id, number, title, year, description, cover_url) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(series_id)
        .bind(input.number)
        .bind(&input.title)
        .bind(input.year)
        .bind(input.description.as_deref())
        .bind(input.cover_url.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| conflict_or_database(e, DUPLICATE_NUMBER, "Failed to create season"))
    }

    /// Update a season's editable fields. `total_episodes` is untouched.
    pub async fn update(&self, id: Uuid, input: &SeasonInput) -> AppResult<Option<Season>> {
        sqlx::query_as::<_, Season>(
            "UPDATE seasons SET \
                 number = $2, title = $3, year = $4, description = $5, cover_url = $6, \
                 updated_at = $7 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(input.number)
        .bind(&input.title)
        .bind(input.year)
        .bind(input.description.as_deref())
        .bind(input.cover_url.as_deref())
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| conflict_or_database(e, DUPLICATE_NUMBER, "Failed to update season"))
    }

    /// Delete a season; its episodes cascade in the store.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM seasons WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete season", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
