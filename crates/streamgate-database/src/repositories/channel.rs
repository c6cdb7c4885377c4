//! Channel repository implementation.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use streamgate_core::error::{AppError, ErrorKind};
use streamgate_core::result::AppResult;
use streamgate_entity::catalog::{Channel, ChannelInput};

/// Repository for live channel CRUD operations.
#[derive(Debug, Clone)]
pub struct ChannelRepository {
    pool: PgPool,
}

impl ChannelRepository {
    /// Create a new channel repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a channel by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Channel>> {
        sqlx::query_as::<_, Channel>("SELECT * FROM channels WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find channel", e))
    }

    /// List all channels ordered by name.
    pub async fn find_all(&self) -> AppResult<Vec<Channel>> {
        sqlx::query_as::<_, Channel>("SELECT * FROM channels ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list channels", e))
    }

    /// Create a new channel.
    pub async fn create(&self, input: &ChannelInput) -> AppResult<Channel> {
        sqlx::query_as::<_, Channel>(
            "INSERT INTO channels (name, cover_url, m3u8_url) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&input.name)
        .bind(&input.cover_url)
        .bind(&input.m3u8_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create channel", e))
    }

    /// Update a channel. Returns `None` when the id does not exist.
    pub async fn update(&self, id: Uuid, input: &ChannelInput) -> AppResult<Option<Channel>> {
        sqlx::query_as::<_, Channel>(
            "UPDATE channels SET name = $2, cover_url = $3, m3u8_url = $4, updated_at = $5 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.cover_url)
        .bind(&input.m3u8_url)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update channel", e))
    }

    /// Delete a channel. Returns `true` if a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM channels WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete channel", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
