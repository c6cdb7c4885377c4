//! Chat message repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use streamgate_core::error::{AppError, ErrorKind};
use streamgate_core::result::AppResult;
use streamgate_entity::message::{Message, MessageWithNames};

/// Columns for the joined sender/receiver projection.
const WITH_NAMES: &str = "SELECT m.id, m.content, m.sender_id, \
         su.name AS sender_name, su.is_admin AS sender_is_admin, \
         m.receiver_id, ru.name AS receiver_name, m.is_read, m.created_at \
     FROM messages m \
     JOIN users su ON su.id = m.sender_id \
     JOIN users ru ON ru.id = m.receiver_id";

/// Repository for chat message rows.
#[derive(Debug, Clone)]
pub struct MessageRepository {
    pool: PgPool,
}

impl MessageRepository {
    /// Create a new message repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a message and return the stored row.
    pub async fn create(
        &self,
        content: &str,
        sender_id: Uuid,
        receiver_id: Uuid,
    ) -> AppResult<Message> {
        sqlx::query_as::<_, Message>(
            "INSERT INTO messages (content, sender_id, receiver_id) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(content)
        .bind(sender_id)
        .bind(receiver_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create message", e))
    }

    /// List a user's conversation, oldest first. Admins see every message.
    pub async fn find_for_user(
        &self,
        user_id: Uuid,
        is_admin: bool,
    ) -> AppResult<Vec<MessageWithNames>> {
        let sql = if is_admin {
            format!("{WITH_NAMES} ORDER BY m.created_at ASC")
        } else {
            format!(
                "{WITH_NAMES} WHERE m.sender_id = $1 OR m.receiver_id = $1 \
                 ORDER BY m.created_at ASC"
            )
        };

        let mut query = sqlx::query_as::<_, MessageWithNames>(&sql);
        if !is_admin {
            query = query.bind(user_id);
        }

        query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list messages", e))
    }

    /// List messages newer than the given cursor for the chat stream poll.
    pub async fn find_newer_than(
        &self,
        user_id: Uuid,
        is_admin: bool,
        after: DateTime<Utc>,
        limit: i64,
    ) -> AppResult<Vec<MessageWithNames>> {
        let sql = if is_admin {
            format!("{WITH_NAMES} WHERE m.created_at > $1 ORDER BY m.created_at ASC LIMIT $2")
        } else {
            format!(
                "{WITH_NAMES} WHERE m.created_at > $1 \
                 AND (m.sender_id = $3 OR m.receiver_id = $3) \
                 ORDER BY m.created_at ASC LIMIT $2"
            )
        };

        let mut query = sqlx::query_as::<_, MessageWithNames>(&sql).bind(after).bind(limit);
        if !is_admin {
            query = query.bind(user_id);
        }

        query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to poll messages", e))
    }

    /// Mark a message as read. Returns `true` if a row was updated.
    pub async fn mark_read(&self, id: Uuid, receiver_id: Uuid) -> AppResult<bool> {
        let result =
            sqlx::query("UPDATE messages SET is_read = TRUE WHERE id = $1 AND receiver_id = $2")
                .bind(id)
                .bind(receiver_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to mark message read", e)
                })?;

        Ok(result.rows_affected() > 0)
    }
}
