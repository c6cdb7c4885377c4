//! Session storage operations wrapping the database repository.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use streamgate_core::error::AppError;
use streamgate_database::repositories::session::SessionRepository;
use streamgate_entity::session::{CreateSession, Session};

/// Abstracts session persistence operations.
#[derive(Debug, Clone)]
pub struct SessionStore {
    /// Session database repository.
    repo: Arc<SessionRepository>,
}

impl SessionStore {
    /// Creates a new session store.
    pub fn new(repo: Arc<SessionRepository>) -> Self {
        Self { repo }
    }

    /// Creates a new session record in the database.
    pub async fn create_session(
        &self,
        user_id: Uuid,
        token: &str,
        device_id: Option<&str>,
        expires_at: DateTime<Utc>,
    ) -> Result<Session, AppError> {
        self.repo
            .create(&CreateSession {
                user_id,
                token: token.to_string(),
                device_id: device_id.map(String::from),
                expires_at,
            })
            .await
    }

    /// Finds an unexpired session holding exactly this token string.
    pub async fn find_active_by_token(&self, token: &str) -> Result<Option<Session>, AppError> {
        self.repo.find_active_by_token(token).await
    }

    /// Counts a user's sessions whose expiry is still in the future.
    pub async fn count_active_by_user(&self, user_id: Uuid) -> Result<i64, AppError> {
        self.repo.count_active_by_user(user_id).await
    }

    /// Deletes every session matching this exact token.
    pub async fn delete_by_token(&self, token: &str) -> Result<u64, AppError> {
        self.repo.delete_by_token(token).await
    }

    /// Deletes all sessions with an expiry in the past.
    pub async fn delete_expired(&self) -> Result<u64, AppError> {
        self.repo.delete_expired().await
    }
}
