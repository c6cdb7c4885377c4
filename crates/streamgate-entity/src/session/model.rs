//! Session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Proof that a token was legitimately issued and not yet revoked.
///
/// Sessions are created on login and deleted on logout (by exact token
/// match) or lazily purged after expiry. A user may hold many sessions,
/// bounded by their device allowance at login time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Unique session identifier.
    pub id: Uuid,
    /// The user this session belongs to.
    pub user_id: Uuid,
    /// The signed JWT, persisted redundantly as the bearer string.
    pub token: String,
    /// Optional device correlation key supplied at login.
    pub device_id: Option<String>,
    /// When the session was created (login time).
    pub created_at: DateTime<Utc>,
    /// Absolute expiry, mirroring the token's `exp` claim.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Check whether the session is still active.
    pub fn is_active(&self) -> bool {
        self.expires_at > Utc::now()
    }
}

/// Data required to create a new session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSession {
    /// Owning user.
    pub user_id: Uuid,
    /// The signed token string.
    pub token: String,
    /// Optional device correlation key.
    pub device_id: Option<String>,
    /// Absolute expiry.
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn session(expires_at: DateTime<Utc>) -> Session {
        Session {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            token: "tok".to_string(),
            device_id: None,
            created_at: Utc::now(),
            expires_at,
        }
    }

    #[test]
    fn active_until_expiry() {
        assert!(session(Utc::now() + Duration::days(7)).is_active());
        assert!(!session(Utc::now() - Duration::seconds(1)).is_active());
    }
}
