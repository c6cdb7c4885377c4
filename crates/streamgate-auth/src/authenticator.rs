//! The authentication core: login, token verification, logout, and
//! expired-session housekeeping.

use std::sync::Arc;

use tracing::{debug, info, warn};

use streamgate_core::error::AppError;
use streamgate_database::repositories::user::UserRepository;
use streamgate_entity::user::{PublicUser, User};

use crate::jwt::{JwtDecoder, JwtEncoder};
use crate::password::PasswordHasher;
use crate::session::SessionStore;

/// Result of a successful login.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LoginOutcome {
    /// Public projection of the authenticated user.
    pub user: PublicUser,
    /// The signed session token.
    pub token: String,
}

/// Performs the login, verify, and logout flows against the credential
/// and session stores.
#[derive(Debug, Clone)]
pub struct Authenticator {
    /// User repository (credential store).
    user_repo: Arc<UserRepository>,
    /// Session persistence.
    session_store: Arc<SessionStore>,
    /// Password hasher.
    password_hasher: Arc<PasswordHasher>,
    /// JWT encoder.
    jwt_encoder: Arc<JwtEncoder>,
    /// JWT decoder.
    jwt_decoder: Arc<JwtDecoder>,
}

/// Whether a user at `active_count` live sessions may open another one.
///
/// The check is advisory: it gates *new* sessions only and never revokes
/// existing ones when the allowance is later lowered.
pub fn device_limit_reached(active_count: i64, allowed_devices: i32) -> bool {
    active_count >= allowed_devices as i64
}

impl Authenticator {
    /// Creates a new authenticator with all required dependencies.
    pub fn new(
        user_repo: Arc<UserRepository>,
        session_store: Arc<SessionStore>,
        password_hasher: Arc<PasswordHasher>,
        jwt_encoder: Arc<JwtEncoder>,
        jwt_decoder: Arc<JwtDecoder>,
    ) -> Self {
        Self {
            user_repo,
            session_store,
            password_hasher,
            jwt_encoder,
            jwt_decoder,
        }
    }

    /// Performs the complete login flow.
    ///
    /// The login form carries no username: the password alone identifies
    /// the account, so the supplied password is verified against every
    /// non-suspended user's hash and the first match wins. With a
    /// `device_id` present, the user's unexpired session count is checked
    /// against their allowance before any session is created.
    ///
    /// Exactly one session row is created on success; none on any failure.
    pub async fn authenticate(
        &self,
        password: &str,
        device_id: Option<&str>,
    ) -> Result<LoginOutcome, AppError> {
        if password.is_empty() {
            return Err(AppError::validation("Password is required"));
        }

        let user = self
            .find_user_by_password(password)
            .await?
            .ok_or_else(|| AppError::unauthorized("Incorrect password"))?;

        if device_id.is_some() {
            let active = self.session_store.count_active_by_user(user.id).await?;
            if device_limit_reached(active, user.allowed_devices) {
                warn!(
                    user_id = %user.id,
                    active_sessions = active,
                    allowed = user.allowed_devices,
                    "Device limit reached"
                );
                return Err(AppError::device_limit("Device limit reached"));
            }
        }

        let (token, expires_at) = self.jwt_encoder.generate_token(&user)?;

        self.session_store
            .create_session(user.id, &token, device_id, expires_at)
            .await?;

        info!(user_id = %user.id, "Login successful");

        Ok(LoginOutcome {
            user: user.to_public(),
            token,
        })
    }

    /// Verifies a presented token and resolves the identity behind it.
    ///
    /// Three checks, in order:
    /// 1. stateless signature + expiry validation (an invalid token never
    ///    reaches the store),
    /// 2. an unexpired session row holding exactly this token must exist
    ///    (makes logout effective before the claim expires),
    /// 3. the owning user must still exist and not be suspended.
    ///
    /// Returns `None` when any check fails.
    pub async fn verify_token(&self, token: &str) -> Result<Option<PublicUser>, AppError> {
        if self.jwt_decoder.decode(token).is_none() {
            return Ok(None);
        }

        let Some(session) = self.session_store.find_active_by_token(token).await? else {
            return Ok(None);
        };

        let Some(user) = self.user_repo.find_by_id(session.user_id).await? else {
            return Ok(None);
        };

        if user.is_suspended {
            debug!(user_id = %user.id, "Rejecting token of suspended user");
            return Ok(None);
        }

        Ok(Some(user.to_public()))
    }

    /// Deletes all sessions matching this exact token. Idempotent:
    /// deleting zero rows is not an error.
    pub async fn logout(&self, token: &str) -> Result<(), AppError> {
        let removed = self.session_store.delete_by_token(token).await?;
        debug!(removed, "Logout processed");
        Ok(())
    }

    /// Best-effort purge of expired session rows. Not required for
    /// correctness: expired sessions already fail `verify_token`.
    pub async fn clean_expired_sessions(&self) {
        match self.session_store.delete_expired().await {
            Ok(0) => {}
            Ok(removed) => info!(removed, "Purged expired sessions"),
            Err(e) => warn!(error = %e, "Expired-session purge failed"),
        }
    }

    /// Scans the non-suspended users for one whose hash matches the
    /// supplied password.
    async fn find_user_by_password(&self, password: &str) -> Result<Option<User>, AppError> {
        let users = self.user_repo.find_active().await?;

        for user in users {
            if self
                .password_hasher
                .verify_password(password, &user.password_hash)?
            {
                return Ok(Some(user));
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_blocks_at_allowance() {
        assert!(!device_limit_reached(0, 1));
        assert!(device_limit_reached(1, 1));
        assert!(device_limit_reached(2, 1));
        assert!(!device_limit_reached(2, 3));
        assert!(device_limit_reached(3, 3));
    }
}
