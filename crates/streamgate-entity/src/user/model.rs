//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered account on the platform.
///
/// There is no username field on the login form: the password alone
/// identifies the account, so `name` is a display name that is only
/// functionally unique.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Display name, also shown in chat.
    pub name: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Maximum number of concurrently-valid sessions.
    pub allowed_devices: i32,
    /// Suspended accounts can never authenticate or keep a session.
    pub is_suspended: bool,
    /// Whether the account may perform admin mutations.
    pub is_admin: bool,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Returns the projection safe to hand back to clients.
    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            name: self.name.clone(),
            is_admin: self.is_admin,
            allowed_devices: self.allowed_devices,
        }
    }
}

/// Public user projection returned by login and `/auth/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    /// User identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Admin flag.
    pub is_admin: bool,
    /// Device allowance.
    pub allowed_devices: i32,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name.
    pub name: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Device allowance.
    pub allowed_devices: i32,
    /// Admin flag.
    pub is_admin: bool,
}

/// Data for an admin update of an existing user.
///
/// The password hash is only replaced when a new password was supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New display name.
    pub name: String,
    /// New password hash, if the password is being changed.
    pub password_hash: Option<String>,
    /// New device allowance.
    pub allowed_devices: i32,
    /// New suspension flag.
    pub is_suspended: bool,
    /// New admin flag.
    pub is_admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_is_never_serialized() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Administrador".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            allowed_devices: 3,
            is_suspended: false,
            is_admin: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("argon2id"));
    }

    #[test]
    fn public_projection_keeps_identity_fields() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Usuario Demo".to_string(),
            password_hash: String::new(),
            allowed_devices: 1,
            is_suspended: false,
            is_admin: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let public = user.to_public();
        assert_eq!(public.id, user.id);
        assert_eq!(public.allowed_devices, 1);
        assert!(!public.is_admin);
    }
}
