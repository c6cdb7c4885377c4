//! Admin user management — CRUD, device allowances, suspension.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use streamgate_auth::password::PasswordHasher;
use streamgate_core::error::AppError;
use streamgate_database::repositories::user::UserRepository;
use streamgate_entity::user::{CreateUser, UpdateUser, User};

use crate::context::RequestContext;

/// Handles administrative user management operations.
#[derive(Debug, Clone)]
pub struct AdminUserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
}

/// Request to create a new user.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// Display name.
    pub name: String,
    /// Initial password.
    pub password: String,
    /// Concurrent session allowance.
    #[serde(default = "default_allowed_devices")]
    pub allowed_devices: i32,
    /// Admin flag.
    #[serde(default)]
    pub is_admin: bool,
}

/// Request to update a user.
///
/// An absent or empty `password` leaves the stored hash untouched.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    /// New display name.
    pub name: String,
    /// New password, if it is being changed.
    #[serde(default)]
    pub password: Option<String>,
    /// New session allowance.
    pub allowed_devices: i32,
    /// New suspension flag.
    #[serde(default)]
    pub is_suspended: bool,
    /// New admin flag.
    #[serde(default)]
    pub is_admin: bool,
}

fn default_allowed_devices() -> i32 {
    1
}

impl AdminUserService {
    /// Creates a new admin user service.
    pub fn new(user_repo: Arc<UserRepository>, hasher: Arc<PasswordHasher>) -> Self {
        Self { user_repo, hasher }
    }

    /// Lists all users, newest first.
    pub async fn list_users(&self, ctx: &RequestContext) -> Result<Vec<User>, AppError> {
        self.require_admin(ctx)?;
        self.user_repo.find_all().await
    }

    /// Gets a single user by ID.
    pub async fn get_user(&self, ctx: &RequestContext, user_id: Uuid) -> Result<User, AppError> {
        self.require_admin(ctx)?;

        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Creates a new user with a freshly hashed password.
    pub async fn create_user(
        &self,
        ctx: &RequestContext,
        req: CreateUserRequest,
    ) -> Result<User, AppError> {
        self.require_admin(ctx)?;

        if req.name.trim().is_empty() {
            return Err(AppError::validation("Name is required"));
        }
        if req.password.is_empty() {
            return Err(AppError::validation("Password is required"));
        }
        if req.allowed_devices < 1 {
            return Err(AppError::validation("Allowed devices must be at least 1"));
        }

        let password_hash = self.hasher.hash_password(&req.password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                name: req.name.trim().to_string(),
                password_hash,
                allowed_devices: req.allowed_devices,
                is_admin: req.is_admin,
            })
            .await?;

        info!(
            admin_id = %ctx.user_id(),
            new_user_id = %user.id,
            name = %user.name,
            "User created by admin"
        );

        Ok(user)
    }

    /// Updates a user. The password hash is only replaced when a new
    /// password was supplied.
    pub async fn update_user(
        &self,
        ctx: &RequestContext,
        user_id: Uuid,
        req: UpdateUserRequest,
    ) -> Result<User, AppError> {
        self.require_admin(ctx)?;

        if req.name.trim().is_empty() {
            return Err(AppError::validation("Name is required"));
        }
        if req.allowed_devices < 1 {
            return Err(AppError::validation("Allowed devices must be at least 1"));
        }

        let password_hash = match req.password.as_deref() {
            Some(password) if !password.is_empty() => Some(self.hasher.hash_password(password)?),
            _ => None,
        };

        let updated = self
            .user_repo
            .update(
                user_id,
                &UpdateUser {
                    name: req.name.trim().to_string(),
                    password_hash,
                    allowed_devices: req.allowed_devices,
                    is_suspended: req.is_suspended,
                    is_admin: req.is_admin,
                },
            )
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        info!(admin_id = %ctx.user_id(), target_id = %user_id, "User updated by admin");

        Ok(updated)
    }

    /// Deletes a user. Admins can never delete their own account.
    pub async fn delete_user(&self, ctx: &RequestContext, user_id: Uuid) -> Result<(), AppError> {
        self.require_admin(ctx)?;

        if user_id == ctx.user_id() {
            return Err(AppError::validation("You cannot delete your own account"));
        }

        if !self.user_repo.delete(user_id).await? {
            return Err(AppError::not_found("User not found"));
        }

        info!(admin_id = %ctx.user_id(), target_id = %user_id, "User deleted");

        Ok(())
    }

    fn require_admin(&self, ctx: &RequestContext) -> Result<(), AppError> {
        if ctx.is_admin() {
            Ok(())
        } else {
            Err(AppError::forbidden("Admin access required"))
        }
    }
}
