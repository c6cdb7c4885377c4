//! First-boot seeding of the default accounts.

use std::sync::Arc;

use tracing::info;

use streamgate_auth::password::PasswordHasher;
use streamgate_core::error::AppError;
use streamgate_database::repositories::user::UserRepository;
use streamgate_entity::user::CreateUser;

/// Seeds the default accounts when the user table is empty.
#[derive(Debug, Clone)]
pub struct Seeder {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
}

impl Seeder {
    /// Creates a new seeder.
    pub fn new(user_repo: Arc<UserRepository>, hasher: Arc<PasswordHasher>) -> Self {
        Self { user_repo, hasher }
    }

    /// Creates the default admin and demo accounts if no users exist.
    /// A non-empty user table makes this a no-op.
    pub async fn seed_if_empty(&self) -> Result<(), AppError> {
        if self.user_repo.count().await? > 0 {
            return Ok(());
        }

        let admin = self
            .user_repo
            .create(&CreateUser {
                name: "Administrador".to_string(),
                password_hash: self.hasher.hash_password("19801605")?,
                allowed_devices: 3,
                is_admin: true,
            })
            .await?;

        let demo = self
            .user_repo
            .create(&CreateUser {
                name: "Usuario Demo".to_string(),
                password_hash: self.hasher.hash_password("123")?,
                allowed_devices: 1,
                is_admin: false,
            })
            .await?;

        info!(admin_id = %admin.id, demo_id = %demo.id, "Seeded default accounts");

        Ok(())
    }
}
