//! Schema migration runner.

use sqlx::PgPool;
use tracing::info;

use streamgate_core::error::{AppError, ErrorKind};

/// Apply any pending migrations from the workspace `migrations/` directory.
///
/// Runs at startup before the server binds, so a failed migration stops
/// the process instead of serving against a stale schema.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, format!("Migration failed: {e}"), e)
        })?;

    info!("Database schema is up to date");
    Ok(())
}
