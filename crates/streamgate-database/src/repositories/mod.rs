//! Concrete repository implementations, one per entity.

pub mod channel;
pub mod counters;
pub mod episode;
pub mod message;
pub mod movie;
pub mod season;
pub mod series;
pub mod session;
pub mod user;

use streamgate_core::error::{AppError, ErrorKind};

/// Map an insert/update error, converting unique-constraint violations
/// into a conflict with the given message.
pub(crate) fn conflict_or_database(
    e: sqlx::Error,
    conflict_message: &str,
    context: &str,
) -> AppError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            return AppError::conflict(conflict_message.to_string());
        }
    }
    AppError::with_source(ErrorKind::Database, context.to_string(), e)
}
