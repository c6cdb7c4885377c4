//! Shared result alias.

use crate::error::AppError;

/// Result alias used throughout the Streamgate crates, so call sites can
/// write `AppResult<T>` instead of spelling out the error type.
pub type AppResult<T> = Result<T, AppError>;
