//! Maps domain `AppError` to HTTP responses.
//!
//! The `IntoResponse` impl for `AppError` lives in `streamgate-core`
//! (the orphan rule requires it next to the type); the mapping helpers
//! are re-exported here for API consumers.

pub use streamgate_core::error::{ApiErrorResponse, status_and_message};

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use streamgate_core::error::AppError;

    #[test]
    fn statuses_follow_the_error_kind() {
        let cases = [
            (AppError::validation("v"), StatusCode::BAD_REQUEST),
            (AppError::unauthorized("u"), StatusCode::UNAUTHORIZED),
            (AppError::forbidden("f"), StatusCode::FORBIDDEN),
            (AppError::device_limit("d"), StatusCode::FORBIDDEN),
            (AppError::not_found("n"), StatusCode::NOT_FOUND),
            (AppError::conflict("c"), StatusCode::CONFLICT),
            (AppError::external_service("x"), StatusCode::BAD_GATEWAY),
            (AppError::database("db"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            let (status, _) = status_and_message(&error);
            assert_eq!(status, expected, "kind {:?}", error.kind);
        }
    }

    #[test]
    fn database_detail_is_not_leaked() {
        let error = AppError::database("connection refused on 10.0.0.5");
        let (_, message) = status_and_message(&error);
        assert_eq!(message, "Internal server error");
    }
}
