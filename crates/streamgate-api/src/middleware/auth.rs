//! Coarse token pre-check.
//!
//! A cheap shape check that turns away requests carrying no plausible
//! token before any handler runs. It never replaces the full
//! verification done by the `AuthUser` extractor.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use streamgate_core::error::AppError;

use crate::extractors::auth::token_from_headers;
use crate::state::AppState;

/// Shortest string that could possibly be a signed token.
const MIN_TOKEN_LENGTH: usize = 20;

/// Returns whether a token candidate is superficially well-formed.
pub(crate) fn plausible_token(token: &str) -> bool {
    token.len() >= MIN_TOKEN_LENGTH && token.chars().all(|c| !c.is_whitespace())
}

/// Rejects requests without a plausible token.
pub async fn token_precheck(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let plausible = token_from_headers(request.headers(), &state.config.auth.cookie_name)
        .is_some_and(|token| plausible_token(&token));

    if !plausible {
        return AppError::unauthorized("Not authenticated").into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_or_spaced_tokens_are_rejected() {
        assert!(plausible_token("eyJhbGciOiJIUzI1NiJ9.payload.sig"));
        assert!(!plausible_token("short"));
        assert!(!plausible_token(""));
        assert!(!plausible_token("contains space padding here"));
    }
}
