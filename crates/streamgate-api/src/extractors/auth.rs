//! `AuthUser` extractor — resolves the session token from the auth
//! cookie or the Authorization header and runs the full verification.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use streamgate_core::error::AppError;
use streamgate_service::context::RequestContext;

use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
///
/// Every extraction performs the complete token verification, including
/// the session-row lookup and the suspension re-check. Admin-only
/// handlers check `is_admin` separately after this.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Strips the `Bearer ` prefix from an Authorization header value.
pub(crate) fn bearer_token(header: Option<&str>) -> Option<&str> {
    header?.strip_prefix("Bearer ").filter(|t| !t.is_empty())
}

/// Pulls the session token from the auth cookie or the Authorization
/// header; the cookie wins when both are present.
pub(crate) fn token_from_headers(
    headers: &axum::http::HeaderMap,
    cookie_name: &str,
) -> Option<String> {
    let jar = CookieJar::from_headers(headers);
    if let Some(cookie) = jar.get(cookie_name) {
        return Some(cookie.value().to_string());
    }

    let header = headers.get("authorization").and_then(|v| v.to_str().ok());
    bearer_token(header).map(String::from)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = token_from_headers(&parts.headers, &state.config.auth.cookie_name)
            .ok_or_else(|| AppError::unauthorized("Not authenticated"))?;

        let user = state
            .authenticator
            .verify_token(&token)
            .await?
            .ok_or_else(|| AppError::unauthorized("Not authenticated"))?;

        Ok(AuthUser(RequestContext::new(user)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_prefix_is_required() {
        assert_eq!(bearer_token(Some("Bearer abc")), Some("abc"));
        assert_eq!(bearer_token(Some("bearer abc")), None);
        assert_eq!(bearer_token(Some("abc")), None);
        assert_eq!(bearer_token(Some("Bearer ")), None);
        assert_eq!(bearer_token(None), None);
    }

    #[test]
    fn cookie_wins_over_header() {
        let mut headers = axum::http::HeaderMap::new();
        headers.insert("cookie", "auth-token=from-cookie".parse().unwrap());
        headers.insert("authorization", "Bearer from-header".parse().unwrap());

        assert_eq!(
            token_from_headers(&headers, "auth-token"),
            Some("from-cookie".to_string())
        );
    }

    #[test]
    fn header_is_the_fallback() {
        let mut headers = axum::http::HeaderMap::new();
        headers.insert("authorization", "Bearer from-header".parse().unwrap());

        assert_eq!(
            token_from_headers(&headers, "auth-token"),
            Some("from-header".to_string())
        );
        assert_eq!(
            token_from_headers(&headers, "other-cookie"),
            Some("from-header".to_string())
        );
    }
}
