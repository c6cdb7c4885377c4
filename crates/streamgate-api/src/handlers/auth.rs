//! Auth handlers — login, logout, me.

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use streamgate_core::error::AppError;

use crate::dto::request::LoginRequest;
use crate::dto::response::{ApiResponse, IdentityPayload, LoginResponse, StatusMessage};
use crate::extractors::AuthUser;
use crate::extractors::auth::token_from_headers;
use crate::state::AppState;

/// POST /api/auth/login
///
/// Authenticates by password alone and sets the auth cookie alongside
/// returning the token in the body.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<LoginResponse>>), AppError> {
    let outcome = state
        .authenticator
        .authenticate(&req.password, req.device_id.as_deref())
        .await?;

    let cookie = build_auth_cookie(
        &state.config.auth.cookie_name,
        outcome.token.clone(),
        state.config.auth.token_ttl_days,
    );

    Ok((
        jar.add(cookie),
        Json(ApiResponse::ok(LoginResponse {
            user: outcome.user,
            token: outcome.token,
        })),
    ))
}

/// POST /api/auth/logout
///
/// Deletes the session matching the presented token and clears the
/// cookie. Succeeds even when no session matches.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
) -> Result<(CookieJar, Json<ApiResponse<StatusMessage>>), AppError> {
    if let Some(token) = token_from_headers(&headers, &state.config.auth.cookie_name) {
        state.authenticator.logout(&token).await?;
    }

    let jar = jar.remove(Cookie::from(state.config.auth.cookie_name.clone()));

    Ok((
        jar,
        Json(ApiResponse::ok(StatusMessage {
            message: "Logged out".to_string(),
        })),
    ))
}

/// GET /api/auth/me
pub async fn me(auth: AuthUser) -> Json<ApiResponse<IdentityPayload>> {
    Json(ApiResponse::ok(IdentityPayload {
        user: auth.user.clone(),
    }))
}

fn build_auth_cookie(name: &str, token: String, ttl_days: u64) -> Cookie<'static> {
    let mut cookie = Cookie::new(name.to_string(), token);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_max_age(time::Duration::days(ttl_days as i64));
    cookie
}
