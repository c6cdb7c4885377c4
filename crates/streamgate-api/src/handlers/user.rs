//! Admin user management handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use streamgate_core::error::AppError;
use streamgate_service::user::admin::{CreateUserRequest, UpdateUserRequest};

use crate::dto::response::{ApiResponse, StatusMessage, UserPayload, UsersPayload};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UsersPayload>>, AppError> {
    let users = state.admin_user_service.list_users(auth.context()).await?;
    Ok(Json(ApiResponse::ok(UsersPayload { users })))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateUserRequest>,
) -> Result<Json<ApiResponse<UserPayload>>, AppError> {
    let user = state
        .admin_user_service
        .create_user(auth.context(), req)
        .await?;
    Ok(Json(ApiResponse::ok(UserPayload { user })))
}

/// PUT /api/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<ApiResponse<UserPayload>>, AppError> {
    let user = state
        .admin_user_service
        .update_user(auth.context(), id, req)
        .await?;
    Ok(Json(ApiResponse::ok(UserPayload { user })))
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<StatusMessage>>, AppError> {
    state
        .admin_user_service
        .delete_user(auth.context(), id)
        .await?;
    Ok(Json(ApiResponse::ok(StatusMessage {
        message: "User deleted".to_string(),
    })))
}
