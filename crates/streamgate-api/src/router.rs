//! Route definitions for the Streamgate HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    // Reachable without a token: login, logout (idempotent), health.
    let public_routes = Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/health", get(handlers::health::health_check));

    // Everything else sits behind the coarse token pre-check; handlers
    // still run the full verification through the `AuthUser` extractor.
    let protected_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(movie_routes())
        .merge(series_routes())
        .merge(season_routes())
        .merge(episode_routes())
        .merge(channel_routes())
        .merge(message_routes())
        .merge(chat_routes())
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::token_precheck,
        ));

    let cors = middleware::cors::build_cors_layer(&state.config.server);

    Router::new()
        .nest("/api", public_routes.merge(protected_routes))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Authenticated identity endpoint.
fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/me", get(handlers::auth::me))
}

/// Admin user management.
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handlers::user::list_users))
        .route("/users", post(handlers::user::create_user))
        .route("/users/{id}", put(handlers::user::update_user))
        .route("/users/{id}", delete(handlers::user::delete_user))
}

/// Movie catalog.
fn movie_routes() -> Router<AppState> {
    Router::new()
        .route("/movies", get(handlers::movie::list_movies))
        .route("/movies", post(handlers::movie::create_movie))
        .route("/movies/{id}", get(handlers::movie::get_movie))
        .route("/movies/{id}", put(handlers::movie::update_movie))
        .route("/movies/{id}", delete(handlers::movie::delete_movie))
}

/// Series catalog with season/episode trees.
fn series_routes() -> Router<AppState> {
    Router::new()
        .route("/series", get(handlers::series::list_series))
        .route("/series", post(handlers::series::create_series))
        .route("/series/{id}", get(handlers::series::get_series))
        .route("/series/{id}", put(handlers::series::update_series))
        .route("/series/{id}", delete(handlers::series::delete_series))
}

/// Season management.
fn season_routes() -> Router<AppState> {
    Router::new()
        .route("/seasons", get(handlers::season::list_seasons))
        .route("/seasons", post(handlers::season::create_season))
        .route("/seasons/{id}", get(handlers::season::get_season))
        .route("/seasons/{id}", put(handlers::season::update_season))
        .route("/seasons/{id}", delete(handlers::season::delete_season))
}

/// Episode management.
fn episode_routes() -> Router<AppState> {
    Router::new()
        .route("/episodes", get(handlers::episode::list_episodes))
        .route("/episodes", post(handlers::episode::create_episode))
        .route("/episodes/{id}", get(handlers::episode::get_episode))
        .route("/episodes/{id}", put(handlers::episode::update_episode))
        .route("/episodes/{id}", delete(handlers::episode::delete_episode))
}

/// Live TV channels.
fn channel_routes() -> Router<AppState> {
    Router::new()
        .route("/channels", get(handlers::channel::list_channels))
        .route("/channels", post(handlers::channel::create_channel))
        .route("/channels/{id}", get(handlers::channel::get_channel))
        .route("/channels/{id}", put(handlers::channel::update_channel))
        .route("/channels/{id}", delete(handlers::channel::delete_channel))
}

/// Direct messaging.
fn message_routes() -> Router<AppState> {
    Router::new()
        .route("/messages", get(handlers::message::list_messages))
        .route("/messages", post(handlers::message::send_message))
        .route("/messages/{id}/read", put(handlers::message::mark_read))
}

/// Chat stream and assistant.
fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/chat/stream", get(handlers::chat::stream))
        .route("/chat/bot", post(handlers::chat::bot))
}
