//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use streamgate_auth::Authenticator;
use streamgate_core::config::AppConfig;
use streamgate_service::{
    AdminUserService, AssistantService, ChannelService, ChatService, EpisodeService, MovieService,
    SeasonService, SeriesService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,

    /// Login, token verification, and logout.
    pub authenticator: Arc<Authenticator>,

    /// Admin user management.
    pub admin_user_service: Arc<AdminUserService>,
    /// Movie catalog.
    pub movie_service: Arc<MovieService>,
    /// Series catalog and detail trees.
    pub series_service: Arc<SeriesService>,
    /// Season management.
    pub season_service: Arc<SeasonService>,
    /// Episode management.
    pub episode_service: Arc<EpisodeService>,
    /// Live TV channels.
    pub channel_service: Arc<ChannelService>,
    /// Direct messaging.
    pub chat_service: Arc<ChatService>,
    /// The catalog assistant.
    pub assistant_service: Arc<AssistantService>,
}
