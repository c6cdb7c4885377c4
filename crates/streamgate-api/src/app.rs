//! Application builder — wires repositories, services, and router into
//! a running Axum server.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use sqlx::PgPool;
use tokio::sync::watch;

use streamgate_auth::{Authenticator, JwtDecoder, JwtEncoder, PasswordHasher, SessionStore};
use streamgate_core::config::AppConfig;
use streamgate_core::error::AppError;
use streamgate_database::repositories::{
    channel::ChannelRepository, counters::CounterRepository, episode::EpisodeRepository,
    message::MessageRepository, movie::MovieRepository, season::SeasonRepository,
    series::SeriesRepository, session::SessionRepository, user::UserRepository,
};
use streamgate_service::{
    AdminUserService, AssistantService, ChannelService, ChatService, EpisodeService, MovieService,
    SeasonService, Seeder, SeriesService,
};

use crate::router::build_router;
use crate::state::AppState;

/// Interval between expired-session sweeps.
const SESSION_CLEANUP_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Constructs the full dependency graph and the shared application state.
pub fn build_state(config: AppConfig, db_pool: PgPool) -> AppState {
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let session_repo = Arc::new(SessionRepository::new(db_pool.clone()));
    let movie_repo = Arc::new(MovieRepository::new(db_pool.clone()));
    let series_repo = Arc::new(SeriesRepository::new(db_pool.clone()));
    let season_repo = Arc::new(SeasonRepository::new(db_pool.clone()));
    let episode_repo = Arc::new(EpisodeRepository::new(db_pool.clone()));
    let channel_repo = Arc::new(ChannelRepository::new(db_pool.clone()));
    let message_repo = Arc::new(MessageRepository::new(db_pool.clone()));
    let counter_repo = Arc::new(CounterRepository::new(db_pool.clone()));

    let password_hasher = Arc::new(PasswordHasher::new());
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
    let session_store = Arc::new(SessionStore::new(Arc::clone(&session_repo)));

    let authenticator = Arc::new(Authenticator::new(
        Arc::clone(&user_repo),
        Arc::clone(&session_store),
        Arc::clone(&password_hasher),
        Arc::clone(&jwt_encoder),
        Arc::clone(&jwt_decoder),
    ));

    let admin_user_service = Arc::new(AdminUserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
    ));
    let movie_service = Arc::new(MovieService::new(Arc::clone(&movie_repo)));
    let series_service = Arc::new(SeriesService::new(
        Arc::clone(&series_repo),
        Arc::clone(&season_repo),
        Arc::clone(&episode_repo),
    ));
    let season_service = Arc::new(SeasonService::new(
        Arc::clone(&season_repo),
        Arc::clone(&series_repo),
        Arc::clone(&episode_repo),
        Arc::clone(&counter_repo),
    ));
    let episode_service = Arc::new(EpisodeService::new(
        Arc::clone(&episode_repo),
        Arc::clone(&season_repo),
        Arc::clone(&counter_repo),
    ));
    let channel_service = Arc::new(ChannelService::new(Arc::clone(&channel_repo)));
    let chat_service = Arc::new(ChatService::new(
        Arc::clone(&message_repo),
        Arc::clone(&user_repo),
    ));
    let assistant_service = Arc::new(AssistantService::new(
        config.chat.clone(),
        reqwest::Client::new(),
        Arc::clone(&chat_service),
        Arc::clone(&message_repo),
        Arc::clone(&movie_repo),
        Arc::clone(&series_repo),
        Arc::clone(&channel_repo),
    ));

    AppState {
        config: Arc::new(config),
        db_pool,
        authenticator,
        admin_user_service,
        movie_service,
        series_service,
        season_service,
        episode_service,
        channel_service,
        chat_service,
        assistant_service,
    }
}

/// Runs the Streamgate server with the given configuration and pool.
///
/// Seeds the default accounts on an empty database, starts the periodic
/// expired-session sweep, and serves until Ctrl+C.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let state = build_state(config, db_pool);

    let seeder = Seeder::new(
        Arc::new(UserRepository::new(state.db_pool.clone())),
        Arc::new(PasswordHasher::new()),
    );
    seeder.seed_if_empty().await?;

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    let cleanup_auth = Arc::clone(&state.authenticator);
    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = tokio::time::sleep(SESSION_CLEANUP_INTERVAL) => {
                    cleanup_auth.clean_expired_sessions().await;
                }
                _ = shutdown_rx.changed() => break,
            }
        }
    });

    let addr = state.config.server.bind_address();
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Streamgate server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = shutdown_tx.send(true);
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
    }
}
