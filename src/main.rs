//! Streamgate server — password-gated video streaming catalog.
//!
//! Main entry point: loads configuration, initializes logging, connects
//! the database, runs migrations, seeds the default accounts, and serves.

use tracing_subscriber::{EnvFilter, fmt};

use streamgate_core::config::AppConfig;
use streamgate_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("STREAMGATE_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Streamgate v{}", env!("CARGO_PKG_VERSION"));

    tracing::info!("Connecting to database...");
    let pool = streamgate_database::connection::DatabasePool::connect(&config.database).await?;

    tracing::info!("Running database migrations...");
    streamgate_database::migration::run_migrations(pool.pool()).await?;
    tracing::info!("Database migrations complete");

    streamgate_api::run_server(config, pool.into_pool()).await
}
