//! Database pool settings.

use serde::{Deserialize, Serialize};

/// Connection pool settings for the catalog store.
///
/// Only `url` is required; the pool limits fall back to defaults that
/// mirror `config/default.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL.
    pub url: String,
    /// Upper bound on pooled connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connections kept warm even when idle.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// How long to wait for a connection before giving up, in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Idle time before a connection is retired, in seconds.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_seconds: u64,
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_idle_timeout() -> u64 {
    300
}
