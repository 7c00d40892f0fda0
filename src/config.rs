//! Backend configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). Database settings can be given as a
//! single `DATABASE_URL` or as individual `DB_*` parts.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

/// Top-level backend configuration.
///
/// Loaded once at startup via [`BackendConfig::from_env`].
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// PostgreSQL connection string.
    pub database_url: String,

    /// Maximum number of database connections in the pool.
    pub database_max_connections: u32,

    /// Minimum idle connections in the pool.
    pub database_min_connections: u32,

    /// Timeout in seconds for acquiring a database connection.
    pub database_connect_timeout_secs: u64,

    /// Directory served for non-API paths.
    pub static_dir: PathBuf,
}

impl BackendConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    /// `DATABASE_URL` takes precedence over the individual `DB_*`
    /// variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .context("LISTEN_ADDR must be a socket address like 0.0.0.0:3000")?;

        let database_url = match std::env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                let user = std::env::var("DB_USER").unwrap_or_else(|_| "todo".to_string());
                let password = std::env::var("DB_PASSWORD").unwrap_or_else(|_| "todo".to_string());
                let host = std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
                let port: u16 = parse_env("DB_PORT", 5432);
                let name = std::env::var("DB_NAME").unwrap_or_else(|_| "todo_backend".to_string());
                format!("postgres://{user}:{password}@{host}:{port}/{name}")
            }
        };

        let database_max_connections = parse_env("DATABASE_MAX_CONNECTIONS", 10);
        let database_min_connections = parse_env("DATABASE_MIN_CONNECTIONS", 2);
        let database_connect_timeout_secs = parse_env("DATABASE_CONNECT_TIMEOUT_SECS", 5);

        let static_dir =
            PathBuf::from(std::env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string()));

        Ok(Self {
            listen_addr,
            database_url,
            database_max_connections,
            database_min_connections,
            database_connect_timeout_secs,
            static_dir,
        })
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
