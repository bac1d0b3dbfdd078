//! Application configuration loaded from environment variables.
//!
//! Every setting has a built-in default so the server runs out of the box.

use std::env;
use std::time::Duration;

use blog_infra::database::DatabaseConfig;

/// Development signing key. Override with `SECRET_KEY` outside development.
pub const DEFAULT_SECRET_KEY: &str = "change-me-in-production";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    /// Key used to sign form tokens.
    pub secret_key: String,
    pub csrf_ttl_secs: i64,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = DatabaseConfig {
            url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://posts.db?mode=rwc".to_string()),
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1),
            idle_timeout: Some(Duration::from_secs(300)),
        };

        let secret_key = env::var("SECRET_KEY").unwrap_or_else(|_| {
            tracing::warn!("Using default secret key. Set SECRET_KEY for production use.");
            DEFAULT_SECRET_KEY.to_string()
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5003),
            database,
            secret_key,
            csrf_ttl_secs: env::var("CSRF_TOKEN_TTL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3600),
        }
    }
}
