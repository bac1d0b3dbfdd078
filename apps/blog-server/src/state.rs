//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::{BlogPostRepository, CsrfGuard};
use blog_infra::database::{DatabaseConnections, DbErr};
use blog_infra::{CsrfConfig, JwtCsrfService};

use crate::config::AppConfig;

/// Shared application state.
///
/// Owns the storage context; handlers receive it through `web::Data`.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn BlogPostRepository>,
    pub csrf: Arc<dyn CsrfGuard>,
    pub db: Arc<DatabaseConnections>,
}

impl AppState {
    /// Open the database and build the services on top of it.
    pub async fn new(config: &AppConfig) -> Result<Self, DbErr> {
        let db = Arc::new(DatabaseConnections::init(&config.database).await?);
        let posts: Arc<dyn BlogPostRepository> = Arc::new(db.blog_posts());
        let csrf: Arc<dyn CsrfGuard> = Arc::new(JwtCsrfService::new(CsrfConfig {
            secret: config.secret_key.clone(),
            ttl_secs: config.csrf_ttl_secs,
        }));

        tracing::info!("Application state initialized");

        Ok(Self { posts, csrf, db })
    }

    /// Release the database. Called once the HTTP server has stopped.
    pub async fn shutdown(&self) {
        if let Err(e) = self.db.close().await {
            tracing::error!("Failed to close database: {}", e);
        }
    }
}
