use std::sync::Arc;
use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

use super::schema::ensure_schema;
use super::sqlite_repo::SqliteBlogPostRepository;

/// Configuration for the SQLite database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// e.g. `sqlite://posts.db?mode=rwc` (creates the file if missing).
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// `None` keeps idle connections forever, which an in-memory database
    /// needs to keep its contents.
    pub idle_timeout: Option<Duration>,
}

impl DatabaseConfig {
    /// A private in-memory database living on a single connection.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            idle_timeout: None,
        }
    }
}

/// Owner of the database pool.
///
/// Opened once at startup and passed to whoever needs storage; call
/// [`DatabaseConnections::close`] on shutdown.
pub struct DatabaseConnections {
    pub main: Arc<DbConn>,
}

impl DatabaseConnections {
    /// Connect and make sure the schema exists.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection...");

        let mut options = ConnectOptions::new(&config.url);
        options
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .sqlx_logging(true);
        if let Some(idle) = config.idle_timeout {
            options.idle_timeout(idle);
        }

        let main = Database::connect(options).await?;
        tracing::info!(
            "Database connected (pool: {})",
            config.max_connections
        );

        ensure_schema(&main).await?;

        Ok(Self {
            main: Arc::new(main),
        })
    }

    /// Repository over the `blog_posts` table.
    pub fn blog_posts(&self) -> SqliteBlogPostRepository {
        SqliteBlogPostRepository::new(Arc::clone(&self.main))
    }

    /// Close the pool. Repositories sharing it fail with a connection
    /// error afterwards.
    pub async fn close(&self) -> Result<(), DbErr> {
        tracing::info!("Closing database connection");
        self.main.close_by_ref().await
    }
}
