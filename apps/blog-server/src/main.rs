//! # Blog Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::middleware::from_fn;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use blog_server::config::AppConfig;
use blog_server::handlers;
use blog_server::observability::assign_request_id;
use blog_server::state::AppState;
use blog_server::telemetry::{TelemetryConfig, init_telemetry};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!("Starting blog server on {}:{}", config.host, config.port);

    // Storage is required; without it the server does not start.
    let state = AppState::new(&config).await.map_err(|e| {
        tracing::error!("Failed to open database {}: {}", config.database.url, e);
        std::io::Error::other(e)
    })?;
    let data = web::Data::new(state.clone());

    let result = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(from_fn(assign_request_id))
            .app_data(data.clone())
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await;

    state.shutdown().await;
    result
}
