//! # TaskDeck API Server
//!
//! This is the API server for TaskDeck, exposing the task tracker's data
//! model over HTTP.
//!
//! ## Architecture
//!
//! The server is built with Axum and provides:
//! - Task CRUD endpoints (list, create, fetch, update, bulk delete)
//! - Health check with database connectivity
//! - CORS and request tracing middleware
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p taskdeck-api
//! ```

use taskdeck_api::app::{build_router, AppState};
use taskdeck_api::config::Config;
use taskdeck_core::db::migrations::{ensure_database_exists, run_migrations};
use taskdeck_core::db::pool::{close_pool, create_pool, DatabaseConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "taskdeck_api=debug,taskdeck_core=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "TaskDeck API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    // Load configuration
    let config = Config::from_env()?;

    // Initialize database pool and apply migrations
    ensure_database_exists(&config.database.url).await?;
    let db = create_pool(DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        ..Default::default()
    })
    .await?;
    run_migrations(&db).await?;

    // Build Axum application
    let state = AppState::new(db.clone(), config.clone());
    let app = build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Server listening on http://{}", config.bind_address());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    close_pool(db).await;
    tracing::info!("Server stopped");

    Ok(())
}

/// Completes when the process receives a shutdown signal
async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutdown signal received, draining connections...");
}
