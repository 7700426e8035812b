/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use taskdeck_api::{app::AppState, config::Config};
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let state = AppState::new(pool, config);
/// let app = taskdeck_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// The router is organized as follows:
/// ```text
/// /
/// ├── /health              # Health check (public)
/// └── /v1/                 # API v1 (versioned)
///     └── /tasks/          # Task CRUD
///         ├── GET    /     # List tasks (filter, sort, paginate)
///         ├── POST   /     # Create task
///         ├── DELETE /     # Delete a set of tasks
///         ├── GET    /:id  # Fetch one task
///         └── PATCH  /:id  # Partially update a task
/// ```
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)
///
/// # Example
///
/// ```no_run
/// use taskdeck_api::app::{AppState, build_router};
/// use taskdeck_api::config::Config;
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let state = AppState::new(pool, config);
///
/// let app = build_router(state);
///
/// // Start server
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
/// axum::serve(listener, app).await?;
/// # Ok(())
/// # }
/// ```
pub fn build_router(state: AppState) -> Router {
    // Import route handlers
    use crate::routes;

    // Health check (public)
    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    // Task CRUD routes
    let task_routes = Router::new()
        .route(
            "/",
            get(routes::tasks::list_tasks)
                .post(routes::tasks::create_task)
                .delete(routes::tasks::delete_tasks),
        )
        .route(
            "/:id",
            get(routes::tasks::get_task).patch(routes::tasks::update_task),
        );

    // Build complete v1 API
    let v1_routes = Router::new().nest("/tasks", task_routes);

    // Configure CORS based on environment
    let cors = if state.config.api.cors_origins.contains(&"*".to_string()) {
        // Development mode: permissive CORS
        CorsLayer::permissive()
    } else {
        // Production mode: configure allowed origins
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PATCH,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .allow_credentials(true)
            .max_age(std::time::Duration::from_secs(3600))
    };

    // Combine all routes with middleware stack
    Router::new()
        .merge(health_routes)
        .nest("/v1", v1_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiConfig, DatabaseConfig};

    fn test_config(cors_origins: Vec<String>) -> Config {
        Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_origins,
            },
            database: DatabaseConfig {
                url: "postgresql://localhost/taskdeck_test".to_string(),
                max_connections: 1,
            },
        }
    }

    #[tokio::test]
    async fn test_build_router_wires_all_routes() {
        let db = PgPool::connect_lazy("postgresql://localhost/taskdeck_test").unwrap();
        let state = AppState::new(db, test_config(vec!["*".to_string()]));

        // Router construction panics on malformed or conflicting routes
        let _app = build_router(state);
    }

    #[tokio::test]
    async fn test_build_router_with_configured_origins() {
        let db = PgPool::connect_lazy("postgresql://localhost/taskdeck_test").unwrap();
        let state = AppState::new(
            db,
            test_config(vec!["https://deck.example.com".to_string()]),
        );

        let _app = build_router(state);
    }
}
