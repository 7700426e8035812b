/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - Test database setup and migrations
/// - Router construction
/// - Task creation and response body helpers
///
/// The tests need a running PostgreSQL instance. The connection string is
/// read from `DATABASE_URL` (a `.env` file works); when it is not set the
/// tests skip themselves instead of failing.

use axum::response::Response;
use sqlx::PgPool;
use uuid::Uuid;

use taskdeck_api::app::{build_router, AppState};
use taskdeck_api::config::Config;
use taskdeck_core::models::task::{CreateTask, Task, TaskStatus};

/// Test context containing all necessary resources
pub struct TestContext {
    pub db: PgPool,
    pub app: axum::Router,
}

impl TestContext {
    /// Creates a new test context, or `None` when no database is configured
    pub async fn new() -> Option<Self> {
        dotenvy::dotenv().ok();

        if std::env::var("DATABASE_URL").is_err() {
            eprintln!("DATABASE_URL not set, skipping integration test");
            return None;
        }

        let config = Config::from_env().expect("load config");

        // Connect to database
        let db = PgPool::connect(&config.database.url)
            .await
            .expect("connect to test database");

        // Run migrations (path relative to Cargo.toml, not this file)
        sqlx::migrate!("../migrations")
            .run(&db)
            .await
            .expect("run migrations");

        // Build app
        let state = AppState::new(db.clone(), config);
        let app = build_router(state);

        Some(TestContext { db, app })
    }
}

/// Helper to create a task directly in the store
pub async fn create_test_task(ctx: &TestContext, title: &str, status: Option<TaskStatus>) -> Task {
    Task::create(
        &ctx.db,
        CreateTask {
            title: title.to_string(),
            status,
            label: None,
            priority: None,
        },
    )
    .await
    .expect("create test task")
}

/// Returns a unique marker for isolating this test's rows
pub fn marker() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Reads a response body as JSON
pub async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("parse body")
}
