/// Shared helpers for integration tests
///
/// These tests need a running PostgreSQL instance. The connection string is
/// read from `DATABASE_URL` (a `.env` file works); when it is not set the
/// tests skip themselves instead of failing.

use sqlx::PgPool;

use taskdeck_core::db::migrations::run_migrations;
use taskdeck_core::db::pool::{create_pool, DatabaseConfig};

/// Connects to the test database and applies migrations
///
/// Returns `None` when `DATABASE_URL` is not set so callers can skip.
pub async fn test_pool() -> Option<PgPool> {
    dotenvy::dotenv().ok();

    let url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("DATABASE_URL not set, skipping database test");
            return None;
        }
    };

    let pool = create_pool(DatabaseConfig {
        url,
        max_connections: 5,
        min_connections: 1,
        ..Default::default()
    })
    .await
    .expect("failed to connect to test database");

    run_migrations(&pool)
        .await
        .expect("failed to run migrations");

    Some(pool)
}
