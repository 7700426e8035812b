/// Database layer
///
/// This module provides connection pooling and the migration runner; the
/// models themselves live in the `models` module at the crate root.
///
/// # Modules
///
/// - `pool`: PostgreSQL connection pool management with health checks
/// - `migrations`: Embedded migration runner
///
/// # Example
///
/// ```no_run
/// use taskdeck_core::db::migrations::run_migrations;
/// use taskdeck_core::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = DatabaseConfig {
///     url: std::env::var("DATABASE_URL")?,
///     ..Default::default()
/// };
///
/// let pool = create_pool(config).await?;
/// run_migrations(&pool).await?;
/// # Ok(())
/// # }
/// ```

pub mod migrations;
pub mod pool;
