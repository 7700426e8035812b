/// Common error types for the data layer
///
/// Every store operation returns [`StoreResult`]. Input validation failures
/// are caught before any SQL is issued; database failures carry the
/// underlying sqlx error and are never swallowed.
///
/// # Example
///
/// ```no_run
/// use taskdeck_core::error::{StoreError, StoreResult};
/// use taskdeck_core::models::task::{Task, UpdateTask};
/// # use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> StoreResult<()> {
/// match Task::update(&pool, "missing", UpdateTask::default()).await {
///     Err(StoreError::NotFound(what)) => println!("{}", what),
///     other => return other,
/// }
/// # Ok(())
/// # }
/// ```

use validator::ValidationErrors;

/// Result alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Unified error type for all model operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Input failed validation before reaching the database
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// A referenced row does not exist
    #[error("{0}")]
    NotFound(String),

    /// Database connectivity or statement failure
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}
