/// Database models
///
/// This module contains all database models and their CRUD operations.
///
/// # Models
///
/// - `task`: Tracked tasks with status/label/priority and filtered listing
/// - `user`: User accounts
/// - `account`: OAuth provider linkages for users
/// - `verification_token`: Email verification tokens
/// - `password_reset_token`: Password reset tokens
/// - `two_factor`: Two-factor codes and login confirmations
/// - `post`: User posts
///
/// # Example
///
/// ```no_run
/// use taskdeck_core::db::pool::{create_pool, DatabaseConfig};
/// use taskdeck_core::models::task::{CreateTask, Task};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let task = Task::create(
///     &pool,
///     CreateTask {
///         title: "Write release notes".to_string(),
///         status: None,
///         label: None,
///         priority: None,
///     },
/// )
/// .await?;
/// println!("created {}", task.id);
/// # Ok(())
/// # }
/// ```

pub mod account;
pub mod password_reset_token;
pub mod post;
pub mod task;
pub mod two_factor;
pub mod user;
pub mod verification_token;
