/// Task CRUD endpoints
///
/// This module provides the HTTP surface over the task store: creating,
/// fetching, listing, updating and bulk-deleting tasks.
///
/// # Endpoints
///
/// - `GET /v1/tasks` - List tasks with filtering, sorting and pagination
/// - `POST /v1/tasks` - Create a task
/// - `DELETE /v1/tasks` - Delete a set of tasks
/// - `GET /v1/tasks/:id` - Fetch one task
/// - `PATCH /v1/tasks/:id` - Partially update a task
///
/// # Example Usage
///
/// ```text
/// // Create a task
/// POST /v1/tasks
/// {"title": "Fix login redirect", "priority": "high"}
/// → 201 with the created task
///
/// // List done and in-progress tasks, newest first
/// GET /v1/tasks?status=done,in-progress&sort=created_at.desc
/// → {"data": [...], "total": 12, "page_count": 2}
///
/// // Move a task to done
/// PATCH /v1/tasks/{id}
/// {"status": "done"}
/// → 204
///
/// // Delete two tasks
/// DELETE /v1/tasks
/// {"ids": ["...", "..."]}
/// → {"deleted": 2}
/// ```

pub mod create_task;
pub mod delete_tasks;
pub mod get_task;
pub mod list_tasks;
pub mod update_task;

// Re-export handlers for convenience
pub use create_task::create_task;
pub use delete_tasks::{delete_tasks, DeleteTasksRequest, DeleteTasksResponse};
pub use get_task::get_task;
pub use list_tasks::{list_tasks, ListTasksQuery};
pub use update_task::update_task;
