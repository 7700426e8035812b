/// Get task endpoint
///
/// Fetches a single task by id.
///
/// # Endpoint
///
/// `GET /v1/tasks/:id`
///
/// # Example Response
///
/// ```json
/// {
///   "id": "k3jf93hf72h1l0a9sm3k4jd73hgk2l",
///   "code": "TASK-0042",
///   "title": "Fix login redirect",
///   "status": "todo",
///   "label": "bug",
///   "priority": "low",
///   "created_at": "2025-08-12T12:00:00Z",
///   "updated_at": "2025-08-12T12:00:00Z"
/// }
/// ```

use crate::app::AppState;
use crate::error::ApiError;
use axum::{
    extract::{Path, State},
    Json,
};
use taskdeck_core::models::task::Task;

/// Get task endpoint handler
///
/// # Errors
///
/// - 404 Not Found: No task has the given id
/// - 500 Internal Server Error: Database error
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Task>, ApiError> {
    tracing::debug!(task_id = %id, "Fetching task");

    let task = Task::find_by_id(&state.db, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("task {} not found", id)))?;

    Ok(Json(task))
}
