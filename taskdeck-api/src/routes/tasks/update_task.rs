/// Update task endpoint
///
/// Applies a partial update to a task. Only the provided fields change;
/// `updated_at` is bumped either way, including for an empty payload.
///
/// # Endpoint
///
/// `PATCH /v1/tasks/:id`
///
/// # Example Request
///
/// ```json
/// {
///   "status": "done"
/// }
/// ```
///
/// Responds with `204 No Content`; clients re-fetch if they need the new
/// state.

use crate::app::AppState;
use crate::error::ApiError;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use taskdeck_core::models::task::{Task, UpdateTask};

/// Update task endpoint handler
///
/// # Errors
///
/// - 404 Not Found: No task has the given id
/// - 422 Unprocessable Entity: Empty or over-long title, unknown enum value
/// - 500 Internal Server Error: Database error
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateTask>,
) -> Result<StatusCode, ApiError> {
    tracing::info!(
        task_id = %id,
        status = ?request.status,
        priority = ?request.priority,
        "Updating task"
    );

    Task::update(&state.db, &id, request).await?;

    Ok(StatusCode::NO_CONTENT)
}
