/// Create task endpoint
///
/// Creates a new task. The server assigns the id and the `TASK-NNNN`
/// display code; omitted status/label/priority fall back to their defaults
/// (todo/bug/low).
///
/// # Endpoint
///
/// `POST /v1/tasks`
///
/// # Example Request
///
/// ```json
/// {
///   "title": "Fix login redirect",
///   "status": "in-progress",
///   "priority": "high"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "id": "k3jf93hf72h1l0a9sm3k4jd73hgk2l",
///   "code": "TASK-0042",
///   "title": "Fix login redirect",
///   "status": "in-progress",
///   "label": "bug",
///   "priority": "high",
///   "created_at": "2025-08-12T12:00:00Z",
///   "updated_at": "2025-08-12T12:00:00Z"
/// }
/// ```

use crate::app::AppState;
use crate::error::ApiError;
use axum::{extract::State, http::StatusCode, Json};
use taskdeck_core::models::task::{CreateTask, Task};

/// Create task endpoint handler
///
/// # Errors
///
/// - 409 Conflict: Display code collision
/// - 422 Unprocessable Entity: Empty or over-long title, unknown enum value
/// - 500 Internal Server Error: Database error
pub async fn create_task(
    State(state): State<AppState>,
    Json(request): Json<CreateTask>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    tracing::info!(title = %request.title, "Creating new task");

    // Title length and enum values are validated in the model layer
    let task = Task::create(&state.db, request).await?;

    tracing::info!(
        task_id = %task.id,
        code = ?task.code,
        status = ?task.status,
        "Task created successfully"
    );

    Ok((StatusCode::CREATED, Json(task)))
}
