/// Delete tasks endpoint
///
/// Deletes a set of tasks in one request. Ids that match no row are
/// skipped, so the operation is idempotent; the response reports how many
/// rows were actually removed.
///
/// # Endpoint
///
/// `DELETE /v1/tasks`
///
/// # Example Request
///
/// ```json
/// {
///   "ids": ["k3jf93hf72h1l0a9sm3k4jd73hgk2l", "b29dk17fh3jd92ls0c4mf8g7h1j2k3"]
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "deleted": 2
/// }
/// ```

use crate::app::AppState;
use crate::error::ApiError;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use taskdeck_core::models::task::Task;
use validator::Validate;

/// Delete tasks request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DeleteTasksRequest {
    /// Ids of the tasks to delete
    #[validate(length(min = 1))]
    pub ids: Vec<String>,
}

/// Delete tasks response
#[derive(Debug, Clone, Serialize)]
pub struct DeleteTasksResponse {
    /// Number of rows actually removed
    pub deleted: u64,
}

/// Delete tasks endpoint handler
///
/// # Errors
///
/// - 422 Unprocessable Entity: Empty id list
/// - 500 Internal Server Error: Database error
pub async fn delete_tasks(
    State(state): State<AppState>,
    Json(request): Json<DeleteTasksRequest>,
) -> Result<Json<DeleteTasksResponse>, ApiError> {
    request.validate()?;

    tracing::info!(requested = request.ids.len(), "Deleting tasks");

    let deleted = Task::delete_many(&state.db, &request.ids).await?;

    tracing::info!(
        requested = request.ids.len(),
        deleted,
        "Tasks deleted"
    );

    Ok(Json(DeleteTasksResponse { deleted }))
}
