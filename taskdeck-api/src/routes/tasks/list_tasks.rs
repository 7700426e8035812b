/// List tasks endpoint
///
/// Lists tasks with filtering, sorting and pagination. The response bundles
/// the page of rows with the total match count and the derived page count,
/// read from one database snapshot.
///
/// # Endpoint
///
/// `GET /v1/tasks`
///
/// # Query Parameters
///
/// - `page`: 1-based page number (default: 1)
/// - `per_page`: page size, 1-100 (default: 10)
/// - `sort`: `field.direction`, e.g. `title.asc` (default: `created_at.desc`)
/// - `title`: case-insensitive substring filter
/// - `status`, `label`, `priority`: comma-separated values, OR within a
///   field and AND across fields
///
/// # Example
///
/// ```text
/// GET /v1/tasks?status=done,in-progress&priority=high&sort=code.asc&per_page=20
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "data": [
///     {
///       "id": "k3jf93hf72h1l0a9sm3k4jd73hgk2l",
///       "code": "TASK-0042",
///       "title": "Fix login redirect",
///       "status": "in-progress",
///       "label": "bug",
///       "priority": "high",
///       "created_at": "2025-08-12T12:00:00Z",
///       "updated_at": "2025-08-12T12:00:00Z"
///     }
///   ],
///   "total": 1,
///   "page_count": 1
/// }
/// ```

use std::str::FromStr;

use crate::app::AppState;
use crate::error::{ApiError, ValidationErrorDetail};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use taskdeck_core::models::task::{Task, TaskListQuery, TaskPage};

/// Query string parameters for the task listing
///
/// All parameters are optional; the model layer's defaults fill in the
/// rest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListTasksQuery {
    /// Page number (1-based)
    pub page: Option<i64>,

    /// Page size
    pub per_page: Option<i64>,

    /// Sort order as `field.direction`
    pub sort: Option<String>,

    /// Substring filter on title
    pub title: Option<String>,

    /// Comma-separated statuses
    pub status: Option<String>,

    /// Comma-separated labels
    pub label: Option<String>,

    /// Comma-separated priorities
    pub priority: Option<String>,
}

impl ListTasksQuery {
    /// Converts wire parameters into a model-layer listing query
    fn into_query(self) -> Result<TaskListQuery, ApiError> {
        let mut query = TaskListQuery::default();

        if let Some(page) = self.page {
            query.page = page;
        }
        if let Some(per_page) = self.per_page {
            query.per_page = per_page;
        }
        if let Some(sort) = self.sort.as_deref().filter(|s| !s.is_empty()) {
            query.sort = sort
                .parse()
                .map_err(|message| invalid_param("sort", message))?;
        }
        query.title = self.title;
        if let Some(raw) = self.status.as_deref() {
            query.statuses = parse_csv("status", raw)?;
        }
        if let Some(raw) = self.label.as_deref() {
            query.labels = parse_csv("label", raw)?;
        }
        if let Some(raw) = self.priority.as_deref() {
            query.priorities = parse_csv("priority", raw)?;
        }

        Ok(query)
    }
}

/// Parses a comma-separated filter parameter
fn parse_csv<T>(field: &'static str, raw: &str) -> Result<Vec<T>, ApiError>
where
    T: FromStr<Err = String>,
{
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| part.parse().map_err(|message| invalid_param(field, message)))
        .collect()
}

fn invalid_param(field: &'static str, message: String) -> ApiError {
    ApiError::ValidationError(vec![ValidationErrorDetail {
        field: field.to_string(),
        message,
    }])
}

/// List tasks endpoint handler
///
/// # Errors
///
/// - 422 Unprocessable Entity: Malformed sort or filter value, page or
///   page size out of range
/// - 500 Internal Server Error: Database error
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(params): Query<ListTasksQuery>,
) -> Result<Json<TaskPage>, ApiError> {
    let query = params.into_query()?;

    tracing::debug!(
        page = query.page,
        per_page = query.per_page,
        title = ?query.title,
        "Listing tasks"
    );

    let page = Task::list(&state.db, &query).await?;

    Ok(Json(page))
}
