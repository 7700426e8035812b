/// Task model and database operations
///
/// This module provides the Task model, the core entity of the tracker, and
/// the filtered/sorted/paginated listing the task table is browsed through.
///
/// # Schema
///
/// ```sql
/// CREATE TYPE task_status AS ENUM ('todo', 'in-progress', 'done', 'canceled');
/// CREATE TYPE task_label AS ENUM ('bug', 'feature', 'enhancement', 'documentation');
/// CREATE TYPE task_priority AS ENUM ('low', 'medium', 'high');
///
/// CREATE TABLE tasks (
///     id VARCHAR(30) PRIMARY KEY,
///     code VARCHAR(256) UNIQUE,
///     title VARCHAR(256),
///     status task_status NOT NULL DEFAULT 'todo',
///     label task_label NOT NULL DEFAULT 'bug',
///     priority task_priority NOT NULL DEFAULT 'low',
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ DEFAULT NOW()
/// );
/// ```
///
/// Statuses carry no transition rules; a task may move from any status to
/// any other.
///
/// # Example
///
/// ```no_run
/// use taskdeck_core::models::task::{CreateTask, Task, TaskListQuery, TaskStatus};
/// use taskdeck_core::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let task = Task::create(&pool, CreateTask {
///     title: "Fix login redirect".to_string(),
///     status: Some(TaskStatus::InProgress),
///     label: None,
///     priority: None,
/// }).await?;
///
/// let page = Task::list(&pool, &TaskListQuery::default()).await?;
/// println!("{} of {} tasks", page.data.len(), page.total);
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use validator::Validate;

use crate::error::{StoreError, StoreResult};
use crate::ids;

/// Task workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "task_status", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Not started yet
    Todo,

    /// Actively being worked on
    InProgress,

    /// Finished
    Done,

    /// Abandoned without completion
    Canceled,
}

impl sqlx::postgres::PgHasArrayType for TaskStatus {
    fn array_type_info() -> sqlx::postgres::PgTypeInfo {
        sqlx::postgres::PgTypeInfo::with_name("_task_status")
    }
}

impl TaskStatus {
    /// Converts status to its wire/database form
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Done => "done",
            TaskStatus::Canceled => "canceled",
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Todo
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(TaskStatus::Todo),
            "in-progress" => Ok(TaskStatus::InProgress),
            "done" => Ok(TaskStatus::Done),
            "canceled" => Ok(TaskStatus::Canceled),
            _ => Err(format!(
                "invalid status '{}', expected one of: todo, in-progress, done, canceled",
                s
            )),
        }
    }
}

/// Task category label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "task_label", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TaskLabel {
    Bug,
    Feature,
    Enhancement,
    Documentation,
}

impl sqlx::postgres::PgHasArrayType for TaskLabel {
    fn array_type_info() -> sqlx::postgres::PgTypeInfo {
        sqlx::postgres::PgTypeInfo::with_name("_task_label")
    }
}

impl TaskLabel {
    /// Converts label to its wire/database form
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskLabel::Bug => "bug",
            TaskLabel::Feature => "feature",
            TaskLabel::Enhancement => "enhancement",
            TaskLabel::Documentation => "documentation",
        }
    }
}

impl Default for TaskLabel {
    fn default() -> Self {
        TaskLabel::Bug
    }
}

impl std::str::FromStr for TaskLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bug" => Ok(TaskLabel::Bug),
            "feature" => Ok(TaskLabel::Feature),
            "enhancement" => Ok(TaskLabel::Enhancement),
            "documentation" => Ok(TaskLabel::Documentation),
            _ => Err(format!(
                "invalid label '{}', expected one of: bug, feature, enhancement, documentation",
                s
            )),
        }
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "task_priority", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl sqlx::postgres::PgHasArrayType for TaskPriority {
    fn array_type_info() -> sqlx::postgres::PgTypeInfo {
        sqlx::postgres::PgTypeInfo::with_name("_task_priority")
    }
}

impl TaskPriority {
    /// Converts priority to its wire/database form
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        }
    }
}

impl Default for TaskPriority {
    fn default() -> Self {
        TaskPriority::Low
    }
}

impl std::str::FromStr for TaskPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(TaskPriority::Low),
            "medium" => Ok(TaskPriority::Medium),
            "high" => Ok(TaskPriority::High),
            _ => Err(format!(
                "invalid priority '{}', expected one of: low, medium, high",
                s
            )),
        }
    }
}

/// Task model representing one tracked task
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task id (30 lowercase alphanumeric characters)
    pub id: String,

    /// Human-facing display code (`TASK-NNNN`), unique across all tasks
    pub code: Option<String>,

    /// Task title
    pub title: Option<String>,

    /// Current workflow status
    pub status: TaskStatus,

    /// Category label
    pub label: TaskLabel,

    /// Priority
    pub priority: TaskPriority,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// When the task was last updated
    pub updated_at: Option<DateTime<Utc>>,
}

/// Input for creating a new task
///
/// Status, label and priority fall back to their column defaults
/// (todo/bug/low) when omitted.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTask {
    /// Task title
    #[validate(length(min = 1, max = 256))]
    pub title: String,

    /// Initial status (default: todo)
    pub status: Option<TaskStatus>,

    /// Initial label (default: bug)
    pub label: Option<TaskLabel>,

    /// Initial priority (default: low)
    pub priority: Option<TaskPriority>,
}

/// Input for updating a task
///
/// All fields are optional; only the provided subset is written. The subset
/// may be empty, in which case the update just touches `updated_at`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateTask {
    /// New title
    #[validate(length(min = 1, max = 256))]
    pub title: Option<String>,

    /// New status
    pub status: Option<TaskStatus>,

    /// New label
    pub label: Option<TaskLabel>,

    /// New priority
    pub priority: Option<TaskPriority>,
}

/// Column a task listing can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskSortField {
    Code,
    Title,
    Status,
    Label,
    Priority,
    CreatedAt,
    UpdatedAt,
}

impl TaskSortField {
    /// Returns the column name for ORDER BY
    ///
    /// The closed set here is what keeps interpolating the column into SQL
    /// safe.
    pub fn column(&self) -> &'static str {
        match self {
            TaskSortField::Code => "code",
            TaskSortField::Title => "title",
            TaskSortField::Status => "status",
            TaskSortField::Label => "label",
            TaskSortField::Priority => "priority",
            TaskSortField::CreatedAt => "created_at",
            TaskSortField::UpdatedAt => "updated_at",
        }
    }
}

impl std::str::FromStr for TaskSortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "code" => Ok(TaskSortField::Code),
            "title" => Ok(TaskSortField::Title),
            "status" => Ok(TaskSortField::Status),
            "label" => Ok(TaskSortField::Label),
            "priority" => Ok(TaskSortField::Priority),
            "created_at" => Ok(TaskSortField::CreatedAt),
            "updated_at" => Ok(TaskSortField::UpdatedAt),
            _ => Err(format!("invalid sort field '{}'", s)),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Returns the SQL keyword for ORDER BY
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl std::str::FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(format!("invalid sort direction '{}', expected asc or desc", s)),
        }
    }
}

/// Sort field and direction for a task listing
///
/// Parses from the `field.direction` form used in query strings, e.g.
/// `title.asc` or `created_at.desc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSort {
    pub field: TaskSortField,
    pub direction: SortDirection,
}

impl Default for TaskSort {
    fn default() -> Self {
        Self {
            field: TaskSortField::CreatedAt,
            direction: SortDirection::Desc,
        }
    }
}

impl std::str::FromStr for TaskSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = s
            .split_once('.')
            .ok_or_else(|| format!("invalid sort '{}', expected field.direction", s))?;

        Ok(TaskSort {
            field: field.parse()?,
            direction: direction.parse()?,
        })
    }
}

/// Parameters for listing tasks
///
/// Pages are 1-based. Enum filters are OR within a field and AND across
/// fields; an empty filter means "no restriction".
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TaskListQuery {
    /// Page number (1-based)
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: i64,

    /// Page size
    #[serde(default = "default_per_page")]
    #[validate(range(min = 1, max = 100))]
    pub per_page: i64,

    /// Sort order
    #[serde(default)]
    pub sort: TaskSort,

    /// Substring filter on title (case-insensitive)
    pub title: Option<String>,

    /// Restrict to these statuses
    #[serde(default)]
    pub statuses: Vec<TaskStatus>,

    /// Restrict to these labels
    #[serde(default)]
    pub labels: Vec<TaskLabel>,

    /// Restrict to these priorities
    #[serde(default)]
    pub priorities: Vec<TaskPriority>,
}

impl Default for TaskListQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
            sort: TaskSort::default(),
            title: None,
            statuses: Vec::new(),
            labels: Vec::new(),
            priorities: Vec::new(),
        }
    }
}

fn default_page() -> i64 {
    1
}

fn default_per_page() -> i64 {
    10
}

/// One page of a task listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskPage {
    /// Tasks on this page
    pub data: Vec<Task>,

    /// Total rows matching the filters, across all pages
    pub total: i64,

    /// Total number of pages (ceiling of total / per_page)
    pub page_count: i64,
}

fn page_count(total: i64, per_page: i64) -> i64 {
    (total + per_page - 1) / per_page
}

impl Task {
    /// Creates a new task
    ///
    /// The id and display code are generated here; omitted status/label/
    /// priority fall back to todo/bug/low.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] for an empty or over-long title
    /// before any SQL runs, and [`StoreError::Storage`] if the insert fails
    /// (including the unlikely display-code collision).
    pub async fn create(pool: &PgPool, data: CreateTask) -> StoreResult<Self> {
        data.validate()?;

        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (id, code, title, status, label, priority)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, code, title, status, label, priority, created_at, updated_at
            "#,
        )
        .bind(ids::generate_id())
        .bind(ids::generate_task_code())
        .bind(data.title)
        .bind(data.status.unwrap_or_default())
        .bind(data.label.unwrap_or_default())
        .bind(data.priority.unwrap_or_default())
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Finds a task by id
    pub async fn find_by_id(pool: &PgPool, id: &str) -> StoreResult<Option<Self>> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, code, title, status, label, priority, created_at, updated_at
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Lists tasks with filtering, sorting and pagination
    ///
    /// The page of rows and the total count are read in one transaction so
    /// they describe the same snapshot, and `page_count` is derived from the
    /// count. Filters compose: title substring (case-insensitive) AND
    /// status-set AND label-set AND priority-set.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] for an out-of-range page or page
    /// size before any SQL runs.
    pub async fn list(pool: &PgPool, query: &TaskListQuery) -> StoreResult<TaskPage> {
        query.validate()?;

        // Build the shared WHERE tail; bind order must match below.
        let mut filters = String::new();
        let mut bind_count = 0;

        let title = query.title.as_deref().filter(|t| !t.is_empty());
        if title.is_some() {
            bind_count += 1;
            filters.push_str(&format!(" AND title ILIKE ${}", bind_count));
        }
        if !query.statuses.is_empty() {
            bind_count += 1;
            filters.push_str(&format!(" AND status = ANY(${})", bind_count));
        }
        if !query.labels.is_empty() {
            bind_count += 1;
            filters.push_str(&format!(" AND label = ANY(${})", bind_count));
        }
        if !query.priorities.is_empty() {
            bind_count += 1;
            filters.push_str(&format!(" AND priority = ANY(${})", bind_count));
        }

        let data_sql = format!(
            "SELECT id, code, title, status, label, priority, created_at, updated_at \
             FROM tasks WHERE TRUE{} ORDER BY {} {} LIMIT ${} OFFSET ${}",
            filters,
            query.sort.field.column(),
            query.sort.direction.as_sql(),
            bind_count + 1,
            bind_count + 2,
        );
        let count_sql = format!("SELECT COUNT(*) FROM tasks WHERE TRUE{}", filters);

        let mut data_query = sqlx::query_as::<_, Task>(&data_sql);
        let mut count_query = sqlx::query_as::<_, (i64,)>(&count_sql);

        if let Some(title) = title {
            let pattern = format!("%{}%", title);
            data_query = data_query.bind(pattern.clone());
            count_query = count_query.bind(pattern);
        }
        if !query.statuses.is_empty() {
            data_query = data_query.bind(query.statuses.clone());
            count_query = count_query.bind(query.statuses.clone());
        }
        if !query.labels.is_empty() {
            data_query = data_query.bind(query.labels.clone());
            count_query = count_query.bind(query.labels.clone());
        }
        if !query.priorities.is_empty() {
            data_query = data_query.bind(query.priorities.clone());
            count_query = count_query.bind(query.priorities.clone());
        }

        let offset = (query.page - 1) * query.per_page;
        data_query = data_query.bind(query.per_page).bind(offset);

        let mut tx = pool.begin().await?;
        let data = data_query.fetch_all(&mut *tx).await?;
        let (total,) = count_query.fetch_one(&mut *tx).await?;
        tx.commit().await?;

        Ok(TaskPage {
            data,
            total,
            page_count: page_count(total, query.per_page),
        })
    }

    /// Updates a task
    ///
    /// Writes only the provided fields and always sets `updated_at = NOW()`
    /// in the same statement. Callers re-fetch if they need the new state.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when no row has the given id and
    /// [`StoreError::Validation`] for an invalid title.
    pub async fn update(pool: &PgPool, id: &str, data: UpdateTask) -> StoreResult<()> {
        data.validate()?;

        // Build dynamic update query based on which fields are present
        let mut query = String::from("UPDATE tasks SET updated_at = NOW()");
        let mut bind_count = 1;

        if data.title.is_some() {
            bind_count += 1;
            query.push_str(&format!(", title = ${}", bind_count));
        }
        if data.status.is_some() {
            bind_count += 1;
            query.push_str(&format!(", status = ${}", bind_count));
        }
        if data.label.is_some() {
            bind_count += 1;
            query.push_str(&format!(", label = ${}", bind_count));
        }
        if data.priority.is_some() {
            bind_count += 1;
            query.push_str(&format!(", priority = ${}", bind_count));
        }

        query.push_str(" WHERE id = $1");

        let mut q = sqlx::query(&query).bind(id);

        if let Some(title) = data.title {
            q = q.bind(title);
        }
        if let Some(status) = data.status {
            q = q.bind(status);
        }
        if let Some(label) = data.label {
            q = q.bind(label);
        }
        if let Some(priority) = data.priority {
            q = q.bind(priority);
        }

        let result = q.execute(pool).await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(format!("task {} not found", id)));
        }

        Ok(())
    }

    /// Deletes a set of tasks by id
    ///
    /// Idempotent: ids that do not exist are skipped, and the returned count
    /// is the number of rows actually removed. An empty set is a no-op that
    /// never touches the database.
    pub async fn delete_many(pool: &PgPool, ids: &[String]) -> StoreResult<u64> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = sqlx::query("DELETE FROM tasks WHERE id = ANY($1)")
            .bind(ids)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_status_as_str() {
        assert_eq!(TaskStatus::Todo.as_str(), "todo");
        assert_eq!(TaskStatus::InProgress.as_str(), "in-progress");
        assert_eq!(TaskStatus::Done.as_str(), "done");
        assert_eq!(TaskStatus::Canceled.as_str(), "canceled");
    }

    #[test]
    fn test_task_label_as_str() {
        assert_eq!(TaskLabel::Bug.as_str(), "bug");
        assert_eq!(TaskLabel::Feature.as_str(), "feature");
        assert_eq!(TaskLabel::Enhancement.as_str(), "enhancement");
        assert_eq!(TaskLabel::Documentation.as_str(), "documentation");
    }

    #[test]
    fn test_task_priority_as_str() {
        assert_eq!(TaskPriority::Low.as_str(), "low");
        assert_eq!(TaskPriority::Medium.as_str(), "medium");
        assert_eq!(TaskPriority::High.as_str(), "high");
    }

    #[test]
    fn test_enum_defaults() {
        assert_eq!(TaskStatus::default(), TaskStatus::Todo);
        assert_eq!(TaskLabel::default(), TaskLabel::Bug);
        assert_eq!(TaskPriority::default(), TaskPriority::Low);
    }

    #[test]
    fn test_status_serde_wire_names() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");

        let status: TaskStatus = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(status, TaskStatus::InProgress);
    }

    #[test]
    fn test_status_serde_rejects_unknown() {
        assert!(serde_json::from_str::<TaskStatus>("\"urgent\"").is_err());
        assert!(serde_json::from_str::<TaskLabel>("\"chore\"").is_err());
        assert!(serde_json::from_str::<TaskPriority>("\"critical\"").is_err());
    }

    #[test]
    fn test_enum_from_str() {
        assert_eq!("in-progress".parse::<TaskStatus>(), Ok(TaskStatus::InProgress));
        assert_eq!("feature".parse::<TaskLabel>(), Ok(TaskLabel::Feature));
        assert_eq!("high".parse::<TaskPriority>(), Ok(TaskPriority::High));

        let err = "urgent".parse::<TaskStatus>().unwrap_err();
        assert!(err.contains("urgent"));
        assert!(err.contains("in-progress"));
    }

    #[test]
    fn test_sort_parse() {
        let sort: TaskSort = "title.asc".parse().unwrap();
        assert_eq!(sort.field, TaskSortField::Title);
        assert_eq!(sort.direction, SortDirection::Asc);

        let sort: TaskSort = "created_at.desc".parse().unwrap();
        assert_eq!(sort.field, TaskSortField::CreatedAt);
        assert_eq!(sort.direction, SortDirection::Desc);

        assert!("title".parse::<TaskSort>().is_err());
        assert!("bogus.desc".parse::<TaskSort>().is_err());
        assert!("title.sideways".parse::<TaskSort>().is_err());
    }

    #[test]
    fn test_sort_default() {
        let sort = TaskSort::default();
        assert_eq!(sort.field, TaskSortField::CreatedAt);
        assert_eq!(sort.direction, SortDirection::Desc);
    }

    #[test]
    fn test_sort_field_columns() {
        assert_eq!(TaskSortField::CreatedAt.column(), "created_at");
        assert_eq!(TaskSortField::UpdatedAt.column(), "updated_at");
        assert_eq!(SortDirection::Asc.as_sql(), "ASC");
        assert_eq!(SortDirection::Desc.as_sql(), "DESC");
    }

    #[test]
    fn test_list_query_defaults() {
        let query = TaskListQuery::default();
        assert_eq!(query.page, 1);
        assert_eq!(query.per_page, 10);
        assert!(query.title.is_none());
        assert!(query.statuses.is_empty());
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_list_query_validation() {
        let query = TaskListQuery {
            page: 0,
            ..Default::default()
        };
        assert!(query.validate().is_err());

        let query = TaskListQuery {
            per_page: 0,
            ..Default::default()
        };
        assert!(query.validate().is_err());

        let query = TaskListQuery {
            per_page: 101,
            ..Default::default()
        };
        assert!(query.validate().is_err());

        let query = TaskListQuery {
            per_page: 100,
            ..Default::default()
        };
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_create_task_title_validation() {
        let valid = CreateTask {
            title: "a".repeat(256),
            status: None,
            label: None,
            priority: None,
        };
        assert!(valid.validate().is_ok());

        let empty = CreateTask {
            title: String::new(),
            status: None,
            label: None,
            priority: None,
        };
        assert!(empty.validate().is_err());

        let too_long = CreateTask {
            title: "a".repeat(257),
            status: None,
            label: None,
            priority: None,
        };
        assert!(too_long.validate().is_err());
    }

    #[test]
    fn test_update_task_default_is_empty() {
        let update = UpdateTask::default();
        assert!(update.title.is_none());
        assert!(update.status.is_none());
        assert!(update.label.is_none());
        assert!(update.priority.is_none());
        assert!(update.validate().is_ok());
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(5, 2), 3);
    }
}
