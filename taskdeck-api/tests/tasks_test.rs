/// Integration tests for the TaskDeck API
///
/// These tests drive the router end-to-end: requests pass through routing,
/// extractors and error mapping down to a real PostgreSQL database. Every
/// test isolates its rows with a random marker and removes them on the way
/// out.

mod common;

use std::collections::HashSet;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::Service as _;

use common::{body_json, create_test_task, marker, TestContext};
use taskdeck_api::routes::health::HealthResponse;
use taskdeck_core::models::task::{Task, TaskLabel, TaskPage, TaskPriority, TaskStatus};

async fn cleanup(ctx: &TestContext, ids: Vec<String>) {
    Task::delete_many(&ctx.db, &ids).await.expect("cleanup");
}

/// Test that a minimal create request gets column defaults and a code
#[tokio::test]
async fn test_create_task_applies_defaults() {
    let Some(ctx) = TestContext::new().await else { return };

    let title = format!("create {}", marker());
    let request = Request::builder()
        .method("POST")
        .uri("/v1/tasks")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "title": title }).to_string()))
        .unwrap();

    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let task: Task = body_json(response).await;
    assert_eq!(task.title.as_deref(), Some(title.as_str()));
    assert_eq!(task.status, TaskStatus::Todo);
    assert_eq!(task.label, TaskLabel::Bug);
    assert_eq!(task.priority, TaskPriority::Low);
    assert!(task.code.as_deref().expect("code assigned").starts_with("TASK-"));

    // Fetch it back through the API
    let request = Request::builder()
        .method("GET")
        .uri(format!("/v1/tasks/{}", task.id))
        .body(Body::empty())
        .unwrap();

    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let fetched: Task = body_json(response).await;
    assert_eq!(fetched.id, task.id);
    assert_eq!(fetched.code, task.code);

    cleanup(&ctx, vec![task.id]).await;
}

/// Test that an unknown enum value is rejected before anything is written
#[tokio::test]
async fn test_create_task_rejects_unknown_label() {
    let Some(ctx) = TestContext::new().await else { return };

    let title = marker();
    let request = Request::builder()
        .method("POST")
        .uri("/v1/tasks")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "title": title, "label": "chore" }).to_string(),
        ))
        .unwrap();

    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Nothing was written
    let request = Request::builder()
        .method("GET")
        .uri(format!("/v1/tasks?title={}", title))
        .body(Body::empty())
        .unwrap();

    let response = ctx.app.clone().call(request).await.unwrap();
    let page: TaskPage = body_json(response).await;
    assert_eq!(page.total, 0);
}

/// Test that an empty title fails validation with a field-level detail
#[tokio::test]
async fn test_create_task_rejects_empty_title() {
    let Some(ctx) = TestContext::new().await else { return };

    let request = Request::builder()
        .method("POST")
        .uri("/v1/tasks")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "title": "" }).to_string()))
        .unwrap();

    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let error: serde_json::Value = body_json(response).await;
    assert_eq!(error["error"], "validation_error");
    assert_eq!(error["details"][0]["field"], "title");
}

/// Test 404 mapping for a missing task
#[tokio::test]
async fn test_get_unknown_task_returns_not_found() {
    let Some(ctx) = TestContext::new().await else { return };

    let request = Request::builder()
        .method("GET")
        .uri("/v1/tasks/thisidmatchesnorowatallanywhere")
        .body(Body::empty())
        .unwrap();

    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let error: serde_json::Value = body_json(response).await;
    assert_eq!(error["error"], "not_found");
}

/// Test that PATCH writes only the provided fields and bumps updated_at
#[tokio::test]
async fn test_update_task_writes_subset_and_bumps_updated_at() {
    let Some(ctx) = TestContext::new().await else { return };

    let task = create_test_task(
        &ctx,
        &format!("patch {}", marker()),
        Some(TaskStatus::Todo),
    )
    .await;

    tokio::time::sleep(std::time::Duration::from_millis(20)).await;

    let request = Request::builder()
        .method("PATCH")
        .uri(format!("/v1/tasks/{}", task.id))
        .header("content-type", "application/json")
        .body(Body::from(json!({ "status": "done" }).to_string()))
        .unwrap();

    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let request = Request::builder()
        .method("GET")
        .uri(format!("/v1/tasks/{}", task.id))
        .body(Body::empty())
        .unwrap();

    let response = ctx.app.clone().call(request).await.unwrap();
    let fetched: Task = body_json(response).await;
    assert_eq!(fetched.status, TaskStatus::Done);
    assert_eq!(fetched.title, task.title);
    assert_eq!(fetched.label, task.label);
    assert!(fetched.updated_at > task.updated_at);

    cleanup(&ctx, vec![task.id]).await;
}

/// Test 404 mapping when updating a missing task
#[tokio::test]
async fn test_update_unknown_task_returns_not_found() {
    let Some(ctx) = TestContext::new().await else { return };

    let request = Request::builder()
        .method("PATCH")
        .uri("/v1/tasks/thisidmatchesnorowatallanywhere")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "status": "done" }).to_string()))
        .unwrap();

    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Test that bulk delete skips missing ids and reports the removed count
#[tokio::test]
async fn test_delete_tasks_reports_removed_rows() {
    let Some(ctx) = TestContext::new().await else { return };

    let first = create_test_task(&ctx, &format!("delete a {}", marker()), None).await;
    let second = create_test_task(&ctx, &format!("delete b {}", marker()), None).await;

    let request = Request::builder()
        .method("DELETE")
        .uri("/v1/tasks")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "ids": [first.id, second.id, "thisidmatchesnorowatallanywhere"]
            })
            .to_string(),
        ))
        .unwrap();

    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let result: serde_json::Value = body_json(response).await;
    assert_eq!(result["deleted"], 2);

    // Deleting the same ids again removes nothing
    let request = Request::builder()
        .method("DELETE")
        .uri("/v1/tasks")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "ids": [first.id] }).to_string()))
        .unwrap();

    let response = ctx.app.clone().call(request).await.unwrap();
    let result: serde_json::Value = body_json(response).await;
    assert_eq!(result["deleted"], 0);

    let request = Request::builder()
        .method("GET")
        .uri(format!("/v1/tasks/{}", first.id))
        .body(Body::empty())
        .unwrap();

    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Test that an empty id list is rejected
#[tokio::test]
async fn test_delete_tasks_rejects_empty_id_list() {
    let Some(ctx) = TestContext::new().await else { return };

    let request = Request::builder()
        .method("DELETE")
        .uri("/v1/tasks")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "ids": [] }).to_string()))
        .unwrap();

    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

/// Test listing end-to-end: filters, pagination and page arithmetic
#[tokio::test]
async fn test_list_tasks_filters_and_paginates() {
    let Some(ctx) = TestContext::new().await else { return };

    let marker = marker();
    let statuses = [
        Some(TaskStatus::Done),
        Some(TaskStatus::Done),
        Some(TaskStatus::InProgress),
        Some(TaskStatus::Todo),
        Some(TaskStatus::Todo),
    ];

    let mut ids = Vec::new();
    for (i, status) in statuses.into_iter().enumerate() {
        let task = create_test_task(&ctx, &format!("{}{}", marker, i), status).await;
        ids.push(task.id);
    }

    // Status filter is OR within the field
    let request = Request::builder()
        .method("GET")
        .uri(format!(
            "/v1/tasks?title={}&status=done,in-progress",
            marker
        ))
        .body(Body::empty())
        .unwrap();

    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page: TaskPage = body_json(response).await;
    assert_eq!(page.total, 3);
    assert!(page.data.iter().all(|t| t.status != TaskStatus::Todo));

    // Pages are disjoint and cover everything under a stable sort
    let mut seen = HashSet::new();
    for page_no in 1..=3 {
        let request = Request::builder()
            .method("GET")
            .uri(format!(
                "/v1/tasks?title={}&per_page=2&page={}&sort=code.asc",
                marker, page_no
            ))
            .body(Body::empty())
            .unwrap();

        let response = ctx.app.clone().call(request).await.unwrap();
        let page: TaskPage = body_json(response).await;
        assert_eq!(page.total, 5);
        assert_eq!(page.page_count, 3);
        assert_eq!(page.data.len(), if page_no < 3 { 2 } else { 1 });
        for task in page.data {
            seen.insert(task.id);
        }
    }
    assert_eq!(seen.len(), 5);

    // Out-of-range page number fails validation
    let request = Request::builder()
        .method("GET")
        .uri("/v1/tasks?page=0")
        .body(Body::empty())
        .unwrap();

    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    cleanup(&ctx, ids).await;
}

/// Test that an unknown filter value maps to a validation error
#[tokio::test]
async fn test_list_tasks_rejects_unknown_status() {
    let Some(ctx) = TestContext::new().await else { return };

    let request = Request::builder()
        .method("GET")
        .uri("/v1/tasks?status=urgent")
        .body(Body::empty())
        .unwrap();

    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let error: serde_json::Value = body_json(response).await;
    assert_eq!(error["error"], "validation_error");
    assert_eq!(error["details"][0]["field"], "status");
}

/// Test the health endpoint against a live database
#[tokio::test]
async fn test_health_check_reports_connected_database() {
    let Some(ctx) = TestContext::new().await else { return };

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let health: HealthResponse = body_json(response).await;
    assert_eq!(health.status, "healthy");
    assert_eq!(health.database, "connected");
    assert!(!health.version.is_empty());
}
