use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;

use todos_core::store::TodoStore;
use todos_server::{build_router, AuthConfig};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Router over a fresh in-memory store, no auth gate. Clone it per request;
/// the state is shared.
fn test_app() -> axum::Router {
    build_router(TodoStore::open_in_memory().unwrap(), AuthConfig::none())
}

/// Send a GET request via `oneshot` and return (status, parsed JSON body).
async fn get(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let req = axum::http::Request::builder()
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

/// Send a request with a JSON body via `oneshot` and return (status, parsed
/// JSON body).
async fn send_json(
    app: axum::Router,
    method: &str,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let req = axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(axum::body::Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

/// Create one todo and return its id from a follow-up read.
async fn create_one(app: &axum::Router, title: &str) -> i64 {
    let (status, json) = send_json(
        app.clone(),
        "POST",
        "/api/todos",
        serde_json::json!({ "title": title }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);

    let (_, list) = get(app.clone(), "/api/todos").await;
    list[0]["id"].as_i64().expect("created row has an id")
}

fn timestamp(value: &serde_json::Value) -> DateTime<Utc> {
    value
        .as_str()
        .expect("timestamp is a string")
        .parse()
        .expect("timestamp parses as RFC 3339")
}

// ---------------------------------------------------------------------------
// Read endpoint
// ---------------------------------------------------------------------------

#[tokio::test]
async fn read_with_zero_rows_returns_empty_collection() {
    let (status, json) = get(test_app(), "/api/todos").await;
    assert_eq!(status, StatusCode::OK);
    let arr = json.as_array().expect("expected JSON array");
    assert!(arr.is_empty(), "expected empty todo list");
}

#[tokio::test]
async fn read_returns_newest_first() {
    let app = test_app();
    create_one(&app, "first").await;
    create_one(&app, "second").await;
    create_one(&app, "third").await;

    let (status, json) = get(app, "/api/todos").await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["third", "second", "first"]);
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_then_read_shows_one_fresh_record() {
    let app = test_app();
    let (status, json) = send_json(
        app.clone(),
        "POST",
        "/api/todos",
        serde_json::json!({ "title": "Buy milk", "completed": false }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!({ "success": true }));

    let (_, list) = get(app, "/api/todos").await;
    let rows = list.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["title"], "Buy milk");
    assert_eq!(rows[0]["completed"], false);
    assert_eq!(rows[0]["createdAt"], rows[0]["updatedAt"]);
}

#[tokio::test]
async fn create_defaults_completed_to_false() {
    let app = test_app();
    create_one(&app, "no flag sent").await;

    let (_, list) = get(app, "/api/todos").await;
    assert_eq!(list[0]["completed"], false);
}

#[tokio::test]
async fn create_with_empty_title_returns_failure_result() {
    let app = test_app();
    let (status, json) = send_json(
        app.clone(),
        "POST",
        "/api/todos",
        serde_json::json!({ "title": "" }),
    )
    .await;

    // Action routes always answer 200 with a structured result.
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Failed to create todo.");

    let (_, list) = get(app, "/api/todos").await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn create_title_boundary_100_accepted_101_rejected() {
    let app = test_app();

    let (_, ok) = send_json(
        app.clone(),
        "POST",
        "/api/todos",
        serde_json::json!({ "title": "a".repeat(100) }),
    )
    .await;
    assert_eq!(ok["success"], true);

    let (_, too_long) = send_json(
        app.clone(),
        "POST",
        "/api/todos",
        serde_json::json!({ "title": "a".repeat(101) }),
    )
    .await;
    assert_eq!(too_long["success"], false);

    let (_, list) = get(app, "/api/todos").await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_overwrites_record_and_bumps_updated_at() {
    let app = test_app();
    let id = create_one(&app, "Buy milk").await;

    let (status, json) = send_json(
        app.clone(),
        "PUT",
        &format!("/api/todos/{id}"),
        serde_json::json!({ "title": "Buy oat milk", "completed": true }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!({ "success": true }));

    let (_, list) = get(app, "/api/todos").await;
    let row = &list[0];
    assert_eq!(row["title"], "Buy oat milk");
    assert_eq!(row["completed"], true);
    assert!(timestamp(&row["updatedAt"]) > timestamp(&row["createdAt"]));
}

#[tokio::test]
async fn update_with_empty_title_fails_and_does_not_mutate() {
    let app = test_app();
    let id = create_one(&app, "Buy milk").await;

    let (status, json) = send_json(
        app.clone(),
        "PUT",
        &format!("/api/todos/{id}"),
        serde_json::json!({ "title": "", "completed": true }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Failed to update todo.");

    // A subsequent read shows the original record untouched.
    let (_, list) = get(app, "/api/todos").await;
    assert_eq!(list[0]["title"], "Buy milk");
    assert_eq!(list[0]["completed"], false);
}

#[tokio::test]
async fn update_unknown_id_returns_failure_result() {
    let (status, json) = send_json(
        test_app(),
        "PUT",
        "/api/todos/999",
        serde_json::json!({ "title": "Anything", "completed": false }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Failed to update todo.");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_then_read_excludes_the_id() {
    let app = test_app();
    let id = create_one(&app, "Buy milk").await;

    let (status, json) = send_json(
        app.clone(),
        "DELETE",
        &format!("/api/todos/{id}"),
        serde_json::Value::Null,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!({ "success": true }));

    let (_, list) = get(app, "/api/todos").await;
    assert!(list
        .as_array()
        .unwrap()
        .iter()
        .all(|t| t["id"].as_i64() != Some(id)));
}

#[tokio::test]
async fn delete_unknown_id_returns_failure_not_crash() {
    let (status, json) = send_json(
        test_app(),
        "DELETE",
        "/api/todos/424242",
        serde_json::Value::Null,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Failed to delete todo.");
}

// ---------------------------------------------------------------------------
// Toggle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn toggle_writes_negation_of_supplied_value() {
    let app = test_app();
    let id = create_one(&app, "Buy milk").await;

    let (_, json) = send_json(
        app.clone(),
        "POST",
        &format!("/api/todos/{id}/toggle"),
        serde_json::json!({ "completed": false }),
    )
    .await;
    assert_eq!(json, serde_json::json!({ "success": true }));

    let (_, list) = get(app.clone(), "/api/todos").await;
    assert_eq!(list[0]["completed"], true);

    let (_, json) = send_json(
        app.clone(),
        "POST",
        &format!("/api/todos/{id}/toggle"),
        serde_json::json!({ "completed": true }),
    )
    .await;
    assert_eq!(json, serde_json::json!({ "success": true }));

    let (_, list) = get(app, "/api/todos").await;
    assert_eq!(list[0]["completed"], false);
}

#[tokio::test]
async fn toggle_twice_with_same_stale_value_settles_on_same_bit() {
    // Both requests carry the same captured value, so both writes set the
    // same final state — last write wins, by design.
    let app = test_app();
    let id = create_one(&app, "Buy milk").await;

    for _ in 0..2 {
        let (_, json) = send_json(
            app.clone(),
            "POST",
            &format!("/api/todos/{id}/toggle"),
            serde_json::json!({ "completed": false }),
        )
        .await;
        assert_eq!(json["success"], true);
    }

    let (_, list) = get(app, "/api/todos").await;
    assert_eq!(list[0]["completed"], true);
}

#[tokio::test]
async fn toggle_unknown_id_fails_with_update_family_message() {
    let (status, json) = send_json(
        test_app(),
        "POST",
        "/api/todos/31337/toggle",
        serde_json::json!({ "completed": false }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Failed to update todo.");
}

// ---------------------------------------------------------------------------
// Auth gate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn api_blocked_for_remote_host_when_token_set() {
    let app = build_router(
        TodoStore::open_in_memory().unwrap(),
        AuthConfig::with_token("secret".into()),
    );
    let req = axum::http::Request::builder()
        .uri("/api/todos")
        .header("host", "todos.example.com")
        .body(axum::body::Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn api_open_for_localhost_when_token_set() {
    let app = build_router(
        TodoStore::open_in_memory().unwrap(),
        AuthConfig::with_token("secret".into()),
    );
    let req = axum::http::Request::builder()
        .uri("/api/todos")
        .header("host", "localhost:4664")
        .body(axum::body::Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
