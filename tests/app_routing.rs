mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test]
async fn test_trailing_slash_is_normalized(pool: PgPool) {
    let state = common::create_test_state(pool.clone());

    let (status, body) = common::send(
        state.clone(),
        common::json_request("POST", "/posts/", &json!({ "title": "T", "content": "C" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) =
        common::send(state, common::empty_request("GET", &format!("/posts/{id}/"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "T");
}

#[tokio::test]
async fn test_unknown_route_returns_not_found() {
    let (status, body) = common::send(
        common::unreachable_state(),
        common::empty_request("GET", "/nothing/here"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({ "success": false, "message": "Not Found", "code": 404 })
    );
}

#[tokio::test]
async fn test_undecodable_path_uses_framework_shape() {
    let (status, body) = common::send(
        common::unreachable_state(),
        common::empty_request("GET", "/posts/%FF"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], 400);
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
}

#[tokio::test]
async fn test_wrong_method_returns_method_not_allowed() {
    let (status, body) = common::send(
        common::unreachable_state(),
        common::empty_request("PATCH", "/posts/0f8c6a1e-3b8e-4d7c-9a55-5c2f8e4b1a90"),
    )
    .await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        body,
        json!({ "success": false, "message": "Method Not Allowed", "code": 405 })
    );
}

#[tokio::test]
async fn test_health_through_full_stack() {
    let (status, body) = common::send(
        common::unreachable_state(),
        common::empty_request("GET", "/check/health/"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["db"], "unavailable");
}

#[tokio::test]
async fn test_store_down_surfaces_database_error() {
    let (status, body) = common::send(
        common::unreachable_state(),
        common::json_request("POST", "/posts", &json!({ "title": "T", "content": "C" })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "Database connection failed: Unable to connect to server"
    );
}

#[tokio::test]
async fn test_empty_object_is_rejected() {
    let (status, body) = common::send(
        common::unreachable_state(),
        common::json_request("POST", "/posts/", &json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert_eq!(
        body["errors"],
        json!({ "title": "Title is required", "content": "Content is required" })
    );
}

#[tokio::test]
async fn test_invalid_input_is_rejected_before_store() {
    let (status, body) = common::send(
        common::unreachable_state(),
        common::json_request("POST", "/posts", &json!({ "title": "T" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"], json!({ "content": "Content is required" }));
}
