//! Authentication API integration tests
//!
//! Tests for the `/auth` endpoints and the bearer-token gate.

use axum::http::{header::AUTHORIZATION, HeaderValue, StatusCode};
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{auth_header, register_user, TestApp};
use crate::{assert_api_error, assert_contains};

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/auth/register")
        .json(&json!({
            "name": "Alice",
            "email": "a@x.com",
            "password": "pw123",
            "confirmPassword": "pw123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["message"], "User registered successfully");
    assert_eq!(body["user"]["name"], "Alice");
    assert_eq!(body["user"]["email"], "a@x.com");
    assert!(body["user"].get("password").is_none());

    let id = body["user"]["id"].as_i64().unwrap();
    assert_eq!(app.tokens.verify(body["token"].as_str().unwrap()), Ok(id));
}

#[tokio::test]
async fn test_register_validation() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/auth/register")
        .json(&json!({ "name": "Alice", "email": "a@x.com", "password": "pw123" }))
        .await;
    assert_api_error!(response, StatusCode::BAD_REQUEST, "All fields are required");

    let response = app
        .server
        .post("/auth/register")
        .json(&json!({
            "name": "Alice",
            "email": "a@x.com",
            "password": "pw123",
            "confirmPassword": "pw124"
        }))
        .await;
    assert_api_error!(response, StatusCode::BAD_REQUEST, "Passwords do not match");
}

#[tokio::test]
async fn test_register_rejects_password_bcrypt_would_truncate() {
    let app = TestApp::new().await;
    let long = "x".repeat(100);

    let response = app
        .server
        .post("/auth/register")
        .json(&json!({
            "name": "Alice",
            "email": "a@x.com",
            "password": long,
            "confirmPassword": long
        }))
        .await;
    assert_api_error!(
        response,
        StatusCode::BAD_REQUEST,
        "Password must be at most 72 bytes"
    );

    register_user(&app.server, "Alice", "a@x.com", &"x".repeat(72)).await;
    let response = app
        .server
        .post("/auth/login")
        .json(&json!({
            "email": "a@x.com",
            "password": format!("{}DIFFERENT", "x".repeat(72))
        }))
        .await;
    assert_api_error!(response, StatusCode::UNAUTHORIZED, "Invalid credentials");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::new().await;
    register_user(&app.server, "Alice", "a@x.com", "pw123").await;

    let response = app
        .server
        .post("/auth/register")
        .json(&json!({
            "name": "Other Alice",
            "email": "a@x.com",
            "password": "pw999",
            "confirmPassword": "pw999"
        }))
        .await;
    assert_api_error!(response, StatusCode::CONFLICT, "Email already registered");
}

#[tokio::test]
async fn test_malformed_json_body() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/auth/login")
        .text("{not json")
        .content_type("application/json")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn test_login() {
    let app = TestApp::new().await;
    let user = register_user(&app.server, "Alice", "a@x.com", "pw123").await;

    let response = app
        .server
        .post("/auth/login")
        .json(&json!({ "email": "a@x.com", "password": "pw123" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["user"]["id"], user.id);

    let wrong_password = app
        .server
        .post("/auth/login")
        .json(&json!({ "email": "a@x.com", "password": "nope" }))
        .await;
    assert_api_error!(wrong_password, StatusCode::UNAUTHORIZED, "Invalid credentials");

    let unknown = app
        .server
        .post("/auth/login")
        .json(&json!({ "email": "ghost@x.com", "password": "pw123" }))
        .await;
    assert_api_error!(unknown, StatusCode::UNAUTHORIZED, "Invalid credentials");

    let missing = app
        .server
        .post("/auth/login")
        .json(&json!({ "email": "a@x.com" }))
        .await;
    assert_api_error!(missing, StatusCode::BAD_REQUEST, "All fields are required");
}

#[tokio::test]
async fn test_me_requires_token() {
    let app = TestApp::new().await;
    let user = register_user(&app.server, "Alice", "a@x.com", "pw123").await;

    let response = app.server.get("/auth/me").await;
    assert_api_error!(response, StatusCode::UNAUTHORIZED, "No access");

    let response = app
        .server
        .get("/auth/me")
        .add_header(AUTHORIZATION, HeaderValue::from_static("Bearer garbage"))
        .await;
    assert_api_error!(response, StatusCode::UNAUTHORIZED, "Invalid token");

    let expired = app
        .tokens
        .issue_at(user.id, Utc::now() - Duration::days(8))
        .unwrap();
    let response = app
        .server
        .get("/auth/me")
        .add_header(AUTHORIZATION, auth_header(&expired))
        .await;
    assert_api_error!(response, StatusCode::UNAUTHORIZED, "Invalid token");

    let response = app
        .server
        .get("/auth/me")
        .add_header(AUTHORIZATION, auth_header(&user.token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["id"], user.id);
    assert_eq!(body["email"], "a@x.com");
    assert!(body.get("createdAt").is_some());
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_raw_token_without_bearer_prefix() {
    let app = TestApp::new().await;
    let user = register_user(&app.server, "Alice", "a@x.com", "pw123").await;

    let response = app
        .server
        .get("/auth/me")
        .add_header(AUTHORIZATION, HeaderValue::from_str(&user.token).unwrap())
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_missing_secret_is_server_error() {
    let server = TestApp::without_secret().await;

    let response = server
        .get("/auth/me")
        .add_header(AUTHORIZATION, HeaderValue::from_static("Bearer anything"))
        .await;
    assert_api_error!(
        response,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Server error: missing JWT secret"
    );

    // Without a header the caller is told about the credential first.
    let response = server.get("/auth/me").await;
    assert_api_error!(response, StatusCode::UNAUTHORIZED, "No access");
}

#[tokio::test]
async fn test_update_profile() {
    let app = TestApp::new().await;
    let user = register_user(&app.server, "Alice", "a@x.com", "pw123").await;

    let response = app
        .server
        .put("/auth/update")
        .add_header(AUTHORIZATION, auth_header(&user.token))
        .json(&json!({ "name": "Alicia" }))
        .await;
    assert_api_error!(response, StatusCode::BAD_REQUEST, "Current password is required");

    let response = app
        .server
        .put("/auth/update")
        .add_header(AUTHORIZATION, auth_header(&user.token))
        .json(&json!({ "currentPassword": "wrong", "name": "Alicia" }))
        .await;
    assert_api_error!(response, StatusCode::UNAUTHORIZED, "Incorrect current password");

    let response = app
        .server
        .put("/auth/update")
        .add_header(AUTHORIZATION, auth_header(&user.token))
        .json(&json!({
            "currentPassword": "pw123",
            "name": "Alicia",
            "newPassword": "newpw"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Profile updated successfully");
    assert_eq!(body["user"]["name"], "Alicia");
    assert_eq!(app.tokens.verify(body["token"].as_str().unwrap()), Ok(user.id));

    let old_login = app
        .server
        .post("/auth/login")
        .json(&json!({ "email": "a@x.com", "password": "pw123" }))
        .await;
    assert_eq!(old_login.status_code(), StatusCode::UNAUTHORIZED);

    let new_login = app
        .server
        .post("/auth/login")
        .json(&json!({ "email": "a@x.com", "password": "newpw" }))
        .await;
    assert_eq!(new_login.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_update_avatar() {
    let app = TestApp::new().await;
    let user = register_user(&app.server, "Alice", "a@x.com", "pw123").await;

    let response = app
        .server
        .put("/auth/avatar")
        .add_header(AUTHORIZATION, auth_header(&user.token))
        .json(&json!({}))
        .await;
    assert_api_error!(response, StatusCode::BAD_REQUEST, "Avatar is required");

    let response = app
        .server
        .put("/auth/avatar")
        .add_header(AUTHORIZATION, auth_header(&user.token))
        .json(&json!({ "avatar": "https://img.example/alice.png" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["avatar"], "https://img.example/alice.png");

    let me: Value = app
        .server
        .get("/auth/me")
        .add_header(AUTHORIZATION, auth_header(&user.token))
        .await
        .json();
    assert_eq!(me["avatar"], "https://img.example/alice.png");
}

#[tokio::test]
async fn test_health_and_unknown_route() {
    let app = TestApp::new().await;

    let health: Value = app.server.get("/health").await.json();
    assert_eq!(health["status"], "ok");

    let response = app.server.get("/nowhere").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_contains!(response.text(), "Route not found");
}
