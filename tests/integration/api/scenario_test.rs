//! End-to-end account and recipe flow

use axum::http::{header::AUTHORIZATION, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{auth_header, register_user, TestApp};

#[tokio::test]
async fn test_register_login_and_manage_recipes() {
    let app = TestApp::new().await;

    let alice = register_user(&app.server, "Alice", "a@x.com", "pw123").await;

    let login: Value = app
        .server
        .post("/auth/login")
        .json(&json!({ "email": "a@x.com", "password": "pw123" }))
        .await
        .json();
    let token = login["token"].as_str().unwrap().to_string();
    assert_eq!(app.tokens.verify(&token), Ok(alice.id));

    let created = app
        .server
        .post("/recipes")
        .add_header(AUTHORIZATION, auth_header(&token))
        .json(&json!({ "title": "Soup", "ingredients": ["water", "salt"] }))
        .await;
    assert_eq!(created.status_code(), StatusCode::CREATED);
    let recipe_id = created.json::<Value>()["recipe"]["id"].as_i64().unwrap();

    let mine: Value = app
        .server
        .get("/recipes/my")
        .add_header(AUTHORIZATION, auth_header(&token))
        .await
        .json();
    assert_eq!(mine["recipes"][0]["id"], recipe_id);

    let public: Value = app.server.get("/recipes").await.json();
    assert_eq!(public["recipes"][0]["user"]["name"], "Alice");

    let bob = register_user(&app.server, "Bob", "b@x.com", "pw456").await;
    let forbidden = app
        .server
        .delete(&format!("/recipes/{}", recipe_id))
        .add_header(AUTHORIZATION, auth_header(&bob.token))
        .await;
    assert_eq!(forbidden.status_code(), StatusCode::FORBIDDEN);

    let deleted = app
        .server
        .delete(&format!("/recipes/{}", recipe_id))
        .add_header(AUTHORIZATION, auth_header(&token))
        .await;
    assert_eq!(deleted.status_code(), StatusCode::OK);

    let public: Value = app.server.get("/recipes").await.json();
    assert_eq!(public["recipes"], json!([]));
}
