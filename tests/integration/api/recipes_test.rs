//! Recipe API integration tests

use axum::http::{header::AUTHORIZATION, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::assert_api_error;
use crate::common::{auth_header, register_unique_user, TestApp, TestUser};

async fn create_recipe(app: &TestApp, user: &TestUser, body: Value) -> Value {
    let response = app
        .server
        .post("/recipes")
        .add_header(AUTHORIZATION, auth_header(&user.token))
        .json(&body)
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json::<Value>()["recipe"].clone()
}

#[tokio::test]
async fn test_create_requires_token() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/recipes")
        .json(&json!({ "title": "Soup", "ingredients": ["water"] }))
        .await;
    assert_api_error!(response, StatusCode::UNAUTHORIZED, "No access");
}

#[tokio::test]
async fn test_create_validation() {
    let app = TestApp::new().await;
    let user = register_unique_user(&app.server, "Alice").await;

    for body in [
        json!({ "ingredients": ["water"] }),
        json!({ "title": "Soup" }),
        json!({ "title": "Soup", "ingredients": [] }),
        json!({ "title": "  ", "ingredients": "water" }),
    ] {
        let response = app
            .server
            .post("/recipes")
            .add_header(AUTHORIZATION, auth_header(&user.token))
            .json(&body)
            .await;
        assert_api_error!(
            response,
            StatusCode::BAD_REQUEST,
            "Title and ingredients are required"
        );
    }
}

#[tokio::test]
async fn test_ingredients_keep_their_shape() {
    let app = TestApp::new().await;
    let user = register_unique_user(&app.server, "Alice").await;

    let listed = create_recipe(
        &app,
        &user,
        json!({ "title": "Soup", "ingredients": ["water", "salt"] }),
    )
    .await;
    assert_eq!(listed["ingredients"], json!(["water", "salt"]));
    assert_eq!(listed["userId"], user.id);

    let text = create_recipe(
        &app,
        &user,
        json!({ "title": "Tea", "ingredients": "leaves and hot water" }),
    )
    .await;
    assert_eq!(text["ingredients"], "leaves and hot water");
}

#[tokio::test]
async fn test_public_list_embeds_owner() {
    let app = TestApp::new().await;
    let alice = register_unique_user(&app.server, "Alice").await;
    let bob = register_unique_user(&app.server, "Bob").await;

    create_recipe(&app, &alice, json!({ "title": "Soup", "ingredients": ["water"] })).await;
    let bread = create_recipe(&app, &bob, json!({ "title": "Bread", "ingredients": ["flour"] })).await;

    let response = app.server.get("/recipes").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    let recipes = body["recipes"].as_array().unwrap();

    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[0]["id"], bread["id"]);
    assert_eq!(recipes[0]["user"]["name"], "Bob");
    assert_eq!(recipes[0]["user"]["id"], bob.id);
    assert!(recipes[0]["user"].get("email").is_none());
}

#[tokio::test]
async fn test_my_recipes_only_lists_own() {
    let app = TestApp::new().await;
    let alice = register_unique_user(&app.server, "Alice").await;
    let bob = register_unique_user(&app.server, "Bob").await;

    create_recipe(&app, &alice, json!({ "title": "Soup", "ingredients": ["water"] })).await;
    create_recipe(&app, &bob, json!({ "title": "Bread", "ingredients": ["flour"] })).await;

    let body: Value = app
        .server
        .get("/recipes/my")
        .add_header(AUTHORIZATION, auth_header(&bob.token))
        .await
        .json();
    let recipes = body["recipes"].as_array().unwrap();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0]["title"], "Bread");

    let response = app.server.get("/recipes/my").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_and_delete_are_owner_only() {
    let app = TestApp::new().await;
    let alice = register_unique_user(&app.server, "Alice").await;
    let bob = register_unique_user(&app.server, "Bob").await;

    let recipe = create_recipe(
        &app,
        &alice,
        json!({ "title": "Soup", "description": "Warm", "ingredients": ["water"] }),
    )
    .await;
    let path = format!("/recipes/{}", recipe["id"]);

    let response = app
        .server
        .put(&path)
        .add_header(AUTHORIZATION, auth_header(&bob.token))
        .json(&json!({ "title": "Hijacked" }))
        .await;
    assert_api_error!(response, StatusCode::FORBIDDEN, "You cannot update this recipe");

    let response = app
        .server
        .delete(&path)
        .add_header(AUTHORIZATION, auth_header(&bob.token))
        .await;
    assert_api_error!(response, StatusCode::FORBIDDEN, "You cannot delete this recipe");

    let response = app
        .server
        .put(&path)
        .add_header(AUTHORIZATION, auth_header(&alice.token))
        .json(&json!({ "title": "Stew" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Recipe updated successfully");
    assert_eq!(body["recipe"]["title"], "Stew");
    assert_eq!(body["recipe"]["description"], "Warm");
    assert_eq!(body["recipe"]["ingredients"], json!(["water"]));

    let response = app
        .server
        .delete(&path)
        .add_header(AUTHORIZATION, auth_header(&alice.token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Recipe deleted successfully");

    let response = app
        .server
        .delete(&path)
        .add_header(AUTHORIZATION, auth_header(&alice.token))
        .await;
    assert_api_error!(response, StatusCode::NOT_FOUND, "Recipe not found");
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let app = TestApp::new().await;
    let user = register_unique_user(&app.server, "Alice").await;

    let response = app
        .server
        .put("/recipes/abc")
        .add_header(AUTHORIZATION, auth_header(&user.token))
        .json(&json!({ "title": "Stew" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unrouted_method_on_gated_path_hits_gate_first() {
    let app = TestApp::new().await;

    let response = app.server.patch("/recipes").await;
    assert_api_error!(response, StatusCode::UNAUTHORIZED, "No access");

    let user = register_unique_user(&app.server, "Alice").await;
    let response = app
        .server
        .patch("/recipes")
        .add_header(AUTHORIZATION, auth_header(&user.token))
        .await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
}
