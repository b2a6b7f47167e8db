/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Health check
 * 2. Account routes (`/auth`)
 * 3. Recipe routes (`/recipes`)
 * 4. Fallback handler (JSON 404)
 *
 * CORS and request tracing wrap everything, including rejections from the
 * auth middleware.
 */

use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_auth_routes;
use crate::backend::routes::recipe_routes::configure_recipe_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Routes
///
/// - `GET /health` - Liveness probe
/// - `POST /auth/register`, `POST /auth/login` - public
/// - `GET /auth/me`, `PUT /auth/update`, `PUT /auth/avatar` - bearer token
/// - `GET /recipes` - public
/// - `POST /recipes`, `GET /recipes/my`, `PUT|DELETE /recipes/{id}` - bearer token
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/health", get(health));

    let router = configure_auth_routes(router, &app_state);
    let router = configure_recipe_routes(router, &app_state);

    router
        .fallback(|| async { BackendError::not_found("Route not found") })
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
