/**
 * Recipe Routes
 *
 * - `GET /recipes` - All recipes with owner summary (public)
 * - `POST /recipes` - Create (requires authentication)
 * - `GET /recipes/my` - Caller's recipes (requires authentication)
 * - `PUT /recipes/{id}` - Update own recipe (requires authentication)
 * - `DELETE /recipes/{id}` - Delete own recipe (requires authentication)
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};

use crate::backend::middleware::auth_middleware;
use crate::backend::recipes::{create_recipe, delete_recipe, list_all, list_mine, update_recipe};
use crate::backend::server::state::AppState;

/// Configure recipe routes
///
/// `/recipes` is registered twice: the public GET here and the gated POST in
/// the layered router. Merging joins the two method sets on one path.
///
/// The route layer also wraps the method-not-allowed fallback of the gated
/// paths, so e.g. `PATCH /recipes` without a token answers 401 and only an
/// authenticated caller sees the 405.
pub fn configure_recipe_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    let gated = Router::new()
        .route("/recipes", post(create_recipe))
        .route("/recipes/my", get(list_mine))
        .route("/recipes/{id}", put(update_recipe).delete(delete_recipe))
        .route_layer(from_fn_with_state(state.clone(), auth_middleware));

    router.route("/recipes", get(list_all)).merge(gated)
}
