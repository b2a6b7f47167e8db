/**
 * Account Routes
 *
 * - `POST /auth/register` - User registration
 * - `POST /auth/login` - User login
 * - `GET /auth/me` - Current user profile (requires authentication)
 * - `PUT /auth/update` - Change name, email or password (requires authentication)
 * - `PUT /auth/avatar` - Replace avatar (requires authentication)
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};

use crate::backend::auth::{get_me, login, register, update_avatar, update_profile};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure account routes
///
/// The gated routes get the auth middleware as a route layer, so unknown
/// paths under `/auth` still fall through to the 404 fallback.
pub fn configure_auth_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    let gated = Router::new()
        .route("/auth/me", get(get_me))
        .route("/auth/update", put(update_profile))
        .route("/auth/avatar", put(update_avatar))
        .route_layer(from_fn_with_state(state.clone(), auth_middleware));

    router
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .merge(gated)
}
