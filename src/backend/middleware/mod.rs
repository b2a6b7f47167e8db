//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`auth`** - Bearer-token gate for protected routes and the `AuthUser`
//!   extractor
//! - **`json`** - JSON body extractor with API-shaped rejections
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware::from_fn_with_state, routing::get, Router};
//! use recipehub::backend::middleware::{auth_middleware, AuthUser};
//! use recipehub::backend::server::state::AppState;
//!
//! async fn whoami(AuthUser(user): AuthUser) -> String {
//!     user.user_id.to_string()
//! }
//!
//! fn protected(state: AppState) -> Router<AppState> {
//!     Router::new()
//!         .route("/whoami", get(whoami))
//!         .route_layer(from_fn_with_state(state, auth_middleware))
//! }
//! ```

pub mod auth;

pub mod json;

pub use auth::{auth_middleware, bearer_token, require_token_service, AuthUser, AuthenticatedUser};
pub use json::ApiJson;
