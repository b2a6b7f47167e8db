/**
 * Get Current User Handler
 *
 * GET /auth/me returns the profile of the identity the auth middleware
 * resolved from the bearer token. The password hash is never included.
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::ProfileResponse;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;

pub const USER_NOT_FOUND: &str = "User not found";

/// Get current user handler
///
/// # Errors
///
/// * `404 Not Found` - the identity behind a valid token no longer exists
/// * `500 Internal Server Error` - store failure
pub async fn get_me(
    State(pool): State<SqlitePool>,
    AuthUser(auth): AuthUser,
) -> Result<Json<ProfileResponse>, BackendError> {
    let user = get_user_by_id(&pool, auth.user_id).await?.ok_or_else(|| {
        tracing::warn!("User not found: {}", auth.user_id);
        BackendError::not_found(USER_NOT_FOUND)
    })?;

    Ok(Json(user.into()))
}
