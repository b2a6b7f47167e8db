/**
 * Profile Update Handler
 *
 * PUT /auth/update changes any of name, email and password for the
 * authenticated user. The current password must always be supplied and
 * verified first. A fresh token is returned with the updated profile.
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::me::USER_NOT_FOUND;
use crate::backend::auth::handlers::register::EMAIL_TAKEN;
use crate::backend::auth::handlers::types::{
    non_blank, UpdateProfileRequest, UpdateProfileResponse,
};
use crate::backend::auth::password::{hash_password, verify_password};
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::{
    get_user_by_email, get_user_by_id, is_unique_violation, update_user_profile,
};
use crate::backend::error::BackendError;
use crate::backend::middleware::{require_token_service, ApiJson, AuthUser};

pub const CURRENT_PASSWORD_REQUIRED: &str = "Current password is required";
pub const INCORRECT_PASSWORD: &str = "Incorrect current password";

/// Profile update handler
///
/// # Errors
///
/// * `400 Bad Request` - `currentPassword` missing
/// * `401 Unauthorized` - `currentPassword` does not match
/// * `404 Not Found` - the user behind the token no longer exists
/// * `409 Conflict` - the new email belongs to another user
/// * `500 Internal Server Error` - store, hashing or token failure
pub async fn update_profile(
    State(pool): State<SqlitePool>,
    State(tokens): State<Option<TokenService>>,
    AuthUser(auth): AuthUser,
    ApiJson(request): ApiJson<UpdateProfileRequest>,
) -> Result<Json<UpdateProfileResponse>, BackendError> {
    let Some(current_password) = non_blank(request.current_password.as_deref()) else {
        return Err(BackendError::validation(CURRENT_PASSWORD_REQUIRED));
    };

    let user = get_user_by_id(&pool, auth.user_id)
        .await?
        .ok_or_else(|| BackendError::not_found(USER_NOT_FOUND))?;

    if !verify_password(current_password, &user.password_hash).await? {
        tracing::warn!("Profile update rejected for user {}: wrong password", user.id);
        return Err(BackendError::unauthorized(INCORRECT_PASSWORD));
    }

    let name = non_blank(request.name.as_deref());
    let email = non_blank(request.email.as_deref());

    if let Some(email) = email.filter(|e| *e != user.email) {
        if get_user_by_email(&pool, email).await?.is_some() {
            return Err(BackendError::conflict(EMAIL_TAKEN));
        }
    }

    let password_hash = match non_blank(request.new_password.as_deref()) {
        Some(new_password) => Some(hash_password(new_password).await?),
        None => None,
    };

    let updated = update_user_profile(&pool, user.id, name, email, password_hash.as_deref())
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                BackendError::conflict(EMAIL_TAKEN)
            } else {
                e.into()
            }
        })?
        .ok_or_else(|| BackendError::not_found(USER_NOT_FOUND))?;

    let token = require_token_service(tokens.as_ref())?.issue(updated.id)?;

    tracing::info!("Profile updated for user {}", updated.id);

    Ok(Json(UpdateProfileResponse {
        message: "Profile updated successfully".to_string(),
        user: updated.into(),
        token,
    }))
}
