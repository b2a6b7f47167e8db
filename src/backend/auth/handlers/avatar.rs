//! PUT /auth/avatar

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::me::USER_NOT_FOUND;
use crate::backend::auth::handlers::types::{non_blank, AvatarRequest, AvatarResponse};
use crate::backend::auth::users::update_user_avatar;
use crate::backend::error::BackendError;
use crate::backend::middleware::{ApiJson, AuthUser};

pub const AVATAR_REQUIRED: &str = "Avatar is required";

/// Store a new avatar reference (URL or data URI) for the authenticated user.
pub async fn update_avatar(
    State(pool): State<SqlitePool>,
    AuthUser(auth): AuthUser,
    ApiJson(request): ApiJson<AvatarRequest>,
) -> Result<Json<AvatarResponse>, BackendError> {
    let Some(avatar) = non_blank(request.avatar.as_deref()) else {
        return Err(BackendError::validation(AVATAR_REQUIRED));
    };

    let user = update_user_avatar(&pool, auth.user_id, avatar)
        .await?
        .ok_or_else(|| BackendError::not_found(USER_NOT_FOUND))?;

    tracing::info!("Avatar updated for user {}", user.id);

    Ok(Json(AvatarResponse {
        message: "Avatar updated successfully".to_string(),
        avatar: user.avatar.unwrap_or_default(),
    }))
}
