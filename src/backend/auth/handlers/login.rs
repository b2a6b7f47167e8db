/**
 * Login Handler
 *
 * This module implements the user authentication handler for
 * POST /auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Issue a token
 * 4. Return token and user info
 *
 * An unknown email and a wrong password produce the same 401 body, so the
 * response never reveals which of the two was wrong.
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::register::MISSING_FIELDS;
use crate::backend::auth::handlers::types::{non_blank, AuthResponse, LoginRequest};
use crate::backend::auth::password::verify_password;
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::BackendError;
use crate::backend::middleware::{require_token_service, ApiJson};

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - email or password missing
/// * `401 Unauthorized` - unknown email or wrong password
/// * `500 Internal Server Error` - store, hashing or token failure
pub async fn login(
    State(pool): State<SqlitePool>,
    State(tokens): State<Option<TokenService>>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<AuthResponse>, BackendError> {
    let (Some(email), Some(password)) = (
        non_blank(request.email.as_deref()),
        non_blank(request.password.as_deref()),
    ) else {
        return Err(BackendError::validation(MISSING_FIELDS));
    };

    let Some(user) = get_user_by_email(&pool, email).await? else {
        tracing::warn!("Login failed: unknown email");
        return Err(BackendError::unauthorized(INVALID_CREDENTIALS));
    };

    if !verify_password(password, &user.password_hash).await? {
        tracing::warn!("Login failed: wrong password for user {}", user.id);
        return Err(BackendError::unauthorized(INVALID_CREDENTIALS));
    }

    let token = require_token_service(tokens.as_ref())?.issue(user.id)?;

    tracing::info!("User logged in: {} ({})", user.id, user.email);

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        user: user.into(),
        token,
    }))
}
