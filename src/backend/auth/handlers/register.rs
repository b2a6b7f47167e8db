/**
 * Register Handler
 *
 * This module implements the user registration handler for
 * POST /auth/register.
 *
 * # Registration Process
 *
 * 1. Require name, email, password and confirmPassword
 * 2. Require password == confirmPassword
 * 3. Check that the email is not registered yet
 * 4. Hash password using bcrypt
 * 5. Create user in database
 * 6. Issue a token and return it with the public user fields
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt (cost 10) before storage
 * - Passwords are never returned in responses or logged
 */

use axum::{extract::State, http::StatusCode, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::{non_blank, AuthResponse, RegisterRequest};
use crate::backend::auth::password::hash_password;
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::{create_user, get_user_by_email, is_unique_violation};
use crate::backend::error::BackendError;
use crate::backend::middleware::{require_token_service, ApiJson};

pub const MISSING_FIELDS: &str = "All fields are required";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const EMAIL_TAKEN: &str = "Email already registered";

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - a field is missing or the passwords differ
/// * `409 Conflict` - the email is already registered
/// * `500 Internal Server Error` - hashing, store or token failure, or no
///   signing secret configured
///
/// # Example Request
///
/// ```http
/// POST /auth/register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "name": "Alice",
///   "email": "a@x.com",
///   "password": "pw123",
///   "confirmPassword": "pw123"
/// }
/// ```
pub async fn register(
    State(pool): State<SqlitePool>,
    State(tokens): State<Option<TokenService>>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), BackendError> {
    let (Some(name), Some(email), Some(password), Some(confirm_password)) = (
        non_blank(request.name.as_deref()),
        non_blank(request.email.as_deref()),
        non_blank(request.password.as_deref()),
        non_blank(request.confirm_password.as_deref()),
    ) else {
        tracing::warn!("Registration rejected: missing fields");
        return Err(BackendError::validation(MISSING_FIELDS));
    };

    if password != confirm_password {
        tracing::warn!("Registration rejected: password confirmation mismatch");
        return Err(BackendError::validation(PASSWORD_MISMATCH));
    }

    let tokens = require_token_service(tokens.as_ref())?;

    if get_user_by_email(&pool, email).await?.is_some() {
        tracing::warn!("Email already exists: {}", email);
        return Err(BackendError::conflict(EMAIL_TAKEN));
    }

    let password_hash = hash_password(password).await?;

    // A concurrent registration can still win the race to the UNIQUE index.
    let user = create_user(&pool, name, email, &password_hash)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                BackendError::conflict(EMAIL_TAKEN)
            } else {
                e.into()
            }
        })?;

    let token = tokens.issue(user.id)?;

    tracing::info!("User registered: {} ({})", user.id, user.email);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User registered successfully".to_string(),
            user: user.into(),
            token,
        }),
    ))
}
