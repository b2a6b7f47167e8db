/**
 * Authentication Middleware
 *
 * This module gates protected routes. It reads the bearer token from the
 * `Authorization` header, verifies it with the [`TokenService`], and hands
 * the resolved identity to handlers as an [`AuthenticatedUser`] extension.
 *
 * The gate is stateless: no session lookup, no token cache. It runs before
 * any handler logic, so a rejected request never touches the store.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderValue},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::TokenService;
use crate::backend::error::BackendError;

/// Rejection message when no credential was presented.
pub const NO_ACCESS: &str = "No access";

/// Rejection message when the credential did not verify.
pub const INVALID_TOKEN: &str = "Invalid token";

/// Error message when the server has no signing secret.
pub const MISSING_SECRET: &str = "Server error: missing JWT secret";

/// Identity resolved from a verified token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: i64,
}

/// Pull the token out of an `Authorization` header value.
///
/// A leading `"Bearer "` is stripped when present. Returns `None` when there
/// is nothing left to verify.
pub fn bearer_token(header: Option<&HeaderValue>) -> Option<&str> {
    let value = header?.to_str().ok()?.trim();
    let token = if value == "Bearer" {
        ""
    } else {
        value.strip_prefix("Bearer ").unwrap_or(value).trim()
    };

    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Resolve the configured token service, or fail as a server
/// misconfiguration.
pub fn require_token_service(tokens: Option<&TokenService>) -> Result<&TokenService, BackendError> {
    tokens.ok_or_else(|| {
        tracing::error!("JWT_SECRET is not configured");
        BackendError::config(MISSING_SECRET)
    })
}

/// Authentication middleware
///
/// 1. Extracts the bearer token (401 `No access` if there is none)
/// 2. Requires a configured signing secret (500 otherwise)
/// 3. Verifies the token (401 `Invalid token` on any failure)
/// 4. Attaches [`AuthenticatedUser`] to the request extensions
pub async fn auth_middleware(
    State(tokens): State<Option<TokenService>>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = bearer_token(request.headers().get(AUTHORIZATION)).ok_or_else(|| {
        tracing::warn!("Missing bearer token on {}", request.uri().path());
        BackendError::unauthorized(NO_ACCESS)
    })?;

    let tokens = require_token_service(tokens.as_ref())?;

    let user_id = tokens.verify(token).map_err(|e| {
        tracing::warn!("Rejected token on {}: {}", request.uri().path(), e);
        BackendError::unauthorized(INVALID_TOKEN)
    })?;

    request.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated identity
///
/// Only usable on routes behind [`auth_middleware`]; elsewhere it rejects
/// with 401.
#[derive(Clone, Copy, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .copied()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::unauthorized(NO_ACCESS)
            })?;

        Ok(AuthUser(user))
    }
}
