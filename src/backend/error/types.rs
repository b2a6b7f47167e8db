/**
 * Backend Error Types
 *
 * This module defines the error type returned by every HTTP handler.
 *
 * # Error Categories
 *
 * ## Client errors
 *
 * - `ValidationError` - missing or mismatched fields (400)
 * - `Unauthorized` - missing/invalid token or wrong credentials (401)
 * - `Forbidden` - authenticated, but not the owner (403)
 * - `NotFound` - identity or recipe does not exist (404)
 * - `Conflict` - email already registered (409)
 *
 * ## Server errors
 *
 * - `ConfigError` - the server is missing configuration (500)
 * - `DatabaseError`, `HashError`, `TokenError`, `TaskError` - unexpected
 *   failures. Their detail is logged, never sent to the client.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Generic message returned for every internal failure.
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// Backend-specific error types
///
/// Each variant maps to exactly one HTTP status code; see
/// [`BackendError::status_code`].
#[derive(Debug, Error)]
pub enum BackendError {
    /// Request validation failed
    #[error("Validation error: {message}")]
    ValidationError {
        /// Human-readable error message
        message: String,
    },

    /// Caller could not be authenticated
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// Caller is authenticated but may not touch this resource
    #[error("Forbidden: {message}")]
    Forbidden {
        /// Human-readable error message
        message: String,
    },

    /// Target does not exist
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Unique constraint would be violated
    #[error("Conflict: {message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// Server is missing required configuration
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Human-readable error message
        message: String,
    },

    /// Shared error (validation of wire types)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Store failure
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    /// bcrypt failure
    #[error("Password hashing error: {0}")]
    HashError(#[from] bcrypt::BcryptError),

    /// Token signing failure
    #[error("Token error: {0}")]
    TokenError(#[from] jsonwebtoken::errors::Error),

    /// A blocking task panicked or was cancelled
    #[error("Task error: {0}")]
    TaskError(#[from] tokio::task::JoinError),
}

impl BackendError {
    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    /// Create a new authentication error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a new authorization error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::SharedError(err) => match err {
                SharedError::ValidationError { .. } => StatusCode::BAD_REQUEST,
                SharedError::SerializationError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::ConfigError { .. }
            | Self::DatabaseError(_)
            | Self::HashError(_)
            | Self::TokenError(_)
            | Self::TaskError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message sent to the client. Internal failures collapse to
    /// [`SERVER_ERROR_MESSAGE`].
    pub fn message(&self) -> String {
        match self {
            Self::ValidationError { message }
            | Self::Unauthorized { message }
            | Self::Forbidden { message }
            | Self::NotFound { message }
            | Self::Conflict { message }
            | Self::ConfigError { message } => message.clone(),
            Self::SharedError(SharedError::ValidationError { message, .. }) => message.clone(),
            Self::SharedError(SharedError::SerializationError { .. })
            | Self::DatabaseError(_)
            | Self::HashError(_)
            | Self::TokenError(_)
            | Self::TaskError(_) => SERVER_ERROR_MESSAGE.to_string(),
        }
    }

    /// Whether the detail of this error belongs in the server log only.
    pub fn is_internal(&self) -> bool {
        self.status_code().is_server_error()
    }
}
