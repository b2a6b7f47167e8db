/**
 * Error Conversion
 *
 * This module turns backend errors into HTTP responses and maps axum's
 * extractor rejections onto the backend taxonomy.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 400
 * }
 * ```
 */

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    response::{IntoResponse, Json, Response},
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if self.is_internal() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected ({}): {}", status.as_u16(), message);
        }

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

/// Client message for a body that is not the expected JSON.
pub const INVALID_BODY: &str = "Invalid request body";

/// Client message for a path segment of the wrong shape.
pub const INVALID_PATH: &str = "Invalid path parameter";

// Rejection text names Rust types, so it is logged and never sent back.
impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("JSON body rejected: {}", rejection.body_text());
        Self::validation(INVALID_BODY)
    }
}

impl From<PathRejection> for BackendError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("Path parameter rejected: {}", rejection.body_text());
        Self::validation(INVALID_PATH)
    }
}
