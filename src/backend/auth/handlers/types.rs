/**
 * Authentication Handler Types
 *
 * Request and response bodies for the `/auth` endpoints. Request fields are
 * all optional at the JSON level so that a missing field becomes the
 * handler's own 400 message rather than a deserialization failure.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::auth::users::User;

/// Registration request
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub confirm_password: Option<String>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Profile update request
///
/// `current_password` is mandatory; everything else only changes when
/// supplied with non-blank content.
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub current_password: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub new_password: Option<String>,
}

/// Avatar update request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct AvatarRequest {
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Auth response
///
/// Returned by register and login.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    pub message: String,
    pub user: UserResponse,
    /// Bearer token, valid for seven days
    pub token: String,
}

/// User response (without sensitive data)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Profile view returned by `/auth/me` and `/auth/update`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub avatar: Option<String>,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
            avatar: user.avatar,
        }
    }
}

/// Response of `PUT /auth/update`
#[derive(Serialize, Deserialize, Debug)]
pub struct UpdateProfileResponse {
    pub message: String,
    pub user: ProfileResponse,
    pub token: String,
}

/// Response of `PUT /auth/avatar`
#[derive(Serialize, Deserialize, Debug)]
pub struct AvatarResponse {
    pub message: String,
    pub avatar: String,
}

/// Treat absent, empty and whitespace-only strings alike.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
