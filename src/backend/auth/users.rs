/**
 * User Model and Database Operations
 *
 * This module holds the identity record and the queries that read and
 * write it. Email uniqueness is enforced by the `users` table itself.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// User struct representing a row of the `users` table
///
/// Not `Serialize`: the password hash must never reach a response body.
/// Handlers convert into [`super::handlers::types::UserResponse`] or
/// [`super::handlers::types::ProfileResponse`] instead.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: i64,
    /// Display name
    pub name: String,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    #[sqlx(rename = "password")]
    pub password_hash: String,
    /// Avatar reference (URL or data URI), if one was uploaded
    pub avatar: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `name` - Display name
/// * `email` - User email
/// * `password_hash` - Hashed password
///
/// # Returns
/// Created user or error. A duplicate email surfaces as a unique-constraint
/// database error.
pub async fn create_user(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (name, email, password, created_at)
        VALUES (?1, ?2, ?3, ?4)
        RETURNING id, name, email, password, avatar, created_at
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email
pub async fn get_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password, avatar, created_at
        FROM users
        WHERE email = ?1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
pub async fn get_user_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password, avatar, created_at
        FROM users
        WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Update any of name, email and password hash
///
/// `None` leaves the column unchanged.
///
/// # Returns
/// The updated user, or `None` if no user has this id
pub async fn update_user_profile(
    pool: &SqlitePool,
    id: i64,
    name: Option<&str>,
    email: Option<&str>,
    password_hash: Option<&str>,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET name = COALESCE(?1, name),
            email = COALESCE(?2, email),
            password = COALESCE(?3, password)
        WHERE id = ?4
        RETURNING id, name, email, password, avatar, created_at
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Replace the user's avatar reference
///
/// # Returns
/// The updated user, or `None` if no user has this id
pub async fn update_user_avatar(
    pool: &SqlitePool,
    id: i64,
    avatar: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET avatar = ?1
        WHERE id = ?2
        RETURNING id, name, email, password, avatar, created_at
        "#,
    )
    .bind(avatar)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Whether a database error is a violated UNIQUE constraint
pub fn is_unique_violation(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .is_some_and(|db_error| db_error.is_unique_violation())
}
