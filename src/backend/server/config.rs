/**
 * Server Configuration
 *
 * This module turns the immutable [`AppConfig`] into the live resources the
 * server needs: the SQLite connection pool (with migrations applied) and the
 * token service.
 *
 * # Error Handling
 *
 * A database that cannot be opened or migrated is fatal at startup. A
 * missing signing secret is reported here and left for the binary to
 * refuse; the library still builds so that protected routes answer with a
 * configuration error instead of silently accepting requests.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::backend::auth::sessions::TokenService;
use crate::shared::AppConfig;

/// Open the database and bring its schema up to date.
///
/// In-memory URLs get a single long-lived connection, since every new
/// SQLite connection to `:memory:` would otherwise see an empty database.
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_options = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(5)
    };

    let pool = pool_options.connect_with(options).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(|e| sqlx::Error::Migrate(Box::new(e)))?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}

/// Load and initialize the database connection pool from configuration
pub async fn load_database(config: &AppConfig) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");
    let pool = connect_database(&config.database_url).await.map_err(|e| {
        tracing::error!("Failed to open database: {:?}", e);
        e
    })?;
    tracing::info!("Database connection pool created successfully");
    Ok(pool)
}

/// Build the token service from the configured secret, if there is one.
pub fn load_token_service(config: &AppConfig) -> Option<TokenService> {
    match config.jwt_secret.as_deref() {
        Some(secret) if !secret.trim().is_empty() => Some(TokenService::new(secret)),
        _ => {
            tracing::error!("JWT_SECRET is not defined; protected routes will fail");
            None
        }
    }
}
