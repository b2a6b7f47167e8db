/**
 * Server Initialization
 *
 * 1. Open the database and apply migrations
 * 2. Build the token service from the signing secret
 * 3. Assemble the application state
 * 4. Create the router with all routes and layers
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, load_token_service};
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Build the application state from configuration.
pub async fn create_state(config: &AppConfig) -> Result<AppState, sqlx::Error> {
    let db_pool = load_database(config).await?;
    let tokens = load_token_service(config);
    Ok(AppState::new(db_pool, tokens))
}

/// Build the fully wired application.
pub async fn create_app(config: &AppConfig) -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing recipehub backend");

    let app_state = create_state(config).await?;
    let app = create_router(app_state);

    tracing::info!("Router configured");
    Ok(app)
}
