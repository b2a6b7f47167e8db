/**
 * Application State Management
 *
 * `AppState` is built once at startup and is read-only afterwards: a
 * cloneable connection pool and the token service. Nothing in it is
 * mutated per request, so no locking is needed.
 *
 * The `FromRef` implementations let handlers extract only the part they
 * need, e.g. `State<SqlitePool>`.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::sessions::TokenService;

/// Central state container
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,
    /// Token service, `None` when no signing secret is configured
    pub tokens: Option<TokenService>,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, tokens: Option<TokenService>) -> Self {
        Self { db_pool, tokens }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for Option<TokenService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
