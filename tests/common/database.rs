//! Database test fixtures and utilities
//!
//! Every [`TestApp`] owns a fresh, migrated in-memory SQLite database, so
//! tests never share rows and need no cleanup.

use axum_test::TestServer;
use sqlx::SqlitePool;

use recipehub::backend::auth::sessions::TokenService;
use recipehub::backend::routes::create_router;
use recipehub::backend::server::config::connect_database;
use recipehub::backend::server::AppState;

/// Signing secret used by every test app
pub const TEST_SECRET: &str = "integration-test-secret";

/// Create a migrated in-memory database pool
pub async fn create_test_pool() -> SqlitePool {
    connect_database("sqlite::memory:")
        .await
        .expect("Failed to create test database pool")
}

/// Running application plus direct handles on its resources
pub struct TestApp {
    pub server: TestServer,
    pub pool: SqlitePool,
    pub tokens: TokenService,
}

impl TestApp {
    /// App with a configured signing secret
    pub async fn new() -> Self {
        let pool = create_test_pool().await;
        let tokens = TokenService::new(TEST_SECRET);
        let state = AppState::new(pool.clone(), Some(tokens.clone()));
        let server = TestServer::new(create_router(state)).expect("Failed to start test server");

        Self { server, pool, tokens }
    }

    /// App started without a signing secret
    pub async fn without_secret() -> TestServer {
        let pool = create_test_pool().await;
        TestServer::new(create_router(AppState::new(pool, None)))
            .expect("Failed to start test server")
    }
}
