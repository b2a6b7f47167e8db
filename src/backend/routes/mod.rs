//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs            - Module exports and documentation
//! ├── router.rs         - Main router creation, CORS and tracing layers
//! ├── api_routes.rs     - `/auth` endpoints
//! └── recipe_routes.rs  - `/recipes` endpoints
//! ```
//!
//! Gated routes carry [`crate::backend::middleware::auth_middleware`] as a
//! route layer. Public routes never see it.
//!
//! # Example
//!
//! ```rust,no_run
//! use recipehub::backend::routes::create_router;
//! use recipehub::backend::server::create_state;
//! use recipehub::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let state = create_state(&AppConfig::from_env()?).await?;
//! let router = create_router(state);
//! # Ok(())
//! # }
//! ```

/// Main router creation
pub mod router;

/// Account endpoints
pub mod api_routes;

/// Recipe endpoints
pub mod recipe_routes;

pub use router::create_router;
