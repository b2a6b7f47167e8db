//! recipehub - Recipe sharing backend
//!
//! A small HTTP API where users register, log in with a bearer token and
//! manage their own recipes, while browsing everybody's.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types, configuration and shared errors
//!   - Recipe and ingredient payloads
//!   - `AppConfig` read from the environment
//!
//! - **`backend`** - Axum server
//!   - Account endpoints under `/auth`
//!   - Recipe endpoints under `/recipes`
//!   - SQLite persistence through sqlx
//!
//! # Usage
//!
//! ```rust,no_run
//! use recipehub::backend::server::create_app;
//! use recipehub::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
