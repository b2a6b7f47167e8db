//! Backend Module
//!
//! All server-side code for recipehub: an Axum HTTP API over a SQLite store
//! with bearer-token authentication.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, database setup
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Accounts, password hashing, tokens, `/auth` handlers
//! - **`recipes`** - Owner-scoped recipe storage and `/recipes` handlers
//! - **`middleware`** - Authentication gate and JSON body extractor
//! - **`error`** - Backend error taxonomy and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── recipes/        - Recipe CRUD
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! [`server::AppState`] holds the connection pool and the token service.
//! Handlers take only the piece they need through `State<SqlitePool>` or
//! `State<Option<TokenService>>`.
//!
//! # Error Handling
//!
//! Every handler returns `Result<_, BackendError>`. Client errors carry their
//! own message; internal failures are logged and answered with a generic
//! `"Server error"` body.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Recipe storage and handlers
pub mod recipes;

/// Middleware for request processing
pub mod middleware;

pub use error::BackendError;
pub use server::create_app;
