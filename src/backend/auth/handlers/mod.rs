//! Account Handlers Module
//!
//! HTTP handlers for the `/auth` endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Request and response types
//! ├── register.rs  - POST /auth/register
//! ├── login.rs     - POST /auth/login
//! ├── me.rs        - GET  /auth/me
//! ├── update.rs    - PUT  /auth/update
//! └── avatar.rs    - PUT  /auth/avatar
//! ```
//!
//! `register` and `login` are public. The other three expect the auth
//! middleware to have run and read the caller through [`crate::backend::middleware::AuthUser`].
//!
//! # Example
//!
//! ```rust,no_run
//! use recipehub::backend::auth::handlers::{get_me, login, register};
//! use recipehub::backend::server::AppState;
//! use axum::{routing::{get, post}, Router};
//!
//! # fn example(state: AppState) {
//! let router: Router = Router::new()
//!     .route("/auth/register", post(register))
//!     .route("/auth/login", post(login))
//!     .route("/auth/me", get(get_me))
//!     .with_state(state);
//! # }
//! ```

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

/// Profile update handler
pub mod update;

/// Avatar handler
pub mod avatar;

pub use types::{
    AuthResponse, AvatarRequest, AvatarResponse, LoginRequest, ProfileResponse, RegisterRequest,
    UpdateProfileRequest, UpdateProfileResponse, UserResponse,
};

pub use avatar::update_avatar;
pub use login::login;
pub use me::get_me;
pub use register::register;
pub use update::update_profile;
