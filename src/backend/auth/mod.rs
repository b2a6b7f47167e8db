//! Authentication Module
//!
//! Accounts, password hashing, bearer tokens and the `/auth` handlers.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── password.rs     - bcrypt hashing off the async runtime
//! ├── sessions.rs     - Token issuing and verification
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: name, email and matching passwords → user created → token returned
//! 2. **Login**: email and password → credentials verified → token returned
//! 3. **Me / Update / Avatar**: bearer token → identity resolved by the middleware
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (cost 10) before storage
//! - Tokens are HS256 and expire seven days after issue
//! - Invalid credentials return 401 without saying which part was wrong

/// User data model and database operations
pub mod users;

/// Password hashing
pub mod password;

/// Token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{get_me, login, register, update_avatar, update_profile};
pub use handlers::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
pub use sessions::{Claims, TokenError, TokenService};
