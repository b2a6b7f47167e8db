//! Backend Error Module
//!
//! This module defines the error type used by HTTP handlers and the
//! conversion of that type into JSON error responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse and rejection conversions
//! ```
//!
//! # Propagation
//!
//! Handlers return `Result<_, BackendError>` and use `?` on store, hashing
//! and token calls. Internal failures are logged and answered with a
//! generic `"Server error"` body.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use conversion::{INVALID_BODY, INVALID_PATH};
pub use types::{BackendError, SERVER_ERROR_MESSAGE};
