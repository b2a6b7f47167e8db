//! Shared Module
//!
//! Types that are meaningful on both sides of the HTTP boundary: recipe wire
//! shapes, validation errors, and the application configuration.

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Recipe request/response types
pub mod recipe;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::SharedError;
pub use recipe::{Ingredients, OwnerSummary, Recipe, RecipeRequest, RecipeWithOwner};
