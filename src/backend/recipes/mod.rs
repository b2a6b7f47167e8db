//! Recipes Module
//!
//! Owner-scoped recipe storage and the `/recipes` handlers.

pub mod db;
pub mod handlers;

pub use handlers::{create_recipe, delete_recipe, list_all, list_mine, update_recipe};
