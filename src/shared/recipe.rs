//! Recipe wire types
//!
//! These are the JSON shapes exchanged over `/recipes`. Field names are
//! camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// Message returned when a create request lacks a title or ingredients.
pub const MISSING_RECIPE_FIELDS: &str = "Title and ingredients are required";

/// Ingredient payload of a recipe.
///
/// Clients send either a list of ingredient lines or one free-form string.
/// Lists are persisted as their JSON text, strings verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ingredients {
    /// One entry per ingredient
    List(Vec<String>),
    /// Free-form text
    Text(String),
}

impl Ingredients {
    /// An empty list, or a string that is blank, counts as no ingredients.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::List(items) => items.is_empty(),
            Self::Text(text) => text.trim().is_empty(),
        }
    }

    /// Encode for the `ingredients` TEXT column.
    pub fn to_stored(&self) -> Result<String, SharedError> {
        match self {
            Self::List(items) => Ok(serde_json::to_string(items)?),
            Self::Text(text) => Ok(text.clone()),
        }
    }

    /// Decode a stored column value. Anything that is not a JSON array of
    /// strings comes back as text.
    ///
    /// The column carries no tag, so free text that is itself a JSON array of
    /// strings (e.g. `"[\"a\"]"`) reads back as a list. That round-trip is
    /// accepted.
    pub fn from_stored(raw: &str) -> Self {
        match serde_json::from_str::<Vec<String>>(raw) {
            Ok(items) => Self::List(items),
            Err(_) => Self::Text(raw.to_string()),
        }
    }
}

/// A recipe as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub ingredients: Ingredients,
    /// Owning identity
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Minimal public view of a recipe's owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerSummary {
    pub id: i64,
    pub name: String,
    pub avatar: Option<String>,
}

/// Recipe with its owner embedded, used by the public listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeWithOwner {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub user: OwnerSummary,
}

/// Body of `POST /recipes` and `PUT /recipes/{id}`.
///
/// Every field is optional at the JSON level; creation checks presence with
/// [`RecipeRequest::validate_new`], updates leave absent fields unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub ingredients: Option<Ingredients>,
}

impl RecipeRequest {
    /// Check the fields a new recipe cannot do without.
    pub fn validate_new(&self) -> Result<(), SharedError> {
        let has_title = self
            .title
            .as_deref()
            .is_some_and(|title| !title.trim().is_empty());
        if !has_title {
            return Err(SharedError::validation("title", MISSING_RECIPE_FIELDS));
        }

        let has_ingredients = self
            .ingredients
            .as_ref()
            .is_some_and(|ingredients| !ingredients.is_empty());
        if !has_ingredients {
            return Err(SharedError::validation("ingredients", MISSING_RECIPE_FIELDS));
        }

        Ok(())
    }
}

/// Response carrying a list of recipes
#[derive(Debug, Serialize, Deserialize)]
pub struct RecipeListResponse<T> {
    pub recipes: Vec<T>,
}

/// Response carrying a single recipe
#[derive(Debug, Serialize, Deserialize)]
pub struct RecipeResponse {
    pub message: String,
    pub recipe: Recipe,
}
