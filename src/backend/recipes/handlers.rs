/**
 * Recipe HTTP Handlers
 *
 * Every handler except [`list_all`] runs behind the auth middleware and
 * reads the caller through [`AuthUser`]. Update and delete check that the
 * caller owns the recipe before touching it.
 */

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::non_blank;
use crate::backend::error::BackendError;
use crate::backend::middleware::{ApiJson, AuthUser};
use crate::shared::recipe::{RecipeListResponse, RecipeResponse, MISSING_RECIPE_FIELDS};
use crate::shared::{Recipe, RecipeRequest, RecipeWithOwner};

use super::db;

pub const RECIPE_NOT_FOUND: &str = "Recipe not found";
pub const CANNOT_UPDATE: &str = "You cannot update this recipe";
pub const CANNOT_DELETE: &str = "You cannot delete this recipe";

/// POST /recipes
pub async fn create_recipe(
    State(pool): State<SqlitePool>,
    AuthUser(auth): AuthUser,
    ApiJson(request): ApiJson<RecipeRequest>,
) -> Result<(StatusCode, Json<RecipeResponse>), BackendError> {
    request.validate_new()?;

    let (Some(title), Some(ingredients)) = (request.title.as_deref(), request.ingredients.as_ref())
    else {
        return Err(BackendError::validation(MISSING_RECIPE_FIELDS));
    };
    let stored = ingredients.to_stored()?;

    let recipe = db::create_recipe(
        &pool,
        auth.user_id,
        title.trim(),
        non_blank(request.description.as_deref()),
        non_blank(request.image.as_deref()),
        &stored,
    )
    .await?;

    tracing::info!("Recipe {} created by user {}", recipe.id, auth.user_id);

    Ok((
        StatusCode::CREATED,
        Json(RecipeResponse {
            message: "Recipe created successfully".to_string(),
            recipe,
        }),
    ))
}

/// GET /recipes
///
/// Public. Each recipe carries its owner's id, name and avatar.
pub async fn list_all(
    State(pool): State<SqlitePool>,
) -> Result<Json<RecipeListResponse<RecipeWithOwner>>, BackendError> {
    let recipes = db::list_all_with_owner(&pool).await?;
    Ok(Json(RecipeListResponse { recipes }))
}

/// GET /recipes/my
pub async fn list_mine(
    State(pool): State<SqlitePool>,
    AuthUser(auth): AuthUser,
) -> Result<Json<RecipeListResponse<Recipe>>, BackendError> {
    let recipes = db::list_by_owner(&pool, auth.user_id).await?;
    Ok(Json(RecipeListResponse { recipes }))
}

/// PUT /recipes/{id}
///
/// Only supplied, non-blank fields change.
pub async fn update_recipe(
    State(pool): State<SqlitePool>,
    AuthUser(auth): AuthUser,
    path: Result<Path<i64>, PathRejection>,
    ApiJson(request): ApiJson<RecipeRequest>,
) -> Result<Json<RecipeResponse>, BackendError> {
    let Path(id) = path?;
    let existing = owned_recipe(&pool, id, auth.user_id, CANNOT_UPDATE).await?;

    let ingredients = match request.ingredients.as_ref().filter(|i| !i.is_empty()) {
        Some(ingredients) => Some(ingredients.to_stored()?),
        None => None,
    };

    let recipe = db::update_recipe(
        &pool,
        existing.id,
        non_blank(request.title.as_deref()).map(str::trim),
        non_blank(request.description.as_deref()),
        non_blank(request.image.as_deref()),
        ingredients.as_deref(),
    )
    .await?
    .ok_or_else(|| BackendError::not_found(RECIPE_NOT_FOUND))?;

    tracing::info!("Recipe {} updated by user {}", recipe.id, auth.user_id);

    Ok(Json(RecipeResponse {
        message: "Recipe updated successfully".to_string(),
        recipe,
    }))
}

/// DELETE /recipes/{id}
pub async fn delete_recipe(
    State(pool): State<SqlitePool>,
    AuthUser(auth): AuthUser,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Value>, BackendError> {
    let Path(id) = path?;
    let existing = owned_recipe(&pool, id, auth.user_id, CANNOT_DELETE).await?;

    if !db::delete_recipe(&pool, existing.id).await? {
        return Err(BackendError::not_found(RECIPE_NOT_FOUND));
    }

    tracing::info!("Recipe {} deleted by user {}", id, auth.user_id);

    Ok(Json(json!({ "message": "Recipe deleted successfully" })))
}

/// Load a recipe and require that `user_id` owns it.
///
/// 404 when it does not exist, 403 with `forbidden` when someone else owns it.
async fn owned_recipe(
    pool: &SqlitePool,
    id: i64,
    user_id: i64,
    forbidden: &str,
) -> Result<Recipe, BackendError> {
    let recipe = db::get_recipe_by_id(pool, id)
        .await?
        .ok_or_else(|| BackendError::not_found(RECIPE_NOT_FOUND))?;

    if recipe.user_id != user_id {
        tracing::warn!(
            "User {} denied on recipe {} owned by {}",
            user_id,
            recipe.id,
            recipe.user_id
        );
        return Err(BackendError::forbidden(forbidden));
    }

    Ok(recipe)
}
