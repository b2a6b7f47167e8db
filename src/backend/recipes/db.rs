//! Database operations for recipes
//!
//! Ingredients are kept in a single TEXT column; see
//! [`Ingredients::to_stored`] for the encoding.

use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use crate::shared::{Ingredients, OwnerSummary, Recipe, RecipeWithOwner};

/// Row of the `recipes` table before the ingredients column is decoded
#[derive(Debug, sqlx::FromRow)]
struct RecipeRow {
    id: i64,
    title: String,
    description: Option<String>,
    image: Option<String>,
    ingredients: String,
    user_id: i64,
    created_at: DateTime<Utc>,
}

impl From<RecipeRow> for Recipe {
    fn from(row: RecipeRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            image: row.image,
            ingredients: Ingredients::from_stored(&row.ingredients),
            user_id: row.user_id,
            created_at: row.created_at,
        }
    }
}

/// Insert a recipe owned by `user_id`
///
/// `ingredients` is the already-encoded column value.
pub async fn create_recipe(
    pool: &SqlitePool,
    user_id: i64,
    title: &str,
    description: Option<&str>,
    image: Option<&str>,
    ingredients: &str,
) -> Result<Recipe, sqlx::Error> {
    let now = Utc::now();

    let row = sqlx::query_as::<_, RecipeRow>(
        r#"
        INSERT INTO recipes (title, description, image, ingredients, user_id, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        RETURNING id, title, description, image, ingredients, user_id, created_at
        "#,
    )
    .bind(title)
    .bind(description)
    .bind(image)
    .bind(ingredients)
    .bind(user_id)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(row.into())
}

/// All recipes with their owner's public fields, newest first
pub async fn list_all_with_owner(pool: &SqlitePool) -> Result<Vec<RecipeWithOwner>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT r.id, r.title, r.description, r.image, r.ingredients, r.user_id, r.created_at,
               u.name AS owner_name, u.avatar AS owner_avatar
        FROM recipes r
        JOIN users u ON u.id = r.user_id
        ORDER BY r.created_at DESC, r.id DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(recipe_with_owner).collect()
}

fn recipe_with_owner(row: &SqliteRow) -> Result<RecipeWithOwner, sqlx::Error> {
    let user_id: i64 = row.try_get("user_id")?;
    let ingredients: String = row.try_get("ingredients")?;

    Ok(RecipeWithOwner {
        recipe: Recipe {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            image: row.try_get("image")?,
            ingredients: Ingredients::from_stored(&ingredients),
            user_id,
            created_at: row.try_get("created_at")?,
        },
        user: OwnerSummary {
            id: user_id,
            name: row.try_get("owner_name")?,
            avatar: row.try_get("owner_avatar")?,
        },
    })
}

/// Recipes owned by `user_id`, newest first
pub async fn list_by_owner(pool: &SqlitePool, user_id: i64) -> Result<Vec<Recipe>, sqlx::Error> {
    let rows = sqlx::query_as::<_, RecipeRow>(
        r#"
        SELECT id, title, description, image, ingredients, user_id, created_at
        FROM recipes
        WHERE user_id = ?1
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Recipe::from).collect())
}

/// Get recipe by ID
pub async fn get_recipe_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Recipe>, sqlx::Error> {
    let row = sqlx::query_as::<_, RecipeRow>(
        r#"
        SELECT id, title, description, image, ingredients, user_id, created_at
        FROM recipes
        WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Recipe::from))
}

/// Overwrite the supplied fields of a recipe
///
/// `None` leaves the column unchanged. Returns `None` if the recipe is gone.
pub async fn update_recipe(
    pool: &SqlitePool,
    id: i64,
    title: Option<&str>,
    description: Option<&str>,
    image: Option<&str>,
    ingredients: Option<&str>,
) -> Result<Option<Recipe>, sqlx::Error> {
    let row = sqlx::query_as::<_, RecipeRow>(
        r#"
        UPDATE recipes
        SET title = COALESCE(?1, title),
            description = COALESCE(?2, description),
            image = COALESCE(?3, image),
            ingredients = COALESCE(?4, ingredients)
        WHERE id = ?5
        RETURNING id, title, description, image, ingredients, user_id, created_at
        "#,
    )
    .bind(title)
    .bind(description)
    .bind(image)
    .bind(ingredients)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Recipe::from))
}

/// Delete a recipe
///
/// # Returns
/// `true` if a row was removed
pub async fn delete_recipe(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM recipes WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
