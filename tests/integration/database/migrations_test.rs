//! Database migration tests
//!
//! Tests to ensure migrations run correctly and the schema enforces what
//! the handlers rely on.

use recipehub::backend::auth::users::{create_user, is_unique_violation};
use recipehub::backend::recipes::db::{create_recipe, list_by_owner};

use crate::common::create_test_pool;

#[tokio::test]
async fn test_tables_exist() {
    let pool = create_test_pool().await;

    for table in ["users", "recipes"] {
        let result = sqlx::query(&format!("SELECT 1 FROM {} LIMIT 1", table))
            .execute(&pool)
            .await;
        assert!(result.is_ok(), "{} table should exist", table);
    }
}

#[tokio::test]
async fn test_email_is_unique() {
    let pool = create_test_pool().await;
    create_user(&pool, "Alice", "a@x.com", "hash").await.unwrap();

    let err = create_user(&pool, "Alice", "a@x.com", "hash").await.unwrap_err();
    assert!(is_unique_violation(&err));
}

#[tokio::test]
async fn test_recipe_requires_existing_owner() {
    let pool = create_test_pool().await;
    let result = create_recipe(&pool, 999, "Soup", None, None, "water").await;
    assert!(result.is_err(), "foreign key should reject unknown owner");
}

#[tokio::test]
async fn test_deleting_user_removes_recipes() {
    let pool = create_test_pool().await;
    let user = create_user(&pool, "Alice", "a@x.com", "hash").await.unwrap();
    create_recipe(&pool, user.id, "Soup", None, None, "water").await.unwrap();

    sqlx::query("DELETE FROM users WHERE id = ?1")
        .bind(user.id)
        .execute(&pool)
        .await
        .unwrap();

    assert!(list_by_owner(&pool, user.id).await.unwrap().is_empty());
}
