use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Recipe {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub instructions: String,
    pub prep_time_minutes: Option<i32>,
    pub cook_time_minutes: Option<i32>,
    pub servings: Option<i32>,
    pub category: Option<String>,
    pub cuisine: Option<String>,
    pub difficulty: Option<String>,
    pub image_url: Option<String>,
    pub created_at: OffsetDateTime,
}

/// Validated recipe fields ready for insertion. Produced only by request
/// validation, so the required/range invariants already hold.
#[derive(Debug)]
pub struct NewRecipe {
    pub title: String,
    pub description: Option<String>,
    pub instructions: String,
    pub prep_time_minutes: Option<i32>,
    pub cook_time_minutes: Option<i32>,
    pub servings: Option<i32>,
    pub category: Option<String>,
    pub cuisine: Option<String>,
    pub difficulty: Option<String>,
    pub image_url: Option<String>,
}

impl Recipe {
    /// Insert a recipe owned by `user_id`. The owner always comes from the
    /// resolved identity, never from the request body.
    pub async fn create(db: &PgPool, user_id: Uuid, new: &NewRecipe) -> anyhow::Result<Recipe> {
        let recipe = sqlx::query_as::<_, Recipe>(
            r#"
            INSERT INTO recipes (
                user_id, title, description, instructions,
                prep_time_minutes, cook_time_minutes, servings,
                category, cuisine, difficulty, image_url
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, user_id, title, description, instructions,
                      prep_time_minutes, cook_time_minutes, servings,
                      category, cuisine, difficulty, image_url, created_at
            "#,
        )
        .bind(user_id)
        .bind(&new.title)
        .bind(&new.description)
        .bind(&new.instructions)
        .bind(new.prep_time_minutes)
        .bind(new.cook_time_minutes)
        .bind(new.servings)
        .bind(&new.category)
        .bind(&new.cuisine)
        .bind(&new.difficulty)
        .bind(&new.image_url)
        .fetch_one(db)
        .await?;
        Ok(recipe)
    }

    /// All recipes owned by `user_id`, newest first.
    pub async fn list_by_owner(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<Recipe>> {
        let rows = sqlx::query_as::<_, Recipe>(
            r#"
            SELECT id, user_id, title, description, instructions,
                   prep_time_minutes, cook_time_minutes, servings,
                   category, cuisine, difficulty, image_url, created_at
            FROM recipes
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// Fetch one recipe, scoped to its owner. A recipe that exists but
    /// belongs to someone else is indistinguishable from a missing one.
    pub async fn find_owned(
        db: &PgPool,
        user_id: Uuid,
        recipe_id: Uuid,
    ) -> anyhow::Result<Option<Recipe>> {
        let recipe = sqlx::query_as::<_, Recipe>(
            r#"
            SELECT id, user_id, title, description, instructions,
                   prep_time_minutes, cook_time_minutes, servings,
                   category, cuisine, difficulty, image_url, created_at
            FROM recipes
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(recipe_id)
        .bind(user_id)
        .fetch_optional(db)
        .await?;
        Ok(recipe)
    }
}
