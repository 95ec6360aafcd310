use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use super::dto::{CreateRecipeRequest, RecipeResponse};
use super::repo::Recipe;
use crate::auth::AuthSubject;
use crate::error::ApiError;
use crate::state::AppState;
use crate::users::User;

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/recipes", get(list_recipes))
        .route("/recipes/:id", get(get_recipe))
}

pub fn write_routes() -> Router<AppState> {
    Router::new().route("/recipes", post(create_recipe))
}

#[instrument(skip(state, payload))]
pub async fn create_recipe(
    State(state): State<AppState>,
    AuthSubject(subject): AuthSubject,
    Json(payload): Json<CreateRecipeRequest>,
) -> Result<(StatusCode, Json<RecipeResponse>), ApiError> {
    let new = payload.validate()?;

    // First authenticated write lazily creates the internal user record.
    let user = User::find_or_create_by_subject(&state.db, &subject).await?;
    let recipe = Recipe::create(&state.db, user.id, &new).await?;

    info!(recipe_id = %recipe.id, user_id = %user.id, "recipe created");
    Ok((StatusCode::CREATED, Json(recipe.into())))
}

#[instrument(skip(state))]
pub async fn list_recipes(
    State(state): State<AppState>,
    AuthSubject(subject): AuthSubject,
) -> Result<Json<Vec<RecipeResponse>>, ApiError> {
    let user = User::find_by_subject(&state.db, &subject)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    let recipes = Recipe::list_by_owner(&state.db, user.id).await?;
    Ok(Json(recipes.into_iter().map(RecipeResponse::from).collect()))
}

#[instrument(skip(state))]
pub async fn get_recipe(
    State(state): State<AppState>,
    AuthSubject(subject): AuthSubject,
    Path(id): Path<Uuid>,
) -> Result<Json<RecipeResponse>, ApiError> {
    let user = User::find_by_subject(&state.db, &subject)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    let recipe = Recipe::find_owned(&state.db, user.id, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Recipe not found"))?;

    Ok(Json(recipe.into()))
}
