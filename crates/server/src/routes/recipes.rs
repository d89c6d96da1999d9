use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use models::{parse_id, EntityKind, ObjectId, Recipe};

use super::helpers::{created, decode_json, null_as_default};
use crate::{errors::ApiError, state::AppState};

/// Recipe as exchanged with clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeModel {
    pub id: String,
    pub title: String,
    /// Empty when the recipe has no source.
    pub source_id: String,
    pub source_annotation: String,
    pub category: String,
    pub allergens: Vec<String>,
}

impl From<&Recipe> for RecipeModel {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.to_hex(),
            title: recipe.title.clone(),
            source_id: recipe.source.map(|s| s.to_hex()).unwrap_or_default(),
            source_annotation: recipe.source_annotation.clone(),
            category: recipe.category.clone(),
            allergens: recipe.allergens.clone(),
        }
    }
}

/// Body of POST and PUT. Missing and `null` fields decode as empty values.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct RecipeInput {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub source_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub source_annotation: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub allergens: Vec<String>,
}

impl RecipeInput {
    /// An empty `sourceId` clears the reference; anything else must be a valid id.
    fn source(&self) -> Result<Option<ObjectId>, ApiError> {
        if self.source_id.is_empty() {
            return Ok(None);
        }
        parse_id(EntityKind::Source, &self.source_id)
            .map(Some)
            .map_err(|e| ApiError::BadRequest(e.to_string()))
    }

    fn into_recipe(self) -> Result<Recipe, ApiError> {
        let source = self.source()?;
        Ok(Recipe::draft(self.title, source, self.source_annotation, self.category, self.allergens))
    }

    /// Overwrite every field of `recipe`, keeping only its id.
    fn apply_to(self, recipe: &mut Recipe) -> Result<(), ApiError> {
        recipe.source = self.source()?;
        recipe.title = self.title;
        recipe.source_annotation = self.source_annotation;
        recipe.category = self.category;
        recipe.allergens = self.allergens;
        Ok(())
    }
}

#[utoipa::path(
    get, path = "/api/recipes", tag = "recipes",
    responses(
        (status = 200, description = "All recipes", body = [RecipeModel]),
        (status = 500, description = "Store failure")
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<RecipeModel>>, ApiError> {
    let deadline = state.deadline();
    let recipes = state.recipes.list_all(&deadline).await.map_err(ApiError::internal)?;
    Ok(Json(recipes.iter().map(RecipeModel::from).collect()))
}

#[utoipa::path(
    get, path = "/api/recipes/{id}", tag = "recipes",
    params(("id" = String, Path, description = "Recipe id (24 hex characters)")),
    responses(
        (status = 200, description = "The recipe", body = RecipeModel),
        (status = 404, description = "Malformed or unknown id"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<RecipeModel>, ApiError> {
    let deadline = state.deadline();
    let recipe = state.recipes.get_by_id(&deadline, &id).await.map_err(ApiError::from_lookup)?;
    Ok(Json(RecipeModel::from(&recipe)))
}

#[utoipa::path(
    post, path = "/api/recipes", tag = "recipes",
    request_body = RecipeInput,
    responses(
        (status = 201, description = "Created; Location names the new recipe"),
        (status = 400, description = "Malformed body or sourceId"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn create(State(state): State<AppState>, body: Bytes) -> Result<Response, ApiError> {
    let deadline = state.deadline();
    let input: RecipeInput = decode_json(&body)?;
    let recipe = input.into_recipe()?;
    let stored = state.recipes.add(&deadline, recipe).await.map_err(ApiError::from_create)?;
    info!(entity = "recipe", id = %stored.id, "created recipe");
    Ok(created(format!("/api/recipes/{}", stored.id.to_hex())))
}

#[utoipa::path(
    put, path = "/api/recipes/{id}", tag = "recipes",
    params(("id" = String, Path, description = "Recipe id (24 hex characters)")),
    request_body = RecipeInput,
    responses(
        (status = 204, description = "Replaced"),
        (status = 400, description = "Malformed body or sourceId"),
        (status = 404, description = "Malformed or unknown id"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let deadline = state.deadline();
    let mut recipe = state.recipes.get_by_id(&deadline, &id).await.map_err(ApiError::from_lookup)?;
    let input: RecipeInput = decode_json(&body)?;
    input.apply_to(&mut recipe)?;
    state.recipes.update(&deadline, &recipe).await.map_err(ApiError::from_update)?;
    info!(entity = "recipe", id = %recipe.id, "updated recipe");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/api/recipes/{id}", tag = "recipes",
    params(("id" = String, Path, description = "Recipe id (24 hex characters)")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Malformed or unknown id"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    let deadline = state.deadline();
    let recipe = state.recipes.get_by_id(&deadline, &id).await.map_err(ApiError::from_lookup)?;
    state.recipes.delete(&deadline, &recipe).await.map_err(ApiError::internal)?;
    info!(entity = "recipe", id = %recipe.id, "deleted recipe");
    Ok(StatusCode::NO_CONTENT)
}
