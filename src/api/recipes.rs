//! Recipe endpoints
//!
//! Thin handlers: extract, call the service, map the result. All status
//! mapping lives in `ApiError::into_response`.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::error::ApiResult;
use crate::models::RecipeDto;
use crate::AppState;

/// Query parameters for recipe search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Free-text query; blank means "return everything"
    pub q: Option<String>,
}

/// GET /recipes
pub async fn get_all_recipes(State(state): State<AppState>) -> ApiResult<Json<Vec<RecipeDto>>> {
    let recipes = state.service.get_all().await?;
    Ok(Json(recipes))
}

/// GET /recipes/search?q=
pub async fn search_recipes(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Vec<RecipeDto>>> {
    let recipes = state.service.search(params.q.as_deref()).await?;
    Ok(Json(recipes))
}

/// GET /recipes/:id
pub async fn get_recipe_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<RecipeDto>> {
    let recipe = state.service.get_by_id(id).await?;
    Ok(Json(recipe))
}

/// POST /recipes/load
///
/// Trigger a full refresh from the external API.
pub async fn load_recipes(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    info!("Manual trigger to load recipes from external API");
    let count = state.service.load_from_external_api().await?;

    Ok(Json(json!({
        "message": "Successfully loaded recipes from external API",
        "count": count,
    })))
}
