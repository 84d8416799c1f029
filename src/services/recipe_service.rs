//! Recipe service: ingestion and query orchestration
//!
//! Ingestion is a full-table replace: fetch everything from the external
//! API, delete all existing rows, bulk-insert the fetched batch. A failed
//! fetch leaves existing data untouched since the delete only runs after a
//! successful fetch.

use sqlx::SqlitePool;
use tracing::{debug, info, warn};

use crate::db;
use crate::db::recipes::Recipe;
use crate::error::{ApiError, ApiResult};
use crate::models::RecipeDto;
use crate::services::external_api::ExternalApiClient;
use crate::validate;

#[derive(Clone)]
pub struct RecipeService {
    db: SqlitePool,
    external: ExternalApiClient,
}

impl RecipeService {
    pub fn new(db: SqlitePool, external: ExternalApiClient) -> Self {
        Self { db, external }
    }

    /// Replace the entire recipes table with the external API's collection.
    ///
    /// Returns the number of rows actually persisted. A null response, or a
    /// response without a recipe collection, is a recoverable outcome: 0 is
    /// returned and nothing is deleted. An empty collection still clears
    /// the table (the refresh semantics are "take whatever upstream has").
    pub async fn load_from_external_api(&self) -> ApiResult<usize> {
        info!("Loading recipes from external API");

        let response = self.external.fetch_all_recipes().await.map_err(|e| {
            ApiError::ExternalApi(format!("Failed to fetch recipes from external API: {e}"))
        })?;

        let Some(recipes) = response.and_then(|r| r.recipes) else {
            warn!("External API returned no recipe collection; keeping existing data");
            return Ok(0);
        };

        let records: Vec<Recipe> = recipes.into_iter().map(RecipeDto::into_record).collect();

        db::recipes::delete_all(&self.db).await?;
        let saved = db::recipes::insert_all(&self.db, &records).await?;

        info!(count = saved, "Loaded recipes from external API");
        Ok(saved)
    }

    /// Search recipes by case-insensitive substring across name, cuisine,
    /// tags, and ingredients. A blank query returns everything.
    pub async fn search(&self, query: Option<&str>) -> ApiResult<Vec<RecipeDto>> {
        let records = if validate::has_text(query) {
            let q = query.unwrap_or_default();
            validate::validate_search_query(q)?;
            let hits = db::recipes::search(&self.db, q.trim()).await?;
            debug!(count = hits.len(), query = q, "Search complete");
            hits
        } else {
            debug!("Blank search query; returning all recipes");
            db::recipes::find_all(&self.db).await?
        };

        Ok(records.into_iter().map(RecipeDto::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> ApiResult<RecipeDto> {
        validate::validate_recipe_id(id)?;

        let record = db::recipes::find_by_id(&self.db, id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Recipe not found with ID: {id}")))?;

        Ok(record.into())
    }

    pub async fn get_all(&self) -> ApiResult<Vec<RecipeDto>> {
        let records = db::recipes::find_all(&self.db).await?;
        Ok(records.into_iter().map(RecipeDto::from).collect())
    }
}
