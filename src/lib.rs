//! recipe-api library - CRUD backend for recipe data
//!
//! Exposes REST endpoints to list, search, and fetch recipes, and to
//! bulk-load the recipe table from a third-party HTTP API.

use std::time::Duration;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::services::RecipeService;

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod validate;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub service: RecipeService,
}

impl AppState {
    pub fn new(service: RecipeService) -> Self {
        Self { service }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/recipes", get(api::get_all_recipes))
        .route("/recipes/search", get(api::search_recipes))
        .route("/recipes/load", post(api::load_recipes))
        .route("/recipes/:id", get(api::get_recipe_by_id))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
