//! HTTP API handlers for recipe-api

pub mod health;
pub mod recipes;

pub use health::health_routes;
pub use recipes::{get_all_recipes, get_recipe_by_id, load_recipes, search_recipes};
