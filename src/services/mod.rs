//! Service layer: external API client and recipe orchestration

pub mod external_api;
pub mod recipe_service;

pub use external_api::{ExternalApiClient, ExternalApiConfig, FetchError};
pub use recipe_service::RecipeService;
