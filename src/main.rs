//! recipe-api - Recipe CRUD backend
//!
//! REST service backed by SQLite, with bulk ingestion from a third-party
//! recipe API (dummyjson.com by default).

use anyhow::Result;
use tracing::{error, info};

use recipe_api::config::Config;
use recipe_api::services::{ExternalApiClient, RecipeService};
use recipe_api::{build_router, db, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Build identification first, before any database delays
    info!(
        "Starting recipe-api v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let config = Config::load();
    info!("Database path: {}", config.database_path.display());

    let pool = db::init_database(&config.database_path).await?;
    info!("Database connection established");

    let client = ExternalApiClient::new(config.external_api())
        .map_err(|e| anyhow::anyhow!("Failed to build external API client: {e}"))?;
    info!("External API: {}", config.external_base_url);

    let service = RecipeService::new(pool, client);

    // Seed the table in the background; an unreachable upstream must not
    // fail startup
    if config.load_on_startup {
        let startup_service = service.clone();
        tokio::spawn(async move {
            match startup_service.load_from_external_api().await {
                Ok(count) => info!(count, "Initialized recipes from external API"),
                Err(e) => error!("Error loading recipes during startup: {e}"),
            }
        });
    }

    let state = AppState::new(service);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("recipe-api listening on http://{}", config.bind_addr());
    info!("Health check: http://{}/health", config.bind_addr());

    axum::serve(listener, app).await?;

    Ok(())
}
