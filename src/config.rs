//! Configuration resolution for recipe-api
//!
//! Per-field priority: environment variable, then TOML config file, then
//! compiled default. The config file lives at
//! `<config dir>/recipe-api/config.toml` unless `RECIPE_CONFIG` points
//! elsewhere.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

use crate::services::external_api::{self, ExternalApiConfig};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub external_base_url: String,
    pub external_timeout_secs: u64,
    pub load_on_startup: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database_path: default_database_path(),
            external_base_url: external_api::DEFAULT_BASE_URL.to_string(),
            external_timeout_secs: external_api::DEFAULT_TIMEOUT_SECS,
            load_on_startup: true,
        }
    }
}

impl Config {
    /// Resolve configuration from TOML file plus environment overrides.
    pub fn load() -> Self {
        let mut config = Self::from_toml().unwrap_or_default();
        config.apply_env_overrides();
        config
    }

    fn from_toml() -> Option<Self> {
        let path = std::env::var("RECIPE_CONFIG")
            .map(PathBuf::from)
            .ok()
            .or_else(default_config_path)?;

        let content = std::fs::read_to_string(&path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                Some(config)
            }
            Err(e) => {
                warn!("Failed to parse config {}: {}", path.display(), e);
                None
            }
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("RECIPE_HOST") {
            self.host = v;
        }
        if let Ok(v) = std::env::var("RECIPE_PORT") {
            match v.parse() {
                Ok(port) => self.port = port,
                Err(_) => warn!("Ignoring invalid RECIPE_PORT: {}", v),
            }
        }
        if let Ok(v) = std::env::var("RECIPE_DATABASE_PATH") {
            self.database_path = PathBuf::from(v);
        }
        if let Ok(v) = std::env::var("RECIPE_EXTERNAL_BASE_URL") {
            self.external_base_url = v;
        }
        if let Ok(v) = std::env::var("RECIPE_EXTERNAL_TIMEOUT_SECS") {
            match v.parse() {
                Ok(secs) => self.external_timeout_secs = secs,
                Err(_) => warn!("Ignoring invalid RECIPE_EXTERNAL_TIMEOUT_SECS: {}", v),
            }
        }
        if let Ok(v) = std::env::var("RECIPE_LOAD_ON_STARTUP") {
            self.load_on_startup = matches!(v.as_str(), "1" | "true" | "yes");
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// External client settings; retry policy stays at the compiled default.
    pub fn external_api(&self) -> ExternalApiConfig {
        ExternalApiConfig {
            base_url: self.external_base_url.clone(),
            timeout: Duration::from_secs(self.external_timeout_secs),
            ..ExternalApiConfig::default()
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("recipe-api").join("config.toml"))
}

fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("recipe-api").join("recipes.db"))
        .unwrap_or_else(|| PathBuf::from("recipes.db"))
}
