//! External recipe API client
//!
//! One outbound GET for the full remote collection, wrapped in a bounded
//! fixed-backoff retry. All failure classes (transport, non-2xx status,
//! deserialization, timeout) are retried alike; the caller only ever sees
//! the final outcome.

use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::ExternalApiResponse;

pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MAX_ATTEMPTS: u32 = 3;
const BACKOFF_MS: u64 = 1000;
const USER_AGENT: &str = concat!("recipe-api/", env!("CARGO_PKG_VERSION"));

/// External API client errors
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Client settings
///
/// Attempt count and backoff default to the production policy (3 attempts,
/// fixed 1 second); tests shrink them.
#[derive(Debug, Clone)]
pub struct ExternalApiConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub max_attempts: u32,
    pub backoff: Duration,
}

impl Default for ExternalApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_attempts: MAX_ATTEMPTS,
            backoff: Duration::from_millis(BACKOFF_MS),
        }
    }
}

/// External recipe API client
///
/// Built once at startup and passed explicitly to the service; the inner
/// reqwest client is reused across calls.
#[derive(Clone)]
pub struct ExternalApiClient {
    http: reqwest::Client,
    config: ExternalApiConfig,
}

impl ExternalApiClient {
    pub fn new(config: ExternalApiConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self { http, config })
    }

    /// Fetch the full remote recipe collection (`limit=0` means unbounded).
    ///
    /// Retries on every failure class with a fixed backoff between attempts,
    /// no jitter or exponential growth. `Ok(None)` means the upstream
    /// answered with a literal JSON `null` body.
    pub async fn fetch_all_recipes(&self) -> Result<Option<ExternalApiResponse>, FetchError> {
        let mut last_error = FetchError::Network("no attempts made".to_string());

        for attempt in 1..=self.config.max_attempts.max(1) {
            match self.try_fetch().await {
                Ok(response) => {
                    info!(attempt, "Fetched recipes from external API");
                    return Ok(response);
                }
                Err(e) => {
                    warn!(attempt, error = %e, "External API fetch attempt failed");
                    last_error = e;
                    if attempt < self.config.max_attempts {
                        tokio::time::sleep(self.config.backoff).await;
                    }
                }
            }
        }

        Err(last_error)
    }

    async fn try_fetch(&self) -> Result<Option<ExternalApiResponse>, FetchError> {
        let url = format!("{}/recipes?limit=0", self.config.base_url);
        debug!(url = %url, "Querying external recipe API");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(FetchError::Api(status.as_u16(), error_text));
        }

        // Decode through Option so a `null` body reads as "no response"
        // rather than a parse failure
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        decode(&body)
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, FetchError> {
    serde_json::from_slice(body).map_err(|e| FetchError::Parse(e.to_string()))
}
