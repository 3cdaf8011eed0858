//! Forward geocoding against the Open-Meteo geocoding API.
//!
//! Search-as-you-type is best-effort: transport failures are logged and
//! surface as an empty candidate list, never as an error.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::instrument;

use crate::types::{Location, WeatherError};

#[derive(Debug, Deserialize)]
struct SearchResponse {
    /// Absent entirely when the API has no candidates.
    results: Option<Vec<Location>>,
}

#[derive(Debug, Clone)]
pub struct GeocodingClient {
    client: Client,
    base_url: String,
    language: String,
}

impl GeocodingClient {
    pub fn new(
        base_url: impl Into<String>,
        language: impl Into<String>,
        timeout_secs: u64,
    ) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            language: language.into(),
        })
    }

    fn search_url(&self, query: &str, limit: u8) -> String {
        format!(
            "{}/search?name={}&count={}&language={}&format=json",
            self.base_url,
            urlencoding::encode(query),
            limit,
            self.language,
        )
    }

    /// Resolve a free-text place name to at most `limit` candidates.
    ///
    /// Empty or whitespace-only queries return no candidates without
    /// issuing a request. Failures are swallowed: the search box should
    /// never take the dashboard down.
    #[instrument(skip(self), level = "debug")]
    pub async fn search(&self, query: &str, limit: u8) -> Vec<Location> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let url = self.search_url(query, limit);

        let response = match self.client.get(&url).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("Geocoding request failed: {}", e);
                return Vec::new();
            }
        };

        if !response.status().is_success() {
            tracing::warn!("Geocoding returned status {}", response.status());
            return Vec::new();
        }

        let body: SearchResponse = match response.json().await {
            Ok(b) => b,
            Err(e) => {
                tracing::warn!("Geocoding parse error: {}", e);
                return Vec::new();
            }
        };

        body.results.unwrap_or_default()
    }

    /// Resolve a place name to its best (rank 0) candidate.
    ///
    /// Unlike [`search`](Self::search), an empty result set is an error
    /// here: the caller asked for this specific place.
    #[instrument(skip(self), level = "info")]
    pub async fn resolve_best(&self, query: &str) -> Result<Location, WeatherError> {
        if query.trim().is_empty() {
            return Err(WeatherError::NotFound(query.to_string()));
        }

        let url = self.search_url(query, 1);

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(e.to_string()))?;

        body.results
            .and_then(|mut results| {
                if results.is_empty() {
                    None
                } else {
                    Some(results.remove(0))
                }
            })
            .ok_or_else(|| WeatherError::NotFound(query.to_string()))
    }
}
