use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{
    error::FetchError,
    model::{LocationQuery, WeatherSnapshot},
};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

/// Client for the WeatherAPI.com `current.json` endpoint.
#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { api_key, base_url, http: Client::new() }
    }
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: WaLocation,
    current: WaCurrent,
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    #[instrument(skip_all, fields(location = %location))]
    async fn current_conditions(
        &self,
        location: &LocationQuery,
    ) -> Result<WeatherSnapshot, FetchError> {
        let url = format!("{}/current.json", self.base_url);
        debug!(url = %url, "Fetching current weather");

        let res = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", location.as_str())])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            // The status alone decides; the body is only kept for diagnostics.
            let body = res.text().await.unwrap_or_default();
            return Err(FetchError::NotFound {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let body = res.text().await?;

        let parsed: WaResponse = serde_json::from_str(&body)
            .map_err(|e| FetchError::InvalidResponse(e.to_string()))?;

        Ok(WeatherSnapshot::new(
            parsed.current.temp_c,
            parsed.current.condition.text,
            parsed.location.name,
        ))
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
