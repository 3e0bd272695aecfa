use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    Config,
    error::FetchError,
    model::{LocationQuery, WeatherSnapshot},
    provider::weatherapi::WeatherApiProvider,
};

pub mod weatherapi;

/// Outbound collaborator that answers "what is the weather at this location right now".
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Issue exactly one request for current conditions at `location`.
    async fn current_conditions(
        &self,
        location: &LocationQuery,
    ) -> Result<WeatherSnapshot, FetchError>;
}

#[async_trait]
impl<T: WeatherProvider + ?Sized> WeatherProvider for Box<T> {
    async fn current_conditions(
        &self,
        location: &LocationQuery,
    ) -> Result<WeatherSnapshot, FetchError> {
        (**self).current_conditions(location).await
    }
}

/// Construct the WeatherAPI.com provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured.\n\
             Hint: run `weather configure` or set {}.",
            crate::config::API_KEY_ENV
        )
    })?;

    Ok(Box::new(WeatherApiProvider::with_base_url(api_key.to_owned(), config.base_url())))
}
