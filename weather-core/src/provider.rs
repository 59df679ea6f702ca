use crate::{Config, WeatherSnapshot, error::FetchError, provider::openweather::OpenWeatherProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Source of current weather readings for a catalog city.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Performs a single lookup for `city`. Implementations must not retry.
    async fn current_weather(&self, city: &str) -> Result<WeatherSnapshot, FetchError>;
}

#[async_trait]
impl<P: WeatherProvider + ?Sized> WeatherProvider for Box<P> {
    async fn current_weather(&self, city: &str) -> Result<WeatherSnapshot, FetchError> {
        (**self).current_weather(city).await
    }
}

/// Construct the OpenWeather provider from resolved configuration.
///
/// A missing API key is not an error here; it surfaces as a rejected request.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    if config.api_key().is_none() {
        tracing::warn!(
            "No OpenWeather API key configured; lookups will fail.\n\
             Hint: set OPEN_WEATHER_API_KEY or run `weather-now configure`."
        );
    }

    let provider = OpenWeatherProvider::builder(config.api_key().unwrap_or_default())
        .base_url(config.base_url())
        .timeout(config.request_timeout())
        .build()?;

    Ok(Box::new(provider))
}
