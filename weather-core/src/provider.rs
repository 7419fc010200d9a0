use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    Settings,
    error::Result,
    model::{CurrentConditions, ForecastSample, Units},
    provider::openweather::OpenWeatherProvider,
};

pub mod openweather;

/// A source of current conditions and raw forecast series.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, city: &str, units: Units) -> Result<CurrentConditions>;

    /// The provider's forecast series, in ascending time order.
    async fn forecast(&self, city: &str, units: Units) -> Result<Vec<ForecastSample>>;
}

/// Construct the provider described by resolved settings.
pub fn provider_from_settings(settings: &Settings) -> Result<Box<dyn WeatherProvider>> {
    let provider = OpenWeatherProvider::new(
        settings.api_key.clone(),
        settings.base_url.clone(),
        settings.timeout,
    )?;

    Ok(Box::new(provider))
}
