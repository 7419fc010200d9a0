//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration & credential resolution
//! - The OpenWeather fetch layer behind the `WeatherProvider` trait
//! - Shared domain models and the error taxonomy
//! - Per-day aggregation of forecast samples
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use aggregate::{FORECAST_DAYS, aggregate_daily, aggregate_daily_in};
pub use config::{API_KEY_ENV, Config, Settings};
pub use error::WeatherError;
pub use model::{CurrentConditions, DailyForecast, ForecastSample, Units};
pub use provider::{WeatherProvider, provider_from_settings};
