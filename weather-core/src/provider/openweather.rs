use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use std::time::Duration;
use tracing::debug;

use crate::{
    error::{Result, WeatherError},
    model::{CurrentConditions, ForecastSample, Units},
};

use super::WeatherProvider;

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            api_key,
            base_url,
            http,
        })
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        city: &str,
        units: Units,
    ) -> Result<T> {
        let url = format!("{}/{endpoint}", self.base_url);
        debug!(%url, city, %units, "requesting OpenWeather");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", units.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        debug!(%status, endpoint, "OpenWeather responded");

        match status {
            StatusCode::NOT_FOUND => return Err(WeatherError::CityNotFound(city.to_string())),
            StatusCode::UNAUTHORIZED => return Err(WeatherError::InvalidApiKey),
            _ => {}
        }

        let body = res.text().await?;

        if !status.is_success() {
            return Err(WeatherError::Http {
                status,
                body: truncate_body(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    dt: i64,
    sys: OwSys,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwForecastMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwForecastMain,
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, city: &str, units: Units) -> Result<CurrentConditions> {
        let parsed: OwCurrentResponse = self.get("weather", city, units).await?;

        Ok(CurrentConditions {
            city: parsed.name,
            country: parsed.sys.country,
            temperature: parsed.main.temp,
            feels_like: parsed.main.feels_like,
            humidity_pct: parsed.main.humidity,
            description: first_description(parsed.weather)?,
            wind_speed: parsed.wind.speed,
            observed_at: unix_to_utc(parsed.dt)?,
        })
    }

    async fn forecast(&self, city: &str, units: Units) -> Result<Vec<ForecastSample>> {
        let parsed: OwForecastResponse = self.get("forecast", city, units).await?;

        if parsed.list.is_empty() {
            return Err(WeatherError::EmptyForecast);
        }

        parsed
            .list
            .into_iter()
            .map(|entry| {
                Ok(ForecastSample {
                    timestamp: unix_to_utc(entry.dt)?,
                    temperature: entry.main.temp,
                    description: first_description(entry.weather)?,
                })
            })
            .collect()
    }
}

fn first_description(weather: Vec<OwWeather>) -> Result<String> {
    weather
        .into_iter()
        .next()
        .map(|w| w.description)
        .ok_or_else(|| {
            WeatherError::Decode(serde::de::Error::custom("`weather` array is empty"))
        })
}

fn unix_to_utc(ts: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0).ok_or(WeatherError::InvalidTimestamp(ts))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}
