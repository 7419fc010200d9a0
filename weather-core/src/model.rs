use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::WeatherError;

/// Unit system sent to the provider and used for display suffixes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    pub fn temperature_suffix(&self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
        }
    }

    pub fn speed_suffix(&self) -> &'static str {
        match self {
            Units::Metric => "m/s",
            Units::Imperial => "mph",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Units {
    type Err = WeatherError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "metric" => Ok(Units::Metric),
            "imperial" => Ok(Units::Imperial),
            _ => Err(WeatherError::UnknownUnits(value.to_string())),
        }
    }
}

/// Current conditions for a single city.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentConditions {
    pub city: String,
    pub country: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity_pct: u8,
    pub description: String,
    pub wind_speed: f64,
    pub observed_at: DateTime<Utc>,
}

/// One point of the provider's 3-hourly forecast series.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSample {
    pub timestamp: DateTime<Utc>,
    pub temperature: f64,
    pub description: String,
}

/// A calendar day reduced from one or more forecast samples.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub temp_min: f64,
    pub temp_max: f64,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_parse_case_insensitively() {
        assert_eq!("metric".parse::<Units>().unwrap(), Units::Metric);
        assert_eq!("Imperial".parse::<Units>().unwrap(), Units::Imperial);
    }

    #[test]
    fn unknown_units_error() {
        let err = "kelvin".parse::<Units>().unwrap_err();
        assert!(err.to_string().contains("Unknown units 'kelvin'"));
    }

    #[test]
    fn suffixes_follow_unit_system() {
        assert_eq!(Units::Metric.temperature_suffix(), "°C");
        assert_eq!(Units::Metric.speed_suffix(), "m/s");
        assert_eq!(Units::Imperial.temperature_suffix(), "°F");
        assert_eq!(Units::Imperial.speed_suffix(), "mph");
    }

    #[test]
    fn units_default_to_metric() {
        assert_eq!(Units::default(), Units::Metric);
        assert_eq!(Units::default().to_string(), "metric");
    }
}
