use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};

use crate::{error::WeatherError, model::Units};

/// Environment variable holding the OpenWeather API key.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Optional configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// units = "imperial"
/// timeout_secs = 5
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub api_key: Option<String>,
    pub units: Option<Units>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Everything the fetch layer needs, fully resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_key: String,
    pub units: Units,
    pub base_url: String,
    pub timeout: Duration,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-task", "weather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Combine the file config with values from the environment and command line.
    ///
    /// `env_api_key` takes precedence over `api_key` from the file, and
    /// `units` over the file's `units`. Blank keys count as missing.
    pub fn resolve(
        self,
        env_api_key: Option<String>,
        units: Option<Units>,
    ) -> Result<Settings, WeatherError> {
        let api_key = env_api_key
            .filter(|key| !key.trim().is_empty())
            .or_else(|| self.api_key.filter(|key| !key.trim().is_empty()))
            .ok_or(WeatherError::MissingApiKey)?;

        let timeout = match self.timeout_secs {
            Some(0) => {
                return Err(WeatherError::Config("timeout_secs must be positive".to_string()));
            }
            Some(secs) => Duration::from_secs(secs),
            None => DEFAULT_TIMEOUT,
        };

        let base_url = self
            .base_url
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Settings {
            api_key,
            units: units.or(self.units).unwrap_or_default(),
            base_url,
            timeout,
        })
    }
}
