use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can stop a weather lookup before a report is produced.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error(
        "OPENWEATHER_API_KEY environment variable not set.\n\
         Get a free API key at: https://openweathermap.org/api"
    )]
    MissingApiKey,

    #[error("City '{0}' not found")]
    CityNotFound(String),

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("OpenWeather request failed with status {status}: {body}")]
    Http { status: StatusCode, body: String },

    #[error("Failed to reach OpenWeather: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected OpenWeather response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("OpenWeather forecast response contained no data")]
    EmptyForecast,

    #[error("OpenWeather returned an out-of-range timestamp: {0}")]
    InvalidTimestamp(i64),

    #[error("Unknown units '{0}'. Supported units: metric, imperial.")]
    UnknownUnits(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T, E = WeatherError> = std::result::Result<T, E>;
