use clap::{Parser, ValueEnum};
use tracing::debug;
use weather_core::{
    API_KEY_ENV, Config, Units, WeatherProvider, aggregate_daily, provider_from_settings,
};

use crate::report::{format_current, format_forecast};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weather",
    version,
    about = "Get weather information from the command line",
    after_help = "Requires the OPENWEATHER_API_KEY environment variable \
                  (or `api_key` in the config file)."
)]
pub struct Cli {
    /// City name (e.g. London or New York).
    #[arg(required = true, num_args = 1..)]
    pub city: Vec<String>,

    /// Show 5-day forecast.
    #[arg(short, long)]
    pub forecast: bool,

    /// Temperature units (default: metric, or `units` from the config file).
    #[arg(short, long, value_enum)]
    pub units: Option<UnitsArg>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnitsArg {
    Metric,
    Imperial,
}

impl From<UnitsArg> for Units {
    fn from(value: UnitsArg) -> Self {
        match value {
            UnitsArg::Metric => Units::Metric,
            UnitsArg::Imperial => Units::Imperial,
        }
    }
}

impl Cli {
    /// City words joined into the name sent to the provider.
    pub fn city(&self) -> String {
        self.city.join(" ")
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;
        let settings =
            config.resolve(std::env::var(API_KEY_ENV).ok(), self.units.map(Units::from))?;
        debug!(units = %settings.units, base_url = %settings.base_url, "resolved settings");

        let provider = provider_from_settings(&settings)?;
        let report = self.report(provider.as_ref(), settings.units).await?;

        println!("{report}");
        Ok(())
    }

    /// Fetch and render the requested report without printing it.
    pub async fn report(
        &self,
        provider: &dyn WeatherProvider,
        units: Units,
    ) -> anyhow::Result<String> {
        let city = self.city();

        if self.forecast {
            let samples = provider.forecast(&city, units).await?;
            let days = aggregate_daily(&samples);

            if self.json {
                Ok(serde_json::to_string_pretty(&days)?)
            } else {
                Ok(format_forecast(&days, &city, units))
            }
        } else {
            let weather = provider.current(&city, units).await?;

            if self.json {
                Ok(serde_json::to_string_pretty(&weather)?)
            } else {
                Ok(format_current(&weather, units))
            }
        }
    }
}
