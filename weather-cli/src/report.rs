//! Plain-text rendering of weather reports.

use chrono::{Local, TimeZone};
use weather_core::{CurrentConditions, DailyForecast, Units};

const CURRENT_RULE_WIDTH: usize = 40;
const FORECAST_RULE_WIDTH: usize = 50;

fn rule(width: usize) -> String {
    "─".repeat(width)
}

/// Upper-cases the first character and lower-cases the rest.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

pub fn format_current(weather: &CurrentConditions, units: Units) -> String {
    format_current_in(weather, units, &Local)
}

/// Current conditions with the observation time shown in `tz`.
pub fn format_current_in<Tz>(weather: &CurrentConditions, units: Units, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let temp_unit = units.temperature_suffix();
    let speed_unit = units.speed_suffix();
    let updated = weather.observed_at.with_timezone(tz).format("%Y-%m-%d %H:%M");

    let lines = [
        format!("Weather for {}, {}", weather.city, weather.country),
        rule(CURRENT_RULE_WIDTH),
        format!(
            "Temperature:  {:.1}{temp_unit} (feels like {:.1}{temp_unit})",
            weather.temperature, weather.feels_like
        ),
        format!("Conditions:   {}", capitalize(&weather.description)),
        format!("Humidity:     {}%", weather.humidity_pct),
        format!("Wind:         {:.1} {speed_unit}", weather.wind_speed),
        rule(CURRENT_RULE_WIDTH),
        format!("Updated: {updated}"),
    ];

    lines.join("\n")
}

pub fn format_forecast(forecasts: &[DailyForecast], city: &str, units: Units) -> String {
    let temp_unit = units.temperature_suffix();

    let mut lines = vec![format!("5-Day Forecast for {city}"), rule(FORECAST_RULE_WIDTH)];

    lines.extend(forecasts.iter().map(|fc| {
        format!(
            "{}  {:5.1}{temp_unit} - {:5.1}{temp_unit}  {}",
            fc.date.format("%a %b %d"),
            fc.temp_min,
            fc.temp_max,
            capitalize(&fc.description)
        )
    }));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn london(temperature: f64, feels_like: f64, wind_speed: f64) -> CurrentConditions {
        CurrentConditions {
            city: "London".to_string(),
            country: "GB".to_string(),
            temperature,
            feels_like,
            humidity_pct: 72,
            description: "partly cloudy".to_string(),
            wind_speed,
            observed_at: NaiveDate::from_ymd_opt(2026, 1, 28)
                .and_then(|d| d.and_hms_opt(14, 30, 0))
                .expect("valid date")
                .and_utc(),
        }
    }

    #[test]
    fn current_metric() {
        let output = format_current_in(&london(15.2, 14.8, 3.5), Units::Metric, &Utc);

        assert!(output.contains("London, GB"));
        assert!(output.contains("15.2°C"));
        assert!(output.contains("72%"));
        assert!(output.contains("m/s"));
    }

    #[test]
    fn current_imperial_changes_only_suffixes() {
        let output = format_current_in(&london(15.2, 14.8, 3.5), Units::Imperial, &Utc);

        assert!(output.contains("15.2°F"));
        assert!(output.contains("14.8°F"));
        assert!(output.contains("3.5 mph"));
        assert!(!output.contains("°C"));
        assert!(!output.contains("m/s"));
    }

    #[test]
    fn current_full_layout() {
        let output = format_current_in(&london(15.2, 14.8, 3.5), Units::Metric, &Utc);
        let rule = "─".repeat(40);

        let expected = [
            "Weather for London, GB",
            rule.as_str(),
            "Temperature:  15.2°C (feels like 14.8°C)",
            "Conditions:   Partly cloudy",
            "Humidity:     72%",
            "Wind:         3.5 m/s",
            rule.as_str(),
            "Updated: 2026-01-28 14:30",
        ]
        .join("\n");

        assert_eq!(output, expected);
    }

    #[test]
    fn forecast_lines_are_aligned() {
        let forecasts = vec![
            DailyForecast {
                date: NaiveDate::from_ymd_opt(2026, 1, 28).unwrap(),
                temp_min: 12.0,
                temp_max: 16.5,
                description: "partly cloudy".to_string(),
            },
            DailyForecast {
                date: NaiveDate::from_ymd_opt(2026, 1, 29).unwrap(),
                temp_min: -3.24,
                temp_max: 2.0,
                description: "LIGHT SNOW".to_string(),
            },
        ];

        let output = format_forecast(&forecasts, "London", Units::Metric);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "5-Day Forecast for London");
        assert_eq!(lines[1], "─".repeat(50));
        assert_eq!(lines[2], "Wed Jan 28   12.0°C -  16.5°C  Partly cloudy");
        assert_eq!(lines[3], "Thu Jan 29   -3.2°C -   2.0°C  Light snow");
    }

    #[test]
    fn forecast_imperial_suffix() {
        let forecasts = vec![DailyForecast {
            date: NaiveDate::from_ymd_opt(2026, 1, 28).unwrap(),
            temp_min: 50.0,
            temp_max: 61.3,
            description: "clear sky".to_string(),
        }];

        let output = format_forecast(&forecasts, "New York", Units::Imperial);

        assert!(output.contains("New York"));
        assert!(output.contains("50.0°F"));
        assert!(output.contains("61.3°F"));
    }

    #[test]
    fn forecast_without_days_has_only_header() {
        let output = format_forecast(&[], "London", Units::Metric);
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn capitalize_handles_edge_cases() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("rain"), "Rain");
        assert_eq!(capitalize("OVERCAST clouds"), "Overcast clouds");
        assert_eq!(capitalize("équateur"), "Équateur");
    }
}
