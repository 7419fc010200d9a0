//! Collapsing the provider's 3-hourly forecast series into one record per day.

use std::collections::HashMap;

use chrono::{Local, NaiveDate, TimeZone};
use tracing::debug;

use crate::model::{DailyForecast, ForecastSample};

/// Maximum number of days reported by a forecast.
pub const FORECAST_DAYS: usize = 5;

#[derive(Debug)]
struct DayGroup<'a> {
    date: NaiveDate,
    temp_min: f64,
    temp_max: f64,
    // (description, count) in first-seen order
    descriptions: Vec<(&'a str, usize)>,
}

impl<'a> DayGroup<'a> {
    fn new(date: NaiveDate, sample: &'a ForecastSample) -> Self {
        Self {
            date,
            temp_min: sample.temperature,
            temp_max: sample.temperature,
            descriptions: vec![(sample.description.as_str(), 1)],
        }
    }

    fn add(&mut self, sample: &'a ForecastSample) {
        self.temp_min = self.temp_min.min(sample.temperature);
        self.temp_max = self.temp_max.max(sample.temperature);

        match self
            .descriptions
            .iter_mut()
            .find(|(desc, _)| *desc == sample.description)
        {
            Some((_, count)) => *count += 1,
            None => self.descriptions.push((sample.description.as_str(), 1)),
        }
    }

    /// Most frequent description; on a tie the one seen first wins.
    fn dominant_description(&self) -> &'a str {
        let mut best = ("", 0);
        for &(desc, count) in &self.descriptions {
            if count > best.1 {
                best = (desc, count);
            }
        }
        best.0
    }

    fn finish(self) -> DailyForecast {
        DailyForecast {
            date: self.date,
            temp_min: self.temp_min,
            temp_max: self.temp_max,
            description: self.dominant_description().to_string(),
        }
    }
}

/// Groups samples by their calendar date in the local time zone.
///
/// See [`aggregate_daily_in`].
pub fn aggregate_daily(samples: &[ForecastSample]) -> Vec<DailyForecast> {
    aggregate_daily_in(samples, &Local)
}

/// Groups samples by calendar date in `tz` and reduces each group to its
/// minimum and maximum temperature and most frequent description.
///
/// Days are returned in the order they first appear in `samples` and the
/// result is cut to [`FORECAST_DAYS`] entries.
pub fn aggregate_daily_in<Tz: TimeZone>(
    samples: &[ForecastSample],
    tz: &Tz,
) -> Vec<DailyForecast> {
    let mut groups: Vec<DayGroup<'_>> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();

    for sample in samples {
        let date = sample.timestamp.with_timezone(tz).date_naive();

        match index.get(&date) {
            Some(&i) => groups[i].add(sample),
            None => {
                index.insert(date, groups.len());
                groups.push(DayGroup::new(date, sample));
            }
        }
    }

    debug!(samples = samples.len(), days = groups.len(), "aggregated forecast samples");

    groups
        .into_iter()
        .take(FORECAST_DAYS)
        .map(DayGroup::finish)
        .collect()
}
