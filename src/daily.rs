//! Daily aggregation of hourly records.
//!
//! The representative weather code of a day is the code of its first hourly
//! record. This is a known simplification (not the most frequent or most
//! severe code of the day) and is kept as is.

use crate::series::HourlyRecord;
use chrono::NaiveDate;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    pub weather_code: i32,
    pub max_temp: f64,
    pub min_temp: f64,
    pub total_precipitation: f64,
    pub max_wind_speed: f64,
}

impl DailySummary {
    fn seed(record: &HourlyRecord) -> Self {
        Self {
            weather_code: record.weather_code,
            max_temp: record.temperature,
            min_temp: record.temperature,
            total_precipitation: record.precipitation,
            max_wind_speed: record.wind_speed,
        }
    }

    fn absorb(&mut self, record: &HourlyRecord) {
        self.max_temp = self.max_temp.max(record.temperature);
        self.min_temp = self.min_temp.min(record.temperature);
        self.total_precipitation += record.precipitation;
        self.max_wind_speed = self.max_wind_speed.max(record.wind_speed);
    }
}

/// Daily summaries keyed by date, iterated in the order dates were first seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailySummaries {
    days: Vec<(NaiveDate, DailySummary)>,
    index: HashMap<NaiveDate, usize>,
}

impl DailySummaries {
    /// The summary for `date`, if any hour of that date was folded in.
    pub fn get(&self, date: NaiveDate) -> Option<&DailySummary> {
        self.index.get(&date).map(|&i| &self.days[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &DailySummary)> {
        self.days.iter().map(|(date, summary)| (date, summary))
    }

    /// Number of distinct dates.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    fn fold_in(mut self, record: &HourlyRecord) -> Self {
        match self.index.get(&record.date) {
            Some(&i) => self.days[i].1.absorb(record),
            None => {
                self.index.insert(record.date, self.days.len());
                self.days.push((record.date, DailySummary::seed(record)));
            }
        }
        self
    }
}

/// Fold hourly records, in order, into one summary per calendar date.
pub fn aggregate(records: &[HourlyRecord]) -> DailySummaries {
    records
        .iter()
        .fold(DailySummaries::default(), DailySummaries::fold_in)
}
