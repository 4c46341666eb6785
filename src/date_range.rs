use crate::error::{RangeBound, WeatherInfoError};
use chrono::{Duration, NaiveDate};

/// Positional values that are almost certainly a mistyped `--csv` or short flag.
const RESERVED_TOKENS: [&str; 4] = ["csv", "c", "s", "v"];

/// How far back dates may be queried and how long the default window is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowPolicy {
    pub history_days: u32,
    pub default_window_days: u32,
}

impl Default for WindowPolicy {
    fn default() -> Self {
        Self {
            history_days: 124,
            default_window_days: 14,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowKind {
    /// A single user-chosen day.
    SingleDay,
    /// The trailing window ending today.
    Trailing,
}

/// An inclusive `[start, end]` range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub kind: WindowKind,
}

impl DateWindow {
    /// Resolve the optional date argument against `today`.
    ///
    /// Without a date this is the trailing window of `default_window_days` days
    /// ending today. A given date must parse as `YYYY-MM-DD`, must not be after
    /// today and must not be older than `history_days` days.
    pub fn resolve(
        input: Option<&str>,
        today: NaiveDate,
        policy: WindowPolicy,
    ) -> Result<Self, WeatherInfoError> {
        let Some(input) = input else {
            let span = i64::from(policy.default_window_days.saturating_sub(1));
            let start = today
                .checked_sub_signed(Duration::days(span))
                .ok_or_else(|| WeatherInfoError::config("default_window_days is too large"))?;
            return Ok(Self {
                start,
                end: today,
                kind: WindowKind::Trailing,
            });
        };

        let date = NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .map_err(|_| WeatherInfoError::InvalidFormat(input.to_string()))?;
        if date > today {
            return Err(WeatherInfoError::DateOutOfRange {
                date,
                bound: RangeBound::Future,
            });
        }
        let horizon = today
            .checked_sub_signed(Duration::days(i64::from(policy.history_days)))
            .ok_or_else(|| WeatherInfoError::config("history_days is too large"))?;
        if date < horizon {
            return Err(WeatherInfoError::DateOutOfRange {
                date,
                bound: RangeBound::BeyondHorizon,
            });
        }
        Ok(Self {
            start: date,
            end: date,
            kind: WindowKind::SingleDay,
        })
    }

    /// Base name (without extension) for a CSV export of this window.
    pub fn file_stem(&self) -> String {
        match self.kind {
            WindowKind::SingleDay => format!("weather_data_{}", self.start),
            WindowKind::Trailing => format!("weather_data_{}_{}", self.start, self.end),
        }
    }
}

/// Reject a positional date argument that collides with a flag-like token.
pub fn reject_reserved(input: Option<&str>) -> Result<(), WeatherInfoError> {
    match input {
        Some(token) if RESERVED_TOKENS.contains(&token) => {
            Err(WeatherInfoError::InvalidOption(token.to_string()))
        }
        _ => Ok(()),
    }
}
