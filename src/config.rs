//! Run settings: the fixed location, provider parameters and output location.
//!
//! Settings are read once at start-up from an optional TOML file and from
//! `WEATHER_INFO_*` environment variables, then handed to the pipeline by
//! reference.

use crate::date_range::WindowPolicy;
use crate::error::WeatherInfoError;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
const MAX_HISTORY_DAYS: u32 = 36_500;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Latitude of the observed point. Defaults to Tokyo Station.
    pub latitude: f64,
    pub longitude: f64,
    /// Timezone the provider reports timestamps in.
    pub timezone: String,
    pub api_url: String,
    /// Comma separated list of hourly variables requested from the provider.
    pub hourly_variables: String,
    pub timeout_seconds: u64,
    /// How many days back a single date may be queried.
    pub history_days: u32,
    /// Length of the trailing window used when no date is given.
    pub default_window_days: u32,
    /// Where CSV exports go. `~/Desktop/data` when unset.
    pub output_dir: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            latitude: 35.681236,
            longitude: 139.767125,
            timezone: "Asia/Tokyo".to_string(),
            api_url: "https://api.open-meteo.com/v1/forecast".to_string(),
            hourly_variables: "temperature_2m,precipitation,windspeed_10m,weathercode".to_string(),
            timeout_seconds: 30,
            history_days: 124,
            default_window_days: 14,
            output_dir: None,
            log_level: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from `path` (if given) and the environment, then validate them.
    pub fn load(path: Option<&Path>) -> Result<Self, WeatherInfoError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }
        builder = builder.add_source(Environment::with_prefix("WEATHER_INFO").try_parsing(true));

        let settings: Settings = builder
            .build()
            .and_then(Config::try_deserialize::<Settings>)
            .map_err(|e| WeatherInfoError::config(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), WeatherInfoError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(WeatherInfoError::config(format!(
                "latitude {} is outside [-90, 90]",
                self.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(WeatherInfoError::config(format!(
                "longitude {} is outside [-180, 180]",
                self.longitude
            )));
        }
        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(WeatherInfoError::config(
                "api_url must be an http or https URL",
            ));
        }
        if self.default_window_days == 0 {
            return Err(WeatherInfoError::config(
                "default_window_days must be at least 1",
            ));
        }
        if self.history_days > MAX_HISTORY_DAYS {
            return Err(WeatherInfoError::config(format!(
                "history_days cannot exceed {MAX_HISTORY_DAYS}"
            )));
        }
        if self.default_window_days > self.history_days + 1 {
            return Err(WeatherInfoError::config(
                "default_window_days cannot reach past history_days",
            ));
        }
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(WeatherInfoError::config(format!(
                "invalid log level '{}', expected one of: {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }

    pub fn window_policy(&self) -> WindowPolicy {
        WindowPolicy {
            history_days: self.history_days,
            default_window_days: self.default_window_days,
        }
    }

    /// The directory CSV exports are written to.
    pub fn output_dir(&self) -> Result<PathBuf, WeatherInfoError> {
        match &self.output_dir {
            Some(dir) => Ok(dir.clone()),
            None => dirs::home_dir()
                .map(|home| home.join("Desktop").join("data"))
                .ok_or_else(|| WeatherInfoError::config("unable to determine home directory")),
        }
    }

    pub fn http_client(&self) -> Result<reqwest::Client, WeatherInfoError> {
        Ok(reqwest::Client::builder()
            .timeout(Duration::from_secs(self.timeout_seconds))
            .build()?)
    }
}
