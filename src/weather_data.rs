use crate::config::Settings;
use crate::date_range::DateWindow;
use crate::error::WeatherInfoError;
use serde::Deserialize;
use std::vec::Vec;
use tracing::{debug, info};

#[derive(Deserialize, Debug)]
pub struct ForecastResponse {
    pub hourly: HourlyPayload,
}

/// Hourly series as returned by the provider: parallel arrays indexed by hour.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct HourlyPayload {
    pub time: Vec<String>,
    #[serde(rename = "weathercode")]
    pub weather_code: Vec<i32>,
    #[serde(rename = "temperature_2m")]
    pub temperature: Vec<f64>,
    pub precipitation: Vec<f64>,
    #[serde(rename = "windspeed_10m")]
    pub wind_speed: Vec<f64>,
}

/// Get the hourly series covering `window` from the weather api. A single
/// attempt is made; any failure ends the run.
pub async fn fetch_hourly(
    client: &reqwest::Client,
    settings: &Settings,
    window: &DateWindow,
) -> Result<HourlyPayload, WeatherInfoError> {
    let params = [
        ("latitude", settings.latitude.to_string()),
        ("longitude", settings.longitude.to_string()),
        ("hourly", settings.hourly_variables.clone()),
        ("timezone", settings.timezone.clone()),
        ("start_date", window.start.to_string()),
        ("end_date", window.end.to_string()),
    ];
    info!(start = %window.start, end = %window.end, "Fetching hourly weather");
    let response = client
        .get(&settings.api_url)
        .query(&params)
        .send()
        .await?
        .error_for_status()?;
    let body = response.text().await?;
    debug!(bytes = body.len(), "Received data from web api");
    let data = serde_json::from_str::<ForecastResponse>(&body)?;
    Ok(data.hourly)
}
