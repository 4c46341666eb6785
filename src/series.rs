use crate::error::WeatherInfoError;
use crate::weather_data::HourlyPayload;
use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

/// One hourly observation, split out of the provider's parallel arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyRecord {
    pub date: NaiveDate,
    /// Hour of day as reported by the provider, e.g. `"13:00"`.
    pub time: String,
    pub weather_code: i32,
    /// Degrees Celsius.
    pub temperature: f64,
    /// Millimetres.
    pub precipitation: f64,
    /// Metres per second.
    pub wind_speed: f64,
}

fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, WeatherInfoError> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| WeatherInfoError::Payload(format!("unparsable timestamp '{raw}'")))
}

/// Turn the raw hourly arrays into records, keeping only hours at or before
/// `now` whose date is at or before `end_date`.
///
/// The provider returns timestamps in non-decreasing order and this relies on
/// it: the scan stops at the first hour past either limit, so nothing after it
/// is emitted even if it would qualify on its own.
pub fn process_series(
    hourly: &HourlyPayload,
    end_date: NaiveDate,
    now: NaiveDateTime,
) -> Result<Vec<HourlyRecord>, WeatherInfoError> {
    let len = hourly.time.len();
    if [
        hourly.weather_code.len(),
        hourly.temperature.len(),
        hourly.precipitation.len(),
        hourly.wind_speed.len(),
    ]
    .iter()
    .any(|&n| n != len)
    {
        return Err(WeatherInfoError::Payload(
            "hourly arrays have different lengths".to_string(),
        ));
    }

    let mut records = Vec::with_capacity(len);
    for (i, raw) in hourly.time.iter().enumerate() {
        let timestamp = parse_timestamp(raw)?;
        if timestamp > now || timestamp.date() > end_date {
            debug!(%timestamp, "Reached end of usable data");
            break;
        }
        let time = raw.split_once('T').map_or("", |(_, time)| time);
        records.push(HourlyRecord {
            date: timestamp.date(),
            time: time.to_string(),
            weather_code: hourly.weather_code[i],
            temperature: hourly.temperature[i],
            precipitation: hourly.precipitation[i],
            wind_speed: hourly.wind_speed[i],
        });
    }
    debug!(records = records.len(), "Processed hourly series");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(times: &[&str]) -> HourlyPayload {
        let n = times.len();
        HourlyPayload {
            time: times.iter().map(|t| t.to_string()).collect(),
            weather_code: (0..n as i32).collect(),
            temperature: (0..n).map(|i| 10.0 + i as f64).collect(),
            precipitation: vec![0.5; n],
            wind_speed: vec![2.0; n],
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").unwrap()
    }

    #[test]
    fn test_splits_date_and_time() {
        let hourly = payload(&["2024-03-01T00:00", "2024-03-01T01:00"]);
        let records =
            process_series(&hourly, date("2024-03-01"), datetime("2024-03-02T00:00")).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, date("2024-03-01"));
        assert_eq!(records[0].time, "00:00");
        assert_eq!(records[1].time, "01:00");
        assert_eq!(records[1].temperature, 11.0);
        assert_eq!(records[1].weather_code, 1);
    }

    #[test]
    fn test_stops_at_now() {
        let hourly = payload(&[
            "2024-03-01T10:00",
            "2024-03-01T11:00",
            "2024-03-01T12:00",
            "2024-03-01T13:00",
        ]);
        let now = datetime("2024-03-01T11:30");
        let records = process_series(&hourly, date("2024-03-01"), now).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.date.and_time(
            chrono::NaiveTime::parse_from_str(&r.time, "%H:%M").unwrap()
        ) <= now));
    }

    #[test]
    fn test_hour_equal_to_now_is_kept() {
        let hourly = payload(&["2024-03-01T10:00", "2024-03-01T11:00"]);
        let records =
            process_series(&hourly, date("2024-03-01"), datetime("2024-03-01T11:00")).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_stops_after_end_date() {
        let hourly = payload(&[
            "2024-03-01T22:00",
            "2024-03-01T23:00",
            "2024-03-02T00:00",
            "2024-03-02T01:00",
        ]);
        let records =
            process_series(&hourly, date("2024-03-01"), datetime("2024-03-10T00:00")).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.date == date("2024-03-01")));
    }

    #[test]
    fn test_stops_at_first_violation() {
        // Out of order on purpose: the entry after the future one would qualify.
        let hourly = payload(&[
            "2024-03-01T08:00",
            "2024-03-01T20:00",
            "2024-03-01T09:00",
        ]);
        let records =
            process_series(&hourly, date("2024-03-01"), datetime("2024-03-01T12:00")).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].time, "08:00");
    }

    #[test]
    fn test_entirely_future_series_is_empty() {
        let hourly = payload(&["2024-03-05T00:00", "2024-03-05T01:00"]);
        let records =
            process_series(&hourly, date("2024-03-05"), datetime("2024-03-04T23:00")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_series_starting_after_end_date_is_empty() {
        let hourly = payload(&["2024-03-02T00:00"]);
        let records =
            process_series(&hourly, date("2024-03-01"), datetime("2024-03-10T00:00")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_accepts_seconds_in_timestamp() {
        let hourly = payload(&["2024-03-01T00:00:00"]);
        let records =
            process_series(&hourly, date("2024-03-01"), datetime("2024-03-01T05:00")).unwrap();
        assert_eq!(records[0].time, "00:00:00");
    }

    #[test]
    fn test_mismatched_arrays() {
        let mut hourly = payload(&["2024-03-01T00:00", "2024-03-01T01:00"]);
        hourly.wind_speed.pop();
        let result = process_series(&hourly, date("2024-03-01"), datetime("2024-03-02T00:00"));
        assert!(matches!(result, Err(WeatherInfoError::Payload(_))));
    }

    #[test]
    fn test_bad_timestamp() {
        let hourly = payload(&["yesterday"]);
        let result = process_series(&hourly, date("2024-03-01"), datetime("2024-03-02T00:00"));
        assert!(matches!(result, Err(WeatherInfoError::Payload(_))));
    }
}
