//! Rendering of weather data: a daily summary on the console, or hourly rows
//! exported as CSV with Japanese column headers.

use crate::daily::DailySummaries;
use crate::error::WeatherInfoError;
use crate::series::HourlyRecord;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// An exportable CSV column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Column {
    Date,
    Time,
    WeatherCode,
    Temperature,
    Precipitation,
    WindSpeed,
    /// Not a known column: the identifier becomes the header and cells stay empty.
    Unknown(String),
}

pub const DEFAULT_COLUMNS: [Column; 6] = [
    Column::Date,
    Column::Time,
    Column::WeatherCode,
    Column::Temperature,
    Column::Precipitation,
    Column::WindSpeed,
];

impl Column {
    pub fn parse(id: &str) -> Self {
        match id {
            "date" => Self::Date,
            "time" => Self::Time,
            "weather_code" => Self::WeatherCode,
            "temperature_2m" | "temperature" => Self::Temperature,
            "precipitation" => Self::Precipitation,
            "windspeed_10m" | "wind_speed" => Self::WindSpeed,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Localised header for this column.
    pub fn header(&self) -> &str {
        match self {
            Self::Date => "日付",
            Self::Time => "時間",
            Self::WeatherCode => "天気コード",
            Self::Temperature => "気温(°C)",
            Self::Precipitation => "降水量(mm)",
            Self::WindSpeed => "最大風速(m/s)",
            Self::Unknown(id) => id,
        }
    }

    fn cell(&self, record: &HourlyRecord) -> String {
        match self {
            Self::Date => record.date.to_string(),
            Self::Time => record.time.clone(),
            Self::WeatherCode => record.weather_code.to_string(),
            Self::Temperature => format_value(record.temperature),
            Self::Precipitation => format_value(record.precipitation),
            Self::WindSpeed => format_value(record.wind_speed),
            Self::Unknown(_) => String::new(),
        }
    }
}

/// Shortest round-trip form, always with a fractional part (`20.0`, `22.5`).
fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Print one line per day, in the order the days were first seen.
pub fn render_console<W: Write>(summaries: &DailySummaries, out: &mut W) -> std::io::Result<()> {
    for (date, day) in summaries.iter() {
        writeln!(
            out,
            "{}: 天気コード {}, 最高気温 {}°C, 最低気温 {}°C, 降水量 {:.1}mm, 最大風速 {}m/s",
            date,
            day.weather_code,
            format_value(day.max_temp),
            format_value(day.min_temp),
            day.total_precipitation,
            format_value(day.max_wind_speed)
        )?;
    }
    Ok(())
}

fn selected_columns(columns: Option<&[String]>) -> Vec<Column> {
    match columns {
        Some(ids) if !ids.is_empty() => ids.iter().map(|id| Column::parse(id)).collect(),
        _ => DEFAULT_COLUMNS.to_vec(),
    }
}

/// Write a header row and one row per hourly record, restricted to `columns`
/// (all columns when `None`).
pub fn write_csv<W: Write>(
    records: &[HourlyRecord],
    columns: Option<&[String]>,
    destination: W,
) -> Result<(), WeatherInfoError> {
    let columns = selected_columns(columns);
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(destination);
    writer.write_record(columns.iter().map(Column::header))?;
    for record in records {
        writer.write_record(columns.iter().map(|column| column.cell(record)))?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Export the records to a new CSV file at `path`.
pub fn export_csv(
    records: &[HourlyRecord],
    columns: Option<&[String]>,
    path: &Path,
) -> Result<(), WeatherInfoError> {
    info!(path = %path.display(), rows = records.len(), "Writing CSV");
    let file = std::fs::File::create(path).map_err(csv::Error::from)?;
    write_csv(records, columns, file)
}
