//! Hourly weather for a fixed location, summarised per day on the console or
//! exported as CSV.

pub mod config;
pub mod daily;
pub mod date_range;
pub mod error;
pub mod filename;
pub mod output;
pub mod series;
pub mod weather_data;

pub use config::Settings;
pub use date_range::{DateWindow, WindowKind, WindowPolicy};
pub use error::{RangeBound, WeatherInfoError};

use chrono::NaiveDateTime;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

pub type Result<T> = std::result::Result<T, WeatherInfoError>;

/// What the user asked for on the command line.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub date: Option<String>,
    pub csv: bool,
    pub columns: Option<Vec<String>>,
}

/// Fetch, process and render the weather for one invocation.
///
/// Console output (the daily summary, or the notice naming the CSV file) goes
/// to `out`. Returns the path of the CSV file when one was written.
pub async fn run<W: Write>(
    options: &RunOptions,
    settings: &Settings,
    now: NaiveDateTime,
    out: &mut W,
) -> Result<Option<PathBuf>> {
    date_range::reject_reserved(options.date.as_deref())?;
    let window = DateWindow::resolve(options.date.as_deref(), now.date(), settings.window_policy())?;
    debug!(?window, "Resolved date window");

    let client = settings.http_client()?;
    let hourly = weather_data::fetch_hourly(&client, settings, &window).await?;
    let records = series::process_series(&hourly, window.end, now)?;

    if !options.csv {
        output::render_console(&daily::aggregate(&records), out)?;
        return Ok(None);
    }

    let dir = settings.output_dir()?;
    let path =
        filename::allocate_csv_path(&dir, &window.file_stem()).map_err(csv::Error::from)?;
    output::export_csv(&records, options.columns.as_deref(), &path)?;
    let path = std::fs::canonicalize(&path).map_err(csv::Error::from)?;
    writeln!(out, "CSVファイルが作成されました: {}", path.display())?;
    Ok(Some(path))
}
