use chrono::Local;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use weather_info::{run, RunOptions, Settings};

/// 天気情報アプリ: hourly weather for a fixed location.
#[derive(Parser, Debug)]
#[command(version, author, about)]
struct Cli {
    /// 指定日の天気情報を表示 (YYYY-MM-DD形式)
    date: Option<String>,

    /// CSV形式で出力
    #[arg(long)]
    csv: bool,

    /// CSV出力時に表示するカラム
    #[arg(long, num_args = 1.., value_name = "COLUMN")]
    columns: Option<Vec<String>>,

    /// Path to a TOML settings file
    #[arg(long)]
    config: Option<PathBuf>,
}

impl From<Cli> for RunOptions {
    fn from(cli: Cli) -> Self {
        RunOptions {
            date: cli.date,
            csv: cli.csv,
            columns: cli.columns,
        }
    }
}

fn init_tracing(level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", e.user_message());
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&settings.log_level);

    let now = Local::now().naive_local();
    let options = RunOptions::from(cli);
    let mut stdout = std::io::stdout();
    match run(&options, &settings, now, &mut stdout).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Run failed");
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
