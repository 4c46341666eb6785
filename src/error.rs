use chrono::NaiveDate;
use thiserror::Error;

/// Which end of the queryable history a rejected date fell off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeBound {
    /// The date lies after today.
    Future,
    /// The date lies before the provider's history horizon.
    BeyondHorizon,
}

#[derive(Debug, Error)]
pub enum WeatherInfoError {
    #[error("Date '{0}' is not in YYYY-MM-DD format")]
    InvalidFormat(String),

    #[error("Date {date} is out of range ({bound:?})")]
    DateOutOfRange { date: NaiveDate, bound: RangeBound },

    #[error("'{0}' looks like a mistyped option")]
    InvalidOption(String),

    #[error("Request to the weather provider failed")]
    Fetch(#[from] reqwest::Error),

    #[error("Could not decode the provider response")]
    Decode(#[from] serde_json::Error),

    #[error("Malformed provider payload: {0}")]
    Payload(String),

    #[error("Failed to write CSV output")]
    Export(#[from] csv::Error),

    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl WeatherInfoError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// The message shown to the user before the process exits.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidFormat(_) => {
                "無効な日付形式です。YYYY-MM-DD形式で入力してください。".to_string()
            }
            Self::DateOutOfRange {
                bound: RangeBound::Future,
                ..
            } => "無効な日付です。本日以前の日付を入力してください。".to_string(),
            Self::DateOutOfRange {
                bound: RangeBound::BeyondHorizon,
                ..
            } => "無効な日付です。過去4ヶ月以内の日付を入力してください。".to_string(),
            Self::InvalidOption(_) => "無効なオプションです。'--csv'と入力してください。".to_string(),
            Self::Fetch(e) if e.is_connect() => {
                "ネットワーク接続エラー: APIサーバーに接続できません。".to_string()
            }
            Self::Fetch(e) if e.is_timeout() => {
                "タイムアウトエラー: APIリクエストがタイムアウトしました。".to_string()
            }
            Self::Fetch(e) => match e.status() {
                Some(status) => format!("HTTPエラー: ステータスコード {}", status.as_u16()),
                None => format!("APIリクエストエラー: {e}"),
            },
            Self::Decode(e) => format!("APIレスポンスの解析エラー: {e}"),
            Self::Payload(message) => format!("APIレスポンスの解析エラー: {message}"),
            Self::Export(e) => format!("CSV出力エラー: {e}"),
            Self::Io(e) => format!("ファイル操作エラー: {e}"),
            Self::Config { message } => format!("設定エラー: {message}"),
        }
    }
}
