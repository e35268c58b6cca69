use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApicError {
    #[error("Cannot open file {}: {source}", .path.display())]
    FileError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    #[error("Cannot decode latency data at line {line}: {reason}")]
    DecodeError { line: u64, reason: String },

    #[error(
        "Latency tasks for API '{api}' at line {line} do not match the header: expected [{}], found [{}]",
        .expected.join(", "),
        .found.join(", ")
    )]
    SchemaMismatch {
        api: String,
        line: u64,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ApicError {
    /// 短分類名稱，用於日誌
    pub fn category(&self) -> &'static str {
        match self {
            ApicError::FileError { .. } | ApicError::IoError(_) => "file",
            ApicError::MalformedRow { .. } | ApicError::CsvError(_) => "input",
            ApicError::DecodeError { .. } => "latency",
            ApicError::SchemaMismatch { .. } => "schema",
            ApicError::ConfigError { .. } | ApicError::InvalidConfigValue { .. } => "config",
        }
    }
}

pub type Result<T> = std::result::Result<T, ApicError>;
