use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Unknown time zone: {zone}. Use IANA names like 'UTC' or 'Europe/Riga'")]
    UnknownTimeZone { zone: String },
    #[error("Cannot open log file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid logger configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type LoggingResult<T> = std::result::Result<T, LoggingError>;
