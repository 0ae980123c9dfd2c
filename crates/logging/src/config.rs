use crate::error::LoggingResult;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_LOGGER_NAME: &str = "KafkaBricks_Logger";
pub const DEFAULT_LOG_FILE_PREFIX: &str = "kafkabricks_log";
pub const DEFAULT_TIMESTAMP_ZONE: &str = "Europe/Riga";

pub const ENV_LOGGER_NAME: &str = "KAFKABRICKS_LOGGER_NAME";
pub const ENV_LOG_FILE_PREFIX: &str = "KAFKABRICKS_LOG_PREFIX";
pub const ENV_TIMESTAMP_ZONE: &str = "KAFKABRICKS_LOG_TZ";
pub const ENV_LOG_DIR: &str = "KAFKABRICKS_LOG_DIR";

/// Settings for one named logger. Nothing is validated until
/// [`crate::LoggerFactory::get_logger`] runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub logger_name: String,
    pub log_file_prefix: String,
    /// IANA zone name used for timestamps and the file date.
    pub timestamp_zone: String,
    /// Directory for log files; the system temp directory when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            logger_name: DEFAULT_LOGGER_NAME.to_string(),
            log_file_prefix: DEFAULT_LOG_FILE_PREFIX.to_string(),
            timestamp_zone: DEFAULT_TIMESTAMP_ZONE.to_string(),
            log_dir: None,
        }
    }
}

impl LoggerConfig {
    pub fn new(
        logger_name: impl Into<String>,
        log_file_prefix: impl Into<String>,
        timestamp_zone: impl Into<String>,
    ) -> Self {
        Self {
            logger_name: logger_name.into(),
            log_file_prefix: log_file_prefix.into(),
            timestamp_zone: timestamp_zone.into(),
            log_dir: None,
        }
    }

    /// Defaults overridden by the `KAFKABRICKS_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let mut config = Self::default();
        if let Some(name) = lookup(ENV_LOGGER_NAME) {
            config.logger_name = name;
        }
        if let Some(prefix) = lookup(ENV_LOG_FILE_PREFIX) {
            config.log_file_prefix = prefix;
        }
        if let Some(zone) = lookup(ENV_TIMESTAMP_ZONE) {
            config.timestamp_zone = zone;
        }
        if let Some(dir) = lookup(ENV_LOG_DIR) {
            config.log_dir = Some(PathBuf::from(dir));
        }
        config
    }

    /// Missing keys take their defaults.
    pub fn from_json(json: &str) -> LoggingResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn resolved_log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}
