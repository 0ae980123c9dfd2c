use crate::clock::{Clock, SystemClock};
use crate::config::LoggerConfig;
use crate::error::{LoggingError, LoggingResult};
use crate::format::{LineFormat, TimestampFormat, default_timestamp_format};
use crate::handler::FileHandler;
use crate::logger::Logger;
use crate::registry::LoggerRegistry;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// `{dir}/{prefix}_{YYYY-MM-DD}.log`, dated in `zone` rather than UTC.
pub fn log_file_path(dir: &Path, prefix: &str, now: DateTime<Utc>, zone: Tz) -> PathBuf {
    let date = now.with_timezone(&zone).format("%Y-%m-%d");
    dir.join(format!("{prefix}_{date}.log"))
}

/// Builds [`Logger`]s from a [`LoggerConfig`].
///
/// Construction does no I/O and accepts any zone string; the zone is
/// resolved and the file opened by [`LoggerFactory::get_logger`].
#[derive(Clone)]
pub struct LoggerFactory {
    config: LoggerConfig,
    registry: Arc<LoggerRegistry>,
    clock: Arc<dyn Clock>,
    timestamp: TimestampFormat,
}

impl LoggerFactory {
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            config,
            registry: LoggerRegistry::shared(),
            clock: Arc::new(SystemClock),
            timestamp: default_timestamp_format(),
        }
    }

    pub fn configure(
        logger_name: impl Into<String>,
        log_file_prefix: impl Into<String>,
        timestamp_zone: impl Into<String>,
    ) -> Self {
        Self::new(LoggerConfig::new(
            logger_name,
            log_file_prefix,
            timestamp_zone,
        ))
    }

    pub fn with_registry(mut self, registry: Arc<LoggerRegistry>) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.log_dir = Some(dir.into());
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_timestamp_format(mut self, timestamp: TimestampFormat) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn registry(&self) -> &Arc<LoggerRegistry> {
        &self.registry
    }

    pub fn zone(&self) -> LoggingResult<Tz> {
        self.config
            .timestamp_zone
            .parse::<Tz>()
            .map_err(|_| LoggingError::UnknownTimeZone {
                zone: self.config.timestamp_zone.clone(),
            })
    }

    /// Path the next [`LoggerFactory::get_logger`] call would open.
    pub fn current_log_file(&self) -> LoggingResult<PathBuf> {
        let zone = self.zone()?;
        Ok(log_file_path(
            &self.config.resolved_log_dir(),
            &self.config.log_file_prefix,
            self.clock.now(),
            zone,
        ))
    }

    /// Opens today's log file and installs it as the logger's only handler.
    pub fn get_logger(&self) -> LoggingResult<Logger> {
        let zone = self.zone()?;
        let path = log_file_path(
            &self.config.resolved_log_dir(),
            &self.config.log_file_prefix,
            self.clock.now(),
            zone,
        );

        let handler = FileHandler::open(&path)?;
        let handlers = self.registry.install(&self.config.logger_name, handler);
        let format = LineFormat::new(zone, Arc::clone(&self.timestamp), Arc::clone(&self.clock));

        Ok(Logger::new(
            self.config.logger_name.clone(),
            path,
            handlers,
            format,
        ))
    }
}

impl Default for LoggerFactory {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    #[test]
    fn test_file_date_is_zone_local() {
        // 2024-01-01T02:00:00Z
        let now = DateTime::<Utc>::from_timestamp(1_704_074_400, 0).unwrap();
        let dir = Path::new("/tmp");

        assert_eq!(
            log_file_path(dir, "kafkabricks_log", now, chrono_tz::America::New_York),
            PathBuf::from("/tmp/kafkabricks_log_2023-12-31.log")
        );
        assert_eq!(
            log_file_path(dir, "kafkabricks_log", now, chrono_tz::UTC),
            PathBuf::from("/tmp/kafkabricks_log_2024-01-01.log")
        );
    }

    #[test]
    fn test_configure_keeps_values_verbatim() {
        let factory = LoggerFactory::configure("silver", "silver_log", "Not/AZone");
        assert_eq!(factory.config().logger_name, "silver");
        assert_eq!(factory.config().log_file_prefix, "silver_log");
        assert_eq!(factory.config().timestamp_zone, "Not/AZone");
    }

    #[test]
    fn test_unknown_zone_fails_on_resolve() {
        let factory = LoggerFactory::configure("silver", "silver_log", "Not/AZone");
        match factory.zone() {
            Err(LoggingError::UnknownTimeZone { zone }) => assert_eq!(zone, "Not/AZone"),
            other => panic!("Expected UnknownTimeZone, got {other:?}"),
        }
    }

    #[test]
    fn test_current_log_file_uses_clock() {
        let factory = LoggerFactory::configure("gold", "gold_log", "Europe/Riga")
            .with_log_dir("/data/logs")
            .with_clock(Arc::new(FixedClock::from_timestamp(1_704_074_400).unwrap()));
        assert_eq!(
            factory.current_log_file().unwrap(),
            PathBuf::from("/data/logs/gold_log_2024-01-01.log")
        );
    }
}
