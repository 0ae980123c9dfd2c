//! File-backed loggers with time-zone aware timestamps.
//!
//! [`LoggerFactory`] resolves a configured IANA zone, opens
//! `{log_dir}/{prefix}_{YYYY-MM-DD}.log` (date taken in that zone) and
//! installs it as the only handler of the named logger in a
//! [`LoggerRegistry`]. Lines are written as
//! `<LEVEL>:<YYYY-MM-DD HH:MM:SS>:<message>`.
//!
//! ```no_run
//! use kafkabricks_logging::LoggerFactory;
//!
//! let logger = LoggerFactory::default().get_logger()?;
//! logger.info("bronze setup finished");
//! logger.in_scope(|| tracing::warn!(table = "orders", "late arriving rows"));
//! # Ok::<(), kafkabricks_logging::LoggingError>(())
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod factory;
pub mod format;
pub mod handler;
pub mod logger;
pub mod registry;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::LoggerConfig;
pub use error::{LoggingError, LoggingResult};
pub use factory::{LoggerFactory, log_file_path};
pub use format::{TimestampFormat, zoned_timestamp};
pub use logger::Logger;
pub use registry::LoggerRegistry;
