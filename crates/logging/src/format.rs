use crate::clock::Clock;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::fmt;
use std::sync::Arc;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

pub const TIMESTAMP_PATTERN: &str = "%Y-%m-%d %H:%M:%S";

/// Renders a record's capture instant in the logger's zone.
pub type TimestampFormat = Arc<dyn Fn(DateTime<Utc>, Tz) -> String + Send + Sync>;

pub fn zoned_timestamp(instant: DateTime<Utc>, zone: Tz) -> String {
    instant
        .with_timezone(&zone)
        .format(TIMESTAMP_PATTERN)
        .to_string()
}

pub fn default_timestamp_format() -> TimestampFormat {
    Arc::new(zoned_timestamp)
}

pub fn level_name(level: &Level) -> &'static str {
    match *level {
        Level::TRACE => "TRACE",
        Level::DEBUG => "DEBUG",
        Level::INFO => "INFO",
        Level::WARN => "WARNING",
        Level::ERROR => "ERROR",
    }
}

/// `<LEVEL>:<timestamp>:<message>` event format.
#[derive(Clone)]
pub struct LineFormat {
    zone: Tz,
    timestamp: TimestampFormat,
    clock: Arc<dyn Clock>,
}

impl LineFormat {
    pub fn new(zone: Tz, timestamp: TimestampFormat, clock: Arc<dyn Clock>) -> Self {
        Self {
            zone,
            timestamp,
            clock,
        }
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }

    pub fn render_prefix(&self, level: &Level, instant: DateTime<Utc>) -> String {
        format!("{}:{}:", level_name(level), (self.timestamp)(instant, self.zone))
    }
}

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let captured = self.clock.now();
        writer.write_str(&self.render_prefix(event.metadata().level(), captured))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
