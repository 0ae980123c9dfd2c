use crate::format::LineFormat;
use crate::handler::HandlerSet;
use crate::registry::LIFECYCLE_TARGET;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{Dispatch, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::{LevelFilter, filter_fn};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;

fn build_subscriber<W>(writer: W, format: LineFormat) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .event_format(format)
        .with_writer(writer)
        .with_filter(filter_fn(|meta| meta.target() != LIFECYCLE_TARGET));

    tracing_subscriber::registry()
        .with(LevelFilter::DEBUG)
        .with(file_layer)
}

/// Handle to a named logger. Cheap to clone; clones share handlers.
#[derive(Clone)]
pub struct Logger {
    name: String,
    path: PathBuf,
    handlers: HandlerSet,
    format: LineFormat,
    dispatch: Dispatch,
}

impl Logger {
    pub(crate) fn new(name: String, path: PathBuf, handlers: HandlerSet, format: LineFormat) -> Self {
        let dispatch = Dispatch::new(build_subscriber(handlers.clone(), format.clone()));
        Self {
            name,
            path,
            handlers,
            format,
            dispatch,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// File opened when this handle was created.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Runs `f` with this logger as the default dispatcher, so plain
    /// `tracing` macros inside it land in the log file.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.in_scope(|| tracing::debug!("{message}"));
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.in_scope(|| tracing::info!("{message}"));
    }

    pub fn warning(&self, message: impl fmt::Display) {
        self.in_scope(|| tracing::warn!("{message}"));
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.in_scope(|| tracing::error!("{message}"));
    }

    /// Dispatcher that hands records to a background thread before they
    /// reach the handlers. Records are flushed when the guard is dropped.
    pub fn non_blocking(&self) -> (Dispatch, WorkerGuard) {
        let (writer, guard) = tracing_appender::non_blocking(self.handlers.clone());
        let dispatch = Dispatch::new(build_subscriber(writer, self.format.clone()));
        (dispatch, guard)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("zone", &self.format.zone())
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
