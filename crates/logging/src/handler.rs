//! Output handlers attached to a named logger.

use crate::error::{LoggingError, LoggingResult};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing_subscriber::fmt::MakeWriter;

/// Append-mode log file.
#[derive(Debug)]
pub struct FileHandler {
    path: PathBuf,
    file: File,
}

impl FileHandler {
    pub fn open(path: impl Into<PathBuf>) -> LoggingResult<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| LoggingError::Io {
                path: path.clone(),
                source,
            })?;
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Handlers shared by every handle of one logger. Each record is written to
/// all attached handlers; with none attached it is dropped.
#[derive(Debug, Clone, Default)]
pub struct HandlerSet {
    handlers: Arc<Mutex<Vec<FileHandler>>>,
}

impl HandlerSet {
    fn lock(&self) -> MutexGuard<'_, Vec<FileHandler>> {
        self.handlers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[cfg(test)]
    pub(crate) fn attach(&self, handler: FileHandler) {
        self.lock().push(handler);
    }

    /// Swaps in `handler` as the only handler under a single lock, so no
    /// record is written while the set is empty.
    pub fn replace(&self, handler: FileHandler) -> Vec<FileHandler> {
        let mut handlers = self.lock();
        let detached = std::mem::take(&mut *handlers);
        handlers.push(handler);
        detached
    }

    /// Removes every handler, returning them so callers can report what was closed.
    pub fn detach_all(&self) -> Vec<FileHandler> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    #[cfg(test)]
    pub(crate) fn paths(&self) -> Vec<PathBuf> {
        self.lock().iter().map(|h| h.path.clone()).collect()
    }
}

fn write_to_all(handlers: &mut [FileHandler], buf: &[u8]) -> io::Result<usize> {
    for handler in handlers.iter_mut() {
        handler.file.write_all(buf)?;
    }
    Ok(buf.len())
}

fn flush_all(handlers: &mut [FileHandler]) -> io::Result<()> {
    for handler in handlers.iter_mut() {
        handler.file.flush()?;
    }
    Ok(())
}

/// Holds the handler lock for the duration of one record.
pub struct HandlerWriter<'a> {
    handlers: MutexGuard<'a, Vec<FileHandler>>,
}

impl Write for HandlerWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        write_to_all(&mut self.handlers, buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        flush_all(&mut self.handlers)
    }
}

impl<'a> MakeWriter<'a> for HandlerSet {
    type Writer = HandlerWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        HandlerWriter {
            handlers: self.lock(),
        }
    }
}

// Owned writer for tracing_appender::non_blocking.
impl Write for HandlerSet {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        write_to_all(&mut self.lock(), buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        flush_all(&mut self.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_open_appends() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("a.log");
        fs::write(&path, "existing\n").unwrap();

        let set = HandlerSet::default();
        set.attach(FileHandler::open(&path).unwrap());
        set.make_writer().write_all(b"next\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "existing\nnext\n");
    }

    #[test]
    fn test_open_missing_dir_is_io_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("missing").join("a.log");
        let err = FileHandler::open(&path).unwrap_err();
        match err {
            LoggingError::Io { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("Expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_detach_all_stops_output() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("a.log");

        let set = HandlerSet::default();
        set.attach(FileHandler::open(&path).unwrap());
        let detached = set.detach_all();
        assert_eq!(detached.len(), 1);
        assert_eq!(detached[0].path(), path.as_path());
        assert!(set.is_empty());

        set.make_writer().write_all(b"dropped\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_every_handler_receives_record() {
        let temp = tempfile::tempdir().unwrap();
        let first = temp.path().join("first.log");
        let second = temp.path().join("second.log");

        let set = HandlerSet::default();
        set.attach(FileHandler::open(&first).unwrap());
        set.attach(FileHandler::open(&second).unwrap());
        set.make_writer().write_all(b"line\n").unwrap();

        assert_eq!(set.paths(), vec![first.clone(), second.clone()]);
        assert_eq!(fs::read_to_string(first).unwrap(), "line\n");
        assert_eq!(fs::read_to_string(second).unwrap(), "line\n");
    }
}
