//! Named logger entries and their handler lifecycle.

use crate::handler::{FileHandler, HandlerSet};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Target of the registry's own lifecycle events. Logger dispatchers drop it.
pub const LIFECYCLE_TARGET: &str = "kafkabricks_logging::lifecycle";

static SHARED: Lazy<Arc<LoggerRegistry>> = Lazy::new(|| Arc::new(LoggerRegistry::new()));

/// Thread-safe map from logger name to its handler set.
pub struct LoggerRegistry {
    entries: Mutex<HashMap<String, HandlerSet>>,
}

impl LoggerRegistry {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Process-wide registry used by factories that are not given one.
    pub fn shared() -> Arc<Self> {
        Arc::clone(&SHARED)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, HandlerSet>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Makes `handler` the only handler of `name`, creating the entry if needed.
    pub fn install(&self, name: &str, handler: FileHandler) -> HandlerSet {
        let mut entries = self.lock();
        let handlers = entries.entry(name.to_string()).or_default().clone();

        let attached = handler.path().to_path_buf();
        for old in handlers.replace(handler) {
            tracing::debug!(
                target: LIFECYCLE_TARGET,
                logger = name,
                path = %old.path().display(),
                "Detached log handler"
            );
        }
        tracing::debug!(
            target: LIFECYCLE_TARGET,
            logger = name,
            path = %attached.display(),
            "Attached log handler"
        );

        handlers
    }

    pub fn handler_count(&self, name: &str) -> usize {
        self.lock().get(name).map_or(0, HandlerSet::len)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lock().contains_key(name)
    }

    /// Detaches all handlers of `name` and forgets it. Handles still held by
    /// callers keep working but write nowhere. Returns false if unknown.
    pub fn close(&self, name: &str) -> bool {
        match self.lock().remove(name) {
            Some(handlers) => {
                let closed = handlers.detach_all();
                tracing::debug!(
                    target: LIFECYCLE_TARGET,
                    logger = name,
                    handlers = closed.len(),
                    "Closed logger"
                );
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_replaces_previous_handler() {
        let temp = tempfile::tempdir().unwrap();
        let registry = LoggerRegistry::new();

        let open = |name: &str| FileHandler::open(temp.path().join(name)).unwrap();

        let first = registry.install("bronze", open("1.log"));
        let second = registry.install("bronze", open("2.log"));

        assert_eq!(registry.handler_count("bronze"), 1);
        assert_eq!(registry.len(), 1);
        // Both handles point at the same set.
        assert_eq!(first.paths(), vec![temp.path().join("2.log")]);
        assert_eq!(second.paths(), first.paths());
    }

    #[test]
    fn test_names_are_independent() {
        let temp = tempfile::tempdir().unwrap();
        let registry = LoggerRegistry::new();

        registry.install("bronze", FileHandler::open(temp.path().join("b.log")).unwrap());
        registry.install("gold", FileHandler::open(temp.path().join("g.log")).unwrap());

        assert!(registry.close("bronze"));
        assert!(!registry.contains("bronze"));
        assert_eq!(registry.handler_count("bronze"), 0);
        assert_eq!(registry.handler_count("gold"), 1);
    }

    #[test]
    fn test_close_unknown_name() {
        let registry = LoggerRegistry::default();
        assert!(!registry.close("missing"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_shared_is_one_instance() {
        assert!(Arc::ptr_eq(&LoggerRegistry::shared(), &LoggerRegistry::shared()));
    }
}
