use std::{
    ops::Deref,
    path::Path,
    sync::{Arc, Mutex},
};

use crate::{config::SHLOG_CONFIG, error::LoggerError, log_writer::LogFile};

/// Message severity, ordered `Info < Warning < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Severity {
    #[default]
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Uppercase name as it appears in the written line.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }

    /// Parses a level name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "INFO" => Some(Severity::Info),
            "WARNING" => Some(Severity::Warning),
            "ERROR" => Some(Severity::Error),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Severity::Error,
            log::Level::Warn => Severity::Warning,
            _ => Severity::Info,
        }
    }
}

struct Inner {
    /// `None` once the logger has been shut down.
    target: Option<LogFile>,
    threshold: Severity,
}

/// Process-wide logger shared by every thread.
///
/// All operations funnel through one coarse mutex: a written line is never
/// interleaved with another call's line, and no call ever observes a
/// half-swapped destination.
pub struct SharedLogger {
    inner: Mutex<Inner>,
}

static INSTANCE: Mutex<Option<Arc<SharedLogger>>> = Mutex::new(None);

impl SharedLogger {
    fn open(path: &Path, threshold: Severity) -> Result<Self, LoggerError> {
        let target = LogFile::new(path).map_err(|source| LoggerError::Init {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            inner: Mutex::new(Inner {
                target: Some(target),
                threshold,
            }),
        })
    }

    /// Returns the shared instance, constructing it on first call.
    ///
    /// The first call opens `SHLOG_FILE` (default `log.txt`) in append mode
    /// with the `SHLOG_LEVEL` threshold (default `INFO`). The slot lock is
    /// held across construction, so racing first calls construct exactly
    /// once. A failed construction leaves the slot empty and the next call
    /// retries.
    pub fn instance() -> Result<Arc<Self>, LoggerError> {
        let mut slot = INSTANCE.lock().unwrap();
        if let Some(logger) = slot.as_ref() {
            return Ok(Arc::clone(logger));
        }
        let threshold = Severity::from_name(&SHLOG_CONFIG.LEVEL).unwrap_or_default();
        let logger = Arc::new(Self::open(Path::new(&SHLOG_CONFIG.FILE), threshold)?);
        *slot = Some(Arc::clone(&logger));
        Ok(logger)
    }

    /// Appends `[LEVEL]: message` to the destination if `level` reaches the
    /// current threshold. The line is flushed before this returns.
    pub fn log(&self, message: &str, level: Severity) -> Result<(), LoggerError> {
        let mut inner = self.inner.lock().unwrap();
        let Inner { target, threshold } = &mut *inner;
        let target = target.as_mut().ok_or(LoggerError::Shutdown)?;
        if level < *threshold {
            return Ok(());
        }
        target.append_line(&format!("[{level}]: {message}"))?;
        Ok(())
    }

    /// Sets the minimum severity for subsequent `log` calls.
    pub fn set_level(&self, level: Severity) -> Result<(), LoggerError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.target.is_none() {
            return Err(LoggerError::Shutdown);
        }
        inner.threshold = level;
        Ok(())
    }

    /// Re-points the logger at `path`, opened in append mode.
    ///
    /// The new destination is opened before the old one is released, so a
    /// failed open leaves the old destination in use and fully operational.
    pub fn set_destination<P: AsRef<Path>>(&self, path: P) -> Result<(), LoggerError> {
        let mut inner = self.inner.lock().unwrap();
        let old = inner.target.as_mut().ok_or(LoggerError::Shutdown)?;
        let new = LogFile::new(path.as_ref()).map_err(|source| LoggerError::Destination {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
        old.flush()?;
        inner.target = Some(new);
        Ok(())
    }

    /// Flushes and closes the destination.
    ///
    /// Idempotent. `log`, `set_level` and `set_destination` fail with
    /// [`LoggerError::Shutdown`] afterwards.
    pub fn shutdown(&self) -> Result<(), LoggerError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(mut target) = inner.target.take() {
            target.flush()?;
        }
        Ok(())
    }
}

/// Guard that shuts the shared logger down when dropped.
/// Hold it for the lifetime of your logging session.
#[must_use = "LoggerGuard must be kept alive to ensure logging works. Do \"let _guard = shlog::init()?;\""]
pub struct LoggerGuard {
    logger: Arc<SharedLogger>,
}

impl LoggerGuard {
    pub(crate) fn new(logger: Arc<SharedLogger>) -> Self {
        Self { logger }
    }
}

impl Deref for LoggerGuard {
    type Target = SharedLogger;
    fn deref(&self) -> &Self::Target {
        &self.logger
    }
}

impl Drop for LoggerGuard {
    fn drop(&mut self) {
        self.logger.shutdown().ok();
    }
}
