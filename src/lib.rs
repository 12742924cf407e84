//! # shlog
//! Process-wide shared logger with leveled, thread-safe file output.
//!
//! ## Usage
//! ```toml
//! // Cargo.toml
//! ...
//! [dependencies]
//! shlog = "0.1.0"
//! ```
//!
//! ```no_run
//! use shlog::{Severity, SharedLogger};
//!
//! let logger = SharedLogger::instance().expect("unable to open log file");
//! logger.set_level(Severity::Warning).unwrap();
//! logger.log("Hello, world!", Severity::Error).unwrap();
//! // log.txt now ends with "[ERROR]: Hello, world!\n"
//! ```
//!
//! ## Multi-threaded logging
//! Every thread sees the same instance. Lines are written whole, so output
//! from concurrent threads never interleaves within a line.
//!
//! ```no_run
//! use shlog::{Severity, SharedLogger};
//!
//! let handles: Vec<_> = (0..5).map(|i| {
//!     std::thread::spawn(move || {
//!         let logger = SharedLogger::instance().unwrap();
//!         logger.log(&format!("Hello, world from thread {i}!"), Severity::Info).unwrap();
//!     })
//! }).collect();
//! for h in handles { h.join().unwrap(); }
//! ```
//!
//! ## Through the `log` facade
//! ```no_run
//! let _guard = shlog::init().expect("unable to open log file");
//! log::info!("Hello, world!");
//! // guard ensures the log file is flushed and closed when dropped
//! ```

mod config;
mod error;
mod log_writer;
mod logger;

pub use config::SHLOG_CONFIG;
pub use error::LoggerError;
pub use log_writer::LogFile;
pub use logger::{LoggerGuard, Severity, SharedLogger};

use log::{LevelFilter, Log};

/// Forwards `log` records to the shared logger.
struct FacadeLogger;

impl Log for FacadeLogger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        // The logger cannot report failures about itself through itself.
        if let Ok(logger) = SharedLogger::instance() {
            let _ = logger.log(&record.args().to_string(), record.level().into());
        }
    }

    fn flush(&self) {}
}

/// Resolves the shared logger and installs it behind the `log` macros.
///
/// `log::info!`, `log::warn!` and `log::error!` then forward to
/// [`SharedLogger::log`]; `debug!` and `trace!` have no [`Severity`]
/// equivalent and are filtered at the facade. Returns a guard that shuts
/// the logger down when dropped. Calling `init` again hands out another
/// guard for the same instance.
pub fn init() -> Result<LoggerGuard, LoggerError> {
    let logger = SharedLogger::instance()?;
    if log::set_boxed_logger(Box::new(FacadeLogger)).is_ok() {
        log::set_max_level(LevelFilter::Info);
    }
    Ok(LoggerGuard::new(logger))
}
