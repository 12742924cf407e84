use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures surfaced by the shared logger.
///
/// Filtering a message below the current threshold is normal control flow,
/// not a failure.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// The destination could not be opened while constructing the shared
    /// instance. The singleton slot stays empty, so a later
    /// [`SharedLogger::instance`](crate::SharedLogger::instance) call retries.
    #[error("unable to open log file {path:?}")]
    Init {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `set_destination` could not open the requested path. The previous
    /// destination is still open and in use.
    #[error("unable to open log file {path:?}")]
    Destination {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Appending to or flushing the open destination failed.
    #[error("unable to write to log file")]
    Write(#[from] io::Error),

    /// The logger has already been shut down.
    #[error("logger has been shut down")]
    Shutdown,
}
