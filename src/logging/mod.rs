//! Tracing subscriber initialization.
//!
//! The engine runs on the UI thread of a host view, so logs go to a file
//! rather than anywhere that could contend with rendering; watch them with
//! `tail -f` in a separate terminal.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create the log directory.
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// The directory path that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The log path has no usable filename component.
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// A tracing subscriber is already installed for this process.
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Resolve the default log file location.
///
/// `~/.local/state/ecgstrip/ecgstrip.log` on Unix-like systems, falling
/// back to the platform data directory. `None` when neither exists.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .map(|dir| dir.join("ecgstrip").join("ecgstrip.log"))
}

/// Initialize the tracing subscriber with file-based logging.
///
/// Creates the log directory if needed, honors `RUST_LOG`, and defaults to
/// the `info` level. May be called once per process.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| LoggingError::DirectoryCreation {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let file_name = log_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;
    let directory = log_path
        .parent()
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    let file_appender = tracing_appender::rolling::never(directory, file_name);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(file_appender)
        .with_ansi(false) // No ANSI colors in log files
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}
