//! Error types for report generation

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort report generation
#[derive(Error, Debug)]
pub enum MotdError {
    /// The OS release file could not be opened or read
    #[error("failed to read OS release file {}: {}", .path.display(), .source)]
    OsRelease {
        /// Path that was consulted
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for report generation
pub type MotdResult<T> = Result<T, MotdError>;
