//! Error types for the ingress query command

use thiserror::Error;

/// Errors that can occur when running the ingress query
#[derive(Error, Debug)]
pub enum KubeError {
    /// The command exited with a non-zero exit code
    #[error("{program} failed (exit code {code}): {stderr}")]
    CommandFailed {
        /// Program that was run
        program: String,
        /// Exit code, -1 when killed by a signal
        code: i32,
        /// Standard error output
        stderr: String,
    },

    /// Failed to spawn or wait on the process
    #[error("failed to spawn ingress query: {0}")]
    SpawnError(#[from] std::io::Error),

    /// The program is not installed or not in PATH
    #[error("{0} not found - ensure it is installed and in PATH")]
    NotFound(String),
}

/// Result type alias for ingress query operations
pub type KubeResult<T> = Result<T, KubeError>;
