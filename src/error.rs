//! Error types for installation checks.
//!
//! This module defines [`VerifyError`], the error type returned by the
//! configuration loader and the subprocess helpers, and a [`Result`] alias.
//!
//! # Error Handling Strategy
//!
//! - Helpers return `VerifyError` so probes can match on the failure kind
//! - Probes never propagate: they turn every error into a report line
//! - Only configuration errors abort a run

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Core error type for pheno-check operations.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// Configuration file not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Configuration parsed but contains unusable values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// No Python interpreter could be located.
    #[error("No Python interpreter found (tried {tried})")]
    InterpreterNotFound { tried: String },

    /// The child process could not be started.
    #[error("Failed to launch '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The child process did not exit before the deadline and was killed.
    #[error("Command timed out after {}s: {command}", timeout.as_secs())]
    CommandTimedOut { command: String, timeout: Duration },

    /// A module or symbol could not be imported.
    #[error("{reason}")]
    ImportFailed { target: String, reason: String },

    /// The interpreter produced output that could not be interpreted.
    #[error("Unexpected output from '{command}': {message}")]
    UnexpectedOutput { command: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for pheno-check operations.
pub type Result<T> = std::result::Result<T, VerifyError>;
