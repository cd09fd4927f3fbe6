//! Error types for verchecker operations.
//!
//! This module defines [`VerCheckerError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! A command that exits nonzero is not an error: it is reported as a
//! "not installed" entry. Only configuration and file-writing problems
//! end a run early.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for verchecker operations.
#[derive(Debug, Error)]
pub enum VerCheckerError {
    /// Failed to read the configuration file.
    #[error("Failed to read config at {path}: {source}")]
    ConfigReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse the configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Failed to write (or rewrite) the configuration file.
    #[error("Error while writing config file {path}: {source}")]
    ConfigWriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Config file already exists and overwriting was not requested.
    #[error("Configuration already exists: {path} (use --force to overwrite)")]
    ConfigExists { path: PathBuf },

    /// Failed to write the Markdown report.
    #[error("Error while creating output file {path}: {source}")]
    ReportWriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The shell used to run a check command could not be started.
    #[error("Could not run '{command}': {message}")]
    CommandSpawnError { command: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for verchecker operations.
pub type Result<T> = std::result::Result<T, VerCheckerError>;
