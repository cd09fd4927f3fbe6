//! verchecker - Check installed command-line tools and report their versions.
//!
//! verchecker reads a JSON list of `{title, cmd}` entries, runs each command
//! in turn, pulls a version string out of whatever it prints, and writes a
//! Markdown report grouped under alphabetic headers.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Config file loading, sorting, and rewriting
//! - [`error`] - Error types and result aliases
//! - [`report`] - Markdown report generation
//! - [`shell`] - Command execution behind the [`shell::CommandRunner`] trait
//! - [`ui`] - Status output and progress spinner
//! - [`version`] - Version extraction heuristics
//!
//! # Example
//!
//! ```
//! use verchecker::version::{extract_version, Version};
//!
//! let output = vec!["Python 3.12.1".to_string()];
//! assert_eq!(
//!     extract_version("python3 --version", &output),
//!     Version::Detected("v3.12.1".to_string())
//! );
//! ```
//!
//! For the full pipeline, see the integration tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod shell;
pub mod ui;
pub mod version;

pub use error::{Result, VerCheckerError};
