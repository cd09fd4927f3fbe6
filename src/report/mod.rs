//! Markdown report generation.
//!
//! - [`builder`] - Accumulates entries into the document
//! - [`markdown`] - Rules, code blocks, and details blocks
//! - [`locale`] - Fixed labels in Japanese or English
//!
//! # Example
//!
//! ```
//! use verchecker::config::CommandEntry;
//! use verchecker::report::{Locale, ReportBuilder, ReportOptions};
//! use verchecker::shell::RunResult;
//!
//! let options = ReportOptions {
//!     locale: Locale::En,
//!     ..Default::default()
//! };
//! let mut report = ReportBuilder::new(options);
//! report.add_entry(
//!     &CommandEntry::new("git", "git --version"),
//!     &RunResult::from_output("git version 2.43.0", Some(0)),
//! );
//!
//! let markdown = report.finish();
//! assert!(markdown.contains("## G"));
//! assert!(markdown.contains("### git (v2.43.0)"));
//! ```

pub mod builder;
pub mod locale;
pub mod markdown;

pub use builder::{title_line, ReportBuilder};
pub use locale::{Labels, Locale};
pub use markdown::{code_block, details_block, horizontal_rule, wrap_lines};

use crate::error::{Result, VerCheckerError};
use std::fs;
use std::path::Path;

/// Default report filename, resolved against the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "output.md";

/// Default width of rules and wrapped output lines.
pub const DEFAULT_WIDTH: usize = 90;

/// Default number of output lines shown before folding into a details block.
pub const DEFAULT_DETAILS_AFTER: usize = 5;

/// Layout settings for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Width of index rules and the wrap column for output lines.
    pub width: usize,
    /// Output longer than this many lines is collapsed.
    pub details_after: usize,
    /// Language of the fixed labels.
    pub locale: Locale,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            details_after: DEFAULT_DETAILS_AFTER,
            locale: Locale::default(),
        }
    }
}

/// Write the report, replacing any previous one.
pub fn write_report(content: &str, path: &Path) -> Result<()> {
    fs::write(path, content).map_err(|e| VerCheckerError::ReportWriteError {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!("Wrote report to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_options() {
        let options = ReportOptions::default();
        assert_eq!(options.width, 90);
        assert_eq!(options.details_after, 5);
        assert_eq!(options.locale, Locale::Ja);
    }

    #[test]
    fn write_report_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("output.md");
        fs::write(&path, "old report that is longer").unwrap();

        write_report("new", &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn write_report_failure_is_report_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("no-such-dir").join("output.md");

        let result = write_report("x", &path);

        assert!(matches!(
            result,
            Err(VerCheckerError::ReportWriteError { .. })
        ));
    }
}
