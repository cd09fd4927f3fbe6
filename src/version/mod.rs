//! Version extraction from free-form command output.
//!
//! Tools print their versions in wildly different shapes, so extraction is a
//! best-effort heuristic:
//!
//! - Man page commands (`cmd` contains `"man "`) use the last output line,
//!   whitespace-collapsed, since that is where man pages print their date or
//!   release footer.
//! - Everything else is scanned for a three-component dotted number
//!   (`1.2.3`), then for a two-component one (`1.2`), first match wins.
//!
//! # Example
//!
//! ```
//! use verchecker::version::{extract_version, Version};
//!
//! let lines = vec!["git version 2.43.0".to_string()];
//! assert_eq!(
//!     extract_version("git --version", &lines),
//!     Version::Detected("v2.43.0".to_string())
//! );
//! ```

pub mod extract;

pub use extract::{extract_version, from_man_page, from_output, is_man_page_command, Version};
