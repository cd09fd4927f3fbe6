//! Configuration loading and persistence for verchecker.
//!
//! - Schema definitions in [`schema`]
//! - Loading, sorting, and rewriting in [`loader`]
//!
//! # Example
//!
//! ```
//! use verchecker::config::{load_entries, save_entries, sort_entries, CommandEntry};
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("config.json");
//!
//! let mut entries = vec![
//!     CommandEntry::new("zsh", "zsh --version"),
//!     CommandEntry::new("Bash", "bash --version"),
//! ];
//! sort_entries(&mut entries);
//! save_entries(&entries, &path).unwrap();
//!
//! let loaded = load_entries(&path).unwrap();
//! assert_eq!(loaded[0].title, "Bash");
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    load_entries, parse_entries, save_entries, sort_entries, write_sample_config,
    DEFAULT_CONFIG_FILE,
};
pub use schema::{sample_entries, CommandEntry};
