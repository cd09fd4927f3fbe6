//! Configuration schema.
//!
//! The config file is a JSON array of `{ "title": ..., "cmd": ... }`
//! objects. Both fields may be omitted and default to an empty string.

use serde::{Deserialize, Serialize};

/// One configured tool: a display title and the command that prints its version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CommandEntry {
    /// Title shown in the report heading.
    #[serde(default)]
    pub title: String,

    /// Shell command to run, e.g. `git --version`.
    #[serde(default)]
    pub cmd: String,
}

impl CommandEntry {
    /// Create an entry from a title and command.
    pub fn new(title: impl Into<String>, cmd: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            cmd: cmd.into(),
        }
    }

    /// Whether the entry has nothing to run.
    pub fn is_blank(&self) -> bool {
        self.cmd.trim().is_empty()
    }

    /// Uppercased first character of the title, used for alphabetic headers.
    ///
    /// Returns `None` for an empty title.
    pub fn index_key(&self) -> Option<String> {
        self.title.chars().next().map(|c| c.to_uppercase().collect())
    }
}

/// Entries written when no config file exists yet.
pub fn sample_entries() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("Title of check command1", "php -v"),
        CommandEntry::new("PHP", "php -v"),
    ]
}
