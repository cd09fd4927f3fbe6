//! Config file loading, sorting, and persistence.

use crate::config::schema::{sample_entries, CommandEntry};
use crate::error::{Result, VerCheckerError};
use std::fs;
use std::path::Path;

/// Default config filename, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Load the entries from a config file.
///
/// # Errors
///
/// Returns `ConfigReadError` if the file cannot be read.
/// Returns `ConfigParseError` if the JSON is invalid.
pub fn load_entries(path: &Path) -> Result<Vec<CommandEntry>> {
    let content = fs::read_to_string(path).map_err(|e| VerCheckerError::ConfigReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_entries(&content, path)
}

/// Parse JSON content into entries.
///
/// # Arguments
///
/// * `content` - The JSON content to parse
/// * `source_path` - Path for error reporting
pub fn parse_entries(content: &str, source_path: &Path) -> Result<Vec<CommandEntry>> {
    serde_json::from_str(content).map_err(|e| VerCheckerError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Sort entries by lowercased title, ascending.
///
/// The sort is stable, so entries with identical titles keep their order.
pub fn sort_entries(entries: &mut [CommandEntry]) {
    entries.sort_by_cached_key(|e| e.title.to_lowercase());
}

/// Write entries to a config file as pretty-printed JSON, replacing it.
pub fn save_entries(entries: &[CommandEntry], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(entries).map_err(anyhow::Error::from)?;

    fs::write(path, json + "\n").map_err(|e| VerCheckerError::ConfigWriteError {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!("Wrote {} entries to {}", entries.len(), path.display());
    Ok(())
}

/// Write the sample config.
///
/// Fails with `ConfigExists` when the file is present and `force` is false.
pub fn write_sample_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(VerCheckerError::ConfigExists {
            path: path.to_path_buf(),
        });
    }

    save_entries(&sample_entries(), path)
}
