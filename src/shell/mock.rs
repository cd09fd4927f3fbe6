//! Mock command runner for testing.
//!
//! `MockRunner` implements [`CommandRunner`] with canned results keyed by
//! the exact command string, and records every command it was asked to run.
//!
//! # Example
//!
//! ```
//! use verchecker::shell::{CommandRunner, MockRunner};
//!
//! let runner = MockRunner::new().with_output("git --version", "git version 2.43.0", 0);
//!
//! let result = runner.run("git --version").unwrap();
//! assert!(result.success());
//! assert_eq!(runner.calls(), vec!["git --version".to_string()]);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{Result, VerCheckerError};

use super::{CommandRunner, RunResult};

/// Mock runner returning configured results.
///
/// Commands without a configured result behave like a missing tool:
/// exit code 127 and a "command not found" line.
#[derive(Debug, Default)]
pub struct MockRunner {
    results: HashMap<String, RunResult>,
    spawn_failures: Vec<String>,
    calls: RefCell<Vec<String>>,
}

impl MockRunner {
    /// Create a runner with no configured commands.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the raw output and exit code for a command.
    pub fn with_output(mut self, command: &str, output: &str, exit_code: i32) -> Self {
        self.results.insert(
            command.to_string(),
            RunResult::from_output(output, Some(exit_code)),
        );
        self
    }

    /// Make a command fail to start.
    pub fn with_spawn_failure(mut self, command: &str) -> Self {
        self.spawn_failures.push(command.to_string());
        self
    }

    /// Commands run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, command: &str) -> Result<RunResult> {
        self.calls.borrow_mut().push(command.to_string());

        if self.spawn_failures.iter().any(|c| c == command) {
            return Err(VerCheckerError::CommandSpawnError {
                command: command.to_string(),
                message: "mock spawn failure".to_string(),
            });
        }

        Ok(self.results.get(command).cloned().unwrap_or_else(|| {
            let program = command.split_whitespace().next().unwrap_or(command);
            RunResult::from_output(&format!("sh: {}: command not found", program), Some(127))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_configured_output() {
        let runner = MockRunner::new().with_output("node -v", "v20.11.0\n\n", 0);

        let result = runner.run("node -v").unwrap();

        assert_eq!(result.output_lines, vec!["v20.11.0"]);
        assert_eq!(result.exit_code, Some(0));
    }

    #[test]
    fn unknown_command_looks_missing() {
        let runner = MockRunner::new();

        let result = runner.run("ghc --version").unwrap();

        assert_eq!(result.exit_code, Some(127));
        assert_eq!(result.output_lines, vec!["sh: ghc: command not found"]);
    }

    #[test]
    fn spawn_failure_is_error() {
        let runner = MockRunner::new().with_spawn_failure("broken");
        assert!(runner.run("broken").is_err());
    }

    #[test]
    fn records_calls_in_order() {
        let runner = MockRunner::new();
        let _ = runner.run("a");
        let _ = runner.run("b");
        assert_eq!(runner.calls(), vec!["a".to_string(), "b".to_string()]);
    }
}
