//! Shell command execution.
//!
//! Check commands run through the platform shell with stderr and stdout
//! sharing one pipe, so the captured lines keep the order the tool wrote
//! them in (the same result as appending `2>&1`).

use crate::error::{Result, VerCheckerError};
use std::io::Read;
use std::process::{Command, Stdio};
use std::time::Instant;

/// Result of running one check command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunResult {
    /// Non-blank lines of the merged stdout/stderr stream, in order.
    pub output_lines: Vec<String>,

    /// Exit code (None if killed by signal or never started).
    pub exit_code: Option<i32>,
}

impl RunResult {
    /// Create a result from raw combined output, dropping blank lines.
    pub fn from_output(output: &str, exit_code: Option<i32>) -> Self {
        Self {
            output_lines: non_blank_lines(output),
            exit_code,
        }
    }

    /// Whether the command exited with code 0.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs check commands.
///
/// Implemented by [`ShellRunner`] for real execution and by
/// [`MockRunner`](super::MockRunner) in tests.
pub trait CommandRunner {
    /// Run a command and capture its merged output and exit code.
    ///
    /// A nonzero exit is not an error; `Err` means the command could not
    /// be started at all.
    fn run(&self, command: &str) -> Result<RunResult>;
}

/// Runs commands through the system shell.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: String,
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellRunner {
    /// Create a runner using the platform's default shell.
    pub fn new() -> Self {
        Self {
            shell: detect_shell(),
        }
    }

    /// Create a runner using a specific shell executable.
    pub fn with_shell(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    /// The shell executable commands are passed to.
    pub fn shell(&self) -> &str {
        &self.shell
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> Result<RunResult> {
        let start = Instant::now();
        let spawn_error = |e: std::io::Error| VerCheckerError::CommandSpawnError {
            command: command.to_string(),
            message: e.to_string(),
        };

        let (mut reader, writer) = std::io::pipe().map_err(spawn_error)?;

        let mut cmd = Command::new(&self.shell);
        cmd.arg(shell_flag());
        cmd.arg(command);
        cmd.stdin(Stdio::null());
        cmd.stdout(writer.try_clone().map_err(spawn_error)?);
        cmd.stderr(writer);

        let spawned = cmd.spawn();
        // The Command still holds write ends of the pipe; release them so
        // the read below sees EOF once the child exits.
        drop(cmd);
        let mut child = spawned.map_err(spawn_error)?;

        let mut raw = Vec::new();
        reader.read_to_end(&mut raw)?;
        let status = child.wait()?;

        let result = RunResult::from_output(&String::from_utf8_lossy(&raw), status.code());

        tracing::debug!(
            "Ran `{}` in {:?}: exit {:?}, {} lines",
            command,
            start.elapsed(),
            result.exit_code,
            result.output_lines.len()
        );

        Ok(result)
    }
}

/// Split output into lines, dropping those that are empty or whitespace.
pub fn non_blank_lines(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Detect the shell used to run check commands.
fn detect_shell() -> String {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        "/bin/sh".to_string()
    }
}

/// Get the flag to pass commands to the shell.
fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-c"
    }
}
