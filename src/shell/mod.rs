//! Shell command execution.

pub mod command;
pub mod mock;

pub use command::{non_blank_lines, CommandRunner, RunResult, ShellRunner};
pub use mock::MockRunner;
