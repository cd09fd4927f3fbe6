//! Command-line interface for verchecker.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, InitArgs};
pub use commands::{CheckCommand, Command, CommandDispatcher, CommandResult, InitCommand};
