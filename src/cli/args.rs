//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct. Running with no arguments
//! is the same as `verchecker check` with every default.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::DEFAULT_CONFIG_FILE;
use crate::report::{
    Locale, ReportOptions, DEFAULT_DETAILS_AFTER, DEFAULT_OUTPUT_FILE, DEFAULT_WIDTH,
};

/// verchecker - Check installed command-line tools and report their versions.
#[derive(Debug, Parser)]
#[command(name = "verchecker")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the config and report (overrides current directory)
    #[arg(short, long, global = true)]
    pub dir: Option<PathBuf>,

    /// Config file, relative to the directory
    #[arg(short, long, global = true, env = "VERCHECKER_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Report file, relative to the directory
    #[arg(short, long, global = true, env = "VERCHECKER_OUTPUT", default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Width of index rules and wrapped output lines
    #[arg(long, global = true, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Collapse command output longer than this many lines
    #[arg(long, global = true, default_value_t = DEFAULT_DETAILS_AFTER)]
    pub details_after: usize,

    /// Language of the report labels
    #[arg(long, global = true, value_enum, default_value_t = Locale::Ja)]
    pub lang: Locale,

    /// Show one line per checked tool
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Resolve the config path against the working directory.
    pub fn config_path(&self, root: &Path) -> PathBuf {
        root.join(&self.config)
    }

    /// Resolve the report path against the working directory.
    pub fn output_path(&self, root: &Path) -> PathBuf {
        root.join(&self.output)
    }

    /// Layout options for the report builder.
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            width: self.width,
            details_after: self.details_after,
            locale: self.lang,
        }
    }
}

/// Available subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run every configured command and write the report (default)
    Check,

    /// Write a sample config file
    Init(InitArgs),
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InitArgs {
    /// Overwrite an existing config file
    #[arg(short, long)]
    pub force: bool,
}
