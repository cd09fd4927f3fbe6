//! The `check` command: run every configured tool and write the report.
//!
//! The run is a straight pipeline:
//!
//! 1. Create a sample config and stop if none exists
//! 2. Load and sort the entries
//! 3. Run each command in turn and add it to the report
//! 4. Write the report, then rewrite the config in sorted order

use std::path::PathBuf;

use crate::config::{load_entries, save_entries, sort_entries, write_sample_config};
use crate::error::Result;
use crate::report::{write_report, ReportBuilder, ReportOptions};
use crate::shell::{CommandRunner, RunResult, ShellRunner};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    config_path: PathBuf,
    output_path: PathBuf,
    options: ReportOptions,
    runner: Box<dyn CommandRunner>,
}

impl CheckCommand {
    /// Create a check command that runs tools through the system shell.
    pub fn new(config_path: PathBuf, output_path: PathBuf, options: ReportOptions) -> Self {
        Self {
            config_path,
            output_path,
            options,
            runner: Box::new(ShellRunner::new()),
        }
    }

    /// Replace the command runner.
    pub fn with_runner(mut self, runner: Box<dyn CommandRunner>) -> Self {
        self.runner = runner;
        self
    }

    fn create_sample(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.warning("Configuration file not found.");
        write_sample_config(&self.config_path, false)?;
        ui.message("Configuration file created. Edit file and re-run.");
        ui.message(&format!("File: {}", self.config_path.display()));
        Ok(CommandResult::success())
    }

    fn run_entry(&self, cmd: &str) -> RunResult {
        self.runner.run(cmd).unwrap_or_else(|e| {
            tracing::warn!("{}", e);
            RunResult {
                output_lines: vec![e.to_string()],
                exit_code: None,
            }
        })
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !self.config_path.exists() {
            return self.create_sample(ui);
        }

        let mut entries = load_entries(&self.config_path)?;
        sort_entries(&mut entries);
        tracing::debug!(
            "Loaded {} entries from {}",
            entries.len(),
            self.config_path.display()
        );

        let mut report = ReportBuilder::new(self.options);
        let mut checked = Vec::new();
        let total = entries.len();
        let mut spinner = ui.start_spinner("Fetching version info");

        for (i, entry) in entries.iter().enumerate() {
            if entry.is_blank() {
                tracing::warn!("Skipping '{}': no command", entry.title);
                report.add_skipped(entry);
                continue;
            }

            spinner.set_message(&format!(
                "Fetching version info [{}/{}] {}",
                i + 1,
                total,
                entry.title
            ));
            let result = self.run_entry(&entry.cmd);
            let version = report.add_entry(entry, &result);
            checked.push(format!("{} ({})", entry.title, version));
        }

        spinner.finish_success(&format!("Checked {} tools", report.entry_count()));

        if ui.output_mode().shows_entries() {
            for line in &checked {
                ui.message(&format!("  {}", line));
            }
        }

        let markdown = report.finish();
        ui.show_report(&markdown);

        write_report(&markdown, &self.output_path)?;
        save_entries(&entries, &self.config_path)?;

        ui.success(&format!("Report written to {}", self.output_path.display()));
        ui.success("DONE");
        Ok(CommandResult::success())
    }
}
