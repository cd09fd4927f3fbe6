//! The `init` command: write a sample config file.

use std::path::PathBuf;

use crate::cli::args::InitArgs;
use crate::config::write_sample_config;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The init command implementation.
pub struct InitCommand {
    config_path: PathBuf,
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(config_path: PathBuf, args: InitArgs) -> Self {
        Self { config_path, args }
    }
}

impl Command for InitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        write_sample_config(&self.config_path, self.args.force)?;

        ui.success(&format!(
            "Configuration file created: {}",
            self.config_path.display()
        ));
        ui.message("Edit the file and run verchecker again.");
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VerCheckerError;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn init_creates_sample() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        let mut ui = MockUI::new();

        let result = InitCommand::new(path.clone(), InitArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(path.exists());
        assert!(ui.has_success("config.json"));
    }

    #[test]
    fn init_refuses_existing_without_force() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, r#"[{"title": "Mine", "cmd": "mine -v"}]"#).unwrap();
        let mut ui = MockUI::new();

        let result = InitCommand::new(path.clone(), InitArgs::default()).execute(&mut ui);

        assert!(matches!(result, Err(VerCheckerError::ConfigExists { .. })));
        assert!(fs::read_to_string(&path).unwrap().contains("Mine"));
    }

    #[test]
    fn init_force_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, "[]").unwrap();
        let mut ui = MockUI::new();

        InitCommand::new(path.clone(), InitArgs { force: true })
            .execute(&mut ui)
            .unwrap();

        assert!(fs::read_to_string(&path).unwrap().contains("php -v"));
    }
}
