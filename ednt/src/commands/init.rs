//! Init command implementation.
//!
//! Writes a default `ednt.toml` into a directory.

use std::path::{Path, PathBuf};

use crate::commands::common::{error_messages, output_messages};
use crate::commands::traits::Command;
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{EdntError, Result};

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Overwrite an existing configuration file.
    pub force: bool,
    /// Directory to initialize (default: current directory).
    pub path: Option<PathBuf>,
}

/// Init command handler.
pub struct InitCommand {
    args: InitArgs,
}

impl InitCommand {
    /// Execute the command, returning the path of the written file.
    pub fn run(&self) -> Result<PathBuf> {
        let target_path = self
            .args
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        self.prepare_directory(&target_path)?;

        let config_path = target_path.join(CONFIG_FILE_NAME);
        if config_path.exists() && !self.args.force {
            return Err(EdntError::Validation(format!(
                "{} {}",
                error_messages::CONFIG_EXISTS,
                config_path.display()
            )));
        }

        Config::default().save_to_path(&config_path)?;
        tracing::info!(path = %config_path.display(), "wrote default configuration");

        if self.args.verbose {
            eprintln!("{} {}", output_messages::CREATED_FILE, config_path.display());
        }

        Ok(config_path)
    }

    /// Create the target directory if needed and make sure it is one.
    fn prepare_directory(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::create_dir_all(path)?;
            if self.args.verbose {
                eprintln!("{} {}", output_messages::CREATED_DIR, path.display());
            }
            return Ok(());
        }

        if !path.is_dir() {
            return Err(EdntError::Validation(format!(
                "{} {}",
                error_messages::TARGET_NOT_DIR,
                path.display()
            )));
        }

        Ok(())
    }
}

impl Command for InitCommand {
    type Args = InitArgs;
    type Output = PathBuf;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "init"
    }
}

/// Run the init command.
pub fn run_init(args: InitArgs) -> Result<()> {
    tracing::debug!(command = InitCommand::name(), "running command");
    InitCommand::new(args).execute().map(|_| ())
}
