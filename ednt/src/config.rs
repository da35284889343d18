//! Configuration module for the ednt CLI.
//!
//! This module handles loading, saving, and managing `ednt.toml`.

use dirs::{config_dir, home_dir};
use num_cpus::get as get_num_cpus;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use ednr_lex::LexerOptions;

use crate::commands::common::OutputFormat;
use crate::error::{EdntError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "ednt.toml";

/// Application configuration structure.
///
/// ```toml
/// jobs = 8
///
/// [lexer]
/// strict_char_escapes = false
///
/// [output]
/// format = "text"
/// include_eof = false
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Number of files checked in parallel.
    #[serde(default = "default_parallel_jobs")]
    pub jobs: usize,

    /// Lexer settings.
    #[serde(default)]
    pub lexer: LexerConfig,

    /// Token listing settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Lexer settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LexerConfig {
    /// Reject `\u` / `\o` character literals with invalid digits.
    #[serde(default)]
    pub strict_char_escapes: bool,
}

/// Token listing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Default format of `ednt tokens`.
    #[serde(default)]
    pub format: OutputFormat,

    /// Whether `ednt tokens` lists the final `eof` token.
    #[serde(default)]
    pub include_eof: bool,
}

/// Number of available CPUs, at least 1.
fn default_parallel_jobs() -> usize {
    get_num_cpus().max(1)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            jobs: default_parallel_jobs(),
            lexer: LexerConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/ednt/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(EdntError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            EdntError::Config(format!("Failed to serialize configuration: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Lexer options for this configuration.
    ///
    /// `strict_override` comes from the command line and can only turn
    /// strict escapes on.
    pub fn lexer_options(&self, strict_override: bool) -> LexerOptions {
        LexerOptions::new().strict_char_escapes(strict_override || self.lexer.strict_char_escapes)
    }

    fn validate(&self) -> Result<()> {
        if self.jobs == 0 {
            return Err(EdntError::Config("jobs must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("ednt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("ednt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
