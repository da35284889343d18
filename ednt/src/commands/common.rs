//! Common types and utilities for ednt commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations to ensure consistency.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use ednr_lex::{Token, TokenKind};
use ednr_util::SourceMap;

use crate::error::{EdntError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for token listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per token
    #[default]
    Text,
    /// A JSON array of token objects per file
    Json,
}

impl OutputFormat {
    /// Name used on the command line and in `ednt.toml`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

// ============================================================================
// Input Utilities
// ============================================================================

/// Read an input file as UTF-8 text.
///
/// # Arguments
/// * `path` - The file to read
///
/// # Returns
/// * `Result<String>` - The file content or a validation/IO error
pub fn read_source(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(EdntError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(EdntError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }

    std::fs::read_to_string(path)
        .map_err(|e| EdntError::FileOperation(format!("{}: {}", path.display(), e)))
}

/// Read every input file into a [`SourceMap`], in argument order.
///
/// A path given more than once is read and listed only once.
pub fn load_sources(files: &[PathBuf]) -> Result<SourceMap> {
    let mut map = SourceMap::new();
    for path in files {
        let name = path.display().to_string();
        if map.lookup(&name).is_some() {
            tracing::debug!(file = %name, "skipping repeated input");
            continue;
        }
        let content = read_source(path)?;
        map.add_file(name, content);
    }
    Ok(map)
}

/// Escape token text for single-line display.
pub fn escape_text(text: &str) -> String {
    text.escape_debug().to_string()
}

/// Verify that `tokens` tile `source` exactly.
///
/// Every token must start where the previous one ended, the texts must
/// concatenate back to the source, and the stream must end with a single
/// `eof` token at `len + 1`.
///
/// # Returns
/// * `std::result::Result<(), String>` - A description of the first violation
pub fn verify_tiling(source: &str, tokens: &[Token<'_>]) -> std::result::Result<(), String> {
    let mut expected_start = 1;
    let mut rebuilt = String::with_capacity(source.len());

    for token in tokens {
        if token.start != expected_start {
            return Err(format!(
                "token {} starts at {}, expected {}",
                token, token.start, expected_start
            ));
        }
        if token.kind == TokenKind::Eof && !token.text.is_empty() {
            return Err(format!("eof token carries text {:?}", token.text));
        }
        rebuilt.push_str(token.text);
        expected_start = token.end();
    }

    match tokens.last() {
        Some(last) if last.kind == TokenKind::Eof => {},
        _ => return Err("token stream does not end with eof".to_string()),
    }
    if tokens.iter().filter(|t| t.kind == TokenKind::Eof).count() != 1 {
        return Err("token stream holds more than one eof".to_string());
    }
    if rebuilt != source {
        return Err("token texts do not reconstruct the input".to_string());
    }

    Ok(())
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when target path is not a directory.
    pub const TARGET_NOT_DIR: &str = "Target path is not a directory:";

    /// Error when the configuration file already exists.
    pub const CONFIG_EXISTS: &str = "Configuration file already exists (use --force to overwrite):";

    /// Error when files fail the check.
    pub const FILES_FAILED: &str = "file(s) failed the check";
}

// ============================================================================
// Output Messages
// ============================================================================

/// Standard output message templates.
pub mod output_messages {
    /// Message when a directory is created.
    pub const CREATED_DIR: &str = "✅ Created directory:";

    /// Message when a file is created.
    pub const CREATED_FILE: &str = "✅ Created file:";

    /// Message when a file passes the check.
    pub const FILE_OK: &str = "✅";

    /// Message when a file fails the check.
    pub const FILE_FAILED: &str = "❌";

    /// Message showing the check summary.
    pub const CHECK_SUMMARY: &str = "📊 Checked";
}
