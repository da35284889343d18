//! Terminal color configuration for rendered diagnostics.
//!
//! ```
//! use ednr_util::diagnostic::ColorConfig;
//!
//! assert!(!ColorConfig::Never.use_color(true));
//! ```

/// Bold red, used for the `error` header.
pub const ANSI_ERROR: &str = "\x1b[1;31m";

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// When rendered diagnostics carry ANSI colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ColorConfig {
    /// Color only when writing to a terminal.
    #[default]
    Auto,
    /// Color even when piped.
    Always,
    /// Never use colors
    Never,
}

impl ColorConfig {
    /// Resolves the setting for an output stream; `is_tty` says whether the
    /// stream is a terminal.
    ///
    /// ```
    /// use ednr_util::diagnostic::ColorConfig;
    ///
    /// assert!(ColorConfig::Always.use_color(false));
    /// assert!(ColorConfig::Auto.use_color(true));
    /// assert!(!ColorConfig::Auto.use_color(false));
    /// ```
    pub fn use_color(&self, is_tty: bool) -> bool {
        match self {
            ColorConfig::Auto => is_tty,
            ColorConfig::Always => true,
            ColorConfig::Never => false,
        }
    }
}
