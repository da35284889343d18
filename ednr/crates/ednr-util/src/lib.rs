//! ednr-util - Shared foundation types for the ednr reader.
//!
//! This crate holds the pieces every reader phase needs but none of them
//! owns: source locations, the source map used to turn character offsets
//! into line/column pairs, and the diagnostic infrastructure used to report
//! malformed input.
//!
//! # Module Structure
//!
//! - [`span`] - Spans, file identifiers and the [`SourceMap`]
//! - [`diagnostic`] - Diagnostics, the collecting [`Handler`], codes and colors
//! - [`error`] - Error types for fallible utility operations
//!
//! # Offsets
//!
//! All offsets handled by this crate are **1-based character offsets**, the
//! same unit the lexer uses for token start positions. Offset `1` is the first
//! character of a file and offset `len + 1` is the end-of-input position.
//!
//! # Example
//!
//! ```
//! use ednr_util::{DiagnosticBuilder, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unterminated string literal")
//!     .span(Span::new(1, 5, 1, 1))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.error_count(), 1);
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{
    ColorConfig, Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, SourceSnippet,
};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{FileId, SourceFile, SourceMap, Span};
