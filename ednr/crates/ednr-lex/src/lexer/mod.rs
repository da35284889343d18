//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and classifier
//! - `whitespace` - Whitespace and comma runs
//! - `comment` - Line comments
//! - `number` - Number literals
//! - `symbol` - Symbols and `nil`/`true`/`false`
//! - `string` - String literals
//! - `character` - Character literals
//! - `keyword` - Keywords
//! - `dispatch` - `#` dispatch macros

mod character;
mod comment;
mod core;
mod dispatch;
mod keyword;
mod number;
mod string;
mod symbol;
mod whitespace;

pub use core::Lexer;
