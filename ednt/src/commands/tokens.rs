//! Tokens command implementation.
//!
//! Prints the token stream of each input file, either as one line per token
//! or as JSON.

use std::collections::BTreeMap;
use std::io::Write as _;
use std::path::PathBuf;
use std::time::Instant;

use serde::Serialize;

use ednr_lex::{tokenize_with, LexerOptions, Token};
use ednr_util::{FileId, Handler, SourceFile};

use crate::commands::common::{escape_text, load_sources, OutputFormat};
use crate::commands::traits::Command;
use crate::error::{EdntError, Result};

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Input files.
    pub files: Vec<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Lexer options.
    pub options: LexerOptions,
    /// List the final `eof` token too.
    pub include_eof: bool,
    /// Enable verbose output.
    pub verbose: bool,
}

/// One token as written by `--format json`.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    text: &'a str,
    start: usize,
    line: usize,
    column: usize,
    attributes: BTreeMap<&'static str, &'a str>,
}

impl<'a> TokenRecord<'a> {
    fn new(token: &'a Token<'_>, file: &SourceFile) -> Self {
        let (line, column) = file.offset_to_line_col(token.start);
        Self {
            kind: token.kind.as_str(),
            text: token.text,
            start: token.start,
            line,
            column,
            attributes: token.attributes.iter().collect(),
        }
    }
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
}

impl TokensCommand {
    /// Lex every input file and render the listing.
    pub fn run(&self) -> Result<String> {
        let start_time = Instant::now();

        let map = load_sources(&self.args.files)?;

        let show_headers = map.file_count() > 1;
        let mut out = String::new();

        for index in 0..map.file_count() {
            let file = map
                .get_file(FileId::new(index))
                .map_err(|e| EdntError::CommandExecution(e.to_string()))?;

            let handler = Handler::new();
            let options = self.args.options.report_diagnostics(false);
            let mut tokens = tokenize_with(file.content(), &handler, options);
            if !self.args.include_eof {
                tokens.pop();
            }

            match self.args.format {
                OutputFormat::Text => {
                    if show_headers {
                        out.push_str(&format!("==> {} <==\n", file.name()));
                    }
                    for token in &tokens {
                        out.push_str(&render_line(token, &file));
                        out.push('\n');
                    }
                },
                OutputFormat::Json => {
                    let records: Vec<TokenRecord> =
                        tokens.iter().map(|t| TokenRecord::new(t, &file)).collect();
                    out.push_str(&serde_json::to_string_pretty(&records)?);
                    out.push('\n');
                },
            }

            tracing::debug!(file = file.name(), tokens = tokens.len(), "listed tokens");
        }

        if self.args.verbose {
            eprintln!(
                "Listed {} file(s) in {:.2}s",
                map.file_count(),
                start_time.elapsed().as_secs_f64()
            );
        }

        Ok(out)
    }
}

/// Render one token as `start:line:col kind "text"`, followed by
/// `[error-type]` for classified lex errors.
fn render_line(token: &Token<'_>, file: &SourceFile) -> String {
    let (line, column) = file.offset_to_line_col(token.start);
    let mut rendered = format!(
        "{}:{}:{} {} \"{}\"",
        token.start,
        line,
        column,
        token.kind,
        escape_text(token.text)
    );
    if let Some(error_type) = token.error_type() {
        rendered.push_str(&format!(" [{}]", error_type));
    }
    rendered
}

impl Command for TokensCommand {
    type Args = TokensArgs;
    type Output = String;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "tokens"
    }
}

/// Run the tokens command, writing the listing to stdout.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    tracing::debug!(command = TokensCommand::name(), "running command");
    let listing = TokensCommand::new(args).execute()?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(listing.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
