//! Check command implementation.
//!
//! Lexes files in parallel, renders every lex error with a source snippet,
//! and verifies that each token stream tiles its input.

use std::path::PathBuf;
use std::time::Instant;

use rayon::prelude::*;

use ednr_lex::{tokenize_with, LexerOptions};
use ednr_util::{FileId, Handler, SourceMap};

use crate::commands::common::{error_messages, load_sources, output_messages, verify_tiling};
use crate::commands::traits::Command;
use crate::error::{EdntError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Input files.
    pub files: Vec<PathBuf>,
    /// Lexer options.
    pub options: LexerOptions,
    /// Number of worker threads.
    pub jobs: usize,
    /// Color rendered diagnostics.
    pub color: bool,
    /// Enable verbose output.
    pub verbose: bool,
}

/// Totals over all checked files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Files checked.
    pub files: usize,
    /// Tokens produced, `eof` included.
    pub tokens: usize,
    /// `lex-error` tokens.
    pub errors: usize,
    /// Files with lex errors or a broken token stream.
    pub failed_files: usize,
}

/// Result of checking one file.
#[derive(Debug)]
struct FileOutcome {
    name: String,
    tokens: usize,
    errors: usize,
    rendered: Vec<String>,
    tiling: std::result::Result<(), String>,
}

impl FileOutcome {
    fn passed(&self) -> bool {
        self.errors == 0 && self.tiling.is_ok()
    }
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Check every input file and print diagnostics to stderr.
    pub fn run(&self) -> Result<CheckReport> {
        let start_time = Instant::now();

        let map = load_sources(&self.args.files)?;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.args.jobs.max(1))
            .build()
            .map_err(|e| {
                EdntError::CommandExecution(format!("Failed to build thread pool: {}", e))
            })?;

        let outcomes: Vec<FileOutcome> = pool.install(|| {
            (0..map.file_count())
                .into_par_iter()
                .map(|index| self.check_file(&map, FileId::new(index)))
                .collect()
        });

        let mut report = CheckReport {
            files: outcomes.len(),
            ..CheckReport::default()
        };

        for outcome in &outcomes {
            report.tokens += outcome.tokens;
            report.errors += outcome.errors;

            for rendered in &outcome.rendered {
                eprintln!("{}", rendered);
            }
            if let Err(reason) = &outcome.tiling {
                eprintln!(
                    "{} {}: token stream does not tile the input: {}",
                    output_messages::FILE_FAILED,
                    outcome.name,
                    reason
                );
            }

            if outcome.passed() {
                if self.args.verbose {
                    eprintln!("{} {}", output_messages::FILE_OK, outcome.name);
                }
            } else {
                report.failed_files += 1;
                if self.args.verbose {
                    eprintln!(
                        "{} {} ({} error(s))",
                        output_messages::FILE_FAILED,
                        outcome.name,
                        outcome.errors
                    );
                }
            }
        }

        eprintln!(
            "{} {} file(s): {} token(s), {} error(s) in {:.2}s",
            output_messages::CHECK_SUMMARY,
            report.files,
            report.tokens,
            report.errors,
            start_time.elapsed().as_secs_f64()
        );

        Ok(report)
    }

    /// Lex one file on the current worker thread.
    fn check_file(&self, map: &SourceMap, id: FileId) -> FileOutcome {
        let Some(file) = map.get(id) else {
            return FileOutcome {
                name: format!("<file {}>", id.index()),
                tokens: 0,
                errors: 0,
                rendered: Vec::new(),
                tiling: Err("file is not in the source map".to_string()),
            };
        };

        let handler = Handler::new();
        let options = self.args.options.report_diagnostics(true);
        let tokens = tokenize_with(file.content(), &handler, options);
        let tiling = verify_tiling(file.content(), &tokens);
        let errors = tokens.iter().filter(|t| t.is_error()).count();

        let rendered = handler
            .take_diagnostics()
            .into_iter()
            .map(|diag| {
                if let Some(location) = map.format_span(diag.span.in_file(id)) {
                    tracing::debug!(%location, message = %diag.message, "lex error");
                }
                diag.render(&file, self.args.color)
            })
            .collect();

        FileOutcome {
            name: file.name().to_string(),
            tokens: tokens.len(),
            errors,
            rendered,
            tiling,
        }
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = CheckReport;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "check"
    }
}

/// Run the check command, failing when any file has lex errors.
pub fn run_check(args: CheckArgs) -> Result<()> {
    tracing::debug!(command = CheckCommand::name(), "running command");
    let report = CheckCommand::new(args).execute()?;
    if report.failed_files > 0 {
        return Err(EdntError::Validation(format!(
            "{} {}",
            report.failed_files,
            error_messages::FILES_FAILED
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn args(files: Vec<PathBuf>) -> CheckArgs {
        CheckArgs {
            files,
            options: LexerOptions::default(),
            jobs: 2,
            color: false,
            verbose: false,
        }
    }

    #[test]
    fn test_check_command_name() {
        assert_eq!(<CheckCommand as Command>::name(), "check");
    }

    #[test]
    fn test_clean_files_pass() {
        let dir = TempDir::new().unwrap();
        let a = write_file(&dir, "a.edn", "{:a 1 :b [2 3]}");
        let b = write_file(&dir, "b.edn", "#{\\a \\newline}");

        let report = CheckCommand::new(args(vec![a, b])).execute().unwrap();
        assert_eq!(report.files, 2);
        assert_eq!(report.errors, 0);
        assert_eq!(report.failed_files, 0);
        assert_eq!(report.tokens, 14 + 6);
    }

    #[test]
    fn test_errors_are_counted() {
        let dir = TempDir::new().unwrap();
        let good = write_file(&dir, "good.edn", "[1 2]");
        let bad = write_file(&dir, "bad.edn", "[42abc :::x]");

        let report = CheckCommand::new(args(vec![good, bad])).execute().unwrap();
        assert_eq!(report.errors, 2);
        assert_eq!(report.failed_files, 1);
    }

    #[test]
    fn test_repeated_file_is_checked_once() {
        let dir = TempDir::new().unwrap();
        let bad = write_file(&dir, "bad.edn", "[42abc]");

        let report = CheckCommand::new(args(vec![bad.clone(), bad])).execute().unwrap();
        assert_eq!(report.files, 1);
        assert_eq!(report.errors, 1);
        assert_eq!(report.failed_files, 1);
    }

    #[test]
    fn test_run_check_fails_on_errors() {
        let dir = TempDir::new().unwrap();
        let bad = write_file(&dir, "bad.edn", "\"open");

        match run_check(args(vec![bad])) {
            Err(EdntError::Validation(msg)) => assert!(msg.starts_with("1 file(s)")),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_strict_escapes_fail_check() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "chars.edn", "[\\u00e9 \\o999]");

        assert!(run_check(args(vec![path.clone()])).is_ok());

        let mut strict = args(vec![path]);
        strict.options = LexerOptions::new().strict_char_escapes(true);
        let report = CheckCommand::new(strict).execute().unwrap();
        assert_eq!(report.errors, 1);
    }

    #[test]
    fn test_rendered_diagnostic_has_snippet() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "bad.edn", "[1 2 42abc]");

        let command = CheckCommand::new(args(vec![path.clone()]));
        let mut map = SourceMap::new();
        map.add_file(path.display().to_string(), "[1 2 42abc]");
        let outcome = command.check_file(&map, FileId::new(0));

        assert_eq!(outcome.errors, 1);
        assert!(outcome.tiling.is_ok());
        let rendered = &outcome.rendered[0];
        assert!(rendered.starts_with("error[E1001]: invalid number format"));
        assert!(rendered.contains(":1:6"));
        assert!(rendered.contains("[1 2 42abc]"));
        assert!(rendered.contains("^^^"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = CheckCommand::new(args(vec![dir.path().join("nope.edn")])).execute();
        assert!(matches!(result, Err(EdntError::Validation(_))));
    }
}
