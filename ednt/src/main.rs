//! ednt CLI - A command-line tool for EDN token streams.
//!
//! This is the main entry point for the ednt CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ednr_util::ColorConfig;

use commands::common::OutputFormat;
use commands::{run_check, run_init, run_tokens, CheckArgs, InitArgs, TokensArgs};
use config::Config;
use error::{EdntError, Result};

/// ednt - Inspect and check EDN / Clojure token streams
///
/// ednt lists the tokens of EDN files and reports lex errors with source
/// snippets.
#[derive(Parser, Debug)]
#[command(name = "ednt")]
#[command(author = "ednr Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect and check EDN / Clojure token streams", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "EDNT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "EDNT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "EDNT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the ednt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a default ednt.toml
    ///
    /// Creates the configuration file in the specified or current directory.
    Init(InitCommand),

    /// Print the token stream of EDN files
    ///
    /// Lists every token with its offset, line, column and kind, including
    /// whitespace, comments and lex errors.
    Tokens(TokensCommand),

    /// Report lex errors in EDN files
    ///
    /// Lexes files in parallel and prints each lex error with a source
    /// snippet. Exits with a non-zero status if any file has errors.
    Check(CheckCommand),
}

/// Arguments for the init subcommand.
#[derive(Parser, Debug)]
struct InitCommand {
    /// Directory to initialize (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing ednt.toml
    #[arg(short, long)]
    force: bool,
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Input files
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Reject \u and \o character literals with invalid digits
    #[arg(long)]
    strict_escapes: bool,

    /// Also list the final eof token
    #[arg(long)]
    include_eof: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Input files
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Reject \u and \o character literals with invalid digits
    #[arg(long)]
    strict_escapes: bool,

    /// Number of parallel jobs (default: from config)
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    jobs: Option<u16>,
}

/// Main entry point for the ednt CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;

    execute_command(cli.command, cli.verbose, cli.no_color, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so token listings on stdout stay machine readable.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| EdntError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, no_color: bool, config: Config) -> Result<()> {
    match command {
        Commands::Init(args) => execute_init(args, verbose),
        Commands::Tokens(args) => execute_tokens(args, verbose, config),
        Commands::Check(args) => execute_check(args, verbose, no_color, config),
    }
}

/// Execute the init command.
fn execute_init(args: InitCommand, verbose: bool) -> Result<()> {
    let init_args = InitArgs {
        verbose,
        force: args.force,
        path: args.path,
    };
    run_init(init_args)
}

/// Execute the tokens command.
fn execute_tokens(args: TokensCommand, verbose: bool, config: Config) -> Result<()> {
    let format = args.format.unwrap_or(config.output.format);
    tracing::debug!(format = format.as_str(), files = args.files.len(), "listing tokens");

    let tokens_args = TokensArgs {
        files: args.files,
        format,
        options: config.lexer_options(args.strict_escapes),
        include_eof: args.include_eof || config.output.include_eof,
        verbose,
    };
    run_tokens(tokens_args)
}

/// Execute the check command.
fn execute_check(args: CheckCommand, verbose: bool, no_color: bool, config: Config) -> Result<()> {
    let color_config = if no_color {
        ColorConfig::Never
    } else {
        ColorConfig::Auto
    };

    let check_args = CheckArgs {
        files: args.files,
        options: config.lexer_options(args.strict_escapes),
        jobs: args.jobs.map_or(config.jobs, usize::from),
        color: color_config.use_color(std::io::stderr().is_terminal()),
        verbose,
    };
    run_check(check_args)
}
