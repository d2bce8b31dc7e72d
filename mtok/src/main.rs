//! mtok - A command-line tool for scanning MATLAB sources.
//!
//! This is the main entry point for the mtok CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::traits::Command;
use commands::{
    CheckArgs, CheckCommand, KeywordsCommand, StatsArgs, StatsCommand, TokensArgs, TokensCommand,
};
use config::Config;
use error::{MtokError, Result};

/// mtok - Tokenize MATLAB source files
///
/// mtok runs the mfmt scanner over `.m` files to list their tokens, report
/// lexical errors, or count tokens by kind.
#[derive(Parser, Debug)]
#[command(name = "mtok")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize MATLAB source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "MTOK_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "MTOK_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "MTOK_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the mtok CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of each file
    ///
    /// Text output has one `line<TAB>KIND<TAB>lexeme` row per token; JSON
    /// output is an array with one `{file, tokens}` entry per file.
    Tokens(TokensCommandArgs),

    /// Report illegal tokens
    ///
    /// Prints a diagnostic for every illegal token and fails when any are
    /// found, unless `--allow-illegal` is given.
    Check(CheckCommandArgs),

    /// Count tokens by kind in each file
    Stats(StatsCommandArgs),

    /// List the reserved words
    Keywords,
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommandArgs {
    /// Source files to scan
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Leave the end-of-input token out
    #[arg(long)]
    skip_eof: bool,

    /// Number of parallel jobs
    #[arg(short, long)]
    jobs: Option<u32>,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommandArgs {
    /// Source files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Report illegal tokens without failing
    #[arg(long)]
    allow_illegal: bool,

    /// Number of parallel jobs
    #[arg(short, long)]
    jobs: Option<u32>,
}

/// Arguments for the stats subcommand.
#[derive(Parser, Debug)]
struct StatsCommandArgs {
    /// Source files to count
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Number of parallel jobs
    #[arg(short, long)]
    jobs: Option<u32>,
}

/// Main entry point for the mtok CLI.
///
/// Parses command-line arguments, loads configuration, initializes logging,
/// and dispatches to the appropriate command handler. Errors are printed
/// once and turned into a failing exit status.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// # Arguments
/// * `verbose` - Whether to enable verbose logging
/// * `no_color` - Whether to disable colored output
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
        .map_err(|e| MtokError::Config(format!("Failed to initialize logging: {}", e)))?;

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
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => {
            commands::run::<TokensCommand>(TokensArgs {
                files: args.files,
                format: args.format,
                skip_eof: args.skip_eof,
                jobs: args.jobs,
                config,
            })?
            .log(TokensCommand::name());
        }
        Commands::Check(args) => {
            commands::run::<CheckCommand>(CheckArgs {
                files: args.files,
                allow_illegal: args.allow_illegal,
                jobs: args.jobs,
                config,
            })?
            .log(CheckCommand::name());
        }
        Commands::Stats(args) => {
            commands::run::<StatsCommand>(StatsArgs {
                files: args.files,
                format: args.format,
                jobs: args.jobs,
                config,
            })?
            .log(StatsCommand::name());
        }
        Commands::Keywords => {
            commands::run::<KeywordsCommand>(())?.log(KeywordsCommand::name());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_tokens() {
        let cli = Cli::parse_from(["mtok", "tokens", "a.m", "b.m"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.files, vec![PathBuf::from("a.m"), PathBuf::from("b.m")]);
            assert_eq!(args.format, None);
            assert!(!args.skip_eof);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_tokens_with_options() {
        let cli = Cli::parse_from([
            "mtok", "tokens", "a.m", "--format", "json", "--skip-eof", "--jobs", "3",
        ]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.format, Some("json".to_string()));
            assert!(args.skip_eof);
            assert_eq!(args.jobs, Some(3));
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_tokens_requires_files() {
        assert!(Cli::try_parse_from(["mtok", "tokens"]).is_err());
    }

    #[test]
    fn test_cli_parse_check_with_allow_illegal() {
        let cli = Cli::parse_from(["mtok", "check", "a.m", "--allow-illegal"]);
        if let Commands::Check(args) = cli.command {
            assert!(args.allow_illegal);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_parse_stats() {
        let cli = Cli::parse_from(["mtok", "stats", "a.m", "-F", "json"]);
        if let Commands::Stats(args) = cli.command {
            assert_eq!(args.format, Some("json".to_string()));
        } else {
            panic!("Expected Stats command");
        }
    }

    #[test]
    fn test_cli_parse_keywords() {
        let cli = Cli::parse_from(["mtok", "keywords"]);
        assert!(matches!(cli.command, Commands::Keywords));
    }

    #[test]
    fn test_cli_parse_global_flags() {
        let cli = Cli::parse_from([
            "mtok",
            "keywords",
            "--verbose",
            "--no-color",
            "--config",
            "/path/to/mtok.toml",
        ]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/mtok.toml")));
    }
}
