//! Tokens command implementation.
//!
//! Prints the token stream of each input file, either as tab-separated rows
//! or as a JSON document.

use std::path::PathBuf;
use std::time::Instant;

use mfmt_lex::{tokenize, Token};
use serde::Serialize;

use crate::commands::common::{determine_output_format, resolve_jobs, scan_files, OutputFormat};
use crate::commands::traits::{Command, CommandDescription, CommandResult};
use crate::config::{Config, OutputConfig};
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Source files to scan.
    pub files: Vec<PathBuf>,
    /// Listing format override.
    pub format: Option<String>,
    /// Leave the end-of-input token out.
    pub skip_eof: bool,
    /// Worker count override.
    pub jobs: Option<u32>,
    /// Effective configuration.
    pub config: Config,
}

/// The token stream of one file.
#[derive(Debug, Clone, Serialize)]
pub struct FileTokens {
    pub file: String,
    pub tokens: Vec<Token>,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
}

impl TokensCommand {
    /// Execute the command.
    pub fn run(&self) -> Result<CommandResult<usize>> {
        let start_time = Instant::now();
        let output = self.output_config();
        let format = determine_output_format(self.args.format.as_deref(), &output)?;
        let jobs = resolve_jobs(self.args.jobs, &self.args.config)?;

        let listings = scan_files(&self.args.files, jobs, |source| {
            let mut tokens = tokenize(&source.text);
            if output.skip_eof {
                tokens.retain(|t| !t.is_eof());
            }
            FileTokens {
                file: source.display_name(),
                tokens,
            }
        })?;

        let rendered = match format {
            OutputFormat::Text => render_text(&listings, output.show_lines),
            OutputFormat::Json => render_json(&listings)?,
        };
        print!("{}", rendered);

        let token_count = listings.iter().map(|l| l.tokens.len()).sum();
        let elapsed = start_time.elapsed();
        tracing::debug!(
            files = listings.len(),
            tokens = token_count,
            elapsed_ms = elapsed.as_millis() as u64,
            "listed tokens"
        );

        Ok(CommandResult::success(token_count)
            .with_items_processed(listings.len())
            .with_execution_time_ms(elapsed.as_millis() as u64))
    }

    /// Get the effective output configuration.
    fn output_config(&self) -> OutputConfig {
        let mut config = self.args.config.output.clone();
        if self.args.skip_eof {
            config.skip_eof = true;
        }
        config
    }
}

/// Render listings as `line<TAB>KIND<TAB>lexeme` rows.
///
/// With more than one file, each listing is preceded by a `==> file <==`
/// header.
pub fn render_text(listings: &[FileTokens], show_lines: bool) -> String {
    let mut out = String::new();
    let headers = listings.len() > 1;

    for (index, listing) in listings.iter().enumerate() {
        if headers {
            if index > 0 {
                out.push('\n');
            }
            out.push_str(&format!("==> {} <==\n", listing.file));
        }
        for token in &listing.tokens {
            if show_lines {
                out.push_str(&format!("{}\t", token.line()));
            }
            out.push_str(&format!("{}\t{}\n", token.kind().name(), token.lexeme()));
        }
    }
    out
}

/// Render listings as a pretty-printed JSON array.
pub fn render_json(listings: &[FileTokens]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(listings)?;
    json.push('\n');
    Ok(json)
}

impl Command for TokensCommand {
    type Args = TokensArgs;
    type Output = CommandResult<usize>;

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

impl CommandDescription for TokensCommand {
    fn description() -> &'static str {
        "Print the token stream of each file"
    }
}
