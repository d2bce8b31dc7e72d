//! Stats command implementation.
//!
//! Counts the tokens of each file by kind. Kinds are listed in the order
//! they first occur in the file.

use std::path::PathBuf;
use std::time::Instant;

use indexmap::IndexMap;
use mfmt_lex::{tokenize, Token};
use serde::Serialize;

use crate::commands::common::{determine_output_format, resolve_jobs, scan_files, OutputFormat};
use crate::commands::traits::{Command, CommandDescription, CommandResult};
use crate::config::Config;
use crate::error::Result;

/// Arguments for the stats command.
#[derive(Debug, Clone, Default)]
pub struct StatsArgs {
    /// Source files to count.
    pub files: Vec<PathBuf>,
    /// Output format override.
    pub format: Option<String>,
    /// Worker count override.
    pub jobs: Option<u32>,
    /// Effective configuration.
    pub config: Config,
}

/// Token counts for one file. The end-of-input token is not counted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileStats {
    pub file: String,
    pub tokens: usize,
    pub lines: u32,
    pub illegal: usize,
    pub kinds: IndexMap<&'static str, usize>,
}

impl FileStats {
    /// Tally a token stream.
    pub fn from_tokens(file: String, tokens: &[Token]) -> Self {
        let mut kinds = IndexMap::new();
        let mut counted = 0;
        let mut illegal = 0;

        for token in tokens.iter().filter(|t| !t.is_eof()) {
            *kinds.entry(token.kind().name()).or_insert(0) += 1;
            counted += 1;
            if token.is_illegal() {
                illegal += 1;
            }
        }

        Self {
            file,
            tokens: counted,
            lines: tokens.last().map_or(1, |t| t.line()),
            illegal,
            kinds,
        }
    }
}

/// Stats command handler.
pub struct StatsCommand {
    args: StatsArgs,
}

impl StatsCommand {
    /// Execute the command.
    pub fn run(&self) -> Result<CommandResult<Vec<FileStats>>> {
        let start_time = Instant::now();
        let format = determine_output_format(self.args.format.as_deref(), &self.args.config.output)?;
        let jobs = resolve_jobs(self.args.jobs, &self.args.config)?;

        let stats = scan_files(&self.args.files, jobs, |source| {
            FileStats::from_tokens(source.display_name(), &tokenize(&source.text))
        })?;

        let rendered = match format {
            OutputFormat::Text => render_text(&stats),
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(&stats)?;
                json.push('\n');
                json
            }
        };
        print!("{}", rendered);

        let elapsed = start_time.elapsed();
        Ok(CommandResult::success(stats)
            .with_items_processed(self.args.files.len())
            .with_execution_time_ms(elapsed.as_millis() as u64))
    }
}

/// Render a block per file: a heading line, then one aligned row per kind.
pub fn render_text(stats: &[FileStats]) -> String {
    let mut out = String::new();
    for file in stats {
        out.push_str(&format!(
            "{}: {} tokens, {} lines, {} illegal\n",
            file.file, file.tokens, file.lines, file.illegal
        ));
        for (kind, count) in &file.kinds {
            out.push_str(&format!("  {:<12} {:>6}\n", kind, count));
        }
    }
    out
}

impl Command for StatsCommand {
    type Args = StatsArgs;
    type Output = CommandResult<Vec<FileStats>>;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "stats"
    }
}

impl CommandDescription for StatsCommand {
    fn description() -> &'static str {
        "Count tokens by kind in each file"
    }
}
