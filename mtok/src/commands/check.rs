//! Check command implementation.
//!
//! Scans every input file with a diagnostic handler, reports each illegal
//! token, and fails when any are found unless they are explicitly allowed.

use std::path::PathBuf;
use std::time::Instant;

use mfmt_lex::tokenize_with_handler;
use mfmt_util::{Diagnostic, Handler};

use crate::commands::common::{resolve_jobs, scan_files};
use crate::commands::traits::{Command, CommandDescription, CommandResult};
use crate::config::Config;
use crate::error::{MtokError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Source files to check.
    pub files: Vec<PathBuf>,
    /// Report illegal tokens without failing.
    pub allow_illegal: bool,
    /// Worker count override.
    pub jobs: Option<u32>,
    /// Effective configuration.
    pub config: Config,
}

/// Findings for one file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub file: String,
    pub illegal: usize,
    pub diagnostics: Vec<Diagnostic>,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Execute the command.
    pub fn run(&self) -> Result<CommandResult<usize>> {
        let start_time = Instant::now();
        let jobs = resolve_jobs(self.args.jobs, &self.args.config)?;

        let reports = scan_files(&self.args.files, jobs, |source| {
            let mut handler = Handler::new();
            let tokens = tokenize_with_handler(&source.text, &mut handler);
            FileReport {
                file: source.display_name(),
                illegal: tokens.iter().filter(|t| t.is_illegal()).count(),
                diagnostics: handler.take_diagnostics(),
            }
        })?;

        let context = self.args.config.check.context;
        for report in &reports {
            for diagnostic in &report.diagnostics {
                eprintln!("{}", render_diagnostic(diagnostic, &report.file, context));
            }
        }

        let illegal: usize = reports.iter().map(|r| r.illegal).sum();
        let failed = reports.iter().filter(|r| r.illegal > 0).count();
        println!("{}", summary(reports.len(), illegal));

        let elapsed = start_time.elapsed();
        tracing::debug!(
            files = reports.len(),
            illegal,
            elapsed_ms = elapsed.as_millis() as u64,
            "checked sources"
        );

        if illegal > 0 && self.deny_illegal() {
            return Err(MtokError::IllegalTokens {
                files: failed,
                count: illegal,
            });
        }

        Ok(CommandResult::success(illegal)
            .with_items_processed(reports.len())
            .with_items_failed(failed)
            .with_execution_time_ms(elapsed.as_millis() as u64))
    }

    fn deny_illegal(&self) -> bool {
        self.args.config.check.deny_illegal && !self.args.allow_illegal
    }
}

/// Render one diagnostic, with or without its source snippets.
pub fn render_diagnostic(diagnostic: &Diagnostic, file: &str, context: bool) -> String {
    if context {
        return diagnostic.render(file);
    }
    let mut bare = diagnostic.clone();
    bare.snippets.clear();
    bare.render(file)
}

/// One-line summary printed after all diagnostics.
pub fn summary(files: usize, illegal: usize) -> String {
    match illegal {
        0 => format!("checked {} file(s): no illegal tokens", files),
        n => format!("checked {} file(s): {} illegal token(s)", files, n),
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = CommandResult<usize>;

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

impl CommandDescription for CheckCommand {
    fn description() -> &'static str {
        "Report illegal tokens in each file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_sources(sources: &[(&str, &str)]) -> (TempDir, Vec<PathBuf>) {
        let dir = TempDir::new().unwrap();
        let paths = sources
            .iter()
            .map(|(name, text)| {
                let path = dir.path().join(name);
                std::fs::write(&path, text).unwrap();
                path
            })
            .collect();
        (dir, paths)
    }

    fn first_diagnostic(source: &str) -> Diagnostic {
        let mut handler = Handler::new();
        tokenize_with_handler(source, &mut handler);
        handler.take_diagnostics().remove(0)
    }

    #[test]
    fn test_render_with_context() {
        let rendered = render_diagnostic(&first_diagnostic("x = 1234."), "a.m", true);
        assert!(rendered.starts_with("error[E1002]: malformed number literal '1234.'"));
        assert!(rendered.contains("  --> a.m:1:5"));
        assert!(rendered.contains("1 | x = 1234."));
    }

    #[test]
    fn test_render_without_context() {
        let rendered = render_diagnostic(&first_diagnostic("x = 1234."), "a.m", false);
        assert!(rendered.contains("  --> a.m:1:5"));
        assert!(!rendered.contains(" | "));
    }

    #[test]
    fn test_summary() {
        assert_eq!(summary(2, 0), "checked 2 file(s): no illegal tokens");
        assert_eq!(summary(1, 3), "checked 1 file(s): 3 illegal token(s)");
    }

    #[test]
    fn test_clean_files_pass() {
        let (_dir, files) = write_sources(&[("a.m", "x = 1;"), ("b.m", "y = x .^ 2;")]);
        let result = CheckCommand::new(CheckArgs {
            files,
            jobs: Some(2),
            ..CheckArgs::default()
        })
        .execute()
        .unwrap();

        assert!(result.success);
        assert_eq!(result.data, 0);
        assert_eq!(result.items_processed, 2);
    }

    #[test]
    fn test_illegal_tokens_are_denied() {
        let (_dir, files) = write_sources(&[("a.m", "x = 1;"), ("b.m", "_y = $;")]);
        let err = CheckCommand::new(CheckArgs {
            files,
            jobs: Some(2),
            ..CheckArgs::default()
        })
        .execute()
        .unwrap_err();

        assert!(matches!(err, MtokError::IllegalTokens { files: 1, count: 2 }));
    }

    #[test]
    fn test_illegal_tokens_can_be_allowed() {
        let (_dir, files) = write_sources(&[("b.m", "y = ..;")]);
        let result = CheckCommand::new(CheckArgs {
            files,
            allow_illegal: true,
            jobs: Some(1),
            ..CheckArgs::default()
        })
        .execute()
        .unwrap();

        assert!(!result.success);
        assert_eq!(result.data, 1);
        assert_eq!(result.items_failed, 1);
    }

    #[test]
    fn test_config_can_disable_denial() {
        let (_dir, files) = write_sources(&[("b.m", "%")]);
        let mut config = Config::default();
        config.check.deny_illegal = false;

        let result = CheckCommand::new(CheckArgs {
            files,
            jobs: Some(1),
            config,
            ..CheckArgs::default()
        })
        .execute()
        .unwrap();
        assert_eq!(result.items_failed, 1);
    }
}
