//! Common types and utilities for mtok commands.
//!
//! This module provides source loading, output format selection and the
//! parallel per-file driver shared by the scanning commands.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::config::{Config, OutputConfig};
use crate::error::{MtokError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported listing formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Tab-separated rows, one token per line
    Text,
    /// A JSON array with one entry per file
    Json,
}

impl OutputFormat {
    /// Parse a format name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Determine the output format.
///
/// A format given on the command line wins over the configured one. An
/// unknown command-line format is a validation error; an unknown configured
/// format is a configuration error.
pub fn determine_output_format(arg: Option<&str>, config: &OutputConfig) -> Result<OutputFormat> {
    if let Some(format_str) = arg {
        return OutputFormat::parse(format_str).ok_or_else(|| {
            MtokError::Validation(format!("{} {}", error_messages::UNKNOWN_FORMAT, format_str))
        });
    }

    OutputFormat::parse(&config.format).ok_or_else(|| {
        MtokError::Config(format!(
            "{} {}",
            error_messages::INVALID_CONFIG_FORMAT,
            config.format
        ))
    })
}

// ============================================================================
// Source Loading
// ============================================================================

/// A source file that passed every loader check.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path as given on the command line.
    pub path: PathBuf,
    /// Full text, without a leading byte order mark.
    pub text: String,
}

impl SourceFile {
    /// Read and validate a source file.
    ///
    /// Rejects paths that do not exist, paths that are not regular files,
    /// content that is not UTF-8, and empty files.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MtokError::FileOperation(format!(
                "{} {}",
                error_messages::INPUT_PATH_NOT_EXIST,
                path.display()
            )));
        }
        if !path.is_file() {
            return Err(MtokError::FileOperation(format!(
                "{} {}",
                error_messages::INPUT_PATH_NOT_FILE,
                path.display()
            )));
        }

        let bytes = std::fs::read(path)?;
        let mut text = String::from_utf8(bytes).map_err(|e| {
            MtokError::Validation(format!(
                "{} {} ({})",
                error_messages::NOT_UTF8,
                path.display(),
                e.utf8_error()
            ))
        })?;

        if text.starts_with(BYTE_ORDER_MARK) {
            text.drain(..BYTE_ORDER_MARK.len_utf8());
        }
        if text.is_empty() {
            return Err(MtokError::EmptySource(path.to_path_buf()));
        }

        Ok(Self {
            path: path.to_path_buf(),
            text,
        })
    }

    /// Name used for this file in listings and diagnostics.
    pub fn display_name(&self) -> String {
        self.path.display().to_string()
    }
}

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Validate that input files are provided.
pub fn validate_input_files(paths: &[PathBuf]) -> Result<()> {
    if paths.is_empty() {
        return Err(MtokError::Validation(
            error_messages::NO_INPUT_FILES.to_string(),
        ));
    }
    Ok(())
}

// ============================================================================
// Parallel Scanning
// ============================================================================

/// Resolve the worker count: the command-line value, else the configured one.
pub fn resolve_jobs(arg: Option<u32>, config: &Config) -> Result<usize> {
    let jobs = arg.unwrap_or(config.jobs);
    if jobs == 0 {
        return Err(MtokError::Validation(
            error_messages::INVALID_JOBS.to_string(),
        ));
    }
    Ok(jobs as usize)
}

/// Load every file and run `scan` on it, `jobs` files at a time.
///
/// Results come back in input order. Every file is loaded before any
/// scanning happens, so a bad path fails the run without partial output.
pub fn scan_files<T, F>(paths: &[PathBuf], jobs: usize, scan: F) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(&SourceFile) -> T + Sync,
{
    validate_input_files(paths)?;

    let sources = paths
        .iter()
        .map(|path| SourceFile::load(path))
        .collect::<Result<Vec<_>>>()?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .map_err(|e| MtokError::Config(format!("Failed to start worker pool: {}", e)))?;

    tracing::debug!(files = sources.len(), jobs, "scanning sources");
    Ok(pool.install(|| sources.par_iter().map(&scan).collect()))
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
///
/// These constants provide consistent error messages across all commands.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when a file is not valid UTF-8.
    pub const NOT_UTF8: &str = "Input file is not valid UTF-8:";

    /// Error when an unknown format is specified.
    pub const UNKNOWN_FORMAT: &str = "Unknown format:";

    /// Error when config has invalid format.
    pub const INVALID_CONFIG_FORMAT: &str = "Invalid format in configuration:";

    /// Error when the worker count is zero.
    pub const INVALID_JOBS: &str = "Number of jobs must be at least 1";
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("text"), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::parse("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("xml"), None);
    }

    #[test]
    fn test_determine_output_format_prefers_argument() {
        let config = OutputConfig::default();
        assert_eq!(
            determine_output_format(Some("json"), &config).unwrap(),
            OutputFormat::Json
        );
        assert_eq!(determine_output_format(None, &config).unwrap(), OutputFormat::Text);
    }

    #[test]
    fn test_determine_output_format_errors() {
        let config = OutputConfig {
            format: "yaml".to_string(),
            ..OutputConfig::default()
        };
        assert!(matches!(
            determine_output_format(Some("csv"), &config),
            Err(MtokError::Validation(_))
        ));
        assert!(matches!(
            determine_output_format(None, &config),
            Err(MtokError::Config(_))
        ));
    }

    #[test]
    fn test_load_source() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "a.m", b"x = 1;\n");
        let source = SourceFile::load(&path).unwrap();
        assert_eq!(source.text, "x = 1;\n");
        assert!(source.display_name().ends_with("a.m"));
    }

    #[test]
    fn test_load_strips_byte_order_mark() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "bom.m", "\u{FEFF}y = 2;".as_bytes());
        assert_eq!(SourceFile::load(&path).unwrap().text, "y = 2;");
    }

    #[test]
    fn test_load_rejects_missing_path() {
        let err = SourceFile::load(Path::new("/nonexistent/script.m")).unwrap_err();
        assert!(matches!(err, MtokError::FileOperation(ref msg) if msg.contains("does not exist")));
    }

    #[test]
    fn test_load_rejects_directory() {
        let dir = TempDir::new().unwrap();
        let err = SourceFile::load(dir.path()).unwrap_err();
        assert!(matches!(err, MtokError::FileOperation(ref msg) if msg.contains("not a file")));
    }

    #[test]
    fn test_load_rejects_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "latin1.m", b"x = '\xe9';");
        assert!(matches!(SourceFile::load(&path), Err(MtokError::Validation(_))));
    }

    #[test]
    fn test_load_rejects_empty_file() {
        let dir = TempDir::new().unwrap();
        let empty = write(&dir, "empty.m", b"");
        let bom_only = write(&dir, "bom_only.m", "\u{FEFF}".as_bytes());
        assert!(matches!(SourceFile::load(&empty), Err(MtokError::EmptySource(_))));
        assert!(matches!(SourceFile::load(&bom_only), Err(MtokError::EmptySource(_))));
    }

    #[test]
    fn test_resolve_jobs() {
        let config = Config {
            jobs: 3,
            ..Config::default()
        };
        assert_eq!(resolve_jobs(None, &config).unwrap(), 3);
        assert_eq!(resolve_jobs(Some(1), &config).unwrap(), 1);
        assert!(matches!(resolve_jobs(Some(0), &config), Err(MtokError::Validation(_))));
    }

    #[test]
    fn test_scan_files_keeps_input_order() {
        let dir = TempDir::new().unwrap();
        let paths: Vec<PathBuf> = (0..8)
            .map(|i| write(&dir, &format!("f{}.m", i), "x\n".repeat(i + 1).as_bytes()))
            .collect();

        let lengths = scan_files(&paths, 4, |source| source.text.len()).unwrap();
        assert_eq!(lengths, vec![2, 4, 6, 8, 10, 12, 14, 16]);
    }

    #[test]
    fn test_scan_files_fails_on_any_bad_path() {
        let dir = TempDir::new().unwrap();
        let good = write(&dir, "good.m", b"x");
        let paths = vec![good, dir.path().join("missing.m")];
        assert!(scan_files(&paths, 2, |source| source.text.len()).is_err());
    }

    #[test]
    fn test_scan_files_requires_input() {
        assert!(matches!(
            scan_files(&[], 1, |source| source.text.len()),
            Err(MtokError::Validation(_))
        ));
    }
}
