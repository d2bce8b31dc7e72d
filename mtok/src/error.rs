//! Error handling module for the mtok CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the mtok CLI application.
///
/// Lexical problems inside a source file are not errors of this type; they
/// are reported as diagnostics. `IllegalTokens` is only raised by `check`
/// once all files have been scanned.
#[derive(Error, Debug)]
pub enum MtokError {
    /// Error when the configuration cannot be used.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when an input path cannot be read as a source file.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when a source file has no content.
    #[error("Source file is empty: {}", .0.display())]
    EmptySource(PathBuf),

    /// Error when `check` finds illegal tokens and they are denied.
    #[error("{count} illegal token(s) in {files} file(s)")]
    IllegalTokens { files: usize, count: usize },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when a configuration file cannot be parsed.
    #[error("Failed to parse configuration: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// Error when a configuration cannot be serialized.
    #[error("Failed to serialize configuration: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Result type alias using MtokError.
pub type Result<T> = std::result::Result<T, MtokError>;
