//! Command trait and common types for the mtok CLI.
//!
//! This module defines the standard command traits that all commands
//! must implement to ensure consistency across the application.

use crate::error::Result;

/// Standard command trait that all mtok commands must implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// Trait for providing a one-line command description.
pub trait CommandDescription {
    /// Get a short description of the command.
    fn description() -> &'static str;
}

/// Common output type for commands that don't return data.
pub type NoOutput = ();

/// Command execution result with metadata.
#[derive(Debug, Clone)]
pub struct CommandResult<T = NoOutput> {
    /// Whether the command succeeded.
    pub success: bool,

    /// The command output data.
    pub data: T,

    /// Number of files processed.
    pub items_processed: usize,

    /// Number of files with problems.
    pub items_failed: usize,

    /// Execution time in milliseconds.
    pub execution_time_ms: u64,
}

impl<T: Default> Default for CommandResult<T> {
    fn default() -> Self {
        Self::success(T::default())
    }
}

impl<T> CommandResult<T> {
    /// Create a new successful command result.
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
            items_processed: 0,
            items_failed: 0,
            execution_time_ms: 0,
        }
    }

    /// Set the number of items processed.
    pub fn with_items_processed(mut self, count: usize) -> Self {
        self.items_processed = count;
        self
    }

    /// Set the number of items failed. Any failure marks the result
    /// unsuccessful.
    pub fn with_items_failed(mut self, count: usize) -> Self {
        self.items_failed = count;
        self.success = count == 0;
        self
    }

    /// Set the execution time.
    pub fn with_execution_time_ms(mut self, time_ms: u64) -> Self {
        self.execution_time_ms = time_ms;
        self
    }

    /// Log the result metadata at debug level.
    pub fn log(&self, command: &str) {
        tracing::debug!(
            command,
            success = self.success,
            processed = self.items_processed,
            failed = self.items_failed,
            elapsed_ms = self.execution_time_ms,
            "command finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_result_default() {
        let result: CommandResult = CommandResult::default();
        assert!(result.success);
        assert_eq!(result.items_processed, 0);
        assert_eq!(result.items_failed, 0);
        assert_eq!(result.execution_time_ms, 0);
    }

    #[test]
    fn test_command_result_success() {
        let result = CommandResult::success(42);
        assert!(result.success);
        assert_eq!(result.data, 42);
    }

    #[test]
    fn test_command_result_with_methods() {
        let result = CommandResult::success(())
            .with_items_processed(10)
            .with_items_failed(2)
            .with_execution_time_ms(100);

        assert!(!result.success);
        assert_eq!(result.items_processed, 10);
        assert_eq!(result.items_failed, 2);
        assert_eq!(result.execution_time_ms, 100);
    }

    #[test]
    fn test_zero_failures_stays_successful() {
        let result = CommandResult::success(()).with_items_failed(0);
        assert!(result.success);
    }
}
