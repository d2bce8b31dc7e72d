//! Command modules for the mtok CLI.
//!
//! This module contains implementations for all available subcommands.
//! Each subcommand is implemented in its own file following a standardized pattern.

pub mod traits;
pub mod common;

pub mod check;
pub mod keywords;
pub mod stats;
pub mod tokens;

// Re-export command types
pub use check::{CheckArgs, CheckCommand};
pub use keywords::KeywordsCommand;
pub use stats::{StatsArgs, StatsCommand};
pub use tokens::{TokensArgs, TokensCommand};

use crate::error::Result;
use traits::{Command, CommandDescription};

/// Build and execute a command.
pub fn run<C: Command + CommandDescription>(args: C::Args) -> Result<C::Output> {
    tracing::debug!(command = C::name(), "{}", C::description());
    C::new(args).execute()
}
