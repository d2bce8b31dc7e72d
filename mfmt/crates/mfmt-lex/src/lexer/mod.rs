//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and dispatch
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Number literal lexing
//! - `operator` - Operator and dot-suffix lexing

mod core;
mod identifier;
mod number;
mod operator;

pub use self::core::Lexer;
