//! mfmt-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! Shared vocabulary for the mfmt tools: source locations and the diagnostic
//! machinery used to report lexical problems back to a user.
//!
//! - [`span`] - byte ranges into a source buffer plus line/column attribution
//! - [`diagnostic`] - severity levels, codes, builders, and the [`Handler`]
//!   that collects diagnostics while a file is processed
//!
//! The scanner never fails on malformed input. It keeps producing tokens and
//! records what it could not classify; the types here are how those records
//! reach the outside world.
//
// ============================================================================
// LOCATIONS
// ============================================================================
//
// A `Span` is measured in bytes so that it can slice the original `&str`
// directly. Lines are 1-based and counted by newline characters. Columns are
// 1-based and counted in Unicode scalar values, which is what an editor shows
// for MATLAB sources (no tab expansion).
//
// ```
// source:  "x = 1;\ny = .."
//                   ^^^^ line 2, column 5, bytes 11..13
// ```

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use span::Span;
