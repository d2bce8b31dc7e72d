//! mfmt-lex - Lexical Scanner for MATLAB Source Code
//!
//! This crate provides the tokenizer at the bottom of the mfmt toolchain. It
//! transforms MATLAB source text into a finite stream of classified tokens,
//! always terminated by an end-of-input token, that a parser or formatter can
//! consume.
//!
//! # Example Usage
//!
//! ```
//! use mfmt_lex::{tokenize, TokenKind};
//!
//! let tokens = tokenize("A = B.';");
//! let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind()).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Ident,
//!         TokenKind::Assign,
//!         TokenKind::Ident,
//!         TokenKind::Transp,
//!         TokenKind::Semicolon,
//!         TokenKind::Eof,
//!     ]
//! );
//! ```
//!
//! Driving the lexer by hand, with diagnostics:
//!
//! ```
//! use mfmt_lex::{Lexer, TokenKind};
//! use mfmt_util::Handler;
//!
//! let mut handler = Handler::new();
//! let mut lexer = Lexer::new("x = 12.;", &mut handler);
//! assert_eq!(lexer.next_token().kind(), TokenKind::Ident);
//! assert_eq!(lexer.next_token().kind(), TokenKind::Assign);
//!
//! let bad = lexer.next_token();
//! assert_eq!(bad.kind(), TokenKind::Illegal);
//! assert_eq!(bad.lexeme(), "12.");
//! drop(lexer);
//! assert_eq!(handler.error_count(), 1);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, the keyword table and the token value
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`unicode`] - Character classes
//!
//! # Scanning Rules
//!
//! - Blanks (space, tab, carriage return, vertical tab, form feed) and
//!   newlines separate tokens; each newline advances the line counter.
//! - A word starting with an ASCII letter is an identifier, or a keyword if
//!   it matches one of the 20 reserved words exactly.
//! - Numbers are `Int` (`42`), `Float` (`3.14`, `.5`, `1e-3`) or `Complex`
//!   (`12i`, `1.3e4j`).
//! - `.` resolves to a fractional number, an element-wise operator (`.*`
//!   `./` `.\` `.^`), the transpose `.'`, the continuation `...` or `Period`.
//! - Anything else becomes an `Illegal` token and scanning continues.
//!
//! Comments, quoted text and the `'` transpose are not scanned: `%`, `'` and
//! `"` each produce a one-character `Illegal` token.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod lexer;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

use mfmt_util::Handler;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{is_identifier, is_keyword, lookup_ident, lookup_keyword, Token, TokenKind, KEYWORDS};

/// Tokenizes `source` into a vector ending with exactly one `Eof` token.
///
/// Malformed lexemes appear as `Illegal` tokens; nothing is reported. Use
/// [`tokenize_with_handler`] to collect diagnostics as well.
///
/// # Example
///
/// ```
/// use mfmt_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("");
/// assert_eq!(tokens.len(), 1);
/// assert_eq!(tokens[0].kind(), TokenKind::Eof);
/// assert_eq!(tokens[0].line(), 1);
/// ```
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut handler = Handler::new();
    tokenize_with_handler(source, &mut handler)
}

/// Tokenizes `source`, recording one error diagnostic in `handler` for every
/// `Illegal` token.
///
/// The returned tokens are identical to those of [`tokenize`].
pub fn tokenize_with_handler(source: &str, handler: &mut Handler) -> Vec<Token> {
    let mut lexer = Lexer::new(source, handler);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.is_eof();
        tokens.push(token);
        if done {
            break;
        }
    }

    tracing::debug!(
        bytes = source.len(),
        tokens = tokens.len(),
        illegal = tokens.iter().filter(|t| t.is_illegal()).count(),
        lines = lexer.line(),
        "tokenized source"
    );
    tokens
}
