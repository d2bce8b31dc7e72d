//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the top-level dispatch and the
//! helpers every scanning routine shares.

use mfmt_util::{DiagnosticBuilder, DiagnosticCode, Handler, SourceSnippet, Span};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};
use crate::unicode::{is_alpha, is_blank, is_digit, is_newline};

/// Lexer for MATLAB source code.
///
/// The lexer transforms source text into a stream of tokens in a single
/// forward pass. Malformed input never stops it: each bad lexeme becomes an
/// `Illegal` token, an error diagnostic is recorded in the handler, and
/// scanning resumes at the next unconsumed character.
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Error handler for reporting lexical errors.
    pub(crate) handler: &'a mut Handler,

    /// Starting position of the current token (byte offset).
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str, handler: &'a mut Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Skips blanks and newlines, then dispatches on the first character of
    /// the token. Once the input is exhausted every call returns an `Eof`
    /// token with an empty lexeme on the final line.
    ///
    /// This is the only way to scan a token. The per-class routines rely on
    /// the token start it records and are private to the crate:
    ///
    /// ```compile_fail
    /// use mfmt_lex::Lexer;
    /// use mfmt_util::Handler;
    ///
    /// let mut handler = Handler::new();
    /// let mut lexer = Lexer::new("x", &mut handler);
    /// lexer.lex_dot();
    /// ```
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        let Some(c) = self.cursor.current() else {
            return self.make_token(TokenKind::Eof);
        };

        match c {
            '+' => self.single(TokenKind::Add),
            '-' => self.single(TokenKind::Sub),
            '*' => self.single(TokenKind::Mul),
            '/' => self.single(TokenKind::Rdiv),
            '\\' => self.single(TokenKind::Ldiv),
            '^' => self.single(TokenKind::Pwr),
            '@' => self.single(TokenKind::At),
            '(' => self.single(TokenKind::Lparen),
            ')' => self.single(TokenKind::Rparen),
            '[' => self.single(TokenKind::Lbrack),
            ']' => self.single(TokenKind::Rbrack),
            '{' => self.single(TokenKind::Lbrace),
            '}' => self.single(TokenKind::Rbrace),
            ';' => self.single(TokenKind::Semicolon),
            ':' => self.single(TokenKind::Colon),
            ',' => self.single(TokenKind::Comma),
            '~' => self.lex_tilde(),
            '=' => self.lex_equals(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '&' => self.lex_ampersand(),
            '|' => self.lex_pipe(),
            '.' if self.cursor.peek(1).is_some_and(is_digit) => self.lex_number(),
            '.' => self.lex_dot(),
            c if is_alpha(c) => self.lex_identifier(),
            c if is_digit(c) => self.lex_number(),
            c => self.lex_unexpected(c),
        }
    }

    /// Discards blanks and newlines. The cursor counts the newlines.
    fn skip_whitespace(&mut self) {
        self.cursor.eat_while(|c| is_blank(c) || is_newline(c));
    }

    /// Consumes one character and emits `kind` for it.
    fn single(&mut self, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.make_token(kind)
    }

    /// Emits a single-character `Illegal` token for a character that starts
    /// no token.
    fn lex_unexpected(&mut self, c: char) -> Token {
        self.cursor.advance();

        let mut diagnostic = self.error(
            DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            format!("unexpected character '{}'", c.escape_debug()),
            "no token starts with this character",
        );
        diagnostic = match c {
            '_' => diagnostic.help("identifiers must start with a letter"),
            '%' => diagnostic.note("comments are not scanned"),
            '\'' | '"' => {
                diagnostic.note("quoted text and the conjugate transpose are not scanned")
            }
            c if c.is_alphanumeric() => {
                diagnostic.note("names and numbers may only use ASCII letters and digits")
            }
            _ => diagnostic,
        };
        diagnostic.emit(self.handler);

        self.make_token(TokenKind::Illegal)
    }

    /// Builds a token of `kind` from the text consumed since the token
    /// started.
    pub(crate) fn make_token(&self, kind: TokenKind) -> Token {
        let span = self.current_span();
        if kind == TokenKind::Illegal {
            tracing::trace!(
                line = span.line,
                column = span.column,
                lexeme = self.cursor.slice_from(self.token_start),
                "illegal token"
            );
        }
        Token::new(kind, self.cursor.slice_from(self.token_start), span)
    }

    /// Starts an error diagnostic covering the current token.
    ///
    /// The diagnostic carries `code`, the token's span, and a caret snippet
    /// of the offending line labelled with `label`.
    pub(crate) fn error(
        &self,
        code: DiagnosticCode,
        message: impl Into<String>,
        label: &str,
    ) -> DiagnosticBuilder {
        let span = self.current_span();
        let builder = DiagnosticBuilder::error(message).code(code).span(span);
        match SourceSnippet::from_source(self.cursor.source(), span) {
            Some(snippet) => builder.snippet(snippet.with_label(label)),
            None => builder,
        }
    }

    fn current_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Returns the current line number (1-based).
    ///
    /// This is the line the next token would start on, or the final line
    /// once the input is exhausted.
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the byte offset of the next unconsumed character.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}
