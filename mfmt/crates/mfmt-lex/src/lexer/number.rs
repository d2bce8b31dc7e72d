//! Number literal lexing.
//!
//! This module handles integer, floating-point and imaginary literals.
//! Values are not parsed; a literal token keeps its source text.

use mfmt_util::DiagnosticCode;

use crate::token::{Token, TokenKind};
use crate::unicode::{is_digit, is_exponent_marker, is_imaginary_unit};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal.
    ///
    /// Entered on a decimal digit, or on a `.` that is followed by a digit.
    ///
    /// # Number Formats
    ///
    /// - Integer: `42`, `007`
    /// - Float: `3.14`, `.5`, `1e10`, `2.5e-3`
    /// - Complex: `12i`, `1.3e4j`, `.5i`
    ///
    /// A fractional part without digits (`1234.`) or an exponent without
    /// digits (`1e`, `1e-`) turns the whole lexeme consumed so far into an
    /// `Illegal` token. The exponent sign may only be `-`.
    pub(crate) fn lex_number(&mut self) -> Token {
        let int_digits = self.cursor.eat_while(is_digit);
        let mut kind = TokenKind::Int;

        if self.cursor.eat('.') {
            if self.cursor.eat_while(is_digit) == 0 {
                return self.invalid_number("expected a digit after '.'", None);
            }
            kind = TokenKind::Float;
        }

        if self.cursor.current().is_some_and(is_exponent_marker) {
            self.cursor.advance();
            self.cursor.eat('-');
            if self.cursor.eat_while(is_digit) == 0 {
                let help = (self.cursor.current() == Some('+'))
                    .then_some("the exponent sign may only be '-'");
                return self.invalid_number("expected a digit in the exponent", help);
            }
            kind = TokenKind::Float;
        }

        if int_digits == 0 && kind == TokenKind::Int {
            if self.cursor.position() == self.token_start {
                self.cursor.advance();
            }
            return self.invalid_number("expected a digit", None);
        }

        if self.cursor.current().is_some_and(is_imaginary_unit) {
            self.cursor.advance();
            return self.make_token(TokenKind::Complex);
        }

        self.make_token(kind)
    }

    fn invalid_number(&mut self, label: &str, help: Option<&str>) -> Token {
        let message = format!(
            "malformed number literal '{}'",
            self.cursor.slice_from(self.token_start)
        );
        let mut diagnostic = self.error(DiagnosticCode::E_LEXER_INVALID_NUMBER, message, label);
        if let Some(help) = help {
            diagnostic = diagnostic.help(help);
        }
        diagnostic.emit(self.handler);
        self.make_token(TokenKind::Illegal)
    }
}
