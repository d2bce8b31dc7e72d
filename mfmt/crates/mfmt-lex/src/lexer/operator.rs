//! Operator and punctuation lexing.
//!
//! This module handles operators whose classification depends on the
//! character after the first one.

use mfmt_util::DiagnosticCode;

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Consumes the first character, then `second` if it follows.
    fn lex_pair(&mut self, second: char, single: TokenKind, double: TokenKind) -> Token {
        self.cursor.advance();
        if self.cursor.eat(second) {
            self.make_token(double)
        } else {
            self.make_token(single)
        }
    }

    /// Lexes not or not-equals.
    ///
    /// Handles: `~`, `~=`
    pub(crate) fn lex_tilde(&mut self) -> Token {
        self.lex_pair('=', TokenKind::Not, TokenKind::Neq)
    }

    /// Lexes assignment or equality.
    ///
    /// Handles: `=`, `==`
    pub(crate) fn lex_equals(&mut self) -> Token {
        self.lex_pair('=', TokenKind::Assign, TokenKind::Eql)
    }

    /// Handles: `<`, `<=`
    pub(crate) fn lex_less(&mut self) -> Token {
        self.lex_pair('=', TokenKind::Lss, TokenKind::Leq)
    }

    /// Handles: `>`, `>=`
    pub(crate) fn lex_greater(&mut self) -> Token {
        self.lex_pair('=', TokenKind::Gtr, TokenKind::Geq)
    }

    /// Lexes element-wise or short-circuit and.
    ///
    /// Handles: `&`, `&&`
    pub(crate) fn lex_ampersand(&mut self) -> Token {
        self.lex_pair('&', TokenKind::And, TokenKind::Land)
    }

    /// Lexes element-wise or short-circuit or.
    ///
    /// Handles: `|`, `||`
    pub(crate) fn lex_pipe(&mut self) -> Token {
        self.lex_pair('|', TokenKind::Or, TokenKind::Lor)
    }

    /// Lexes a dot that does not start a number.
    ///
    /// Handles: `.*`, `./`, `.\`, `.^`, `.'`, `...`, `.`
    ///
    /// A lone `..` is not an operator; it becomes an `Illegal` token and the
    /// next character starts a new token.
    pub(crate) fn lex_dot(&mut self) -> Token {
        self.cursor.advance();

        let kind = match self.cursor.current() {
            Some('*') => TokenKind::ElemMul,
            Some('/') => TokenKind::ElemRdiv,
            Some('\\') => TokenKind::ElemLdiv,
            Some('^') => TokenKind::ElemPwr,
            Some('\'') => TokenKind::Transp,
            Some('.') => {
                self.cursor.advance();
                if self.cursor.eat('.') {
                    return self.make_token(TokenKind::Ellipsis);
                }
                return self.illegal_double_dot();
            }
            _ => return self.make_token(TokenKind::Period),
        };

        self.cursor.advance();
        self.make_token(kind)
    }

    fn illegal_double_dot(&mut self) -> Token {
        let mut diagnostic = self.error(
            DiagnosticCode::E_LEXER_INVALID_OPERATOR,
            "'..' is not an operator",
            "expected '...' or a single '.'",
        );
        diagnostic = diagnostic.help("use '...' to continue a statement on the next line");
        diagnostic.emit(self.handler);
        self.make_token(TokenKind::Illegal)
    }
}
