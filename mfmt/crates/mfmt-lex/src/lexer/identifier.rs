//! Identifier and keyword lexing.

use crate::token::{lookup_ident, Token};
use crate::unicode::is_ident_continue;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// The caller has seen an ASCII letter. Consumes the maximal run of
    /// letters, digits and underscores, then checks the word against the
    /// reserved words.
    ///
    /// # Returns
    ///
    /// Either a keyword token (e.g. `TokenKind::Function`) or an `Ident`
    pub(crate) fn lex_identifier(&mut self) -> Token {
        self.cursor.eat_while(is_ident_continue);

        let text = self.cursor.slice_from(self.token_start);
        self.make_token(lookup_ident(text))
    }
}
