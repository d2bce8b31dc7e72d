//! Token definitions for the MATLAB scanner.
//!
//! This module defines [`TokenKind`], the closed set of token classes the
//! scanner can produce, and [`Token`], one classified lexeme together with
//! its location in the source.
//!
//! # Token Classes
//!
//! Every kind belongs to exactly one class:
//!
//! - **special**: `ILLEGAL`, `EOF`, `COMMENT`
//! - **literal**: `IDENT`, `INT`, `FLOAT`, `COMPLEX`, `CHAR`, `STRING`
//! - **operator**: arithmetic, element-wise, relational, logical operators
//!   and delimiters such as `.*`, `~=`, `...`, `(`, `;`
//! - **keyword**: the 20 reserved words of the language
//!
//! `COMMENT`, `CHAR`, `STRING` and the complex-conjugate transpose `'` are
//! part of the vocabulary but are never produced by the scanner.

use mfmt_util::Span;
use serde::Serialize;
use std::fmt;

/// The kind of a token.
///
/// Kinds serialize as their upper-case names (`"ELEM_MUL"`, `"IDENT"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    // ===== Special =====
    /// A character sequence that starts no valid token
    Illegal,
    /// End of input
    Eof,
    /// Comment (reserved)
    Comment,

    // ===== Literals =====
    /// Identifier: `A`, `myVar2`
    Ident,
    /// Integer literal: `42`
    Int,
    /// Floating-point literal: `3.14`, `.5`, `1e-3`
    Float,
    /// Imaginary literal: `12i`, `1.3e4j`
    Complex,
    /// Character array literal (reserved)
    Char,
    /// String literal (reserved)
    String,

    // ===== Operators =====
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `.*`
    ElemMul,
    /// `*`
    Mul,
    /// `./`
    ElemRdiv,
    /// `/`
    Rdiv,
    /// `.\`
    ElemLdiv,
    /// `\`
    Ldiv,
    /// `.^`
    ElemPwr,
    /// `^`
    Pwr,
    /// `.'`
    Transp,
    /// `'` (reserved)
    CompTransp,
    /// `==`
    Eql,
    /// `~=`
    Neq,
    /// `>`
    Gtr,
    /// `>=`
    Geq,
    /// `<`
    Lss,
    /// `<=`
    Leq,
    /// `&`
    And,
    /// `|`
    Or,
    /// `&&`
    Land,
    /// `||`
    Lor,
    /// `~`
    Not,
    /// `@`
    At,
    /// `=`
    Assign,
    /// `...`
    Ellipsis,
    /// `(`
    Lparen,
    /// `[`
    Lbrack,
    /// `{`
    Lbrace,
    /// `,`
    Comma,
    /// `.`
    Period,
    /// `)`
    Rparen,
    /// `]`
    Rbrack,
    /// `}`
    Rbrace,
    /// `;`
    Semicolon,
    /// `:`
    Colon,

    // ===== Keywords =====
    /// `break`
    Break,
    /// `case`
    Case,
    /// `catch`
    Catch,
    /// `classdef`
    Classdef,
    /// `continue`
    Continue,
    /// `else`
    Else,
    /// `elseif`
    Elseif,
    /// `end`
    End,
    /// `for`
    For,
    /// `function`
    Function,
    /// `global`
    Global,
    /// `if`
    If,
    /// `otherwise`
    Otherwise,
    /// `parfor`
    Parfor,
    /// `persistent`
    Persistent,
    /// `return`
    Return,
    /// `spmd`
    Spmd,
    /// `switch`
    Switch,
    /// `try`
    Try,
    /// `while`
    While,
}

/// The reserved words, in alphabetical order.
pub const KEYWORDS: [(&str, TokenKind); 20] = [
    ("break", TokenKind::Break),
    ("case", TokenKind::Case),
    ("catch", TokenKind::Catch),
    ("classdef", TokenKind::Classdef),
    ("continue", TokenKind::Continue),
    ("else", TokenKind::Else),
    ("elseif", TokenKind::Elseif),
    ("end", TokenKind::End),
    ("for", TokenKind::For),
    ("function", TokenKind::Function),
    ("global", TokenKind::Global),
    ("if", TokenKind::If),
    ("otherwise", TokenKind::Otherwise),
    ("parfor", TokenKind::Parfor),
    ("persistent", TokenKind::Persistent),
    ("return", TokenKind::Return),
    ("spmd", TokenKind::Spmd),
    ("switch", TokenKind::Switch),
    ("try", TokenKind::Try),
    ("while", TokenKind::While),
];

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 65] = [
        TokenKind::Illegal,
        TokenKind::Eof,
        TokenKind::Comment,
        TokenKind::Ident,
        TokenKind::Int,
        TokenKind::Float,
        TokenKind::Complex,
        TokenKind::Char,
        TokenKind::String,
        TokenKind::Add,
        TokenKind::Sub,
        TokenKind::ElemMul,
        TokenKind::Mul,
        TokenKind::ElemRdiv,
        TokenKind::Rdiv,
        TokenKind::ElemLdiv,
        TokenKind::Ldiv,
        TokenKind::ElemPwr,
        TokenKind::Pwr,
        TokenKind::Transp,
        TokenKind::CompTransp,
        TokenKind::Eql,
        TokenKind::Neq,
        TokenKind::Gtr,
        TokenKind::Geq,
        TokenKind::Lss,
        TokenKind::Leq,
        TokenKind::And,
        TokenKind::Or,
        TokenKind::Land,
        TokenKind::Lor,
        TokenKind::Not,
        TokenKind::At,
        TokenKind::Assign,
        TokenKind::Ellipsis,
        TokenKind::Lparen,
        TokenKind::Lbrack,
        TokenKind::Lbrace,
        TokenKind::Comma,
        TokenKind::Period,
        TokenKind::Rparen,
        TokenKind::Rbrack,
        TokenKind::Rbrace,
        TokenKind::Semicolon,
        TokenKind::Colon,
        TokenKind::Break,
        TokenKind::Case,
        TokenKind::Catch,
        TokenKind::Classdef,
        TokenKind::Continue,
        TokenKind::Else,
        TokenKind::Elseif,
        TokenKind::End,
        TokenKind::For,
        TokenKind::Function,
        TokenKind::Global,
        TokenKind::If,
        TokenKind::Otherwise,
        TokenKind::Parfor,
        TokenKind::Persistent,
        TokenKind::Return,
        TokenKind::Spmd,
        TokenKind::Switch,
        TokenKind::Try,
        TokenKind::While,
    ];

    /// Canonical text of the kind.
    ///
    /// Operators and keywords return their spelling; special and literal
    /// kinds return their upper-case class name.
    ///
    /// # Example
    ///
    /// ```
    /// use mfmt_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::ElemLdiv.as_str(), ".\\");
    /// assert_eq!(TokenKind::Elseif.as_str(), "elseif");
    /// assert_eq!(TokenKind::Complex.as_str(), "COMPLEX");
    /// ```
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Comment => "COMMENT",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::Complex => "COMPLEX",
            TokenKind::Char => "CHAR",
            TokenKind::String => "STRING",
            TokenKind::Add => "+",
            TokenKind::Sub => "-",
            TokenKind::ElemMul => ".*",
            TokenKind::Mul => "*",
            TokenKind::ElemRdiv => "./",
            TokenKind::Rdiv => "/",
            TokenKind::ElemLdiv => ".\\",
            TokenKind::Ldiv => "\\",
            TokenKind::ElemPwr => ".^",
            TokenKind::Pwr => "^",
            TokenKind::Transp => ".'",
            TokenKind::CompTransp => "'",
            TokenKind::Eql => "==",
            TokenKind::Neq => "~=",
            TokenKind::Gtr => ">",
            TokenKind::Geq => ">=",
            TokenKind::Lss => "<",
            TokenKind::Leq => "<=",
            TokenKind::And => "&",
            TokenKind::Or => "|",
            TokenKind::Land => "&&",
            TokenKind::Lor => "||",
            TokenKind::Not => "~",
            TokenKind::At => "@",
            TokenKind::Assign => "=",
            TokenKind::Ellipsis => "...",
            TokenKind::Lparen => "(",
            TokenKind::Lbrack => "[",
            TokenKind::Lbrace => "{",
            TokenKind::Comma => ",",
            TokenKind::Period => ".",
            TokenKind::Rparen => ")",
            TokenKind::Rbrack => "]",
            TokenKind::Rbrace => "}",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Break => "break",
            TokenKind::Case => "case",
            TokenKind::Catch => "catch",
            TokenKind::Classdef => "classdef",
            TokenKind::Continue => "continue",
            TokenKind::Else => "else",
            TokenKind::Elseif => "elseif",
            TokenKind::End => "end",
            TokenKind::For => "for",
            TokenKind::Function => "function",
            TokenKind::Global => "global",
            TokenKind::If => "if",
            TokenKind::Otherwise => "otherwise",
            TokenKind::Parfor => "parfor",
            TokenKind::Persistent => "persistent",
            TokenKind::Return => "return",
            TokenKind::Spmd => "spmd",
            TokenKind::Switch => "switch",
            TokenKind::Try => "try",
            TokenKind::While => "while",
        }
    }

    /// Upper-case name of the kind, matching its serialized form.
    ///
    /// # Example
    ///
    /// ```
    /// use mfmt_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::ElemMul.name(), "ELEM_MUL");
    /// assert_eq!(TokenKind::Classdef.name(), "CLASSDEF");
    /// ```
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Comment => "COMMENT",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::Complex => "COMPLEX",
            TokenKind::Char => "CHAR",
            TokenKind::String => "STRING",
            TokenKind::Add => "ADD",
            TokenKind::Sub => "SUB",
            TokenKind::ElemMul => "ELEM_MUL",
            TokenKind::Mul => "MUL",
            TokenKind::ElemRdiv => "ELEM_RDIV",
            TokenKind::Rdiv => "RDIV",
            TokenKind::ElemLdiv => "ELEM_LDIV",
            TokenKind::Ldiv => "LDIV",
            TokenKind::ElemPwr => "ELEM_PWR",
            TokenKind::Pwr => "PWR",
            TokenKind::Transp => "TRANSP",
            TokenKind::CompTransp => "COMP_TRANSP",
            TokenKind::Eql => "EQL",
            TokenKind::Neq => "NEQ",
            TokenKind::Gtr => "GTR",
            TokenKind::Geq => "GEQ",
            TokenKind::Lss => "LSS",
            TokenKind::Leq => "LEQ",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Land => "LAND",
            TokenKind::Lor => "LOR",
            TokenKind::Not => "NOT",
            TokenKind::At => "AT",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Ellipsis => "ELLIPSIS",
            TokenKind::Lparen => "LPAREN",
            TokenKind::Lbrack => "LBRACK",
            TokenKind::Lbrace => "LBRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Period => "PERIOD",
            TokenKind::Rparen => "RPAREN",
            TokenKind::Rbrack => "RBRACK",
            TokenKind::Rbrace => "RBRACE",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Colon => "COLON",
            TokenKind::Break => "BREAK",
            TokenKind::Case => "CASE",
            TokenKind::Catch => "CATCH",
            TokenKind::Classdef => "CLASSDEF",
            TokenKind::Continue => "CONTINUE",
            TokenKind::Else => "ELSE",
            TokenKind::Elseif => "ELSEIF",
            TokenKind::End => "END",
            TokenKind::For => "FOR",
            TokenKind::Function => "FUNCTION",
            TokenKind::Global => "GLOBAL",
            TokenKind::If => "IF",
            TokenKind::Otherwise => "OTHERWISE",
            TokenKind::Parfor => "PARFOR",
            TokenKind::Persistent => "PERSISTENT",
            TokenKind::Return => "RETURN",
            TokenKind::Spmd => "SPMD",
            TokenKind::Switch => "SWITCH",
            TokenKind::Try => "TRY",
            TokenKind::While => "WHILE",
        }
    }

    /// Returns true for `Illegal`, `Eof` and `Comment`.
    pub const fn is_special(self) -> bool {
        matches!(self, TokenKind::Illegal | TokenKind::Eof | TokenKind::Comment)
    }

    /// Returns true for identifiers and the literal kinds.
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Ident
                | TokenKind::Int
                | TokenKind::Float
                | TokenKind::Complex
                | TokenKind::Char
                | TokenKind::String
        )
    }

    /// Returns true for operators and delimiters.
    pub const fn is_operator(self) -> bool {
        (self as u8) >= (TokenKind::Add as u8) && (self as u8) <= (TokenKind::Colon as u8)
    }

    /// Returns true for reserved words.
    pub const fn is_keyword(self) -> bool {
        (self as u8) >= (TokenKind::Break as u8)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a word to its keyword kind.
///
/// The match is exact and case-sensitive.
///
/// # Example
///
/// ```
/// use mfmt_lex::{lookup_keyword, TokenKind};
///
/// assert_eq!(lookup_keyword("parfor"), Some(TokenKind::Parfor));
/// assert_eq!(lookup_keyword("Parfor"), None);
/// ```
pub fn lookup_keyword(word: &str) -> Option<TokenKind> {
    let kind = match word {
        "break" => TokenKind::Break,
        "case" => TokenKind::Case,
        "catch" => TokenKind::Catch,
        "classdef" => TokenKind::Classdef,
        "continue" => TokenKind::Continue,
        "else" => TokenKind::Else,
        "elseif" => TokenKind::Elseif,
        "end" => TokenKind::End,
        "for" => TokenKind::For,
        "function" => TokenKind::Function,
        "global" => TokenKind::Global,
        "if" => TokenKind::If,
        "otherwise" => TokenKind::Otherwise,
        "parfor" => TokenKind::Parfor,
        "persistent" => TokenKind::Persistent,
        "return" => TokenKind::Return,
        "spmd" => TokenKind::Spmd,
        "switch" => TokenKind::Switch,
        "try" => TokenKind::Try,
        "while" => TokenKind::While,
        _ => return None,
    };
    Some(kind)
}

/// Classifies a scanned word: its keyword kind, or `Ident`.
pub fn lookup_ident(word: &str) -> TokenKind {
    lookup_keyword(word).unwrap_or(TokenKind::Ident)
}

/// Returns true if `word` is a reserved word.
pub fn is_keyword(word: &str) -> bool {
    lookup_keyword(word).is_some()
}

/// Returns true if `word` is a valid, non-reserved identifier.
///
/// An identifier starts with an ASCII letter, continues with ASCII letters,
/// digits or underscores, and is not a keyword. Non-ASCII letters and digits
/// are deliberately rejected, matching what the lexer scans as `Ident`.
///
/// # Example
///
/// ```
/// use mfmt_lex::is_identifier;
///
/// assert!(is_identifier("x_1"));
/// assert!(!is_identifier("_x"));
/// assert!(!is_identifier("1x"));
/// assert!(!is_identifier("end"));
/// assert!(!is_identifier(""));
/// assert!(!is_identifier("größe"));
/// ```
pub fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) if crate::unicode::is_alpha(c) => {}
        _ => return false,
    }
    chars.all(crate::unicode::is_ident_continue) && !is_keyword(word)
}

/// A classified lexeme.
///
/// `lexeme` is exactly the text consumed for the token, so for `Illegal`
/// tokens it holds every character of the failed match. The span records
/// where the lexeme starts, including its line.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Line of the first character of the lexeme (1-based).
    pub fn line(&self) -> u32 {
        self.span.line
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    pub fn is_illegal(&self) -> bool {
        self.kind == TokenKind::Illegal
    }

    pub fn is_special(&self) -> bool {
        self.kind.is_special()
    }

    pub fn is_literal(&self) -> bool {
        self.kind.is_literal()
    }

    pub fn is_operator(&self) -> bool {
        self.kind.is_operator()
    }

    pub fn is_keyword(&self) -> bool {
        self.kind.is_keyword()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lexeme)
    }
}
