//! Character classes used by the scanner.
//!
//! Identifier and number rules only admit ASCII characters. Any other
//! scalar value, including non-ASCII letters and digits, starts an
//! `Illegal` token.

/// Checks if a character is discarded between tokens without affecting the
/// line count: space, tab, carriage return, vertical tab or form feed.
///
/// # Example
///
/// ```
/// use mfmt_lex::unicode::is_blank;
///
/// assert!(is_blank(' '));
/// assert!(is_blank('\u{0B}'));
/// assert!(!is_blank('\n'));
/// assert!(!is_blank('\u{A0}'));
/// ```
pub fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\u{0B}' | '\u{0C}')
}

/// Checks if a character ends a line.
pub fn is_newline(c: char) -> bool {
    c == '\n'
}

/// Checks if a character may start an identifier (an ASCII letter).
///
/// Letters outside ASCII never start an identifier; they scan as `Illegal`.
///
/// # Example
///
/// ```
/// use mfmt_lex::unicode::is_alpha;
///
/// assert!(is_alpha('q'));
/// assert!(is_alpha('Z'));
/// assert!(!is_alpha('_'));
/// assert!(!is_alpha('é'));
/// ```
pub fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Checks if a character is a decimal digit (`0`-`9`).
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character may continue an identifier: an ASCII letter,
/// decimal digit or underscore.
///
/// # Example
///
/// ```
/// use mfmt_lex::unicode::is_ident_continue;
///
/// assert!(is_ident_continue('_'));
/// assert!(is_ident_continue('7'));
/// assert!(!is_ident_continue('.'));
/// ```
pub fn is_ident_continue(c: char) -> bool {
    is_alpha(c) || is_digit(c) || c == '_'
}

pub fn is_exponent_marker(c: char) -> bool {
    matches!(c, 'e' | 'E')
}

/// Checks if a character is an imaginary-unit suffix (`i` or `j`).
pub fn is_imaginary_unit(c: char) -> bool {
    matches!(c, 'i' | 'j')
}
