//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while walking a source buffer one Unicode scalar value at a time. It
//! counts lines (one per consumed `'\n'`) and columns for token attribution.
//!
//! Looking past the end of the buffer yields `None`, never a placeholder
//! character, so `'\0'` in the input is scanned like any other character.

/// A cursor for traversing source code character by character.
///
/// The cursor only moves forward. Lookahead is available through
/// [`Cursor::peek`]; the lexer never needs more than two characters of it.
///
/// # Example
///
/// ```
/// use mfmt_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("x.^2");
/// assert_eq!(cursor.current(), Some('x'));
/// cursor.advance();
/// assert_eq!(cursor.peek(1), Some('^'));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Byte offset of the next unconsumed character.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`, on line 1.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the next unconsumed character, or `None` at end of input.
    ///
    /// # Example
    ///
    /// ```
    /// use mfmt_lex::cursor::Cursor;
    ///
    /// assert_eq!(Cursor::new("a").current(), Some('a'));
    /// assert_eq!(Cursor::new("").current(), None);
    /// ```
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.peek(0)
    }

    /// Returns the character `offset` positions past the current one
    /// (0 = current), or `None` if that runs past the end of the buffer.
    ///
    /// # Example
    ///
    /// ```
    /// use mfmt_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("...");
    /// assert_eq!(cursor.peek(2), Some('.'));
    /// assert_eq!(cursor.peek(3), None);
    /// ```
    #[inline]
    pub fn peek(&self, offset: usize) -> Option<char> {
        let rest = self.remaining();

        // Fast path for ASCII (most common case)
        if let Some(&b) = rest.as_bytes().get(offset) {
            if rest.as_bytes()[..=offset].is_ascii() {
                return Some(b as char);
            }
        }

        rest.chars().nth(offset)
    }

    /// Consumes the current character and returns it.
    ///
    /// Updates line and column tracking. Returns `None` (and does nothing)
    /// if already at end.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.current()?;
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Matches and consumes the expected character if present.
    ///
    /// Returns true if the character was matched and consumed, false otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use mfmt_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("<=");
    /// assert!(!cursor.eat('='));
    /// assert!(cursor.eat('<'));
    /// assert!(cursor.eat('='));
    /// assert!(cursor.is_at_end());
    /// ```
    pub fn eat(&mut self, expected: char) -> bool {
        if self.current() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes characters while `predicate` holds and returns how many
    /// were consumed.
    ///
    /// # Example
    ///
    /// ```
    /// use mfmt_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("123abc");
    /// assert_eq!(cursor.eat_while(|c| c.is_ascii_digit()), 3);
    /// assert_eq!(cursor.current(), Some('a'));
    /// ```
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> usize {
        let mut count = 0;
        while let Some(c) = self.current() {
            if !predicate(c) {
                break;
            }
            self.advance();
            count += 1;
        }
        count
    }

    /// Returns true if the cursor is at the end of the source.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the byte offset of the next unconsumed character.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns a slice of the source from byte `start` to the current
    /// position.
    ///
    /// # Example
    ///
    /// ```
    /// use mfmt_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("end;");
    /// let start = cursor.position();
    /// cursor.eat_while(|c| c.is_ascii_alphabetic());
    /// assert_eq!(cursor.slice_from(start), "end");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("x = 1;");
        assert_eq!(cursor.current(), Some('x'));
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_advance_returns_consumed_char() {
        let mut cursor = Cursor::new("ab");
        assert_eq!(cursor.advance(), Some('a'));
        assert_eq!(cursor.advance(), Some('b'));
        assert_eq!(cursor.advance(), None);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_advance_utf8() {
        let mut cursor = Cursor::new("αβ");
        assert_eq!(cursor.advance(), Some('α'));
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.column(), 2);
        assert_eq!(cursor.current(), Some('β'));
    }

    #[test]
    fn test_peek_past_end_is_none() {
        let cursor = Cursor::new("ab");
        assert_eq!(cursor.peek(0), Some('a'));
        assert_eq!(cursor.peek(1), Some('b'));
        assert_eq!(cursor.peek(2), None);
        assert_eq!(cursor.peek(100), None);
    }

    #[test]
    fn test_peek_after_multibyte() {
        let cursor = Cursor::new("é.5");
        assert_eq!(cursor.peek(1), Some('.'));
        assert_eq!(cursor.peek(2), Some('5'));
    }

    #[test]
    fn test_nul_is_a_character() {
        let mut cursor = Cursor::new("\0");
        assert_eq!(cursor.current(), Some('\0'));
        cursor.advance();
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn test_eat() {
        let mut cursor = Cursor::new("==");
        assert!(cursor.eat('='));
        assert!(cursor.eat('='));
        assert!(!cursor.eat('='));
    }

    #[test]
    fn test_eat_while_stops_at_end() {
        let mut cursor = Cursor::new("4242");
        assert_eq!(cursor.eat_while(|c| c.is_ascii_digit()), 4);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.eat_while(|_| true), 0);
    }

    #[test]
    fn test_line_column_tracking() {
        let mut cursor = Cursor::new("ab\ncd\n\ne");
        cursor.advance_n_for_test(2);
        assert_eq!((cursor.line(), cursor.column()), (1, 3));
        cursor.advance(); // '\n'
        assert_eq!((cursor.line(), cursor.column()), (2, 1));
        cursor.advance_n_for_test(3); // "cd\n"
        cursor.advance(); // '\n'
        assert_eq!((cursor.line(), cursor.column()), (4, 1));
        assert_eq!(cursor.current(), Some('e'));
    }

    #[test]
    fn test_carriage_return_is_not_a_newline() {
        let mut cursor = Cursor::new("\r\r\n");
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.line(), 1);
        cursor.advance();
        assert_eq!(cursor.line(), 2);
    }

    #[test]
    fn test_slice_and_remaining() {
        let mut cursor = Cursor::new("A.'");
        let start = cursor.position();
        cursor.advance();
        assert_eq!(cursor.slice_from(start), "A");
        assert_eq!(cursor.remaining(), ".'");
        assert_eq!(cursor.source(), "A.'");
    }

    impl<'a> Cursor<'a> {
        fn advance_n_for_test(&mut self, count: usize) {
            for _ in 0..count {
                self.advance();
            }
        }
    }
}
