//! Span module - Source location tracking.
//!
//! This module provides [`Span`], a byte range into a source buffer together
//! with the human-readable line and column of its first character.
//!
//! # Examples
//!
//! ```
//! use mfmt_util::span::Span;
//!
//! let source = "x = 12.;";
//! let span = Span::new(4, 7, 1, 5);
//! assert_eq!(span.text(source), Some("12."));
//! ```

use serde::{Deserialize, Serialize};

/// Source location span
///
/// A `Span` represents a range in source code, identified by:
/// - Byte offsets (`start` inclusive, `end` exclusive)
/// - Line and column numbers of `start` (for human-readable output)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in scalar values)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use mfmt_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert!(Span::DUMMY.is_empty());
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Length of the span in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Slice the covered text out of `source`.
    ///
    /// Returns `None` when the span does not fall on character boundaries of
    /// `source` (for instance when it was produced for a different buffer).
    pub fn text<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start..self.end)
    }
}
