//! Position and range utilities for generated source text.
//!
//! Generated text is tracked in 1-based line/column coordinates. Columns count
//! Unicode scalar values, so a multi-byte UTF-8 sequence advances the column by
//! exactly one.

use std::fmt;

/// A location in generated text (1-indexed line and column).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct SourceLocation {
    /// 1-indexed line number
    pub line: u32,
    /// 1-indexed column, counted in codepoints
    pub column: u32,
}

impl SourceLocation {
    /// The first character of a buffer.
    pub const START: SourceLocation = SourceLocation { line: 1, column: 1 };

    pub const fn new(line: u32, column: u32) -> Self {
        SourceLocation { line, column }
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A half-open range `[begin, end)` of generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct SourceRange {
    pub begin: SourceLocation,
    pub end: SourceLocation,
}

impl SourceRange {
    pub const fn new(begin: SourceLocation, end: SourceLocation) -> Self {
        SourceRange { begin, end }
    }

    /// Whether `loc` falls inside the range (`begin <= loc < end`).
    pub fn contains(&self, loc: SourceLocation) -> bool {
        self.begin <= loc && loc < self.end
    }

    /// True when nothing was written between `begin` and `end`.
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Whether `other` lies entirely within this range.
    pub fn encloses(&self, other: &SourceRange) -> bool {
        self.begin <= other.begin && other.end <= self.end
    }
}

impl fmt::Display for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.begin, self.end)
    }
}

/// Line/column cursor advanced as raw text is appended to an output buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocationTracker {
    current: SourceLocation,
}

impl LocationTracker {
    pub fn new() -> Self {
        LocationTracker {
            current: SourceLocation::START,
        }
    }

    /// The location the next appended character will occupy.
    pub fn current(&self) -> SourceLocation {
        self.current
    }

    /// Advance the cursor over `text`.
    ///
    /// `\n` moves to column 1 of the next line; every other codepoint moves one
    /// column right. A `\r` before `\n` therefore only matters until the `\n`
    /// resets the column.
    pub fn advance(&mut self, text: &str) {
        let bytes = text.as_bytes();
        let mut newlines = 0u32;
        let mut tail_start = 0usize;
        for pos in memchr::memchr_iter(b'\n', bytes) {
            newlines += 1;
            tail_start = pos + 1;
        }

        if newlines > 0 {
            self.current.line += newlines;
            self.current.column = 1;
        }
        // `tail_start` always follows an ASCII byte, so it is a char boundary.
        self.current.column += text[tail_start..].chars().count() as u32;
    }

    /// Advance the cursor over a single character.
    pub fn advance_char(&mut self, ch: char) {
        if ch == '\n' {
            self.current.line += 1;
            self.current.column = 1;
        } else {
            self.current.column += 1;
        }
    }
}

#[cfg(test)]
#[path = "../tests/position.rs"]
mod tests;
