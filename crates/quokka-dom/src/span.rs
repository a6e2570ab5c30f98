//! Byte spans locating parsed elements in their source text.

use std::fmt;
use std::ops::Range;

/// Byte range of an element in the original source text, covering the whole
/// element including its opening and closing tags.
///
/// `start` is fixed the moment the opening tag begins; `end` is filled in
/// once the closing tag (or the self-closing marker) has been consumed.
/// Comment stripping is length-preserving, so spans always index into the
/// original document, not a rewritten copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Span {
    /// Byte offset of the first character of the element.
    pub start: usize,
    /// Byte offset one past the last character of the element.
    pub end: usize,
}

impl Span {
    /// Create a span from start and end byte offsets.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check whether the span covers zero bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Check whether this span fully contains `other`.
    ///
    /// Parent elements always contain the spans of their element children.
    #[must_use]
    pub const fn contains(&self, other: Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Slice the spanned region out of the source text.
    ///
    /// Returns `None` if the span is out of bounds for `source` or does not
    /// fall on character boundaries.
    #[must_use]
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start..self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}
