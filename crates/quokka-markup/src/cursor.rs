//! The positional reader every lexical operation goes through.

use crate::error::{Expectation, LexError, SNIPPET_LEN};
use crate::rules::Pattern;

/// A position-tracked view over source text.
///
/// All lexical decisions are one-token lookahead: the `match_*` operations
/// peek without consuming, and the `consume_*` operations commit only after
/// the same successful match, so the parser never backtracks. Offsets are
/// byte offsets into the source; advancement is by whole characters.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    text: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `text`.
    #[must_use]
    pub const fn new(text: &'a str) -> Self {
        Self { text, offset: 0 }
    }

    /// Current byte offset into the source.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Check whether the whole input has been consumed.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.offset >= self.text.len()
    }

    /// The unconsumed remainder of the input.
    #[must_use]
    pub fn rest(&self) -> &'a str {
        &self.text[self.offset..]
    }

    /// The current character, without advancing.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The current character when it equals `expected`, without advancing.
    #[must_use]
    pub fn peek_char(&self, expected: char) -> Option<char> {
        self.peek().filter(|&c| c == expected)
    }

    /// Consume and return the current character.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        Some(c)
    }

    /// Consume the current character, which must equal `expected`.
    ///
    /// # Errors
    /// Returns a [`LexError`] when the input is exhausted or the current
    /// character differs.
    pub fn advance_char(&mut self, expected: char) -> Result<char, LexError> {
        match self.peek_char(expected) {
            Some(c) => {
                self.offset += c.len_utf8();
                Ok(c)
            }
            None => Err(self.error(Expectation::Char(expected))),
        }
    }

    /// Look ahead for an exact literal starting at the current offset,
    /// returning it without consuming.
    #[must_use]
    pub fn match_literal(&self, literal: &str) -> Option<&'a str> {
        if self.rest().starts_with(literal) {
            Some(&self.rest()[..literal.len()])
        } else {
            None
        }
    }

    /// Consume an exact literal starting at the current offset.
    ///
    /// # Errors
    /// Returns a [`LexError`] carrying the expected literal and a snippet
    /// of the surrounding text when the literal is absent.
    pub fn consume_literal(&mut self, literal: &str) -> Result<&'a str, LexError> {
        match self.match_literal(literal) {
            Some(matched) => {
                self.offset += matched.len();
                Ok(matched)
            }
            None => Err(self.error(Expectation::Literal(literal.to_string()))),
        }
    }

    /// Look ahead for a lexical pattern starting at the current offset,
    /// returning the matched text without consuming.
    #[must_use]
    pub fn match_pattern(&self, pattern: Pattern) -> Option<&'a str> {
        pattern.match_len(self.rest()).map(|len| &self.rest()[..len])
    }

    /// Consume a lexical pattern starting at the current offset.
    ///
    /// # Errors
    /// Returns a [`LexError`] carrying the expected pattern and a snippet
    /// of the surrounding text when it does not match.
    pub fn consume_pattern(&mut self, pattern: Pattern) -> Result<&'a str, LexError> {
        match self.match_pattern(pattern) {
            Some(matched) => {
                self.offset += matched.len();
                Ok(matched)
            }
            None => Err(self.error(Expectation::Pattern(pattern))),
        }
    }

    /// Consume up to, but not past, the next occurrence of `literal`,
    /// returning the skipped text. Foreign-text capture reads `script` and
    /// `style` bodies this way.
    ///
    /// # Errors
    /// Returns a [`LexError`] when the literal never occurs in the rest of
    /// the input.
    pub fn consume_until_literal(&mut self, literal: &str) -> Result<&'a str, LexError> {
        match self.rest().find(literal) {
            Some(found) => {
                let skipped = &self.rest()[..found];
                self.offset += found;
                Ok(skipped)
            }
            None => Err(self.error(Expectation::Literal(literal.to_string()))),
        }
    }

    /// Up to sixteen characters of source from the current offset, for
    /// diagnostics.
    #[must_use]
    pub fn snippet(&self) -> String {
        self.rest().chars().take(SNIPPET_LEN).collect()
    }

    fn error(&self, expected: Expectation) -> LexError {
        LexError {
            offset: self.offset,
            expected,
            snippet: self.snippet(),
        }
    }
}
