//! Error types raised while parsing markup.
//!
//! Two kinds exist, both unrecoverable at the point of failure: [`LexError`]
//! when the cursor cannot satisfy a required match, and [`ParseError`] when
//! a structural expectation fails above the lexical level. Either aborts the
//! whole parse; there is no partial-tree recovery.

use std::fmt;

use thiserror::Error;

use crate::rules::Pattern;

/// Number of characters of source context carried in error snippets.
pub(crate) const SNIPPET_LEN: usize = 16;

/// What a failed cursor operation was required to match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expectation {
    /// A single specific character.
    Char(char),
    /// An exact multi-character literal, such as a closing tag.
    Literal(String),
    /// A named lexical pattern.
    Pattern(Pattern),
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "'{c}'"),
            Self::Literal(literal) => write!(f, "'{literal}'"),
            Self::Pattern(pattern) => write!(f, "{pattern}"),
        }
    }
}

/// The cursor could not satisfy a required character, literal, or pattern
/// match: malformed attribute quoting, an empty identifier, truncated
/// input, an unterminated quoted string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected} at byte {offset}, found \"{snippet}\"")]
pub struct LexError {
    /// Byte offset at which the match was attempted.
    pub offset: usize,
    /// What the failed operation was looking for.
    pub expected: Expectation,
    /// Up to sixteen characters of source text from the failure point.
    pub snippet: String,
}

/// A structural expectation failed above the lexical level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A closing tag's name did not equal its opening tag's name
    /// (ASCII case-sensitive).
    #[error("mismatched closing tag at byte {offset}: expected </{expected}>, found </{found}> in \"{snippet}\"")]
    MismatchedTag {
        /// Byte offset where the closing tag begins.
        offset: usize,
        /// Name of the element still waiting to be closed.
        expected: String,
        /// Name the closing tag actually carried.
        found: String,
        /// Up to sixteen characters of source text from the failure point.
        snippet: String,
    },

    /// An opening tag began without a tag name.
    #[error("expected a tag name at byte {offset}, found \"{snippet}\"")]
    ExpectedName {
        /// Byte offset where the name was required.
        offset: usize,
        /// Up to sixteen characters of source text from the failure point.
        snippet: String,
    },

    /// A lexical failure, forwarded unchanged.
    #[error(transparent)]
    Lex(#[from] LexError),
}

/// Shorthand for results carrying a [`ParseError`].
pub type ParseResult<T> = Result<T, ParseError>;
