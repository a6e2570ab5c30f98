//! Markup tokenizer and tree builders for the Quokka parser.
//!
//! # Scope
//!
//! This crate implements:
//! - **Cursor** - an offset-tracked window over source text with peek,
//!   match, and consume primitives that report positioned errors
//! - **Lexical rules** - the whitespace, identifier, quoted-string,
//!   text-run, and tag-open patterns, plus comment masking
//! - **Tag grammar** - opening tags with insertion-ordered attributes,
//!   boolean attributes, and the self-closing marker
//! - **Tree builders** - a uniform generic mode for any markup vocabulary,
//!   and an HTML-aware mode with void elements
//!   ([WHATWG § 13.1.2](https://html.spec.whatwg.org/multipage/syntax.html#void-elements)),
//!   raw-text capture for `<script>` and `<style>`, and whitespace collapse
//!
//! # Not Yet Implemented
//!
//! - Character reference decoding (`&amp;` stays literal text)
//! - Escape sequences inside quoted attribute values
//! - DOCTYPE and CDATA sections (consumed as ordinary text)

/// Tree builders turning markup text into a tree arena.
pub mod builder;
/// Offset-tracked cursor over source text.
pub mod cursor;
/// Lexical and structural error types.
pub mod error;
/// Lexical patterns and comment masking.
pub mod rules;

mod elements;
mod tag;

pub use builder::{ParseMode, parse, parse_markup, parse_markup_html};
pub use cursor::Cursor;
pub use error::{Expectation, LexError, ParseError, ParseResult};
pub use rules::Pattern;
