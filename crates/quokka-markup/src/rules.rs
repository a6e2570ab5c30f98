//! Lexical rules backing the cursor's pattern operations.
//!
//! Every rule matches a prefix of the remaining input and reports its byte
//! length; the [`Cursor`](crate::cursor::Cursor) owns all position
//! bookkeeping. The identifier rule is a deliberate ASCII simplification of
//! the XML Name grammar: no Unicode names and no namespace colons.

use std::borrow::Cow;

use strum_macros::Display;

/// Whitespace characters of the grammar.
pub(crate) const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Identifier characters: ASCII letters, digits, underscore, hyphen.
pub(crate) const fn is_identifier(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Named lexical patterns recognized by the cursor's `match_pattern` and
/// `consume_pattern` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Pattern {
    /// Zero or more of space, tab, carriage return, newline. Always
    /// matches, possibly empty.
    Whitespace,
    /// One or more identifier characters (tag and attribute names).
    Identifier,
    /// `"…"` or `'…'` through the next quote of the same kind, shortest
    /// match. There are no escape sequences, so a value cannot contain its
    /// own delimiter.
    QuotedString,
    /// The longest nonempty run of character data that opens no tag. A `<`
    /// is text only when not followed by an ASCII letter or `/`, and is
    /// consumed together with its follower.
    TextRun,
    /// `<` followed by an ASCII letter: the lookahead that dispatches
    /// between nested elements and text runs.
    TagOpen,
}

impl Pattern {
    /// Byte length of the prefix of `input` matched by this pattern, or
    /// `None` when it does not match at position zero.
    pub(crate) fn match_len(self, input: &str) -> Option<usize> {
        match self {
            Self::Whitespace => Some(leading_whitespace(input)),
            Self::Identifier => nonzero(leading_identifier(input)),
            Self::QuotedString => quoted_string_len(input),
            Self::TextRun => nonzero(text_run_len(input)),
            Self::TagOpen => tag_open_len(input),
        }
    }
}

const fn nonzero(len: usize) -> Option<usize> {
    if len > 0 { Some(len) } else { None }
}

fn leading_whitespace(input: &str) -> usize {
    input
        .find(|c: char| !is_whitespace(c))
        .unwrap_or(input.len())
}

fn leading_identifier(input: &str) -> usize {
    input
        .find(|c: char| !is_identifier(c))
        .unwrap_or(input.len())
}

fn quoted_string_len(input: &str) -> Option<usize> {
    let mut chars = input.char_indices();
    let (_, quote) = chars.next()?;
    if quote != '"' && quote != '\'' {
        return None;
    }
    for (index, c) in chars {
        if c == quote {
            return Some(index + 1);
        }
    }
    None
}

fn text_run_len(input: &str) -> usize {
    let mut rest = input;
    loop {
        let Some(c) = rest.chars().next() else { break };
        if c != '<' {
            rest = &rest[c.len_utf8()..];
            continue;
        }
        match rest.chars().nth(1) {
            Some(next) if !next.is_ascii_alphabetic() && next != '/' => {
                rest = &rest[1 + next.len_utf8()..];
            }
            _ => break,
        }
    }
    input.len() - rest.len()
}

fn tag_open_len(input: &str) -> Option<usize> {
    let mut chars = input.chars();
    (chars.next() == Some('<') && chars.next().is_some_and(|c| c.is_ascii_alphabetic()))
        .then_some(2)
}

/// Strip comments before parsing: every `<!--` … `-->` region is replaced
/// by spaces of identical byte length, so all later byte offsets (and hence
/// node spans) stay aligned with the original source. A comment with no
/// terminator is left alone and falls out as literal text under the
/// text-run rule.
pub(crate) fn mask_comments(text: &str) -> Cow<'_, str> {
    if !text.contains("<!--") {
        return Cow::Borrowed(text);
    }
    let mut masked = String::with_capacity(text.len());
    let mut tail = 0;
    while let Some(found) = text[tail..].find("<!--") {
        let open = tail + found;
        let Some(terminator) = text[open + 4..].find("-->") else {
            break;
        };
        let end = open + 4 + terminator + 3;
        masked.push_str(&text[tail..open]);
        masked.push_str(&" ".repeat(end - open));
        tail = end;
    }
    masked.push_str(&text[tail..]);
    Cow::Owned(masked)
}
