//! The opening-tag head grammar shared by both parse modes.

use quokka_dom::Attributes;

use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};
use crate::rules::Pattern;

/// Everything one opening tag declares: `<name key="value" … >` or `… />`.
#[derive(Debug, Clone)]
pub(crate) struct TagHead {
    pub(crate) name: String,
    pub(crate) attributes: Attributes,
    pub(crate) self_closing: bool,
}

/// Parse one opening-tag head, leaving the cursor just past the closing
/// `>`. No side effects beyond cursor advancement.
///
/// Attributes without `= "value"` are boolean and get an empty value.
/// Repeated attribute names keep their first position but take the last
/// value. The identifier requirement on attribute keys doubles as the
/// guard against looping forever on malformed input.
pub(crate) fn parse_tag_head(cursor: &mut Cursor<'_>) -> ParseResult<TagHead> {
    let _ = cursor.advance_char('<')?;

    let name = cursor
        .consume_pattern(Pattern::Identifier)
        .map_err(|err| ParseError::ExpectedName {
            offset: err.offset,
            snippet: err.snippet,
        })?;
    let _ = cursor.consume_pattern(Pattern::Whitespace)?;

    let mut attributes = Attributes::new();
    while cursor.match_literal(">").is_none() && cursor.match_literal("/>").is_none() {
        let key = cursor.consume_pattern(Pattern::Identifier)?;
        let _ = cursor.consume_pattern(Pattern::Whitespace)?;
        let value = if cursor.peek_char('=').is_some() {
            let _ = cursor.advance_char('=')?;
            let _ = cursor.consume_pattern(Pattern::Whitespace)?;
            let quoted = cursor.consume_pattern(Pattern::QuotedString)?;
            &quoted[1..quoted.len() - 1]
        } else {
            ""
        };
        attributes.set(key, value);
        let _ = cursor.consume_pattern(Pattern::Whitespace)?;
    }

    let self_closing = cursor.match_literal("/>").is_some();
    if self_closing {
        let _ = cursor.consume_literal("/>")?;
    } else {
        let _ = cursor.consume_literal(">")?;
    }

    Ok(TagHead {
        name: name.to_string(),
        attributes,
        self_closing,
    })
}
