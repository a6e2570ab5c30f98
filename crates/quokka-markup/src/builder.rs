//! Recursive-descent tree builders over the tag grammar.
//!
//! A builder walks the masked source once, left to right, allocating nodes
//! into a [`Tree`] arena as their opening tags complete. The generic mode
//! applies the uniform grammar to any markup vocabulary; the HTML mode adds
//! the void, raw-text, and whitespace rules real-world HTML needs.

use quokka_common::warning::warn_once;
use quokka_dom::{ElementKind, Node, NodeId, Span, Tree, trim_blank_lines};
use strum_macros::Display;

use crate::cursor::Cursor;
use crate::elements;
use crate::error::{ParseError, ParseResult};
use crate::rules::{Pattern, mask_comments};
use crate::tag::parse_tag_head;

/// Grammar profile selecting how a builder treats element names and text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ParseMode {
    /// Uniform grammar: every element is closed by a matching closing tag
    /// or a `/>` marker, and text is kept verbatim.
    Generic,
    /// HTML-aware grammar: void elements are childless, raw-text elements
    /// capture their content literally, and layout whitespace collapses.
    Html,
}

/// Parse markup text with the uniform generic grammar.
///
/// # Errors
/// Returns the first lexical or structural error, with the byte offset
/// where it was detected.
pub fn parse_markup(text: &str) -> ParseResult<Tree> {
    parse(text, ParseMode::Generic)
}

/// Parse markup text with the HTML-aware grammar.
///
/// # Errors
/// Returns the first lexical or structural error, with the byte offset
/// where it was detected.
pub fn parse_markup_html(text: &str) -> ParseResult<Tree> {
    parse(text, ParseMode::Html)
}

/// Parse markup text in the given mode.
///
/// Comments are masked before the grammar runs, so `<!-- ... -->` sections
/// contribute whitespace-only text and never open tags. Offsets in errors
/// and node spans index the original input.
///
/// # Errors
/// Returns the first lexical or structural error, with the byte offset
/// where it was detected.
pub fn parse(text: &str, mode: ParseMode) -> ParseResult<Tree> {
    let masked = mask_comments(text);
    TreeBuilder::new(&masked, mode).build()
}

/// Single-pass builder state: a cursor over the masked source and the tree
/// under construction.
struct TreeBuilder<'a> {
    cursor: Cursor<'a>,
    tree: Tree,
    mode: ParseMode,
}

impl<'a> TreeBuilder<'a> {
    fn new(text: &'a str, mode: ParseMode) -> Self {
        Self {
            cursor: Cursor::new(text),
            tree: Tree::new(),
            mode,
        }
    }

    fn build(mut self) -> ParseResult<Tree> {
        while !self.cursor.is_at_end() {
            self.parse_child(None)?;
        }
        Ok(self.tree)
    }

    /// One child at the current position: an element if a tag opens here,
    /// otherwise a text run.
    fn parse_child(&mut self, parent: Option<NodeId>) -> ParseResult<()> {
        if self.cursor.match_pattern(Pattern::TagOpen).is_some() {
            self.parse_node(parent)
        } else {
            let text = self.cursor.consume_pattern(Pattern::TextRun)?;
            self.attach_text(parent, text);
            Ok(())
        }
    }

    /// One element: opening tag, children per the element's category, then
    /// its closing tag where the category requires one.
    fn parse_node(&mut self, parent: Option<NodeId>) -> ParseResult<()> {
        let start = self.cursor.offset();
        let head = parse_tag_head(&mut self.cursor)?;
        let kind = match self.mode {
            ParseMode::Generic => ElementKind::Untyped,
            ParseMode::Html => elements::classify(&head.name),
        };
        let name = head.name.clone();

        let mut node = Node::new(head.name, kind);
        node.attributes = head.attributes;
        node.span = Span::new(start, start);
        let id = self.tree.alloc(node);
        match parent {
            Some(parent_id) => self.tree.append_child(parent_id, id),
            None => self.tree.push_root(id),
        }

        let childless = match self.mode {
            ParseMode::Generic => head.self_closing,
            ParseMode::Html => match kind {
                ElementKind::Void => true,
                ElementKind::Untyped => head.self_closing,
                ElementKind::Html => {
                    if head.self_closing {
                        warn_once(
                            "HTML Builder",
                            &format!("self-closing marker on <{name}> ignored: not a void element"),
                        );
                    }
                    false
                }
            },
        };
        if childless {
            self.finish_span(id);
            return Ok(());
        }

        if self.mode == ParseMode::Html && elements::is_raw_text(&name) {
            self.parse_raw_text(id, &name)?;
        } else {
            self.parse_children(id, &name)?;
        }
        self.finish_span(id);
        Ok(())
    }

    /// Children of an open element, then its closing tag.
    ///
    /// The child loop stops at any `</`, leaving the name check to
    /// [`consume_closing_tag`](Self::consume_closing_tag); a wrong name is
    /// a structural mismatch, not a lexical error.
    fn parse_children(&mut self, id: NodeId, name: &str) -> ParseResult<()> {
        while !self.cursor.is_at_end() && self.cursor.match_literal("</").is_none() {
            self.parse_child(Some(id))?;
        }
        self.consume_closing_tag(name)
    }

    /// `</name>`, where the name must match the open element exactly.
    fn consume_closing_tag(&mut self, name: &str) -> ParseResult<()> {
        let offset = self.cursor.offset();
        let snippet = self.cursor.snippet();
        let _ = self.cursor.consume_literal("</")?;
        let found = self.cursor.consume_pattern(Pattern::Identifier)?;
        if found != name {
            return Err(ParseError::MismatchedTag {
                offset,
                expected: name.to_string(),
                found: found.to_string(),
                snippet,
            });
        }
        let _ = self.cursor.consume_literal(">")?;
        Ok(())
    }

    /// Content of a raw-text element, captured literally up to its own
    /// closing tag. Nothing inside is parsed as markup, so `<` and `&` are
    /// free script characters; only the exact closing sequence ends the
    /// capture.
    fn parse_raw_text(&mut self, id: NodeId, name: &str) -> ParseResult<()> {
        let closing = format!("</{name}>");
        let content = self.cursor.consume_until_literal(&closing)?;
        let trimmed = trim_blank_lines(content);
        if !trimmed.is_empty() {
            self.tree.append_text(id, trimmed);
        }
        let _ = self.cursor.consume_literal(&closing)?;
        Ok(())
    }

    /// Attach a text run under `parent`, or at the top level for `None`.
    /// HTML mode collapses layout whitespace first and drops runs that
    /// collapse to nothing.
    fn attach_text(&mut self, parent: Option<NodeId>, text: &str) {
        let owned = match self.mode {
            ParseMode::Generic => text.to_string(),
            ParseMode::Html => collapse_whitespace(text),
        };
        if owned.is_empty() {
            return;
        }
        match parent {
            Some(id) => self.tree.append_text(id, owned),
            None => self.tree.push_root_text(owned),
        }
    }

    /// Stamp the end of a node's source range at the current offset.
    fn finish_span(&mut self, id: NodeId) {
        let end = self.cursor.offset();
        if let Some(node) = self.tree.get_mut(id) {
            node.span.end = end;
        }
    }
}

/// Collapse a text run to single spaces between words, trimming both ends.
/// Indentation between HTML elements carries no content, so an
/// all-whitespace run collapses to nothing and is dropped.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
