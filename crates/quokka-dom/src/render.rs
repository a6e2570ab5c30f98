//! Serialization of markup trees back to text.
//!
//! Rendering is total over any tree the builders produce: it raises no
//! errors and never mutates the tree. Formatting policy is supplied by
//! [`RenderOptions`], whose fields resolve per node, so one render pass can
//! treat HTML-recognized and untyped elements differently.

use std::fmt;

use crate::node::{Child, ElementKind, Node};
use crate::tree::{NodeId, Tree};

/// A rendering option that is either one fixed value for every node or a
/// function of the node being rendered.
#[derive(Debug, Clone, Copy)]
pub enum Setting<T> {
    /// The same value for every node.
    Fixed(T),
    /// A value computed from the node being rendered.
    PerNode(fn(&Node) -> T),
}

impl<T: Copy> Setting<T> {
    /// Resolve the setting for one node.
    #[must_use]
    pub fn resolve(&self, node: &Node) -> T {
        match self {
            Self::Fixed(value) => *value,
            Self::PerNode(derive) => derive(node),
        }
    }
}

/// Formatting policy for [`Tree::render`].
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Emit children verbatim, with no whitespace inserted or removed.
    pub preserve_whitespace: Setting<bool>,
    /// Render childless elements as `<name/>` instead of `<name></name>`.
    pub allow_self_closing: Setting<bool>,
    /// Pretty-print with indentation (ignored where `preserve_whitespace`
    /// resolves true).
    pub format: Setting<bool>,
    /// Indentation width per nesting level when pretty-printing.
    pub tab_width: Setting<usize>,
}

impl Default for RenderOptions {
    /// Mode-appropriate defaults: HTML-recognized elements pretty-print and
    /// self-close only when void, untyped elements round-trip verbatim and
    /// may always self-close.
    fn default() -> Self {
        Self {
            preserve_whitespace: Setting::PerNode(|node| {
                matches!(node.kind, ElementKind::Untyped)
            }),
            allow_self_closing: Setting::PerNode(|node| {
                matches!(node.kind, ElementKind::Untyped | ElementKind::Void)
            }),
            format: Setting::Fixed(true),
            tab_width: Setting::Fixed(4),
        }
    }
}

impl RenderOptions {
    /// Byte-faithful policy: children verbatim, childless elements
    /// self-closed, formatting off. Input that parses without self-closing
    /// or boolean-attribute ambiguity reproduces itself exactly under this
    /// policy.
    #[must_use]
    pub const fn verbatim() -> Self {
        Self {
            preserve_whitespace: Setting::Fixed(true),
            allow_self_closing: Setting::Fixed(true),
            format: Setting::Fixed(false),
            tab_width: Setting::Fixed(4),
        }
    }
}

impl Tree {
    /// Render one element to markup text under the given options.
    ///
    /// # Panics
    /// Panics if `id` was not allocated by this tree.
    #[must_use]
    pub fn render(&self, id: NodeId, options: &RenderOptions) -> String {
        self.render_node(id, options, 0)
    }

    /// Render one child slot: elements via [`render`](Self::render), text
    /// runs verbatim.
    ///
    /// # Panics
    /// Panics if the child's id was not allocated by this tree.
    #[must_use]
    pub fn render_child(&self, child: &Child, options: &RenderOptions) -> String {
        match child {
            Child::Element(id) => self.render(*id, options),
            Child::Text(text) => text.clone(),
        }
    }

    fn render_node(&self, id: NodeId, options: &RenderOptions, indent: usize) -> String {
        let node = self.node(id);
        let preserve = options.preserve_whitespace.resolve(node);
        let self_close = options.allow_self_closing.resolve(node);
        let format_on = options.format.resolve(node);
        let tab = options.tab_width.resolve(node);

        let mut open = String::new();
        open.push('<');
        open.push_str(&node.name);
        for attribute in &node.attributes {
            open.push(' ');
            open.push_str(&attribute.to_string());
        }

        if node.children.is_empty() {
            return empty_element(&open, &node.name, self_close);
        }

        if preserve || !format_on {
            let mut out = open;
            out.push('>');
            for child in &node.children {
                match child {
                    Child::Text(text) => out.push_str(text),
                    Child::Element(child_id) => {
                        out.push_str(&self.render_node(*child_id, options, indent));
                    }
                }
            }
            out.push_str("</");
            out.push_str(&node.name);
            out.push('>');
            return out;
        }

        let child_indent = indent + tab;
        let child_pad = " ".repeat(child_indent);
        let pad = " ".repeat(indent);

        // A sole text child inlines when it fits on one line.
        if let [Child::Text(text)] = node.children.as_slice() {
            let trimmed = trim_blank_lines(text);
            if trimmed.is_empty() {
                return empty_element(&open, &node.name, self_close);
            }
            if !trimmed.contains('\n') {
                return format!("{open}>{trimmed}</{}>", node.name);
            }
            let block = reflow_block(trimmed, &child_pad);
            return format!("{open}>\n{child_pad}{block}\n{pad}</{}>", node.name);
        }

        let mut entries = Vec::new();
        for child in &node.children {
            match child {
                Child::Text(text) => {
                    let trimmed = trim_blank_lines(text);
                    if !trimmed.is_empty() {
                        entries.push(reflow_block(trimmed, &child_pad));
                    }
                }
                Child::Element(child_id) => {
                    entries.push(self.render_node(*child_id, options, child_indent));
                }
            }
        }
        if entries.is_empty() {
            return empty_element(&open, &node.name, self_close);
        }
        let separator = format!("\n{child_pad}");
        format!(
            "{open}>\n{child_pad}{}\n{pad}</{}>",
            entries.join(&separator),
            node.name
        )
    }
}

impl fmt::Display for Tree {
    /// Default string conversion: every root in document order, elements
    /// under [`RenderOptions::default`], text runs verbatim.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = RenderOptions::default();
        for root in self.roots() {
            f.write_str(&self.render_child(root, &options))?;
        }
        Ok(())
    }
}

fn empty_element(open: &str, name: &str, self_close: bool) -> String {
    if self_close {
        format!("{open}/>")
    } else {
        format!("{open}></{name}>")
    }
}

/// Strip leading and trailing blank lines (empty or pure whitespace) from a
/// text run, keeping interior lines and the surviving lines' own
/// indentation intact.
///
/// Shared by the pretty-printer and the HTML builder's foreign-text
/// capture.
#[must_use]
pub fn trim_blank_lines(text: &str) -> &str {
    let mut start = None;
    let mut end = 0;
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        let content = line.trim_end_matches('\n').trim_end_matches('\r');
        if !content.trim().is_empty() {
            if start.is_none() {
                start = Some(offset);
            }
            end = offset + content.len();
        }
        offset += line.len();
    }
    start.map_or("", |from| &text[from..end])
}

/// Re-indent a blank-line-trimmed text block at `pad`: the first line is
/// left for the caller to position, every further non-blank line is
/// prefixed with `pad`, and blank interior lines stay empty. The block is
/// first dedented by the common leading whitespace of its non-blank lines,
/// which keeps pretty-printing idempotent when the output is parsed and
/// printed again.
fn reflow_block(text: &str, pad: &str) -> String {
    let dedent = common_indent(text);
    let mut out = String::new();
    for (index, line) in text.lines().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let stripped = strip_indent(line, dedent);
        if stripped.trim().is_empty() {
            continue;
        }
        if index > 0 {
            out.push_str(pad);
        }
        out.push_str(stripped);
    }
    out
}

/// Smallest leading-whitespace byte count over the non-blank lines.
fn common_indent(text: &str) -> usize {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0)
}

/// Drop up to `count` bytes of leading whitespace, stopping at character
/// boundaries.
fn strip_indent(line: &str, count: usize) -> &str {
    let mut removed = 0;
    for (index, character) in line.char_indices() {
        if removed >= count || !character.is_whitespace() {
            return &line[index..];
        }
        removed += character.len_utf8();
    }
    ""
}
