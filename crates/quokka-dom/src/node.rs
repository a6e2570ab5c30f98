//! Node types stored in the markup tree arena.

use std::collections::HashSet;
use std::fmt;

use crate::span::Span;
use crate::tree::NodeId;

/// A single `name="value"` pair on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name, drawn from the identifier grammar.
    pub name: String,
    /// Attribute value with quotes stripped; empty for boolean attributes.
    pub value: String,
}

impl Attribute {
    /// Create an attribute from a name and a value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Attribute {
    /// Render the attribute in source form.
    ///
    /// Empty values render as the bare name (boolean attribute). Values
    /// containing a double quote switch to single-quote delimiters; values
    /// containing both quote kinds are not escaped, a known limitation of
    /// the grammar, which has no escape sequences to round-trip through.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_empty() {
            write!(f, "{}", self.name)
        } else if self.value.contains('"') {
            write!(f, "{}='{}'", self.name, self.value)
        } else {
            write!(f, "{}=\"{}\"", self.name, self.value)
        }
    }
}

/// Insertion-ordered attribute list with unique names.
///
/// Backed by a vector rather than a hash map so that serialization can
/// reproduce the source attribute order. Repeating a name on the same tag
/// keeps the first occurrence's position but the last occurrence's value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attributes {
    entries: Vec<Attribute>,
}

impl Attributes {
    /// Create an empty attribute list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or overwrite an attribute.
    ///
    /// If `name` is already present its value is replaced in place, keeping
    /// the original position; otherwise the attribute is appended.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|attr| attr.name == name) {
            Some(existing) => existing.value = value,
            None => self.entries.push(Attribute { name, value }),
        }
    }

    /// Look up an attribute value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// Check whether an attribute with the given name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|attr| attr.name == name)
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the attributes in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(String, String)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut attributes = Self::new();
        for (name, value) in iter {
            attributes.set(name, value);
        }
        attributes
    }
}

/// Classification of an element name, assigned when the node is built.
///
/// The HTML-aware tree builder tags nodes whose names belong to its
/// recognized element set; the serializer dispatches its default formatting
/// policy on this tag, so no second classification pass is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Not in the recognized HTML set (every node in generic mode).
    Untyped,
    /// Recognized HTML element that may have children and a closing tag.
    Html,
    /// Recognized HTML void element, childless by definition.
    ///
    /// Per [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#void-elements):
    /// "Void elements only have a start tag; end tags must not be specified
    /// for void elements."
    Void,
}

/// One slot in a node's (or the tree root's) ordered child list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    /// A nested element, stored in the arena.
    Element(NodeId),
    /// A literal run of character data.
    Text(String),
}

impl Child {
    /// The arena id if this child is an element.
    #[must_use]
    pub const fn as_element(&self) -> Option<NodeId> {
        match self {
            Self::Element(id) => Some(*id),
            Self::Text(_) => None,
        }
    }

    /// The character data if this child is a text run.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Element(_) => None,
            Self::Text(text) => Some(text.as_str()),
        }
    }
}

/// One parsed element.
///
/// Nodes live in a [`Tree`](crate::tree::Tree) arena; `parent` and element
/// `children` are arena indices rather than pointers, so the parent
/// back-reference cannot form an ownership cycle and never extends a node's
/// lifetime.
#[derive(Debug, Clone)]
pub struct Node {
    /// Tag name, non-empty, from the identifier grammar.
    pub name: String,
    /// Ordered attribute list, first-seen order with last-seen values.
    pub attributes: Attributes,
    /// Element and text children in document order.
    pub children: Vec<Child>,
    /// Owning parent, or `None` for top-level nodes. Set once when the node
    /// is attached; there is no re-parenting.
    pub parent: Option<NodeId>,
    /// Name classification driving serializer defaults.
    pub kind: ElementKind,
    /// Byte range of the whole element in the original source.
    pub span: Span,
}

impl Node {
    /// Create a detached node with no attributes, children, or span.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            name: name.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
            parent: None,
            kind,
            span: Span::default(),
        }
    }

    /// Look up an attribute value by name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    /// The element's `id` attribute value, if present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// The set of class names from the `class` attribute.
    ///
    /// Per [§ 3.2.6 Global attributes](https://html.spec.whatwg.org/multipage/dom.html#global-attributes):
    /// "The class attribute, if specified, must have a value that is a set of
    /// space-separated tokens representing the various classes that the
    /// element belongs to."
    #[must_use]
    pub fn classes(&self) -> HashSet<&str> {
        match self.attr("class") {
            Some(classlist) => classlist.split_whitespace().collect(),
            None => HashSet::new(),
        }
    }

    /// Check whether this element has any element children (text runs do
    /// not count).
    #[must_use]
    pub fn has_element_children(&self) -> bool {
        self.children
            .iter()
            .any(|child| matches!(child, Child::Element(_)))
    }
}
