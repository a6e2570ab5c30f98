//! Arena storage and traversal queries for parsed markup trees.

use crate::node::{Child, Node};

/// A type-safe index into the markup tree arena.
///
/// `NodeId` provides O(1) access to any node in the tree without borrowing
/// issues; all parent/child relationships are stored as indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// Arena-based markup tree.
///
/// All nodes live in a contiguous vector and refer to one another by
/// [`NodeId`]. The `children` lists are the owning relation (the arena owns
/// every node, a node owns its element children by index); the `parent`
/// index is non-owning and never extends a node's lifetime. Top-level
/// children are held in `roots`; there is no mandatory single document root.
///
/// A tree is immutable once parsing completes. The construction surface
/// ([`alloc`](Self::alloc), [`append_child`](Self::append_child), the root
/// push methods) exists for the tree builders and for tests; there are no
/// re-parenting or removal operations.
#[derive(Debug, Clone, Default)]
pub struct Tree {
    /// All nodes in the tree, indexed by NodeId.
    nodes: Vec<Node>,
    /// Top-level children in document order.
    roots: Vec<Child>,
}

impl Tree {
    /// Create an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            roots: Vec::new(),
        }
    }

    /// Number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check whether the arena holds no nodes.
    ///
    /// A tree parsed from text-only input is empty while still having text
    /// roots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The top-level children in document order.
    #[must_use]
    pub fn roots(&self) -> &[Child] {
        &self.roots
    }

    /// Get a node by its id.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get a mutable reference to a node by its id.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Direct node access for code that holds ids minted by this tree.
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Allocate a new node and return its id.
    /// The node is not yet attached to the tree.
    pub fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Append `child` as the last child of `parent`, setting its parent
    /// back-reference. A node is attached exactly once; there is no
    /// re-parenting.
    ///
    /// # Panics
    /// Panics if either id was not allocated by this tree.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(Child::Element(child));
    }

    /// Append a text run as the last child of `parent`.
    ///
    /// # Panics
    /// Panics if `parent` was not allocated by this tree.
    pub fn append_text(&mut self, parent: NodeId, text: impl Into<String>) {
        self.nodes[parent.0].children.push(Child::Text(text.into()));
    }

    /// Append an element to the top-level children.
    pub fn push_root(&mut self, id: NodeId) {
        self.roots.push(Child::Element(id));
    }

    /// Append a text run to the top-level children.
    pub fn push_root_text(&mut self, text: impl Into<String>) {
        self.roots.push(Child::Text(text.into()));
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|node| node.parent)
    }

    /// Get all children of a node, elements and text runs alike.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[Child] {
        self.get(id).map_or(&[], |node| node.children.as_slice())
    }

    /// Check if `descendant` sits somewhere below `ancestor`.
    #[must_use]
    pub fn is_descendant_of(&self, descendant: NodeId, ancestor: NodeId) -> bool {
        let mut current = self.parent(descendant);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Iterate over all ancestors of a node, from parent to root.
    pub fn ancestors(&self, id: NodeId) -> AncestorIterator<'_> {
        AncestorIterator {
            tree: self,
            current: self.parent(id),
        }
    }

    /// Find the first descendant of `id` satisfying `predicate`.
    ///
    /// Depth-first pre-order: a node is visited before its children, and
    /// children are visited left to right. The receiver itself is excluded,
    /// and text runs are skipped without consulting the predicate.
    ///
    /// # Panics
    /// Panics if `id` was not allocated by this tree.
    pub fn find_descendant<P>(&self, id: NodeId, mut predicate: P) -> Option<NodeId>
    where
        P: FnMut(&Node) -> bool,
    {
        let mut stack = self.element_children_reversed(id);
        while let Some(current) = stack.pop() {
            if predicate(self.node(current)) {
                return Some(current);
            }
            // Push right to left so the leftmost child is popped next.
            stack.extend(
                self.node(current)
                    .children
                    .iter()
                    .rev()
                    .filter_map(Child::as_element),
            );
        }
        None
    }

    /// Find every descendant of `id` satisfying `predicate`, in visitation
    /// order of the same traversal as [`find_descendant`](Self::find_descendant).
    ///
    /// # Panics
    /// Panics if `id` was not allocated by this tree.
    pub fn find_descendants<P>(&self, id: NodeId, mut predicate: P) -> Vec<NodeId>
    where
        P: FnMut(&Node) -> bool,
    {
        let mut matches = Vec::new();
        let mut stack = self.element_children_reversed(id);
        while let Some(current) = stack.pop() {
            if predicate(self.node(current)) {
                matches.push(current);
            }
            stack.extend(
                self.node(current)
                    .children
                    .iter()
                    .rev()
                    .filter_map(Child::as_element),
            );
        }
        matches
    }

    /// Find the nearest ancestor of `id` satisfying `predicate`, walking
    /// parent links strictly upward from (and excluding) the receiver.
    ///
    /// # Panics
    /// Panics if `id` was not allocated by this tree.
    pub fn find_ancestor<P>(&self, id: NodeId, mut predicate: P) -> Option<NodeId>
    where
        P: FnMut(&Node) -> bool,
    {
        self.ancestors(id)
            .find(|&ancestor| predicate(self.node(ancestor)))
    }

    /// Find every ancestor of `id` satisfying `predicate`, nearest first.
    ///
    /// # Panics
    /// Panics if `id` was not allocated by this tree.
    pub fn find_ancestors<P>(&self, id: NodeId, mut predicate: P) -> Vec<NodeId>
    where
        P: FnMut(&Node) -> bool,
    {
        self.ancestors(id)
            .filter(|&ancestor| predicate(self.node(ancestor)))
            .collect()
    }

    /// Concatenated text of every descendant text run of `id`, in document
    /// order.
    ///
    /// # Panics
    /// Panics if `id` was not allocated by this tree.
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        for child in &self.node(id).children {
            match child {
                Child::Text(text) => out.push_str(text),
                Child::Element(child_id) => self.collect_text(*child_id, out),
            }
        }
    }

    fn element_children_reversed(&self, id: NodeId) -> Vec<NodeId> {
        self.node(id)
            .children
            .iter()
            .rev()
            .filter_map(Child::as_element)
            .collect()
    }
}

/// Iterator over ancestors of a node.
pub struct AncestorIterator<'a> {
    tree: &'a Tree,
    current: Option<NodeId>,
}

impl Iterator for AncestorIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}
