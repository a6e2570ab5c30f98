//! Markup tree implementation for the Quokka parser.
//!
//! This crate provides the arena-based tree that both parse modes build,
//! the traversal queries over it, and the serializer that turns a tree back
//! into markup text.
//!
//! # Design
//!
//! The tree uses arena allocation with [`NodeId`] indices for all
//! relationships, providing O(1) access and traversal without borrow
//! checker issues. Children are the owning relation; the parent
//! back-reference is a plain index, so no ownership cycle can form. A
//! node's children mix nested elements and literal text runs ([`Child`]),
//! and every node carries the byte [`Span`] of its element in the original
//! source.

/// Node types stored in the arena.
pub mod node;
/// Serialization of trees back to markup text.
pub mod render;
/// Source byte spans.
pub mod span;
/// The arena and its traversal queries.
pub mod tree;

pub use node::{Attribute, Attributes, Child, ElementKind, Node};
pub use render::{RenderOptions, Setting, trim_blank_lines};
pub use span::Span;
pub use tree::{AncestorIterator, NodeId, Tree};
