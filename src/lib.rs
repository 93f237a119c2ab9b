//! This crate exposes a Binary Search Tree and the operations built on its leaves, mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert and find stored
//! values. BSTs are typically defined recursively using the notion of a `Node`. A `Node` stores a
//! value and will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The [`Tree`] here doesn't balance itself, so its height depends entirely on the order values
//! were inserted in. Inserting in sorted order gives a tree as tall as it has nodes.
//!
//! ## Fringe
//!
//! The leaves of a tree, collected by a breadth-first walk, make up its *fringe*. The
//! [`traversal`] module extracts it into a [`SmartList`], strips leaves with [`prune`], and tells
//! whether two trees are leaf-equivalent with [`has_same_fringe`].
//!
//! ## Shortest paths
//!
//! Unrelated to the trees, [`paths`] holds single source and all pairs shortest path searches.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod list;
pub mod paths;
pub mod traversal;
pub mod tree;

pub use error::{PathError, Underflow};
pub use list::SmartList;
pub use traversal::{fringe, has_same_fringe, level_order, prune};
pub use tree::{Compare, NaturalOrder, Tree};
