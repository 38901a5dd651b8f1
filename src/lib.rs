//! This crate exposes a Binary Search Tree (BST) ordered by a caller-supplied
//! comparator, with a per-node "visited" mark for external traversals.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored records. BSTs are typically defined recursively
//! using the notion of a `Node`. A `Node` stores the value that was inserted
//! and will sometimes have child `Node`s. Here the order is decided by a
//! comparator `cmp(a, b) -> bool` rather than by `Ord`:
//!
//! 1. Every value in a `Node`'s left subtree had `cmp(value, node) == true`
//!    when it was inserted.
//! 2. Every value in a `Node`'s right subtree had `cmp(value, node) == false`
//!    when it was inserted.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Nothing checks that the comparator is a sensible ordering. Searching
//! follows the single path the comparator picks, so a tree must always be
//! searched with the comparator it was filled with.
//!
//! ## Visiting
//!
//! Every `Node` carries a `visited` flag that insert and search never look at.
//! Graph-style algorithms can walk the tree from [`Tree::root`], mark nodes
//! with [`Node::visit`] and reset everything with [`Tree::unvisit_nodes`].
//!
//! ```
//! use cmp_bst::{Node, Tree};
//!
//! let mut tree = Tree::new(|a: &i32, b: &i32| a < b);
//! tree.insert(5).insert(3).insert(8).insert(1);
//!
//! // Mark the leftmost path.
//! let mut node = tree.root_mut();
//! while let Some(n) = node {
//!     n.visit();
//!     node = n.left_mut();
//! }
//!
//! let visited = |n: Option<&Node<i32>>| n.map_or(false, Node::is_visited);
//! let root = tree.root();
//! assert!(visited(root));
//! assert!(!visited(root.and_then(Node::right)));
//!
//! tree.unvisit_nodes();
//! assert!(!visited(tree.root()));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod node;
pub mod tree;

pub use node::{Link, Node};
pub use tree::Tree;
