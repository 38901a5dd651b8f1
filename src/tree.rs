//! A BST ordered by a caller-supplied "goes left" predicate instead of `Ord`.
//! The predicate and the duplicate policy are fixed when the tree is built.
//!
//! # Examples
//!
//! ```
//! use cmp_bst::Tree;
//!
//! let mut tree = Tree::new(|a: &i32, b: &i32| a < b);
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&5), None);
//!
//! tree.insert(5).insert(3).insert(8);
//! assert_eq!(tree.search(&8), Some(&8));
//! assert_eq!(tree.search(&9), None);
//!
//! // Nodes can be marked by a traversal and cleared in one go.
//! tree.root_mut().unwrap().visit();
//! tree.unvisit_nodes();
//! assert!(!tree.root().unwrap().is_visited());
//! ```

use std::fmt;

use crate::node::{Link, Node};

/// A Binary Search Tree over values of type `T`, ordered by the comparator
/// `F`. The comparator returns `true` when its first argument belongs to the
/// left of its second.
///
/// No balancing is performed: the shape of the tree is entirely determined by
/// insertion order.
pub struct Tree<T, F = fn(&T, &T) -> bool> {
    root: Link<T>,
    cmp: F,
    allow_duplicates: bool,
}

impl<T, F> fmt::Debug for Tree<T, F>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("allow_duplicates", &self.allow_duplicates)
            .field("root", &self.root())
            .finish_non_exhaustive()
    }
}

impl<T, F> Tree<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Generates a new, empty `Tree` that accepts duplicate values.
    pub fn new(cmp: F) -> Self {
        Self::with_duplicates(cmp, true)
    }

    /// Generates a new, empty `Tree` with an explicit duplicate policy. When
    /// `allow_duplicates` is `false`, see [`Node::insert`] for exactly which
    /// inserts are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::Tree;
    ///
    /// let mut tree = Tree::with_duplicates(|a: &i32, b: &i32| a < b, false);
    /// tree.insert(5).insert(5);
    ///
    /// let root = tree.root().unwrap();
    /// assert!(root.left().is_none());
    /// assert!(root.right().is_none());
    /// ```
    pub fn with_duplicates(cmp: F, allow_duplicates: bool) -> Self {
        Self {
            root: None,
            cmp,
            allow_duplicates,
        }
    }

    /// Generates a `Tree` whose root holds `value`, with an explicit duplicate
    /// policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::Tree;
    ///
    /// let mut tree = Tree::with_root(|a: &i32, b: &i32| a < b, 7, false);
    /// tree.insert(7);
    ///
    /// assert!(tree.root().unwrap().right().is_none());
    /// ```
    pub fn with_root(cmp: F, value: T, allow_duplicates: bool) -> Self {
        Self {
            root: Some(Box::new(Node::new(value))),
            cmp,
            allow_duplicates,
        }
    }

    /// Inserts `value` as a new leaf, or as the root of an empty tree. Returns
    /// the tree so inserts can be chained.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::Tree;
    ///
    /// let mut tree = Tree::new(|a: &i32, b: &i32| a < b);
    /// tree.insert(5).insert(3).insert(8).insert(1);
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(*root.value(), 5);
    /// assert_eq!(root.left().map(|n| *n.value()), Some(3));
    /// assert_eq!(root.right().map(|n| *n.value()), Some(8));
    /// ```
    pub fn insert(&mut self, value: T) -> &mut Self
    where
        T: PartialEq,
    {
        match &mut self.root {
            Some(root) => {
                root.insert(value, &self.cmp, self.allow_duplicates);
            }
            None => {
                tracing::trace!("inserting root");
                self.root = Some(Box::new(Node::new(value)));
            }
        }
        self
    }

    /// Potentially finds a stored value equal to `value`. Only the path the
    /// comparator selects is searched. If no node on it holds an equal value,
    /// `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::Tree;
    ///
    /// let mut tree = Tree::new(|a: &i32, b: &i32| a < b);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.search(&1), Some(&1));
    /// assert_eq!(tree.search(&42), None);
    /// ```
    pub fn search(&self, value: &T) -> Option<&T>
    where
        T: PartialEq,
    {
        self.root().and_then(|n| n.search(value, &self.cmp))
    }

    /// Mutable version of [`Tree::search`]. Changing the found value so that
    /// the comparator would place it differently breaks later searches.
    pub fn search_mut(&mut self, value: &T) -> Option<&mut T>
    where
        T: PartialEq,
    {
        let cmp = &self.cmp;
        self.root
            .as_deref_mut()
            .and_then(|n| n.search_mut(value, cmp))
    }
}

impl<T, F> Tree<T, F> {
    /// Clears the visited flag of every node. Does nothing on an empty tree.
    pub fn unvisit_nodes(&mut self) -> &mut Self {
        if let Some(root) = self.root_mut() {
            root.unvisit(true);
        }
        self
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Whether equal values are kept when inserted.
    pub fn allows_duplicates(&self) -> bool {
        self.allow_duplicates
    }

    /// The comparator the tree was built with.
    pub fn comparator(&self) -> &F {
        &self.cmp
    }

    /// The root node, for callers implementing their own traversals.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Mutable version of [`Tree::root`].
    pub fn root_mut(&mut self) -> Option<&mut Node<T>> {
        self.root.as_deref_mut()
    }

    /// The owned root slot. This is enough to rebalance or otherwise reshape
    /// the tree from outside; keeping the comparator's ordering intact is up
    /// to the caller.
    pub fn root_link_mut(&mut self) -> &mut Link<T> {
        &mut self.root
    }
}
