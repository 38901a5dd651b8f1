//! The building block of a [`Tree`](crate::Tree). A `Node` owns its value and
//! up to two children, and carries a `visited` flag that external traversals can
//! use as bookkeeping without a separate visited-set.
//!
//! Most callers only touch `Node`s through [`Tree::root`](crate::Tree::root)
//! when implementing their own traversals.
//!
//! # Examples
//!
//! ```
//! use cmp_bst::Node;
//!
//! let lt = |a: &i32, b: &i32| a < b;
//!
//! let mut node = Node::new(5);
//! node.insert(3, &lt, true);
//! node.insert(8, &lt, true);
//!
//! assert_eq!(node.left().map(|n| *n.value()), Some(3));
//! assert_eq!(node.right().map(|n| *n.value()), Some(8));
//!
//! node.visit();
//! assert!(node.is_visited());
//! assert!(!node.left().unwrap().is_visited());
//! ```

use std::fmt;

/// An owned, possibly empty, child (or root) slot.
pub type Link<T> = Option<Box<Node<T>>>;

/// A single element of a [`Tree`](crate::Tree).
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
    visited: bool,
}

impl<T> Drop for Node<T> {
    // Children are detached onto a stack so that dropping a long chain doesn't
    // recurse once per level.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> =
            self.left.take().into_iter().chain(self.right.take()).collect();

        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// A pending piece of [`Node`]'s `Debug` output.
enum DebugStep<'a, T> {
    Node(&'a Node<T>),
    Text(&'static str),
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    // Prints the same text as a derived impl would in compact form, but walks
    // the subtree with a stack so deep chains can be printed. The structure
    // is always on one line; `{:#?}` only affects how values are printed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![DebugStep::Node(self)];

        while let Some(step) = stack.pop() {
            let node = match step {
                DebugStep::Text(text) => {
                    f.write_str(text)?;
                    continue;
                }
                DebugStep::Node(node) => node,
            };

            f.write_str("Node { value: ")?;
            fmt::Debug::fmt(&node.value, f)?;
            write!(f, ", visited: {:?}, left: ", node.visited)?;

            // Pushed in reverse so they pop in output order.
            stack.push(DebugStep::Text(" }"));
            for (child, separator) in [(node.right(), None), (node.left(), Some(", right: "))] {
                if let Some(separator) = separator {
                    stack.push(DebugStep::Text(separator));
                }
                match child {
                    Some(child) => {
                        stack.push(DebugStep::Text(")"));
                        stack.push(DebugStep::Node(child));
                        stack.push(DebugStep::Text("Some("));
                    }
                    None => stack.push(DebugStep::Text("None")),
                }
            }
        }
        Ok(())
    }
}

impl<T> Node<T> {
    /// Creates a leaf node holding `value`. It starts out unvisited.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            visited: false,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Mutable access to the stored value.
    ///
    /// Changing the value in a way that would change the comparator's verdict
    /// against its ancestors breaks later searches.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// The left child, which holds values the comparator sent left.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child, which holds values the comparator sent right.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Mutable version of [`Node::left`].
    pub fn left_mut(&mut self) -> Option<&mut Self> {
        self.left.as_deref_mut()
    }

    /// Mutable version of [`Node::right`].
    pub fn right_mut(&mut self) -> Option<&mut Self> {
        self.right.as_deref_mut()
    }

    /// The owned left slot itself, for callers that restructure the tree
    /// (e.g. to rebalance it). Nothing is checked about what gets put here.
    pub fn left_link_mut(&mut self) -> &mut Link<T> {
        &mut self.left
    }

    /// See [`Node::left_link_mut`].
    pub fn right_link_mut(&mut self) -> &mut Link<T> {
        &mut self.right
    }

    /// Attaches `value` as a new leaf somewhere below this node. The
    /// comparator decides the direction at each node: `true` goes left, `false`
    /// goes right.
    ///
    /// When `allow_duplicates` is `false`, a value equal (by `PartialEq`) to the
    /// node currently being descended through is dropped and `false` is
    /// returned. Only nodes on the descent path are compared, so with a
    /// comparator that isn't a strict weak ordering equal values can still end
    /// up in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::Node;
    ///
    /// let lt = |a: &i32, b: &i32| a < b;
    /// let mut node = Node::new(5);
    ///
    /// assert!(node.insert(7, &lt, false));
    /// assert!(!node.insert(7, &lt, false));
    /// assert!(node.insert(7, &lt, true));
    /// ```
    pub fn insert<F>(&mut self, value: T, cmp: &F, allow_duplicates: bool) -> bool
    where
        T: PartialEq,
        F: Fn(&T, &T) -> bool + ?Sized,
    {
        if !allow_duplicates && value == self.value {
            tracing::trace!("dropping duplicate value on insert");
            return false;
        }

        let slot = if cmp(&value, &self.value) {
            &mut self.left
        } else {
            &mut self.right
        };
        match slot {
            Some(child) => child.insert(value, cmp, allow_duplicates),
            None => {
                *slot = Some(Box::new(Node::new(value)));
                true
            }
        }
    }

    /// Finds a stored value equal to `value` along the single path the
    /// comparator picks. Subtrees off that path are never looked at, so `cmp`
    /// must be the comparator the values were inserted with or present values
    /// may be missed.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::Node;
    ///
    /// let lt = |a: &i32, b: &i32| a < b;
    /// let mut node = Node::new(5);
    /// node.insert(3, &lt, true);
    ///
    /// assert_eq!(node.search(&3, &lt), Some(&3));
    /// assert_eq!(node.search(&4, &lt), None);
    /// ```
    pub fn search<F>(&self, value: &T, cmp: &F) -> Option<&T>
    where
        T: PartialEq,
        F: Fn(&T, &T) -> bool + ?Sized,
    {
        if self.value == *value {
            return Some(&self.value);
        }

        let child = if cmp(value, &self.value) {
            self.left()
        } else {
            self.right()
        };
        child.and_then(|n| n.search(value, cmp))
    }

    /// Mutable version of [`Node::search`]. The same caveat as
    /// [`Node::value_mut`] applies to the returned reference.
    pub fn search_mut<F>(&mut self, value: &T, cmp: &F) -> Option<&mut T>
    where
        T: PartialEq,
        F: Fn(&T, &T) -> bool + ?Sized,
    {
        if self.value == *value {
            return Some(&mut self.value);
        }

        let child = if cmp(value, &self.value) {
            self.left_mut()
        } else {
            self.right_mut()
        };
        child.and_then(|n| n.search_mut(value, cmp))
    }

    /// Marks this node, and only this node, as visited.
    pub fn visit(&mut self) {
        self.visited = true;
    }

    /// Clears the visited mark. With `recurse`, every node in the subtree is
    /// cleared as well.
    pub fn unvisit(&mut self, recurse: bool) {
        self.visited = false;
        if recurse {
            if let Some(left) = self.left_mut() {
                left.unvisit(true);
            }
            if let Some(right) = self.right_mut() {
                right.unvisit(true);
            }
        }
    }

    /// Whether [`Node::visit`] was called since the last time this node was
    /// unvisited.
    pub fn is_visited(&self) -> bool {
        self.visited
    }
}
