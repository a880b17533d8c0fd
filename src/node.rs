//! The nodes a [`Tree`](crate::tree::Tree) is built from.
//!
//! Nodes are only ever handed out by shared reference from a tree, so callers can walk the
//! structure (e.g. after a [`find`](crate::tree::Tree::find)) but cannot rewire it.

use std::fmt;

use crate::util::{Link, Side};

/// A `Node` holds a single key and owns up to two children. A node with no children is a leaf.
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> fmt::Debug for Node<K>
where
    K: fmt::Debug,
{
    /// Shows the children by key only, so formatting never walks the whole subtree.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("left", &self.left().map(Self::key))
            .field("right", &self.right().map(Self::key))
            .finish()
    }
}

impl<K> Node<K> {
    /// Construct a new, childless `Node` on the heap with the given `key`.
    pub(crate) fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of this node's left subtree, if any. Every key in it is less than
    /// [`key`](Self::key).
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of this node's right subtree, if any. Every key in it is greater than
    /// [`key`](Self::key).
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Link<K> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// The node holding the smallest key in the subtree rooted here.
    pub(crate) fn leftmost(&self) -> &Self {
        let mut current = self;
        while let Some(left) = current.left() {
            current = left;
        }
        current
    }

    /// The node holding the largest key in the subtree rooted here.
    pub(crate) fn rightmost(&self) -> &Self {
        let mut current = self;
        while let Some(right) = current.right() {
            current = right;
        }
        current
    }
}
