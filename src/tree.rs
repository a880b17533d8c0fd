//! An unbalanced BST over keys alone. Nodes are owned strictly from parent to child: the tree
//! owns its root and every node owns its children, with no parent pointers.
//!
//! Insertion and search each come in two flavours, an iterative descent ([`Tree::insert`],
//! [`Tree::find`]) and a recursive one ([`Tree::insert_recursive`], [`Tree::find_recursive`]).
//! Both flavours build and read identical trees.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.find(&1).is_none());
//!
//! tree.insert(5).insert(3).insert(8);
//! assert_eq!(tree.find(&3).map(|node| *node.key()), Some(3));
//!
//! // Inserting an existing key does nothing.
//! tree.insert_recursive(3);
//! assert_eq!(tree.len(), 3);
//!
//! assert_eq!(tree.dfs_in_order(), [&3, &5, &8]);
//! assert_eq!(tree.bfs(), [&5, &3, &8]);
//!
//! // Removing a node returns its key.
//! assert_eq!(tree.remove(&5), Some(5));
//! assert!(tree.find(&5).is_none());
//! assert_eq!(tree.dfs_in_order(), [&3, &8]);
//! ```

mod shape;
mod traverse;

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::node::Node;
use crate::util::{Insertion, Link, Side};

/// An unbalanced Binary Search Tree. This can be used for inserting, finding, and deleting keys.
/// Equal keys are never stored twice.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K> Clone for Tree<K>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        let mut root = None;
        {
            // Each source node is paired with the empty slot its copy goes into.
            let mut pending: Vec<(&Node<K>, &mut Link<K>)> = Vec::new();
            if let Some(source) = self.root() {
                pending.push((source, &mut root));
            }
            while let Some((source, slot)) = pending.pop() {
                let node = slot.insert(Node::new_boxed(source.key.clone()));
                if let Some(left) = source.left() {
                    pending.push((left, &mut node.left));
                }
                if let Some(right) = source.right() {
                    pending.push((right, &mut node.right));
                }
            }
        }
        Self {
            root,
            len: self.len,
        }
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Pre-order is enough to rebuild the shape and, unlike the nested nodes, can be printed
        // without recursing.
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("pre_order", &self.dfs_pre_order())
            .finish()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The top node of the tree, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Removes every node from the tree.
    ///
    /// Nodes are unlinked one at a time so that dropping a tall, list shaped tree doesn't recurse
    /// once per level.
    pub fn clear(&mut self) {
        let mut pending: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.len = 0;
    }

    /// Inserts the key into the tree by walking down from the root in a loop. Inserting a key that
    /// is already present leaves the tree unchanged. Returns the tree so calls can be chained.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2).insert(1).insert(3).insert(1);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.dfs_pre_order(), [&2, &1, &3]);
    /// ```
    pub fn insert(&mut self, key: K) -> &mut Self
    where
        K: Ord,
    {
        let outcome = Self::insert_iterative(&mut self.root, key);
        self.record(outcome)
    }

    /// Inserts the key into the tree by recursing down from the root. This builds exactly the same
    /// tree as [`insert`](Self::insert) for the same sequence of keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::Tree;
    ///
    /// let mut looped = Tree::new();
    /// let mut recursed = Tree::new();
    /// for key in [4, 2, 6, 1, 3, 5, 7] {
    ///     looped.insert(key);
    ///     recursed.insert_recursive(key);
    /// }
    ///
    /// assert_eq!(looped.dfs_pre_order(), recursed.dfs_pre_order());
    /// ```
    pub fn insert_recursive(&mut self, key: K) -> &mut Self
    where
        K: Ord,
    {
        let outcome = Self::insert_from(&mut self.root, key);
        self.record(outcome)
    }

    /// Potentially finds the node holding the given key by walking down from the root in a loop.
    /// If no node has the key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1).insert(2);
    ///
    /// let node = tree.find(&1).unwrap();
    /// assert_eq!(node.key(), &1);
    /// assert_eq!(node.right().map(|right| *right.key()), Some(2));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(node),
            };
        }
        None
    }

    /// Potentially finds the node holding the given key by recursing down from the root. Always
    /// agrees with [`find`](Self::find).
    pub fn find_recursive(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        Self::find_from(self.root(), key)
    }

    /// Whether a node holds the given key.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.find(key).is_some()
    }

    /// Deletes the node containing the given key from the tree and returns the key. If the tree
    /// does not contain a node with the key, nothing happens and `None` is returned.
    ///
    /// A node with two children is not unlinked itself. Instead it takes over the key of its
    /// in-order successor (the smallest key in its right subtree) and the successor is unlinked.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(5).insert(3).insert(8).insert(7);
    ///
    /// assert_eq!(tree.remove(&5), Some(5));
    /// assert_eq!(tree.root().map(|root| *root.key()), Some(7));
    /// assert_eq!(tree.remove(&5), None);
    /// assert_eq!(tree.len(), 3);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<K>
    where
        K: Ord,
    {
        let removed = Self::slot_of(&mut self.root, key).and_then(Self::unlink);
        match removed {
            Some(_) => self.len -= 1,
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!(len = self.len, "remove: key not found");
            }
        }
        removed
    }

    fn record(&mut self, outcome: Insertion) -> &mut Self {
        match outcome {
            Insertion::Inserted => {
                self.len += 1;
                #[cfg(feature = "tracing")]
                tracing::trace!(len = self.len, "insert: attached new leaf");
            }
            Insertion::Duplicate => {
                #[cfg(feature = "tracing")]
                tracing::trace!(len = self.len, "insert: duplicate key rejected");
            }
        }
        self
    }

    fn insert_iterative(mut slot: &mut Link<K>, key: K) -> Insertion
    where
        K: Ord,
    {
        while let Some(node) = slot {
            slot = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return Insertion::Duplicate,
            };
        }
        *slot = Some(Node::new_boxed(key));
        Insertion::Inserted
    }

    /// Recursive helper for [`insert_recursive`](Self::insert_recursive), starting from `slot`.
    fn insert_from(slot: &mut Link<K>, key: K) -> Insertion
    where
        K: Ord,
    {
        match slot {
            None => {
                *slot = Some(Node::new_boxed(key));
                Insertion::Inserted
            }
            Some(node) => match key.cmp(&node.key) {
                Ordering::Less => Self::insert_from(&mut node.left, key),
                Ordering::Greater => Self::insert_from(&mut node.right, key),
                Ordering::Equal => Insertion::Duplicate,
            },
        }
    }

    /// Recursive helper for [`find_recursive`](Self::find_recursive), starting from `node`.
    fn find_from<'a>(node: Option<&'a Node<K>>, key: &K) -> Option<&'a Node<K>>
    where
        K: Ord,
    {
        let node = node?;
        match key.cmp(&node.key) {
            Ordering::Less => Self::find_from(node.left(), key),
            Ordering::Greater => Self::find_from(node.right(), key),
            Ordering::Equal => Some(node),
        }
    }

    /// Walks down from `slot` and returns the slot owning the node with the given key. The
    /// returned slot is always occupied.
    fn slot_of<'a>(mut slot: &'a mut Link<K>, key: &K) -> Option<&'a mut Link<K>>
    where
        K: Ord,
    {
        loop {
            let ordering = key.cmp(&slot.as_deref()?.key);
            let side = match ordering {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return Some(slot),
            };
            slot = slot.as_mut()?.child_mut(side);
        }
    }

    /// Removes the node owned by `slot`, keeping the subtree below it a valid BST, and returns
    /// the removed key.
    fn unlink(slot: &mut Link<K>) -> Option<K> {
        let target = slot.as_mut()?;
        if target.left.is_some() && target.right.is_some() {
            #[cfg(feature = "tracing")]
            tracing::trace!("remove: two children, splicing out in-order successor");
            let successor = Self::take_leftmost(&mut target.right)?;
            return Some(mem::replace(&mut target.key, successor.key));
        }

        let mut target = slot.take()?;
        #[cfg(feature = "tracing")]
        tracing::trace!(leaf = target.is_leaf(), "remove: node unlinked");
        // At most one child is present. It takes the removed node's place.
        *slot = target.left.take().or_else(|| target.right.take());
        Some(target.key)
    }

    /// Unlinks the leftmost node below `slot`, replacing it with its right child (it has no left
    /// child by construction).
    fn take_leftmost(mut slot: &mut Link<K>) -> Option<Box<Node<K>>> {
        while slot.as_ref()?.left.is_some() {
            slot = &mut slot.as_mut()?.left;
        }
        let mut leftmost = slot.take()?;
        *slot = leftmost.right.take();
        Some(leftmost)
    }
}
