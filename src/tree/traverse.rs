//! Whole-tree traversals. Every traversal visits each node exactly once and returns the visited
//! keys eagerly. They walk with an explicit work list rather than recursing, so a degenerate tree
//! can't exhaust the call stack.

use std::collections::VecDeque;

use super::Tree;
use crate::node::Node;

impl<K> Tree<K> {
    /// Visits each node before its left subtree and then its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(5).insert(3).insert(8).insert(1).insert(4);
    ///
    /// assert_eq!(tree.dfs_pre_order(), [&5, &3, &1, &4, &8]);
    /// ```
    pub fn dfs_pre_order(&self) -> Vec<&K> {
        let mut visited = Vec::with_capacity(self.len);
        let mut pending: Vec<&Node<K>> = self.root().into_iter().collect();
        while let Some(node) = pending.pop() {
            visited.push(&node.key);
            // Right is pushed first so the left subtree is popped first.
            pending.extend(node.right());
            pending.extend(node.left());
        }
        visited
    }

    /// Visits each node between its left and right subtrees. Since every key on the left is
    /// smaller and every key on the right is larger, this yields the keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(5).insert(3).insert(8).insert(1).insert(4);
    ///
    /// assert_eq!(tree.dfs_in_order(), [&1, &3, &4, &5, &8]);
    /// ```
    pub fn dfs_in_order(&self) -> Vec<&K> {
        let mut visited = Vec::with_capacity(self.len);
        let mut pending: Vec<&Node<K>> = Vec::new();
        let mut current = self.root();
        loop {
            while let Some(node) = current {
                pending.push(node);
                current = node.left();
            }
            match pending.pop() {
                Some(node) => {
                    visited.push(&node.key);
                    current = node.right();
                }
                None => break,
            }
        }
        visited
    }

    /// Visits each node after its left subtree and then its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(5).insert(3).insert(8).insert(1).insert(4);
    ///
    /// assert_eq!(tree.dfs_post_order(), [&1, &4, &3, &8, &5]);
    /// ```
    pub fn dfs_post_order(&self) -> Vec<&K> {
        // Node, right, left is exactly post-order backwards.
        let mut visited = Vec::with_capacity(self.len);
        let mut pending: Vec<&Node<K>> = self.root().into_iter().collect();
        while let Some(node) = pending.pop() {
            visited.push(&node.key);
            pending.extend(node.left());
            pending.extend(node.right());
        }
        visited.reverse();
        visited
    }

    /// Visits the nodes level by level from the root down, left to right within a level.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(5).insert(3).insert(8).insert(1).insert(4);
    ///
    /// assert_eq!(tree.bfs(), [&5, &3, &8, &1, &4]);
    /// ```
    pub fn bfs(&self) -> Vec<&K> {
        let mut visited = Vec::with_capacity(self.len);
        let mut queue: VecDeque<&Node<K>> = self.root().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            visited.push(&node.key);
            queue.extend(node.left());
            queue.extend(node.right());
        }
        visited
    }
}
