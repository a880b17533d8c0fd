//! Queries about the shape of the tree and the keys at its edges.

use std::collections::VecDeque;

use super::Tree;
use crate::node::Node;

impl<K> Tree<K> {
    /// The smallest key in the tree.
    pub fn min(&self) -> Option<&K> {
        self.root().map(|root| root.leftmost().key())
    }

    /// The largest key in the tree.
    pub fn max(&self) -> Option<&K> {
        self.root().map(|root| root.rightmost().key())
    }

    /// The number of nodes on the longest path down from the root. An empty tree has depth 0.
    pub fn max_depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(&Node<K>, usize)> =
            self.root().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(node.left().map(|left| (left, depth + 1)));
            pending.extend(node.right().map(|right| (right, depth + 1)));
        }
        deepest
    }

    /// The number of nodes on the shortest path down from the root to a missing child. A path
    /// ends at the first node lacking either child, so a root with a single child has a minimum
    /// depth of 1. An empty tree has depth 0.
    pub fn min_depth(&self) -> usize {
        // Level order, so the first node found with an empty slot is the shallowest one.
        let mut queue: VecDeque<(&Node<K>, usize)> =
            self.root().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = queue.pop_front() {
            match (node.left(), node.right()) {
                (Some(left), Some(right)) => {
                    queue.push_back((left, depth + 1));
                    queue.push_back((right, depth + 1));
                }
                _ => return depth,
            }
        }
        0
    }

    /// Whether the tree's [`max_depth`](Self::max_depth) and [`min_depth`](Self::min_depth)
    /// differ by at most one. This is a single measure over the whole tree rather than a check at
    /// every node. An empty tree is balanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::Tree;
    ///
    /// let mut chain = Tree::new();
    /// chain.insert(1).insert(2).insert(3);
    /// assert!(!chain.is_balanced());
    ///
    /// let mut bushy = Tree::new();
    /// bushy.insert(2).insert(1).insert(3);
    /// assert!(bushy.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        self.max_depth() - self.min_depth() <= 1
    }

    /// The second largest key in the tree, or `None` if the tree has fewer than two nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.find_second_highest(), None);
    ///
    /// tree.insert(5);
    /// assert_eq!(tree.find_second_highest(), None);
    ///
    /// tree.insert(3).insert(8).insert(1).insert(4).insert(7).insert(9);
    /// assert_eq!(tree.find_second_highest(), Some(&8));
    /// ```
    pub fn find_second_highest(&self) -> Option<&K> {
        let root = self.root()?;
        if root.is_leaf() {
            return None;
        }

        let mut parent = None;
        let mut largest = root;
        while let Some(right) = largest.right() {
            parent = Some(largest);
            largest = right;
        }

        match largest.left() {
            Some(left) => Some(left.rightmost().key()),
            None => parent.map(Node::key),
        }
    }
}
