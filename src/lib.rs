//! This crate exposes a plain, unbalanced Binary Search Tree (BST)
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the key that
//! was inserted and will sometimes have child `Node`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is defined
//! as the longest path from the root `Node` to a leaf `Node`). The tree in this
//! crate does nothing to limit its height, so inserting keys in sorted order
//! degrades it into a linked list. [`Tree::is_balanced`](tree::Tree::is_balanced)
//! reports when that has happened.
//!
//! BSTs also naturally support sorted iteration by visiting the left subtree,
//! then the subtree root, then the right subtree. This is the in-order
//! traversal. Pre-order, post-order, and breadth-first traversals are also
//! provided.
//!
//! ## Features
//!
//! - `tracing`: emit `trace` level events for structural changes (nodes
//!   attached, duplicates rejected, which removal case was taken).

#![deny(missing_docs)]

pub mod node;
pub mod tree;

mod util;
