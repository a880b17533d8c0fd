//! Property tests against the public API of [`ordered_tree::tree::Tree`].

mod tree;
