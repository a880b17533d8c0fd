use crate::node::Node;

/// An owned, possibly empty, child slot. The tree owns its root through one of these and every
/// node owns its two children through them.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// The outcome of walking down the tree to place a new key.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Insertion {
    /// An empty slot was found and a new leaf now holds the key.
    Inserted,
    /// A node already holds an equal key. The tree is unchanged.
    Duplicate,
}

/// Which child slot of a node a descent continues into.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}
