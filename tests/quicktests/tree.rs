use ordered_tree::node::Node;
use ordered_tree::tree::Tree;

use std::collections::{BTreeSet, HashSet};

use quickcheck::{quickcheck, TestResult};

fn tree_of(xs: &[i8]) -> Tree<i8> {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(*x);
    }
    tree
}

/// Checks the ordering invariant node by node (rather than through a traversal) by carrying the
/// open interval every key of a subtree must fall in.
fn is_search_tree(tree: &Tree<i8>) -> bool {
    let mut pending: Vec<(&Node<i8>, Option<i8>, Option<i8>)> =
        tree.root().map(|root| (root, None, None)).into_iter().collect();
    while let Some((node, low, high)) = pending.pop() {
        let key = *node.key();
        if low.map_or(false, |low| key <= low) || high.map_or(false, |high| key >= high) {
            return false;
        }
        pending.extend(node.left().map(|left| (left, low, Some(key))));
        pending.extend(node.right().map(|right| (right, Some(key), high)));
    }
    true
}

/// Counts nodes down to the nearest missing child, recursing into both subtrees.
fn shortest_path(node: Option<&Node<i8>>) -> usize {
    match node {
        None => 0,
        Some(node) => 1 + shortest_path(node.left()).min(shortest_path(node.right())),
    }
}

/// Counts nodes down to the deepest leaf, recursing into both subtrees.
fn longest_path(node: Option<&Node<i8>>) -> usize {
    match node {
        None => 0,
        Some(node) => 1 + longest_path(node.left()).max(longest_path(node.right())),
    }
}

quickcheck! {
    fn in_order_is_sorted_set_of_inserted(xs: Vec<i8>) -> bool {
        let tree = tree_of(&xs);
        let expected: Vec<i8> = xs.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();

        is_search_tree(&tree)
            && tree.len() == expected.len()
            && tree.dfs_in_order().into_iter().copied().collect::<Vec<_>>() == expected
    }

    fn contains(xs: Vec<i8>) -> bool {
        let tree = tree_of(&xs);

        xs.iter().all(|x| {
            tree.find(x).map(Node::key) == Some(x) && tree.find_recursive(x).map(Node::key) == Some(x)
        })
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree = tree_of(&xs);
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.find(x).is_none() && tree.find_recursive(x).is_none())
    }

    fn duplicate_insert_is_idempotent(xs: Vec<i8>) -> TestResult {
        let Some(&again) = xs.first() else {
            return TestResult::discard();
        };
        let mut tree = tree_of(&xs);
        let before: Vec<i8> = tree.dfs_pre_order().into_iter().copied().collect();
        let len = tree.len();

        tree.insert(again).insert_recursive(again);
        let after: Vec<i8> = tree.dfs_pre_order().into_iter().copied().collect();

        TestResult::from_bool(before == after && tree.len() == len)
    }

    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = tree_of(&xs);
        for delete in &deletes {
            tree.remove(delete);
        }

        let mut still_present = xs;
        for delete in &deletes {
            // We may have inserted the same key multiple times - delete each one.
            while let Some(pos) = still_present.iter().position(|x| x == delete) {
                still_present.swap_remove(pos);
            }
        }

        is_search_tree(&tree)
            && deletes.iter().all(|x| tree.find(x).is_none())
            && still_present.iter().all(|x| tree.find(x).is_some())
    }

    fn remove_returns_key_once(xs: Vec<i8>, key: i8) -> bool {
        let mut tree = tree_of(&xs);
        let len = tree.len();
        let present = xs.contains(&key);

        let first = tree.remove(&key);
        let second = tree.remove(&key);

        first == present.then(|| key)
            && second.is_none()
            && tree.len() == if present { len - 1 } else { len }
            && is_search_tree(&tree)
    }

    fn depths_match_recursive_walk(xs: Vec<i8>) -> bool {
        let tree = tree_of(&xs);
        let shortest = shortest_path(tree.root());
        let longest = longest_path(tree.root());

        tree.min_depth() == shortest
            && tree.max_depth() == longest
            && tree.is_balanced() == (longest - shortest <= 1)
    }
}

#[test]
fn property_examples() {
    assert!(!tree_of(&[1, 2, 3]).is_balanced());
    assert!(tree_of(&[2, 1, 3]).is_balanced());

    let lopsided = tree_of(&[5, 3, 8, 1, 4, 0]);
    assert_eq!(lopsided.min_depth(), shortest_path(lopsided.root()));
    assert_eq!(lopsided.max_depth(), longest_path(lopsided.root()));
    assert!(!lopsided.is_balanced());

    assert_eq!(tree_of(&[5, 3, 8, 1, 4, 7, 9]).find_second_highest(), Some(&8));
    assert_eq!(tree_of(&[5]).find_second_highest(), None);
    assert_eq!(tree_of(&[]).find_second_highest(), None);
}

#[test]
fn empty_tree_is_safe() {
    let tree = tree_of(&[]);

    assert!(tree.dfs_pre_order().is_empty());
    assert!(tree.dfs_in_order().is_empty());
    assert!(tree.dfs_post_order().is_empty());
    assert!(tree.bfs().is_empty());
    assert!(tree.is_balanced());
}
