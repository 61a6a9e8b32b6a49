use adt::unbalanced::{Node, Tree};
use quickcheck_macros::quickcheck;

use std::collections::BTreeSet;

use crate::Op;

/// Checks every value is between its ancestors. Returns how many nodes were visited.
fn check_node(node: &Node<i8>, lower: Option<i8>, upper: Option<i8>) -> usize {
    assert!(lower.map_or(true, |lower| *node.value() > lower));
    assert!(upper.map_or(true, |upper| *node.value() < upper));

    1 + node
        .left()
        .map_or(0, |l| check_node(l, lower, Some(*node.value())))
        + node
            .right()
            .map_or(0, |r| check_node(r, Some(*node.value()), upper))
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    for op in ops {
        match op {
            Op::Insert(v) => assert_eq!(tree.insert(v), set.insert(v)),
            Op::Remove(v) => assert_eq!(tree.remove(&v), set.take(&v)),
        }
        let count = tree.root().map_or(0, |root| check_node(root, None, None));
        assert_eq!(count, tree.len());
    }

    tree.iter().eq(set.iter())
}

#[quickcheck]
fn successor_replaces_two_child_root(xs: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    let Some(root) = tree.root() else {
        return true;
    };
    let (Some(_), Some(right)) = (root.left(), root.right()) else {
        return true;
    };

    // Nothing is rotated here so the successor must land exactly where the root was.
    let mut successor = right;
    while let Some(left) = successor.left() {
        successor = left;
    }
    let expected = *successor.value();
    let old_root = *root.value();

    tree.remove(&old_root);
    tree.root().map(|n| *n.value()) == Some(expected)
}
