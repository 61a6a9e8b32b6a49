use adt::avl::{Node, Tree};
use quickcheck_macros::quickcheck;

use std::collections::BTreeSet;

use crate::Op;

/// Walks every node through the public inspection API and checks that values are ordered, cached
/// heights are right and no node is out of balance. Returns the height of `node`.
fn check_node(node: &Node<i8>, lower: Option<i8>, upper: Option<i8>) -> usize {
    assert!(lower.map_or(true, |lower| *node.value() > lower));
    assert!(upper.map_or(true, |upper| *node.value() < upper));

    let left = node
        .left()
        .map_or(0, |l| check_node(l, lower, Some(*node.value())));
    let right = node
        .right()
        .map_or(0, |r| check_node(r, Some(*node.value()), upper));

    assert_eq!(node.height(), left.max(right) + 1);
    assert!(left.abs_diff(right) <= 1);
    assert_eq!(node.is_leaf(), left == 0 && right == 0);
    node.height()
}

fn check(tree: &Tree<i8>) {
    let height = tree.root().map_or(0, |root| check_node(root, None, None));
    assert_eq!(height, tree.height());
}

/// Applies a set of operations to a tree and a `BTreeSet`, checking the tree's structure after
/// each one. This way we can ensure that after a random smattering of inserts and deletes we have
/// the same set of values in both.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, set: &mut BTreeSet<i8>) {
    for op in ops {
        match *op {
            Op::Insert(v) => {
                tree.insert(v);
                set.insert(v);
            }
            Op::Remove(v) => {
                tree.remove(&v);
                set.remove(&v);
            }
        }
        check(tree);
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    (i8::MIN..=i8::MAX).all(|v| tree.contains(&v) == set.contains(&v))
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();

    let mut visited = Vec::new();
    tree.in_order(|v| visited.push(*v));
    visited.windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn traversals_visit_every_value_once(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let expected: BTreeSet<i8> = xs.into_iter().collect();

    let mut pre = Vec::new();
    tree.pre_order(|v| pre.push(*v));
    let mut post = Vec::new();
    tree.post_order(|v| post.push(*v));

    pre.len() == expected.len()
        && post.len() == expected.len()
        && pre.iter().copied().collect::<BTreeSet<i8>>() == expected
        && post.iter().copied().collect::<BTreeSet<i8>>() == expected
        // The root comes first in pre-order and last in post-order.
        && pre.first() == tree.root().map(Node::value)
        && post.last() == tree.root().map(Node::value)
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: BTreeSet<_> = xs.into_iter().collect();

    nots.iter()
        .filter(|x| !added.contains(x))
        .all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.remove(delete);
        check(&tree);
    }

    let mut still_present = xs;
    // We may have inserted the same value multiple times - none of them should remain.
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| !tree.contains(x)) && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn removing_twice_changes_nothing(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    tree.remove(&x);

    let mut before = Vec::new();
    tree.pre_order(|v| before.push(*v));
    let second = tree.remove(&x);
    let mut after = Vec::new();
    tree.pre_order(|v| after.push(*v));

    second.is_none() && before == after
}
