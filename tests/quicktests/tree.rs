use cmp_bst::{Node, Tree};

use std::collections::HashSet;

use crate::Op;

fn lt(a: &i8, b: &i8) -> bool {
    a < b
}

fn new_tree(allow_duplicates: bool) -> Tree<i8> {
    Tree::with_duplicates(lt, allow_duplicates)
}

/// Collects every node of the tree without recursing.
fn nodes<T>(tree: &Tree<T>) -> Vec<&Node<T>> {
    let mut stack: Vec<&Node<T>> = tree.root().into_iter().collect();
    let mut all = Vec::new();
    while let Some(node) = stack.pop() {
        stack.extend(node.left());
        stack.extend(node.right());
        all.push(node);
    }
    all
}

/// Checks that every subtree only holds values inside the bounds its
/// ancestors imply: strictly below on the left, at or above on the right.
fn ordered(node: &Node<i8>, low: Option<i8>, high: Option<i8>) -> bool {
    let value = *node.value();
    low.map_or(true, |low| value >= low)
        && high.map_or(true, |high| value < high)
        && node.left().map_or(true, |l| ordered(l, low, Some(value)))
        && node.right().map_or(true, |r| ordered(r, Some(value), high))
}

/// Applies a set of operations to a tree and a set so that after a random
/// smattering of inserts and searches they still agree.
fn do_ops(ops: &[Op<i8>], bst: &mut Tree<i8>, set: &mut HashSet<i8>) -> bool {
    for op in ops {
        match op {
            Op::Insert(x) => {
                bst.insert(*x);
                set.insert(*x);
            }
            Op::Search(x) => {
                if bst.search(x).is_some() != set.contains(x) {
                    return false;
                }
            }
        }
    }
    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>, allow_duplicates: bool) -> bool {
    let mut tree = new_tree(allow_duplicates);
    let mut set = HashSet::new();

    do_ops(&ops, &mut tree, &mut set) && set.iter().all(|x| tree.search(x) == Some(x))
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = new_tree(true);
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.search(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = new_tree(true);
    for x in &xs {
        tree.insert(*x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x).is_none())
}

#[quickcheck]
fn comparator_order_holds(xs: Vec<i8>, allow_duplicates: bool) -> bool {
    let mut tree = new_tree(allow_duplicates);
    for x in &xs {
        tree.insert(*x);
    }

    tree.root().map_or(true, |root| ordered(root, None, None))
}

#[quickcheck]
fn reinserting_is_a_no_op_without_duplicates(xs: Vec<i8>) -> bool {
    let mut tree = new_tree(false);
    for x in &xs {
        tree.insert(*x);
    }
    let before = nodes(&tree).len();

    for x in &xs {
        tree.insert(*x);
    }

    before == nodes(&tree).len() && before == xs.iter().collect::<HashSet<_>>().len()
}

#[quickcheck]
fn unvisit_nodes_clears_everything(xs: Vec<i8>, marks: Vec<bool>) -> bool {
    let mut tree = new_tree(true);
    for x in &xs {
        tree.insert(*x);
    }

    // Visit nodes on the leftmost path according to `marks`.
    let mut node = tree.root_mut();
    let mut marks = marks.into_iter();
    while let Some(n) = node {
        if marks.next().unwrap_or(false) {
            n.visit();
        }
        node = n.left_mut();
    }

    tree.unvisit_nodes();
    nodes(&tree).iter().all(|n| !n.is_visited())
}

#[test]
fn unvisit_nodes_on_empty_tree() {
    let mut tree = new_tree(true);
    tree.unvisit_nodes();

    assert!(tree.is_empty());
    assert!(nodes(&tree).is_empty());
}

#[test]
fn visit_leaves_neighbours_alone() {
    let mut tree = new_tree(true);
    tree.insert(5).insert(3).insert(8).insert(1);

    tree.root_mut()
        .and_then(Node::left_mut)
        .expect("3 is the root's left child")
        .visit();

    let visited: Vec<i8> = nodes(&tree)
        .into_iter()
        .filter(|n| n.is_visited())
        .map(|n| *n.value())
        .collect();
    assert_eq!(visited, vec![3]);
}

#[test]
fn duplicate_pair_keeps_one_node() {
    let mut tree = new_tree(false);
    tree.insert(5).insert(5);

    assert_eq!(tree.search(&5), Some(&5));
    assert_eq!(nodes(&tree).len(), 1);
}

#[test]
fn adversarial_order_drops_cleanly() {
    // Build a 100_000 node chain by hand; inserting one by one would recurse
    // once per level.
    let mut tree: Tree<u32> = Tree::new(|a: &u32, b: &u32| a < b);
    let mut slot = tree.root_link_mut();
    for x in 0..100_000 {
        slot = slot.insert(Box::new(Node::new(x))).right_link_mut();
    }

    assert_eq!(tree.root().map(|n| *n.value()), Some(0));
    drop(tree);
}
