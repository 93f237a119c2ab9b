use fringe::traversal::levels;
use fringe::{fringe, has_same_fringe, prune, Tree};

use crate::Op;

/// Applies the operations to a tree, returning it along with the values in
/// the order they were first inserted.
fn do_ops<T>(ops: &[Op<T>]) -> (Tree<T>, Vec<T>)
where
    T: Ord + Clone,
{
    let mut tree = Tree::new();
    let mut firsts = Vec::new();
    for op in ops {
        match op {
            Op::Insert(x) => {
                if tree.insert(x.clone()) {
                    firsts.push(x.clone());
                }
            }
            Op::InsertTwice(x) => {
                if tree.insert(x.clone()) {
                    firsts.push(x.clone());
                }
                assert!(!tree.insert(x.clone()));
            }
        }
    }

    (tree, firsts)
}

fn leaves_and_internals<T>(tree: &Tree<T>) -> (usize, usize) {
    let mut stack: Vec<_> = tree.root().into_iter().collect();
    let (mut leaves, mut internals) = (0, 0);
    while let Some(node) = stack.pop() {
        if node.is_leaf() {
            leaves += 1;
        } else {
            internals += 1;
        }
        stack.extend(node.left());
        stack.extend(node.right());
    }
    (leaves, internals)
}

quickcheck::quickcheck! {
    fn inorder_is_strictly_ascending(ops: Vec<Op<i8>>) -> bool {
        let (tree, _) = do_ops(&ops);
        let mut values = Vec::new();
        tree.inorder(|x| values.push(*x));

        values.windows(2).all(|w| w[0] < w[1])
    }
}

quickcheck::quickcheck! {
    fn duplicate_inserts_are_idempotent(ops: Vec<Op<i8>>) -> bool {
        let (tree, firsts) = do_ops(&ops);
        let once: Tree<_> = firsts.into_iter().collect();

        // Same insertion order of distinct values gives the same shape.
        levels(&tree).eq(levels(&once)) && has_same_fringe(&tree, &once)
    }
}

quickcheck::quickcheck! {
    fn fringe_counts_every_leaf(ops: Vec<Op<i8>>) -> bool {
        let (tree, _) = do_ops(&ops);
        let (leaves, internals) = leaves_and_internals(&tree);

        fringe(&tree).len() == leaves && prune(&tree).len() == internals
    }
}

quickcheck::quickcheck! {
    fn pruning_eventually_empties(ops: Vec<Op<i8>>) -> bool {
        let (mut tree, _) = do_ops(&ops);
        // Every prune removes at least one node from a non-empty tree.
        for _ in 0..=tree.len() {
            if tree.is_empty() {
                return true;
            }
            let before = tree.len();
            tree = prune(&tree);
            if tree.len() >= before {
                return false;
            }
        }
        tree.is_empty()
    }
}

#[test]
fn sample_trees() {
    let t: Tree<_> = [14, 11, 17, 9, 13, 53].into_iter().collect();
    let u: Tree<_> = [11, 9, 13, 14, 17, 53].into_iter().collect();

    assert_eq!(fringe(&t).into_iter().collect::<Vec<_>>(), [9, 13, 53]);
    assert_eq!(fringe(&u).into_iter().collect::<Vec<_>>(), [9, 53]);
    assert!(!has_same_fringe(&t, &u));
    assert!(has_same_fringe(&t, &t.clone()));
}
