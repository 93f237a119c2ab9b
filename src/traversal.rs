//! Read-only walks over a [`Tree`] and the operations derived from them.
//!
//! A tree's *fringe* is the sequence of its leaves in the order a breadth-first walk meets them.
//! Two trees with different shapes, or even different values in their interior nodes, can share a
//! fringe.
//!
//! # Examples
//!
//! ```
//! use fringe::traversal::{fringe, has_same_fringe, prune};
//! use fringe::tree::Tree;
//!
//! let a: Tree<_> = [4, 2, 6, 1, 3, 5, 7].into_iter().collect();
//! let b: Tree<_> = [5, 2, 6, 1, 3, 7].into_iter().collect();
//!
//! assert_eq!(fringe(&a).into_iter().collect::<Vec<_>>(), [1, 3, 5, 7]);
//! assert_eq!(fringe(&b).into_iter().collect::<Vec<_>>(), [1, 3, 7]);
//! assert!(!has_same_fringe(&a, &b));
//!
//! // Pruning strips the leaves and leaves the original alone.
//! let pruned = prune(&a);
//! assert_eq!(pruned.iter().copied().collect::<Vec<_>>(), [2, 4, 6]);
//! assert_eq!(a.len(), 7);
//! ```

use std::collections::VecDeque;
use std::iter::FusedIterator;

use generational_arena::Index;
use tracing::{debug, instrument, trace};

use crate::list::SmartList;
use crate::tree::{NodeRef, Side, Tree};

/// Breadth-first iterator over the values of a [`Tree`]: shallower nodes first, left to right
/// within a level.
pub struct Levels<'a, T> {
    queue: VecDeque<NodeRef<'a, T>>,
}

impl<'a, T> Iterator for Levels<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node.value())
    }
}

impl<T> FusedIterator for Levels<'_, T> {}

/// Iterates `tree` breadth-first.
pub fn levels<T, C>(tree: &Tree<T, C>) -> Levels<'_, T> {
    Levels {
        queue: tree.root().into_iter().collect(),
    }
}

/// Calls `visit` on every value of `tree` breadth-first. Does nothing for an empty tree.
pub fn level_order<T, C, F>(tree: &Tree<T, C>, visit: F)
where
    F: FnMut(&T),
{
    levels(tree).for_each(visit);
}

/// Returns a new tree holding a copy of every node of `tree` that isn't a leaf, in the same
/// position it had in `tree`. Leaves are judged by the shape of `tree`, so only one layer is
/// removed: nodes that become leaves in the result stay.
///
/// The result shares nothing with `tree`.
#[instrument(level = "debug", skip_all)]
pub fn prune<T, C>(tree: &Tree<T, C>) -> Tree<T, C>
where
    T: Clone,
    C: Clone,
{
    fn copy_without_leaves<T, C>(
        src: NodeRef<'_, T>,
        dst: &mut Tree<T, C>,
        parent: Option<(Index, Side)>,
    ) where
        T: Clone,
    {
        if src.is_leaf() {
            return;
        }

        let copy = dst.graft(parent, src.value().clone());
        if let Some(left) = src.left() {
            copy_without_leaves(left, dst, Some((copy, Side::Left)));
        }
        if let Some(right) = src.right() {
            copy_without_leaves(right, dst, Some((copy, Side::Right)));
        }
    }

    let mut pruned = Tree::with_compare(tree.compare().clone());
    if let Some(root) = tree.root() {
        copy_without_leaves(root, &mut pruned, None);
    }

    debug!(
        kept = pruned.len(),
        dropped = tree.len() - pruned.len(),
        "pruned leaves"
    );
    pruned
}

/// Collects the leaves of `tree` in breadth-first order. Interior nodes are walked through but
/// not collected. An empty tree has an empty fringe.
pub fn fringe<T, C>(tree: &Tree<T, C>) -> SmartList<T>
where
    T: Clone,
{
    let mut leaves = SmartList::new();
    let mut queue: VecDeque<_> = tree.root().into_iter().collect();

    while let Some(node) = queue.pop_front() {
        if node.is_leaf() {
            leaves.push_back(node.value().clone());
        } else {
            queue.extend(node.left());
            queue.extend(node.right());
        }
    }

    trace!(leaves = leaves.len(), "collected fringe");
    leaves
}

/// Whether `a` and `b` have fringes of the same length that agree element by element.
///
/// The trees may be ordered differently; only their leaves are compared.
pub fn has_same_fringe<T, A, B>(a: &Tree<T, A>, b: &Tree<T, B>) -> bool
where
    T: Clone + PartialEq,
{
    let (fa, fb) = (fringe(a), fringe(b));
    fa.len() == fb.len() && fa.iter().zip(fb.iter()).all(|(x, y)| x == y)
}
