//! An unbalanced Binary Search Tree whose nodes live in an arena owned by the tree.
//!
//! Children and parents are arena handles rather than pointers, so a node never owns another node
//! and the parent back-reference can't dangle. Dropping the tree drops the arena and with it every
//! node.
//!
//! # Examples
//!
//! ```
//! use fringe::tree::Tree;
//!
//! let mut tree = Tree::new();
//! for x in [14, 11, 17, 9, 13, 53] {
//!     tree.insert(x);
//! }
//!
//! // Inserting a value that is already present changes nothing.
//! assert!(!tree.insert(13));
//!
//! let root = tree.root().unwrap();
//! assert_eq!(root.value(), &14);
//! assert_eq!(root.left().map(|n| *n.value()), Some(11));
//!
//! let mut sorted = Vec::new();
//! tree.inorder(|x| sorted.push(*x));
//! assert_eq!(sorted, [9, 11, 13, 14, 17, 53]);
//! ```

use std::fmt;

use generational_arena::{Arena, Index};
use tracing::trace;

/// The ordering a [`Tree`] places its values by. `less(a, b)` must be a strict weak order: when
/// neither `less(a, b)` nor `less(b, a)` holds the values are considered equal.
pub trait Compare<T: ?Sized> {
    /// Whether `a` orders strictly before `b`.
    fn less(&self, a: &T, b: &T) -> bool;
}

/// Orders values by their [`Ord`] implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NaturalOrder;

impl<T> Compare<T> for NaturalOrder
where
    T: Ord + ?Sized,
{
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

impl<T, F> Compare<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
{
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Which child slot of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

#[derive(Clone)]
struct Node<T> {
    value: T,
    left: Option<Index>,
    right: Option<Index>,
    parent: Option<Index>,
}

impl<T> Node<T> {
    fn new(value: T, parent: Option<Index>) -> Self {
        Self {
            value,
            left: None,
            right: None,
            parent,
        }
    }

    fn child(&self, side: Side) -> Option<Index> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Option<Index> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// A Binary Search Tree with no balancing. Values are placed by the tree's [`Compare`]
/// implementation and duplicates are never stored.
#[derive(Clone)]
pub struct Tree<T, C = NaturalOrder> {
    nodes: Arena<Node<T>>,
    root: Option<Index>,
    compare: C,
}

impl<T, C> Default for Tree<T, C>
where
    C: Default,
{
    fn default() -> Self {
        Self::with_compare(C::default())
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree` ordered by [`Ord`].
    pub fn new() -> Self {
        Self::with_compare(NaturalOrder)
    }
}

impl<T, C> Tree<T, C> {
    /// Generates a new, empty `Tree` ordered by `compare`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fringe::tree::Tree;
    ///
    /// let mut tree = Tree::with_compare(|a: &i32, b: &i32| a > b);
    /// tree.extend([1, 3, 2]);
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
    /// ```
    pub fn with_compare(compare: C) -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            compare,
        }
    }

    /// Builds a tree ordered by `compare` by inserting each value in turn.
    pub fn from_iter_with<I>(iter: I, compare: C) -> Self
    where
        I: IntoIterator<Item = T>,
        C: Compare<T>,
    {
        let mut tree = Self::with_compare(compare);
        tree.extend(iter);
        tree
    }

    /// The ordering this tree places values by.
    pub fn compare(&self) -> &C {
        &self.compare
    }

    /// The number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if the tree has one.
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.root.map(|index| self.node(index))
    }

    /// Inserts `value` unless an equal value is already present. Returns whether a node was
    /// added.
    ///
    /// There's no rebalancing so inserting values in sorted order builds a tree as deep as it
    /// is long.
    pub fn insert(&mut self, value: T) -> bool
    where
        C: Compare<T>,
    {
        let Some(mut current) = self.root else {
            self.graft(None, value);
            return true;
        };

        loop {
            let node = &self.nodes[current];
            let side = if self.compare.less(&value, &node.value) {
                Side::Left
            } else if self.compare.less(&node.value, &value) {
                Side::Right
            } else {
                trace!("ignoring duplicate insert");
                return false;
            };

            match node.child(side) {
                Some(child) => current = child,
                None => {
                    self.graft(Some((current, side)), value);
                    return true;
                }
            }
        }
    }

    /// Whether a value equal to `value` is in the tree.
    pub fn contains(&self, value: &T) -> bool
    where
        C: Compare<T>,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = if self.compare.less(value, node.value()) {
                node.left()
            } else if self.compare.less(node.value(), value) {
                node.right()
            } else {
                return true;
            };
        }
        false
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<_> = self.root().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }
        height
    }

    /// Calls `visit` on every value in ascending order. Recurses once per level of the tree.
    pub fn inorder<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        fn walk<T, F>(node: NodeRef<'_, T>, visit: &mut F)
        where
            F: FnMut(&T),
        {
            if let Some(left) = node.left() {
                walk(left, visit);
            }
            visit(node.value());
            if let Some(right) = node.right() {
                walk(right, visit);
            }
        }

        if let Some(root) = self.root() {
            walk(root, &mut visit);
        }
    }

    /// Iterates the values in ascending order using an explicit stack instead of recursion.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: self.len(),
        };
        iter.push_left_spine(self.root());
        iter
    }

    /// Hangs a new node holding `value` off `parent` without consulting the ordering. With no
    /// parent the node becomes the root.
    pub(crate) fn graft(&mut self, parent: Option<(Index, Side)>, value: T) -> Index {
        let index = self
            .nodes
            .insert(Node::new(value, parent.map(|(index, _)| index)));
        match parent {
            Some((parent, side)) => *self.nodes[parent].child_mut(side) = Some(index),
            None => self.root = Some(index),
        }
        index
    }

    fn node(&self, index: Index) -> NodeRef<'_, T> {
        NodeRef {
            nodes: &self.nodes,
            index,
        }
    }
}

impl<T, C> fmt::Debug for Tree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, C> Extend<T> for Tree<T, C>
where
    C: Compare<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, C> FromIterator<T> for Tree<T, C>
where
    C: Compare<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with(iter, C::default())
    }
}

impl<'a, T, C> IntoIterator for &'a Tree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A read-only view of one node in a [`Tree`].
pub struct NodeRef<'a, T> {
    nodes: &'a Arena<Node<T>>,
    index: Index,
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

/// Two views are equal when they refer to the same node of the same tree.
impl<T> PartialEq for NodeRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.nodes, other.nodes) && self.index == other.index
    }
}

impl<T> Eq for NodeRef<'_, T> {}

impl<T> fmt::Debug for NodeRef<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("value", self.value())
            .field("left", &self.left().map(|n| n.value()))
            .field("right", &self.right().map(|n| n.value()))
            .finish()
    }
}

impl<'a, T> NodeRef<'a, T> {
    // The tree only ever hands out handles it allocated and never frees a node while the tree
    // is borrowed, so indexing the arena can't miss.
    fn get(&self) -> &'a Node<T> {
        &self.nodes[self.index]
    }

    fn at(&self, index: Option<Index>) -> Option<Self> {
        index.map(|index| Self {
            nodes: self.nodes,
            index,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &'a T {
        &self.get().value
    }

    /// The root of the left subtree.
    pub fn left(&self) -> Option<Self> {
        self.at(self.get().left)
    }

    /// The root of the right subtree.
    pub fn right(&self) -> Option<Self> {
        self.at(self.get().right)
    }

    /// The node holding this one as a child. `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        self.at(self.get().parent)
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        let node = self.get();
        node.left.is_none() && node.right.is_none()
    }
}

/// In-order iterator over a [`Tree`].
pub struct Iter<'a, T> {
    stack: Vec<NodeRef<'a, T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut node: Option<NodeRef<'a, T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(xs: &[i32]) -> Tree<i32> {
        xs.iter().copied().collect()
    }

    fn inorder_of<C>(tree: &Tree<i32, C>) -> Vec<i32> {
        let mut out = Vec::new();
        tree.inorder(|x| out.push(*x));
        out
    }

    #[test]
    fn insert_into_empty_becomes_root() {
        let mut tree = Tree::new();
        assert!(tree.is_empty());
        assert!(tree.root().is_none());

        assert!(tree.insert(5));

        let root = tree.root().unwrap();
        assert_eq!(root.value(), &5);
        assert!(root.is_leaf());
        assert!(root.parent().is_none());
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn insert_places_by_order() {
        let tree = tree_of(&[14, 11, 17, 9, 13, 53]);

        let root = tree.root().unwrap();
        let eleven = root.left().unwrap();
        let seventeen = root.right().unwrap();

        assert_eq!(eleven.value(), &11);
        assert_eq!(seventeen.value(), &17);
        assert_eq!(eleven.left().unwrap().value(), &9);
        assert_eq!(eleven.right().unwrap().value(), &13);
        assert!(seventeen.left().is_none());
        assert_eq!(seventeen.right().unwrap().value(), &53);
    }

    #[test]
    fn parents_point_at_owning_node() {
        let tree = tree_of(&[5, 3, 7, 1, 4, 6, 8]);
        let root = tree.root().unwrap();

        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            for child in [node.left(), node.right()].into_iter().flatten() {
                assert_eq!(child.parent(), Some(node));
                stack.push(child);
            }
        }
    }

    #[test]
    fn duplicate_insert_is_a_no_op() {
        let mut tree = tree_of(&[2, 1, 3]);
        let before = inorder_of(&tree);

        assert!(!tree.insert(2));
        assert!(!tree.insert(3));

        assert_eq!(inorder_of(&tree), before);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn inorder_is_sorted() {
        let tree = tree_of(&[50, 20, 80, 10, 30, 70, 90, 25]);
        assert_eq!(inorder_of(&tree), [10, 20, 25, 30, 50, 70, 80, 90]);
    }

    #[test]
    fn inorder_on_empty_tree_visits_nothing() {
        let tree: Tree<i32> = Tree::new();
        let mut visited = 0;
        tree.inorder(|_| visited += 1);
        assert_eq!(visited, 0);
        assert_eq!(tree.iter().next(), None);
    }

    #[test]
    fn iter_matches_inorder() {
        let tree = tree_of(&[8, 4, 12, 2, 6, 10, 14, 1, 3]);
        let iterated: Vec<_> = tree.iter().copied().collect();
        assert_eq!(iterated, inorder_of(&tree));
        assert_eq!(tree.iter().len(), tree.len());
    }

    #[test]
    fn custom_comparator() {
        let mut tree = Tree::with_compare(|a: &i32, b: &i32| a > b);
        tree.extend([1, 5, 3, 5]);

        // Larger values order first, so they hang off the left.
        assert_eq!(inorder_of(&tree), [5, 3, 1]);
        assert_eq!(tree.root().unwrap().left().unwrap().value(), &5);
    }

    #[test]
    fn comparator_equality_means_duplicate() {
        // Only the tens digit matters so 12 and 17 are the same value to this tree.
        let mut tree = Tree::with_compare(|a: &i32, b: &i32| a / 10 < b / 10);
        assert!(tree.insert(12));
        assert!(!tree.insert(17));
        assert!(tree.insert(21));

        assert!(tree.contains(&15));
        assert_eq!(inorder_of(&tree), [12, 21]);
    }

    #[test]
    fn contains() {
        let tree = tree_of(&[5, 3, 8, 1]);
        assert!(tree.contains(&1));
        assert!(tree.contains(&8));
        assert!(!tree.contains(&4));
        assert!(!Tree::<i32>::new().contains(&4));
    }

    #[test]
    fn always_adding_right_is_linear() {
        let tree: Tree<_> = (0..100).collect();
        assert_eq!(tree.height(), 100);
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn height() {
        assert_eq!(Tree::<i32>::new().height(), 0);
        assert_eq!(tree_of(&[1]).height(), 1);
        assert_eq!(tree_of(&[2, 1, 3]).height(), 2);
        assert_eq!(tree_of(&[14, 11, 17, 9, 13, 53]).height(), 3);
    }

    #[test]
    fn clone_is_independent() {
        let mut original = tree_of(&[2, 1]);
        let copy = original.clone();
        original.insert(3);

        assert_eq!(inorder_of(&copy), [1, 2]);
        assert_eq!(inorder_of(&original), [1, 2, 3]);

        let root = copy.root().unwrap();
        assert_eq!(root.left().unwrap().parent(), Some(root));
    }

    #[test]
    fn node_refs_from_different_trees_differ() {
        let a = tree_of(&[1]);
        let b = a.clone();
        assert_ne!(a.root(), b.root());
        assert_eq!(a.root(), a.root());
    }

    #[test]
    fn debug_lists_values_in_order() {
        assert_eq!(format!("{:?}", tree_of(&[2, 3, 1])), "[1, 2, 3]");
    }
}
