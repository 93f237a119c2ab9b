//! A singly linked list with explicit ownership. Nodes are boxed and leaked into raw links, and
//! the list alone frees them, so it can point at both its first and last node and push at either
//! end in `O(1)`.
//!
//! # Examples
//!
//! ```
//! use fringe::list::SmartList;
//!
//! let mut list = SmartList::new();
//! list.push_back(2);
//! list.push_back(3);
//! list.push_front(1);
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
//! assert_eq!(list.front(), Ok(&1));
//!
//! // Taking elements off the front of an empty list is an error, not a default.
//! list.clear();
//! assert!(list.pop_front().is_err());
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::error::Underflow;

/// A pointer to a node allocated with `Box::new` and leaked. The list owns every node it can
/// reach and frees each exactly once, in `pop_front` or `clear`.
type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    fn new_leaked(value: T, next: Link<T>) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Self { value, next })))
    }
}

/// An insertion ordered, singly linked sequence of values.
pub struct SmartList<T> {
    head: Link<T>,
    // The last node reachable from `head`. `None` exactly when `head` is `None`.
    tail: Link<T>,
    len: usize,
    // The list owns its nodes even though it only holds pointers to them.
    _owns: PhantomData<Box<Node<T>>>,
}

impl<T> Default for SmartList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SmartList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> SmartList<T> {
    /// Generates a new, empty `SmartList`.
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _owns: PhantomData,
        }
    }

    /// The number of elements in the list.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the list has no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every element from the list. Nodes are freed one at a time, front to back.
    pub fn clear(&mut self) {
        while self.pop_front().is_ok() {}
    }

    /// Adds `value` before the first element.
    pub fn push_front(&mut self, value: T) {
        let node = Node::new_leaked(value, self.head);
        self.head = Some(node);
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.len += 1;
    }

    /// Adds `value` after the last element.
    pub fn push_back(&mut self, value: T) {
        let node = Node::new_leaked(value, None);
        match self.tail {
            // SAFETY: `tail` was leaked by `Node::new_leaked` and hasn't been freed because it
            // is still reachable from `head`. We hold `&mut self` so no reference into it is
            // alive.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Removes the first element and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Underflow`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use fringe::list::SmartList;
    ///
    /// let mut list: SmartList<_> = [1, 2].into_iter().collect();
    ///
    /// assert_eq!(list.pop_front(), Ok(1));
    /// assert_eq!(list.pop_front(), Ok(2));
    /// assert!(list.pop_front().is_err());
    /// ```
    pub fn pop_front(&mut self) -> Result<T, Underflow> {
        let head = self.head.ok_or(Underflow::new("pop_front"))?;
        // SAFETY: `head` came from `Box::leak` in `Node::new_leaked`. Unlinking it below means
        // nothing in the list points at it any more, so rebuilding the box frees it exactly once.
        let Node { value, next } = *unsafe { Box::from_raw(head.as_ptr()) };
        self.head = next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Ok(value)
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`Underflow`] if the list is empty.
    pub fn front(&self) -> Result<&T, Underflow> {
        // SAFETY: `head` is a live node owned by this list; the reference borrows `self`.
        self.head
            .map(|head| unsafe { &head.as_ref().value })
            .ok_or(Underflow::new("front"))
    }

    /// Returns a mutable reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`Underflow`] if the list is empty.
    pub fn front_mut(&mut self) -> Result<&mut T, Underflow> {
        // SAFETY: `head` is a live node owned by this list and `&mut self` guarantees the
        // returned reference is the only one into it.
        self.head
            .map(|mut head| unsafe { &mut head.as_mut().value })
            .ok_or(Underflow::new("front_mut"))
    }

    /// Iterates the elements front to back. Every call starts a fresh pass.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            remaining: self.len,
            _borrow: PhantomData,
        }
    }

    /// Iterates the elements front to back, allowing each to be modified.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head,
            remaining: self.len,
            _borrow: PhantomData,
        }
    }
}

/// Copying a list allocates new nodes holding clones of the values in the same order.
impl<T> Clone for SmartList<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.extend(source.iter().cloned());
    }
}

impl<T> fmt::Debug for SmartList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T> PartialEq for SmartList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for SmartList<T> where T: Eq {}

impl<T> Extend<T> for SmartList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for SmartList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

/// Borrowing iterator over a [`SmartList`].
pub struct Iter<'a, T> {
    next: Link<T>,
    remaining: usize,
    _borrow: PhantomData<&'a T>,
}

/// Manual implementation so cloning the iterator doesn't require `T: Clone`.
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            remaining: self.remaining,
            _borrow: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            // SAFETY: the list is borrowed for `'a` so none of its nodes can be freed or
            // mutated while this iterator hands out shared references.
            let node = unsafe { node.as_ref() };
            self.next = node.next;
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Mutably borrowing iterator over a [`SmartList`].
pub struct IterMut<'a, T> {
    next: Link<T>,
    remaining: usize,
    _borrow: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|mut node| {
            // SAFETY: the list is mutably borrowed for `'a` and each node is visited once, so
            // the references handed out never alias.
            let node = unsafe { node.as_mut() };
            self.next = node.next;
            self.remaining -= 1;
            &mut node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator over a [`SmartList`].
pub struct IntoIter<T>(SmartList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for SmartList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a SmartList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SmartList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}


#[cfg(test)]
mod quicktests {
    use std::collections::VecDeque;

    use super::*;
    use crate::test::quick::ListOp;

    /// Applies a set of operations to a list and a `VecDeque` model, checking
    /// they agree after every step.
    fn do_ops(ops: &[ListOp<i8>], list: &mut SmartList<i8>, model: &mut VecDeque<i8>) -> bool {
        for op in ops {
            let agrees = match op {
                ListOp::PushFront(x) => {
                    list.push_front(*x);
                    model.push_front(*x);
                    true
                }
                ListOp::PushBack(x) => {
                    list.push_back(*x);
                    model.push_back(*x);
                    true
                }
                ListOp::PopFront => list.pop_front().ok() == model.pop_front(),
                ListOp::Front => list.front().ok() == model.front(),
            };
            if !agrees || list.len() != model.len() || !list.iter().eq(model.iter()) {
                return false;
            }
        }
        true
    }

    quickcheck::quickcheck! {
        fn behaves_like_vec_deque(ops: Vec<ListOp<i8>>) -> bool {
            let mut list = SmartList::new();
            let mut model = VecDeque::new();

            do_ops(&ops, &mut list, &mut model)
        }
    }
}
