use quickcheck::{Arbitrary, Gen};

mod list;
mod trees;

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<T> {
    /// Insert the value into the tree
    Insert(T),
    /// Insert the value twice in a row
    InsertTwice(T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::InsertTwice(T::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
