use fringe::{SmartList, Underflow};

quickcheck::quickcheck! {
    fn collect_preserves_order(xs: Vec<i32>) -> bool {
        let list: SmartList<_> = xs.iter().copied().collect();
        list.len() == xs.len() && list.iter().eq(xs.iter())
    }
}

quickcheck::quickcheck! {
    fn push_front_reverses(xs: Vec<i32>) -> bool {
        let mut list = SmartList::new();
        for x in &xs {
            list.push_front(*x);
        }
        list.into_iter().eq(xs.into_iter().rev())
    }
}

quickcheck::quickcheck! {
    fn draining_ends_in_underflow(xs: Vec<i32>) -> bool {
        let mut list: SmartList<_> = xs.iter().copied().collect();
        let drained = xs.iter().all(|x| list.pop_front() == Ok(*x));

        drained
            && list.pop_front().is_err()
            && matches!(list.front(), Err(Underflow { operation: "front" }))
    }
}
