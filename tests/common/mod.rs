#![allow(dead_code)]

use std::fmt::Debug;
use std::ops::RangeInclusive;

use itertools::iproduct;
use rand::{self, Rng};
use range_query_tree::*;

/// Something to perform in one round of tests
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum RoundAction<T> {
    Set { index: usize, value: T },
    Query { range: RangeInclusive<usize> },
}

/// The best of `values` found by a linear scan. On ties, the first one wins.
pub fn brute_force_best<'a, T, C: Comparator<T>>(values: &'a [T], comparator: &C) -> Option<&'a T> {
    values.iter().fold(None, |best, value| match best {
        Some(best) if comparator.prefers_left(best, value) => Some(best),
        _ => Some(value),
    })
}

pub fn random_range(rng: &mut impl Rng, len: usize) -> RangeInclusive<usize> {
    let res = (rng.gen_range(0..len), rng.gen_range(0..len));
    if res.0 <= res.1 {
        res.0..=res.1
    } else {
        res.1..=res.0
    }
}

/// Elements are `(key, tag)` pairs, compared by key only. Keys come from a
/// small range so that ties are common, and the tag tells tied elements apart.
pub fn random_element(rng: &mut impl Rng) -> (i32, usize) {
    (rng.gen_range(-MAX_KEY..=MAX_KEY), rng.gen_range(0..1000))
}

pub const MAX_KEY: i32 = 20;

pub fn random_round_action(rng: &mut impl Rng, len: usize) -> RoundAction<(i32, usize)> {
    use RoundAction::*;
    if rng.gen() {
        Set {
            index: rng.gen_range(0..len),
            value: random_element(rng),
        }
    } else {
        Query {
            range: random_range(rng, len),
        }
    }
}

/// Performs one round on both the tree and a plain vector holding the same
/// elements, and checks that they agree.
pub fn run_round<T, C>(round_action: RoundAction<T>, tree: &mut RangeQueryTree<T, C>, model: &mut [T])
where
    T: Clone + PartialEq + Debug,
    C: Comparator<T>,
{
    use RoundAction::*;
    match round_action {
        Set { index, value } => {
            tree.set_leaf(index, value.clone()).unwrap();
            model[index] = value;
            assert_eq!(tree.get_value(index, index).unwrap(), &model[index]);
        }
        Query { range } => {
            let comparator = tree.comparator().unwrap();
            let expected = brute_force_best(&model[range.clone()], comparator).unwrap();
            assert_eq!(tree.get_value(*range.start(), *range.end()).unwrap(), expected);
        }
    }
    assert_eq!(tree.leaves(), &model[..]);
}

/// Builds a tree over `initial`, runs every round on it, and checks it against
/// a plain vector after each one.
pub fn check_consistency<T, C>(initial: &[T], comparator: C, rounds: &[RoundAction<T>])
where
    T: Clone + PartialEq + Debug,
    C: Comparator<T>,
{
    let mut tree = RangeQueryTree::from_slice(initial, comparator).unwrap();
    let mut model = initial.to_vec();
    tree.assert_correctness();

    for round_action in rounds {
        run_round(round_action.clone(), &mut tree, &mut model);
        // This check takes `O(n)` time, but the trees in the tests are small.
        tree.assert_correctness();
    }
}

/// Checks every range of the tree against a linear scan of `model`.
pub fn check_all_ranges<T, C>(tree: &RangeQueryTree<T, C>, model: &[T])
where
    T: PartialEq + Debug + Clone,
    C: Comparator<T>,
{
    let comparator = tree.comparator().unwrap();
    for (from, to) in iproduct!(0..model.len(), 0..model.len()).filter(|(from, to)| from <= to) {
        let expected = brute_force_best(&model[from..=to], comparator).unwrap();
        assert_eq!(
            tree.get_value(from, to).unwrap(),
            expected,
            "wrong answer for range {from}..={to}"
        );
    }
}

pub fn by_key() -> ByKey<fn(&(i32, usize)) -> i32> {
    ByKey(|element| element.0)
}
