use crate::{Either, Split};
use proptest::prelude::*;
use std::cmp::Ordering;
use std::fmt;

pub fn is_sorted_by<T>(s: &[T], cmp: &mut impl FnMut(&T, &T) -> Ordering) -> bool {
    s.windows(2).all(|pair| cmp(&pair[0], &pair[1]).is_le())
}

pub fn is_sorted<T: Ord>(s: &[T]) -> bool {
    is_sorted_by(s, &mut Ord::cmp)
}

pub fn split_vec<S>(
    len: impl Into<proptest::collection::SizeRange>,
    values: S,
) -> impl Strategy<Value = Split<Vec<S::Value>>>
where
    S: Strategy,
    S::Value: Clone,
{
    proptest::collection::vec(values, len)
        .prop_flat_map(|v| {
            let len = v.len();
            (Just(v), 0..=len)
        })
        .prop_map(|(seq, at)| Split { seq, at })
}

pub fn split_vec_sorted<S>(
    len: impl Into<proptest::collection::SizeRange>,
    values: S,
) -> impl Strategy<Value = Split<Vec<S::Value>>>
where
    S: Strategy,
    S::Value: Clone + Ord,
{
    split_vec(len, values).prop_map(|mut out| {
        let (a, b) = out.split_mut();
        a.sort();
        b.sort();
        out
    })
}

/// A seeded vector in the range the demo binaries draw from.
pub fn seeded_vec(len: usize, seed: u64) -> Vec<u32> {
    use rand::{rngs::SmallRng, SeedableRng};

    let mut rng = SmallRng::seed_from_u64(seed);
    crate::random_sequence(&mut rng, len, crate::random_seq::DEFAULT_BOUND)
}

/// `ceil(log2(n))` for `n >= 1`.
pub fn ceil_log2(n: usize) -> usize {
    assert!(n >= 1);
    (usize::BITS - (n - 1).leading_zeros()) as usize
}

/// An element coupled with its index in some container.
///
/// Used to test the stability of sorting algorithms.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct KeyAndIndex<T> {
    pub key: T,
    pub idx: u32, // `u32` cuts the amount of memory required in half on 64-bit systems.
}

impl<T: fmt::Debug> fmt::Debug for KeyAndIndex<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn to_string_subscript(mut i: usize) -> String {
            if i == 0 {
                return "₀".to_owned();
            }

            let mut ret = Vec::new();
            while i != 0 {
                let digit = i % 10;
                ret.push(char::from_u32('₀' as u32 + digit as u32).unwrap());
                i /= 10;
            }

            ret.into_iter().rev().collect()
        }

        let sub = to_string_subscript(self.idx as usize);
        write!(f, "{:?}{}", self.key, sub)
    }
}

impl<T> KeyAndIndex<T> {
    pub fn new(key: T, idx: usize) -> Self {
        let idx = idx.try_into().expect("Index overflowed a u32");
        KeyAndIndex { key, idx }
    }

    pub fn map_vec(v: Vec<T>) -> Vec<KeyAndIndex<T>> {
        v.into_iter()
            .enumerate()
            .map(|(idx, key)| KeyAndIndex::new(key, idx))
            .collect()
    }

    pub fn keys(v: &[KeyAndIndex<T>]) -> Vec<T>
    where
        T: Clone,
    {
        v.iter().map(|x| x.key.clone()).collect()
    }
}

pub fn cmp_ignore_idx<T: Ord>(a: &KeyAndIndex<T>, b: &KeyAndIndex<T>) -> Ordering {
    a.key.cmp(&b.key)
}

/// A merge that is obviously correct, used as an oracle.
pub fn merge_by_naive<T: Clone>(
    l: &[T],
    r: &[T],
    cmp: &mut impl FnMut(&T, &T) -> Ordering,
) -> (Vec<T>, Either<Vec<T>>) {
    let mut ret = Vec::with_capacity(l.len() + r.len());

    let mut i = 0;
    let mut j = 0;

    while i < l.len() && j < r.len() {
        if cmp(&l[i], &r[j]).is_le() {
            ret.push(l[i].clone());
            i += 1;
        } else {
            ret.push(r[j].clone());
            j += 1;
        }
    }

    if i == l.len() {
        (ret, Either::Right(r[j..].to_vec()))
    } else {
        assert_eq!(j, r.len());
        (ret, Either::Left(l[i..].to_vec()))
    }
}
