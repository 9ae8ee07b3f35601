//! A top-down merge sort that returns a new, sorted vector.
//!
//! The input is split at its midpoint, each half is sorted recursively, and the two sorted halves
//! are merged with a pair of cursors that only ever move forward. Nothing is removed from the
//! front of a sequence, so each merge is linear and the whole sort is `O(n log n)`.

use crate::{Either, Split};
use alloc::vec::Vec;
use contracts::*;
use std::cmp::Ordering;

pub fn merge_sort<T: Ord + Clone>(s: &[T]) -> Vec<T> {
    merge_sort_by(s, Ord::cmp)
}

/// Sorts `s` with the comparator `cmp`, returning the result in a new vector.
///
/// The sort is stable: elements that compare equal keep their relative order from `s`.
pub fn merge_sort_by<T: Clone>(s: &[T], mut cmp: impl FnMut(&T, &T) -> Ordering) -> Vec<T> {
    sort_recursive(s, &mut cmp)
}

#[debug_ensures(ret.len() == s.len())]
fn sort_recursive<T, F>(s: &[T], cmp: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if s.len() <= 1 {
        s.to_vec()
    } else {
        let mid = s.len() / 2;
        let (l, r) = s.split_at(mid);

        // Both sorted halves live in one allocation, divided at `mid`.
        let mut halves = sort_recursive(l, cmp);
        halves.extend(sort_recursive(r, cmp));

        merge_by(Split::new(&halves[..], mid), cmp)
    }
}

/// Merges the two sorted halves of `halves` into a new vector.
///
/// When the heads of both halves compare equal, the one from the left half is taken first.
#[debug_requires(halves.at <= halves.seq.len())]
#[debug_ensures(ret.len() == halves.seq.len())]
pub fn merge_by<T: Clone>(
    halves: Split<&[T]>,
    cmp: &mut impl FnMut(&T, &T) -> Ordering,
) -> Vec<T> {
    let mut out = Vec::with_capacity(halves.seq.len());
    let rem = merge_until_exhausted(halves, &mut out, cmp);
    out.extend_from_slice(rem.into_inner());
    out
}

/// Merges the heads of both halves onto the end of `out` until one of them runs out.
///
/// Returns whatever is left of the other half, and which side it came from.
fn merge_until_exhausted<'a, T: Clone>(
    halves: Split<&'a [T]>,
    out: &mut Vec<T>,
    cmp: &mut impl FnMut(&T, &T) -> Ordering,
) -> Either<&'a [T]> {
    let (l, r) = halves.into_halves();

    let mut i = 0;
    let mut j = 0;

    // INVARIANT: `out` ends with `l[..i]` and `r[..j]`, merged.
    while i < l.len() && j < r.len() {
        if cmp(&l[i], &r[j]).is_le() {
            out.push(l[i].clone());
            i += 1;
        } else {
            out.push(r[j].clone());
            j += 1;
        }
    }

    if i == l.len() {
        Either::Right(&r[j..])
    } else {
        debug_assert_eq!(j, r.len());
        Either::Left(&l[i..])
    }
}
