//! A three-way quicksort that returns a new, sorted vector.

use alloc::vec::Vec;
use contracts::*;
use std::cmp::Ordering;

pub fn quick_sort<T: Ord + Clone>(s: &[T]) -> Vec<T> {
    quick_sort_by(s, Ord::cmp)
}

/// Sorts `s` with the comparator `cmp`, returning the result in a new vector.
///
/// Each level partitions around the middle element into the elements less than, equal to and
/// greater than it, keeping input order within each part. The sort is therefore stable.
pub fn quick_sort_by<T: Clone>(s: &[T], mut cmp: impl FnMut(&T, &T) -> Ordering) -> Vec<T> {
    let mut out = Vec::with_capacity(s.len());
    sort_into(s, &mut out, &mut cmp);
    out
}

#[debug_ensures(out.len() == old(out.len()) + s.len())]
fn sort_into<T, F>(s: &[T], out: &mut Vec<T>, cmp: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if s.len() <= 1 {
        out.extend_from_slice(s);
    } else {
        let pivot = &s[s.len() / 2];

        let mut less = Vec::new();
        let mut equal = Vec::new();
        let mut greater = Vec::new();

        for el in s {
            match cmp(el, pivot) {
                Ordering::Less => less.push(el.clone()),
                Ordering::Equal => equal.push(el.clone()),
                Ordering::Greater => greater.push(el.clone()),
            }
        }

        sort_into(&less, out, cmp);
        out.append(&mut equal);
        sort_into(&greater, out, cmp);
    }
}
