//! In-place sorting algorithms that take quadratic time.

use contracts::*;
use std::cmp::Ordering;

pub fn selection_sort<T: Ord>(s: &mut [T]) -> &mut [T] {
    selection_sort_by(s, Ord::cmp)
}

/// Sorts `s` in place by repeatedly swapping the minimum of the unsorted suffix to its front.
///
/// Always makes `n * (n - 1) / 2` comparisons and at most `n` swaps, whatever the input order.
/// The sort is not stable. Returns `s` so calls can be chained.
pub fn selection_sort_by<T>(s: &mut [T], mut cmp: impl FnMut(&T, &T) -> Ordering) -> &mut [T] {
    for i in 0..s.len() {
        // INVARIANT: `s[..i]` holds the `i` smallest elements, in order.
        let min = i + position_of_min(&s[i..], &mut cmp);
        s.swap(i, min);
    }

    s
}

/// Returns the index of the first minimum of `s`, or `0` if `s` is empty.
#[debug_ensures(s.is_empty() || ret < s.len())]
fn position_of_min<T>(s: &[T], cmp: &mut impl FnMut(&T, &T) -> Ordering) -> usize {
    let mut min = 0;

    for (j, el) in s.iter().enumerate().skip(1) {
        // Only a strictly smaller element moves the minimum, so ties keep the first occurrence.
        if cmp(el, &s[min]).is_lt() {
            min = j;
        }
    }

    min
}
