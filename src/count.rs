//! Comparator instrumentation.

use std::cmp::Ordering;

/// Wraps a comparator and counts how many times it is called.
///
/// ```
/// use classic_sort::count::Counted;
///
/// let mut counter = Counted::new(u32::cmp);
/// let mut v = [3u32, 1, 2];
/// classic_sort::selection_sort_by(&mut v, |a, b| counter.compare(a, b));
///
/// assert_eq!(v, [1, 2, 3]);
/// assert_eq!(counter.calls(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct Counted<F> {
    cmp: F,
    calls: usize,
}

impl<F> Counted<F> {
    pub fn new(cmp: F) -> Self {
        Counted { cmp, calls: 0 }
    }

    pub fn compare<T>(&mut self, a: &T, b: &T) -> Ordering
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.calls += 1;
        (self.cmp)(a, b)
    }

    /// The number of comparisons made so far.
    pub fn calls(&self) -> usize {
        self.calls
    }

    pub fn reset(&mut self) {
        self.calls = 0;
    }
}
