//! A sequence divided in two, used to hand a pair of sorted runs to the merge step.

#[allow(unused)]
use std::cmp::Ordering;

/// A sequence (`S`) divided in two at index `I`.
#[derive(Clone, Copy, Debug)]
pub struct Split<S, I = usize> {
    pub seq: S,
    pub at: I,
}

impl<S> Split<S> {
    #[cfg(test)]
    pub fn split<T>(&self) -> (&[T], &[T])
    where
        S: AsRef<[T]>,
    {
        self.seq.as_ref().split_at(self.at)
    }

    #[cfg(test)]
    pub fn is_each_side_sorted_by<T>(&self, cmp: &mut impl FnMut(&T, &T) -> Ordering) -> bool
    where
        S: AsRef<[T]>,
    {
        use crate::test_utils::is_sorted_by;

        let (l, r) = self.split();
        is_sorted_by(l, cmp) && is_sorted_by(r, cmp)
    }

    #[cfg(test)]
    pub fn split_mut<T>(&mut self) -> (&mut [T], &mut [T])
    where
        S: AsMut<[T]>,
    {
        self.seq.as_mut().split_at_mut(self.at)
    }
}

impl<'a, T> Split<&'a [T]> {
    /// Like `split`, but the halves borrow from the underlying slice instead of from `self`.
    pub fn into_halves(self) -> (&'a [T], &'a [T]) {
        self.seq.split_at(self.at)
    }
}

impl<S, I> Split<S, I> {
    pub fn new(seq: S, at: I) -> Self {
        Split { seq, at }
    }

    #[cfg(test)]
    pub fn as_ref<T>(&self) -> Split<&T, I>
    where
        T: ?Sized,
        S: AsRef<T>,
        I: Copy,
    {
        Split {
            seq: self.seq.as_ref(),
            at: self.at,
        }
    }

    #[cfg(test)]
    pub fn map_seq<R>(self, f: impl FnOnce(S) -> R) -> Split<R, I> {
        Split {
            seq: f(self.seq),
            at: self.at,
        }
    }
}
