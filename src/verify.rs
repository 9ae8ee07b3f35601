//! Checks that a sort produced what it should have.

use alloc::vec::Vec;
use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    #[error("output has {output} elements, but the input had {input}")]
    LengthMismatch { input: usize, output: usize },

    #[error("element {index} of the output is smaller than the one before it")]
    OutOfOrder { index: usize },

    #[error("output is not a permutation of the input (first differs at sorted position {index})")]
    NotPermutation { index: usize },
}

pub fn check_sorted<T: Ord>(s: &[T]) -> Result<(), VerifyError> {
    check_sorted_by(s, Ord::cmp)
}

/// Returns an error naming the first element of `s` that is smaller than its predecessor.
pub fn check_sorted_by<T>(
    s: &[T],
    mut cmp: impl FnMut(&T, &T) -> Ordering,
) -> Result<(), VerifyError> {
    match s.windows(2).position(|pair| cmp(&pair[0], &pair[1]).is_gt()) {
        Some(i) => Err(VerifyError::OutOfOrder { index: i + 1 }),
        None => Ok(()),
    }
}

/// Checks that `output` is `input` sorted in non-decreasing order.
pub fn check_sorted_permutation<T: Ord + Clone>(
    input: &[T],
    output: &[T],
) -> Result<(), VerifyError> {
    if input.len() != output.len() {
        return Err(VerifyError::LengthMismatch {
            input: input.len(),
            output: output.len(),
        });
    }

    check_sorted(output)?;

    let mut expected: Vec<T> = input.to_vec();
    expected.sort_unstable();

    match expected.iter().zip(output).position(|(a, b)| a != b) {
        Some(index) => Err(VerifyError::NotPermutation { index }),
        None => Ok(()),
    }
}
