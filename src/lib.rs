#![cfg_attr(not(test), no_std)]

#[cfg(not(test))]
extern crate core as std;

extern crate alloc;

#[cfg(test)]
mod test_utils;

pub mod count;
mod merge_sort;
mod quadratic_sort;
mod quick_sort;
pub mod random_seq;
mod split;
pub mod verify;

pub use merge_sort::{merge_sort, merge_sort_by};
pub use quadratic_sort::{selection_sort, selection_sort_by};
pub use quick_sort::{quick_sort, quick_sort_by};
pub use random_seq::{random_sequence, SequenceConfig};
use split::Split;

type Either<T> = either::Either<T, T>;
