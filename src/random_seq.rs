//! Random input for the demo binaries.

use alloc::vec::Vec;
use contracts::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use static_assertions::const_assert;

/// Number of elements the demos sort.
pub const DEFAULT_LEN: usize = 10_000;

/// Exclusive upper bound on each generated element.
pub const DEFAULT_BOUND: u32 = 100_000;

const_assert!(DEFAULT_BOUND > 0);

/// Describes the sequence a demo should sort.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SequenceConfig {
    pub len: usize,
    pub bound: u32,

    /// Seeds the generator when set. Otherwise it is seeded from the OS entropy source, and each
    /// run sees a different sequence.
    pub seed: Option<u64>,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        SequenceConfig {
            len: DEFAULT_LEN,
            bound: DEFAULT_BOUND,
            seed: None,
        }
    }
}

impl SequenceConfig {
    pub fn with_seed(self, seed: u64) -> Self {
        SequenceConfig {
            seed: Some(seed),
            ..self
        }
    }

    pub fn generate(&self) -> Vec<u32> {
        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        random_sequence(&mut rng, self.len, self.bound)
    }
}

/// Returns `len` integers, each drawn independently and uniformly from `0..bound`.
#[requires(bound > 0, "cannot draw from an empty range")]
#[ensures(ret.len() == len)]
pub fn random_sequence<R: Rng>(rng: &mut R, len: usize, bound: u32) -> Vec<u32> {
    (0..len).map(|_| rng.gen_range(0..bound)).collect()
}
