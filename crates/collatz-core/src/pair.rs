//! A seed together with its Collatz sequence length.

use std::cmp::Ordering;

use crate::sequence_length;

/// One seed and the length of its Collatz sequence.
///
/// The length is derived from the seed when the pair is built and never
/// changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair {
    /// Starting value, 1-based.
    pub seed: u64,
    /// Steps needed to reach 1.
    pub length: u32,
}

impl Pair {
    /// Build the pair for `seed`, computing its length.
    pub const fn new(seed: u64) -> Self {
        Self {
            seed,
            length: sequence_length(seed),
        }
    }

    /// The sort order: shorter length first, then smaller seed.
    ///
    /// Seeds are unique within a store, so no two distinct pairs tie.
    #[inline]
    pub const fn precedes(&self, other: &Self) -> bool {
        self.length < other.length || (self.length == other.length && self.seed < other.seed)
    }

    /// Whether `self` belongs above `other` in the min-heap.
    ///
    /// Shorter length wins. Among equal lengths the *larger* seed wins, so
    /// that after min-extraction each equal-length run ends up in
    /// ascending seed order.
    #[inline]
    pub(crate) const fn sifts_above(&self, other: &Self) -> bool {
        self.length < other.length || (self.length == other.length && self.seed > other.seed)
    }
}

impl PartialOrd for Pair {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pair {
    fn cmp(&self, other: &Self) -> Ordering {
        self.length
            .cmp(&other.length)
            .then_with(|| self.seed.cmp(&other.seed))
    }
}
