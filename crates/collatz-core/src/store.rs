//! Fixed-capacity store of (seed, length) pairs.
//!
//! The store is allocated once for `N` pairs. Heap operations only look at
//! the live region `[0, live_len)`. Extraction shrinks that region from the
//! back, and everything past it is already in its final position.

use crate::Pair;

/// Dense, zero-based collection of pairs with a shrinking live boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairStore {
    pairs: Box<[Pair]>,
    live: usize,
}

impl PairStore {
    /// Populate the store with seeds `1..=bound` in seed order.
    ///
    /// The pair at index `i` has seed `i + 1`.
    pub fn populate(bound: u64) -> Self {
        let pairs: Box<[Pair]> = (1..=bound).map(Pair::new).collect();
        let live = pairs.len();
        Self { pairs, live }
    }

    /// Number of pairs the store was allocated for.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.pairs.len()
    }

    /// Size of the live region still subject to heap operations.
    #[inline]
    pub fn live_len(&self) -> usize {
        self.live
    }

    /// True when the store holds no pairs at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Highest internal (non-leaf) index of the live region.
    ///
    /// Even sizes give `size / 2`, odd sizes give `(size - 1) / 2`. For even
    /// sizes this index is itself a leaf; sifting it is a no-op.
    #[inline]
    pub fn max_internal(&self) -> usize {
        if self.live % 2 == 0 {
            self.live / 2
        } else {
            (self.live - 1) / 2
        }
    }

    /// Pair at `index`, anywhere in the store.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Pair> {
        self.pairs.get(index)
    }

    /// Seed at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity()`.
    #[inline]
    pub fn seed_at(&self, index: usize) -> u64 {
        self.pairs[index].seed
    }

    /// Sequence length at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity()`.
    #[inline]
    pub fn length_at(&self, index: usize) -> u32 {
        self.pairs[index].length
    }

    /// Swap the pairs at two indices.
    #[inline]
    pub fn swap(&mut self, i: usize, j: usize) {
        self.pairs.swap(i, j);
    }

    /// Move the live boundary down by one, finalizing the last live slot.
    ///
    /// Does nothing once the live region is empty.
    #[inline]
    pub fn retire_last(&mut self) {
        self.live = self.live.saturating_sub(1);
    }

    /// All pairs, live or finalized, in index order.
    #[inline]
    pub fn as_slice(&self) -> &[Pair] {
        &self.pairs
    }

    /// Give up the backing buffer.
    pub fn into_pairs(self) -> Box<[Pair]> {
        self.pairs
    }
}
