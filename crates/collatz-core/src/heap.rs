//! In-place min-heap over a [`PairStore`].
//!
//! The heap lives in the live region of the store and uses 0-indexed
//! children `2i + 1` and `2i + 2`. Nothing is allocated: every operation is
//! a sequence of swaps plus moves of the live boundary.
//!
//! # Ordering
//!
//! A child replaces the current best when its length is shorter, or when
//! the lengths are equal and its seed is *larger*. Extraction moves the
//! root (the shortest remaining length, largest seed among ties) to the
//! end of the live region. The finished store therefore reads, by index:
//!
//! - lengths non-increasing, longest first
//! - seeds ascending within each run of equal length
//!
//! That is the row order the plot consumes: the top row first, markers
//! left to right.

use crate::{Pair, PairStore};

/// Restore the heap property for the subtree rooted at `root`.
///
/// Only children inside the live region are considered. Walks down the
/// tree until the current node beats both of its children.
pub fn sift_down(store: &mut PairStore, root: usize) {
    let live = store.live_len();
    let mut current = root;

    loop {
        let left = 2 * current + 1;
        let right = left + 1;
        let mut best = current;

        if left < live && beats(store, left, best) {
            best = left;
        }
        if right < live && beats(store, right, best) {
            best = right;
        }

        if best == current {
            return;
        }

        store.swap(current, best);
        current = best;
    }
}

/// Arrange the live region into a heap.
///
/// Sifts every internal index from [`PairStore::max_internal`] down to 0.
/// An empty store is left untouched.
pub fn build_min_heap(store: &mut PairStore) {
    if store.live_len() == 0 {
        return;
    }
    for i in (0..=store.max_internal()).rev() {
        sift_down(store, i);
    }
}

/// Sort the whole store in place and return the finalized pairs.
///
/// Builds the heap, then repeatedly swaps the root to the last live slot,
/// retires that slot, and sifts the new root down. Runs in O(N log N).
pub fn heapsort(store: &mut PairStore) -> &[Pair] {
    build_min_heap(store);

    for last in (1..store.live_len()).rev() {
        store.swap(0, last);
        store.retire_last();
        sift_down(store, 0);
    }

    store.as_slice()
}

#[inline]
fn beats(store: &PairStore, candidate: usize, best: usize) -> bool {
    match (store.get(candidate), store.get(best)) {
        (Some(c), Some(b)) => c.sifts_above(b),
        _ => false,
    }
}
