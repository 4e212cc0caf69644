//! Collatz Core
//!
//! Sequence lengths for Collatz seeds and an order-stable, allocation-free
//! heapsort over the resulting (seed, length) pairs.
//!
//! # Pipeline
//!
//! 1. [`PairStore::populate`] fills a fixed-capacity store with seeds
//!    `1..=N` and their lengths.
//! 2. [`heapsort`] sorts the store in place with a min-heap whose sift-down
//!    favours the larger seed among equal lengths.
//! 3. The finalized store reads longest length first, equal lengths in
//!    ascending seed order, ready to be drawn top row first.
//!
//! ```
//! use collatz_core::{heapsort, PairStore};
//!
//! let mut store = PairStore::populate(5);
//! let sorted: Vec<(u64, u32)> = heapsort(&mut store)
//!     .iter()
//!     .map(|p| (p.seed, p.length))
//!     .collect();
//! assert_eq!(sorted, [(3, 7), (5, 5), (4, 2), (2, 1), (1, 0)]);
//! ```
//!
//! # Features
//!
//! - `serde`: derive `Serialize` and `Deserialize` for [`Pair`]. The crate's
//!   own tests always build with it enabled.

mod heap;
mod pair;
mod sequence;
mod store;

pub use heap::{build_min_heap, heapsort, sift_down};
pub use pair::Pair;
pub use sequence::{collatz_step, sequence_length};
pub use store::PairStore;

/// Populate a store for seeds `1..=bound` and sort it.
pub fn sorted_pairs(bound: u64) -> Box<[Pair]> {
    let mut store = PairStore::populate(bound);
    heapsort(&mut store);
    store.into_pairs()
}
