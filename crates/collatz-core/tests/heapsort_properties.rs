//! Property tests for the in-place heapsort.

use collatz_core::{heapsort, sequence_length, sorted_pairs, Pair, PairStore};
use proptest::prelude::*;

fn assert_plot_order(pairs: &[Pair]) {
    for window in pairs.windows(2) {
        let (a, b) = (window[0], window[1]);
        assert!(
            a.length > b.length || (a.length == b.length && a.seed < b.seed),
            "{:?} must come before {:?}",
            a,
            b
        );
    }
}

#[test]
fn small_bounds_are_sorted() {
    for n in 0..=200 {
        assert_plot_order(&sorted_pairs(n));
    }
}

#[test]
fn reversed_order_is_the_precedes_order() {
    // Taking the equal-length runs back to front, each run kept as is,
    // gives the ascending (length, seed) order.
    let pairs = sorted_pairs(150);
    let mut ascending: Vec<Pair> = pairs.to_vec();
    ascending.sort();

    let mut rebuilt: Vec<Pair> = Vec::with_capacity(pairs.len());
    for run in pairs.chunk_by(|a, b| a.length == b.length).rev() {
        rebuilt.extend_from_slice(run);
    }
    assert_eq!(rebuilt, ascending);
}

#[test]
fn heapsort_is_deterministic() {
    let mut a = PairStore::populate(97);
    let mut b = PairStore::populate(97);
    assert_eq!(heapsort(&mut a), heapsort(&mut b));
}

proptest! {
    #[test]
    fn sorted_output_is_in_plot_order(n in 0u64..2_000) {
        let pairs = sorted_pairs(n);
        prop_assert_eq!(pairs.len() as u64, n);
        for window in pairs.windows(2) {
            let (a, b) = (window[0], window[1]);
            prop_assert!(a.length >= b.length);
            if a.length == b.length {
                prop_assert!(a.seed < b.seed);
            }
        }
    }

    #[test]
    fn sorted_output_is_a_permutation(n in 0u64..2_000) {
        let pairs = sorted_pairs(n);
        let mut seen = vec![false; n as usize];
        for pair in pairs.iter() {
            prop_assert!(pair.seed >= 1 && pair.seed <= n);
            let slot = &mut seen[(pair.seed - 1) as usize];
            prop_assert!(!*slot, "seed {} appears twice", pair.seed);
            *slot = true;
            prop_assert_eq!(pair.length, sequence_length(pair.seed));
        }
        prop_assert!(seen.iter().all(|&s| s));
    }
}
