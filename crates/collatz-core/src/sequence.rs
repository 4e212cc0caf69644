//! Collatz sequence lengths.
//!
//! The Collatz map sends an even `x` to `x / 2` and an odd `x` to `3x + 1`.
//! The length of a seed is the number of applications of the map needed
//! to reach 1.
//!
//! # Integer width
//!
//! Seeds and intermediate values are `u64`, lengths are `u32`. Bounds that
//! fit a terminal row peak many orders of magnitude below `u64::MAX`.
//! Trajectories that would exceed `u64::MAX` are not supported.

/// Apply the Collatz map once.
///
/// ```
/// use collatz_core::collatz_step;
///
/// assert_eq!(collatz_step(6), 3);
/// assert_eq!(collatz_step(3), 10);
/// ```
#[inline]
pub const fn collatz_step(x: u64) -> u64 {
    if x % 2 == 0 {
        x / 2
    } else {
        3 * x + 1
    }
}

/// Number of Collatz steps from `seed` down to 1.
///
/// `sequence_length(1)` is 0. Callers guarantee `seed >= 1`; a seed of 0
/// also reports 0.
///
/// ```
/// use collatz_core::sequence_length;
///
/// assert_eq!(sequence_length(1), 0);
/// assert_eq!(sequence_length(6), 8);
/// assert_eq!(sequence_length(27), 111);
/// ```
pub const fn sequence_length(seed: u64) -> u32 {
    let mut x = seed;
    let mut steps = 0;
    while x > 1 {
        x = collatz_step(x);
        steps += 1;
    }
    steps
}
