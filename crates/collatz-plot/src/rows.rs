//! Coalescing pass from sorted pairs to plot rows.
//!
//! Every length from the top of the plot down to the bottom gets exactly
//! one row, whether or not any seed produced it. Rows borrow contiguous
//! runs of the pair slice; gap rows borrow an empty slice.

use collatz_core::Pair;

/// One line of the plot: a length label and the seeds drawn on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row<'a> {
    /// Label on the vertical axis.
    pub length: u32,
    /// Pairs with this length, ascending by seed. Empty for gap rows.
    pub pairs: &'a [Pair],
}

impl Row<'_> {
    /// True when no seed has this length.
    pub fn is_gap(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Iterator over plot rows, top to bottom.
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    remaining: &'a [Pair],
    next: Option<u32>,
    bottom: u32,
}

impl<'a> Rows<'a> {
    /// Start at the first pair's length and stop at the last pair's.
    pub fn new(pairs: &'a [Pair]) -> Self {
        Self {
            remaining: pairs,
            next: pairs.first().map(|p| p.length),
            bottom: pairs.last().map_or(0, |p| p.length),
        }
    }
}

impl<'a> Iterator for Rows<'a> {
    type Item = Row<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let length = self.next?;

        let run = self
            .remaining
            .iter()
            .take_while(|p| p.length == length)
            .count();
        let (pairs, rest) = self.remaining.split_at(run);
        self.remaining = rest;

        self.next = if length > self.bottom {
            Some(length - 1)
        } else {
            None
        };

        Some(Row { length, pairs })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(top) if top >= self.bottom => {
                let rows = (top - self.bottom) as usize + 1;
                (rows, Some(rows))
            }
            Some(_) => (1, Some(1)),
            None => (0, Some(0)),
        }
    }
}

impl ExactSizeIterator for Rows<'_> {}
