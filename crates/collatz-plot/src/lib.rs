//! Collatz Plot
//!
//! Renders sorted (seed, length) pairs as a text scatter plot. Length runs
//! down the vertical axis, largest at the top. Seed runs along the
//! horizontal axis.
//!
//! ```text
//!
//!    7 |  O
//!    6 |
//!    5 |    O
//!    4 |
//!    3 |
//!    2 |   O
//!    1 | O
//!    0 |O
//!      '----'
//!      0    5
//!
//! ```
//!
//! The renderer makes one pass over the pairs. It never builds a grid, so
//! memory stays linear in the number of pairs however tall the plot is.

mod axis;
mod rows;

pub use axis::{Axis, AxisLine};
pub use rows::{Row, Rows};

use std::fmt;
use std::io;

use collatz_core::Pair;

/// Columns reserved for the vertical axis label, `" %3d |"`.
pub const LABEL_WIDTH: usize = 6;

/// Narrowest horizontal axis ever drawn.
pub const MIN_AXIS_WIDTH: usize = 5;

/// Characters and widths used when drawing a plot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotConfig {
    /// Width of the vertical axis label column, including the `|`.
    pub label_width: usize,
    /// Character drawn for each seed.
    pub marker: char,
    /// Axis character at every fifth column.
    pub major_tick: char,
    /// Axis character everywhere else.
    pub filler: char,
    /// Minimum number of seed columns on the horizontal axis.
    pub min_width: usize,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            label_width: LABEL_WIDTH,
            marker: 'O',
            major_tick: '\'',
            filler: '-',
            min_width: MIN_AXIS_WIDTH,
        }
    }
}

/// A scatter plot over pairs already sorted by [`collatz_core::heapsort`].
///
/// The pairs must read longest length first with equal lengths in
/// ascending seed order. Pairs that break that order are not drawn
/// correctly.
#[derive(Debug, Clone)]
pub struct ScatterPlot<'a> {
    pairs: &'a [Pair],
    width: usize,
    config: PlotConfig,
}

impl<'a> ScatterPlot<'a> {
    /// Plot `pairs` across `width` seed columns with the default config.
    pub fn new(pairs: &'a [Pair], width: usize) -> Self {
        Self::with_config(pairs, width, PlotConfig::default())
    }

    /// Plot with explicit characters and widths.
    pub fn with_config(pairs: &'a [Pair], width: usize, config: PlotConfig) -> Self {
        Self {
            pairs,
            width,
            config,
        }
    }

    /// Data rows, top to bottom.
    pub fn rows(&self) -> Rows<'a> {
        Rows::new(self.pairs)
    }

    /// Horizontal axis, at least [`PlotConfig::min_width`] columns wide.
    pub fn axis(&self) -> Axis {
        Axis::new(
            self.width.max(self.config.min_width),
            self.config.major_tick,
            self.config.filler,
        )
    }

    /// Write the plot to `out`.
    pub fn render<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)?;
        out.flush()
    }

    fn write_row(&self, f: &mut fmt::Formatter<'_>, row: &Row<'_>) -> fmt::Result {
        let digits = self.config.label_width.saturating_sub(3);
        write!(f, " {:>digits$} |", row.length)?;

        let mut x = 0;
        for pair in row.pairs {
            // Columns are 1-based: seed s sits s places right of the bar.
            let pad = pair.seed.saturating_sub(x) as usize;
            write!(f, "{:>pad$}", self.config.marker)?;
            x = pair.seed;
        }
        writeln!(f)
    }
}

impl fmt::Display for ScatterPlot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for row in self.rows() {
            self.write_row(f, &row)?;
        }

        let indent = self.config.label_width.saturating_sub(1);
        let axis = self.axis();
        for line in [AxisLine::Ticks, AxisLine::Labels] {
            writeln!(f, "{:indent$}{}", "", axis.line(line))?;
        }
        writeln!(f)
    }
}
