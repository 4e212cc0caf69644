//! Horizontal axis: a tick line and a digit line under it.

use std::fmt;

/// Which of the two axis lines to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisLine {
    /// Major tick every fifth column, filler elsewhere.
    Ticks,
    /// `0` every tenth column, `5` on the odd fives, blank elsewhere.
    Labels,
}

/// Horizontal axis spanning columns `0..=width`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Axis {
    width: usize,
    major_tick: char,
    filler: char,
}

impl Axis {
    /// Axis over `width` seed columns plus the origin column.
    pub const fn new(width: usize, major_tick: char, filler: char) -> Self {
        Self {
            width,
            major_tick,
            filler,
        }
    }

    /// Number of seed columns.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Character at `column` on the given line.
    pub const fn glyph(&self, line: AxisLine, column: usize) -> char {
        match line {
            AxisLine::Ticks if column % 5 == 0 => self.major_tick,
            AxisLine::Ticks => self.filler,
            AxisLine::Labels if column % 10 == 0 => '0',
            AxisLine::Labels if column % 5 == 0 => '5',
            AxisLine::Labels => ' ',
        }
    }

    /// Display adapter for one axis line.
    pub fn line(&self, line: AxisLine) -> impl fmt::Display + '_ {
        DisplayLine { axis: self, line }
    }
}

struct DisplayLine<'a> {
    axis: &'a Axis,
    line: AxisLine,
}

impl fmt::Display for DisplayLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        for column in 0..=self.axis.width {
            f.write_char(self.axis.glyph(self.line, column))?;
        }
        Ok(())
    }
}
