//! Run settings: terminal width and plot characters.

use collatz_plot::PlotConfig;

use crate::Cli;

/// Width assumed when the terminal cannot be queried.
pub const DEFAULT_TERMINAL_WIDTH: u16 = 80;

/// Settings for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Columns available on the terminal.
    pub terminal_width: u16,
    /// Characters and widths for the plot.
    pub plot: PlotConfig,
}

impl Settings {
    /// Resolve settings from the command line, querying the terminal only
    /// when no `--width` was given.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            terminal_width: cli.width.unwrap_or_else(terminal_width),
            plot: PlotConfig {
                marker: cli.marker,
                ..PlotConfig::default()
            },
        }
    }

    /// Largest bound whose plot fits beside the label column.
    pub fn max_bound(&self) -> u64 {
        usize::from(self.terminal_width).saturating_sub(self.plot.label_width) as u64
    }
}

/// Current terminal width in columns.
///
/// Asks the terminal first. Some terminals report a 1-column size or no
/// size at all when stdout is not a tty; fall back to `COLUMNS`, then to
/// [`DEFAULT_TERMINAL_WIDTH`].
pub fn terminal_width() -> u16 {
    match crossterm::terminal::size() {
        Ok((w, _)) if w > 1 => w,
        Ok((w, _)) => {
            tracing::debug!("Terminal reported width {}, trying COLUMNS", w);
            width_from_env().unwrap_or(DEFAULT_TERMINAL_WIDTH)
        }
        Err(e) => {
            tracing::debug!("Terminal size unavailable ({}), trying COLUMNS", e);
            width_from_env().unwrap_or(DEFAULT_TERMINAL_WIDTH)
        }
    }
}

fn width_from_env() -> Option<u16> {
    parse_columns(&std::env::var("COLUMNS").ok()?)
}

fn parse_columns(value: &str) -> Option<u16> {
    let cols = value.trim().parse::<u16>().ok()?;
    (cols > 1).then_some(cols)
}
