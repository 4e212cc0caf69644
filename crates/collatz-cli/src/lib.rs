//! Collatz CLI
//!
//! Validates the seed bound against the terminal width, sorts seeds
//! `1..=N` by Collatz sequence length and prints the scatter plot.
//!
//! Usage:
//!   collatz <int>
//!   collatz --width 120 <int>
//!   collatz --marker '*' <int>

mod config;
mod error;

pub use config::{terminal_width, Settings, DEFAULT_TERMINAL_WIDTH};
pub use error::{Error, Result};

use std::io::Write;
use std::num::IntErrorKind;

use clap::Parser;
use collatz_core::{heapsort, PairStore};
use collatz_plot::{PlotConfig, ScatterPlot};
use tracing::{debug, info};
use unicode_width::UnicodeWidthChar;

/// Plot Collatz sequence lengths for every seed from 1 to the bound.
#[derive(Debug, Clone, Parser)]
#[command(name = "collatz", version, about)]
pub struct Cli {
    /// Largest seed to plot, at most the terminal width minus the label column
    #[arg(allow_negative_numbers = true, allow_hyphen_values = true)]
    pub bound: Option<String>,

    /// Tokens after the bound are ignored
    #[arg(hide = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,

    /// Terminal width to plot against instead of querying the terminal
    #[arg(long)]
    pub width: Option<u16>,

    /// Character drawn for each seed, one terminal column wide
    #[arg(long, default_value_t = 'O', value_parser = parse_marker)]
    pub marker: char,
}

/// Accept exactly one character that occupies a single terminal column.
///
/// Wide characters would shift every marker after them on the same row.
pub fn parse_marker(token: &str) -> std::result::Result<char, String> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if UnicodeWidthChar::width(c) == Some(1) => Ok(c),
        (Some(c), None) => Err(format!("'{}' is not one terminal column wide", c)),
        _ => Err(format!("expected a single character, got '{}'", token)),
    }
}

/// Parse and range-check the bound token.
///
/// A missing or non-numeric token is an [`Error::InvalidArgument`]. A
/// number outside `0..=max_bound`, including one too large to parse, is
/// an [`Error::OutOfRange`].
pub fn parse_bound(token: Option<&str>, max_bound: u64, program: &str) -> Result<u64> {
    let invalid = || Error::InvalidArgument {
        program: program.to_string(),
    };
    let token = token.map(str::trim).ok_or_else(invalid)?;

    let value = match token.parse::<i64>() {
        Ok(value) => value,
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            return Err(Error::OutOfRange {
                value: token.to_string(),
                max: max_bound,
            });
        }
        Err(_) => return Err(invalid()),
    };

    match u64::try_from(value) {
        Ok(bound) if bound <= max_bound => Ok(bound),
        _ => Err(Error::OutOfRange {
            value: token.to_string(),
            max: max_bound,
        }),
    }
}

/// Sort seeds `1..=bound` and write their plot to `out`.
pub fn plot<W: Write>(bound: u64, config: PlotConfig, out: &mut W) -> Result<()> {
    let mut store = PairStore::populate(bound);
    debug!("Populated store with {} pairs", store.capacity());

    let sorted = heapsort(&mut store);
    if let Some(top) = sorted.first() {
        debug!("Longest sequence: seed {} with {} steps", top.seed, top.length);
    }

    let width = usize::try_from(bound).unwrap_or(usize::MAX);
    let plot = ScatterPlot::with_config(sorted, width, config);
    plot.render(out)?;
    info!("Plotted {} seeds across {} rows", bound, plot.rows().len());
    Ok(())
}

/// Run the whole command: resolve settings, validate the bound, plot.
pub fn run<W: Write>(cli: &Cli, program: &str, out: &mut W) -> Result<()> {
    let settings = Settings::from_cli(cli);
    let max_bound = settings.max_bound();
    debug!(
        "Terminal width {} allows bounds up to {}",
        settings.terminal_width, max_bound
    );

    let bound = parse_bound(cli.bound.as_deref(), max_bound, program)?;
    plot(bound, settings.plot, out)
}
