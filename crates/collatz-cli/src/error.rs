//! Error types for the Collatz CLI.

use thiserror::Error;

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that stop a run before anything is plotted.
#[derive(Debug, Error)]
pub enum Error {
    /// Bound missing or not an integer
    #[error("usage: {program} <int>")]
    InvalidArgument { program: String },

    /// Bound parsed but does not fit the terminal
    #[error("{value}: 0 <= <int> <= {max}")]
    OutOfRange { value: String, max: u64 },

    /// Writing the plot failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
