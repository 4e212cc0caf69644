//! collatz binary
//!
//! Plots Collatz sequence lengths for seeds 1..=N in the terminal.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use collatz_cli::Cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the plot
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "collatz=warn,collatz_cli=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let program = std::env::args()
        .next()
        .unwrap_or_else(|| "collatz".to_string());

    let mut stdout = io::stdout().lock();
    match collatz_cli::run(&cli, &program, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Run failed: {:?}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
