use clap::Parser;
use colored::Colorize;
use std::io;
use tracing_subscriber::EnvFilter;
use usecompass_core::cli::{self, Cli};
use usecompass_core::exit::UsecompassExit;

fn main() -> UsecompassExit {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli::dispatch::execute(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            UsecompassExit::Error
        }
    }
}

/// Warnings (skipped files) by default, debug with `--verbose`; `RUST_LOG` wins.
fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
