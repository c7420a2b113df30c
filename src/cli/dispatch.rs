//! Command dispatch logic extracted from the binary.

use super::args::{Cli, Commands};
use super::handlers::{handle_check, handle_init};
use crate::exit::UsecompassExit;
use anyhow::Result;

/// Executes the parsed command line. No subcommand means `check`.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(cli: Cli) -> Result<UsecompassExit> {
    match cli.command {
        Some(Commands::Check(args)) => handle_check(&args),
        Some(Commands::Init(args)) => handle_init(&args),
        None => handle_check(&cli.check),
    }
}
