use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::reporting::OutputFormat;

#[derive(Parser)]
#[command(
    name = "usecompass",
    version,
    about = "Checks that controllers and rake tasks call usecases, and that usecases have specs",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Options for the default `check` command
    #[command(flatten)]
    pub check: CheckArgs,
    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the checks (default)
    Check(CheckArgs),
    /// Write a starter usecompass.yml
    Init(InitArgs),
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    /// Root path of the project
    #[arg(long, short, value_name = "PATH")]
    pub root: Option<PathBuf>,
    /// Config file path (default: <root>/usecompass.yml)
    #[arg(long, short, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Output format
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Console)]
    pub format: OutputFormat,
    /// Write the report to a file instead of stdout
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,
    /// Check controllers only
    #[arg(long, short = 'C')]
    pub controllers_only: bool,
    /// Check usecase specs only
    #[arg(long, short = 'S')]
    pub specs_only: bool,
    /// Check rake files only (task actions and specs)
    #[arg(long, short = 'R')]
    pub rakes_only: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct InitArgs {
    /// Root path of the project
    #[arg(long, short, value_name = "PATH")]
    pub root: Option<PathBuf>,
    /// Overwrite an existing config without asking
    #[arg(long, short)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_defaults_to_check_options() {
        let cli = Cli::try_parse_from(["usecompass", "-C", "--format", "json"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.check.controllers_only);
        assert_eq!(cli.check.format, OutputFormat::Json);
    }

    #[test]
    fn explicit_subcommands() {
        let cli = Cli::try_parse_from(["usecompass", "check", "--root", "/tmp/app", "-R"]).unwrap();
        let Some(Commands::Check(args)) = cli.command else {
            panic!("expected check");
        };
        assert_eq!(args.root, Some(PathBuf::from("/tmp/app")));
        assert!(args.rakes_only);

        let cli = Cli::try_parse_from(["usecompass", "init", "--force"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Init(InitArgs { force: true, .. }))));
    }

    #[test]
    fn clap_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
