// src/cli/handlers.rs
use crate::analysis::Engine;
use crate::cli::args::{CheckArgs, InitArgs};
use crate::config::{Config, ScaffoldOutcome, CONFIG_FILE_NAME};
use crate::exit::UsecompassExit;
use crate::reporting;
use crate::types::CheckSet;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

fn resolve_root(root: Option<&Path>) -> PathBuf {
    root.map_or_else(
        || std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        Path::to_path_buf,
    )
}

/// Handles the check command.
///
/// # Errors
/// Returns error if the config is malformed or the report cannot be written.
pub fn handle_check(args: &CheckArgs) -> Result<UsecompassExit> {
    let root = resolve_root(args.root.as_deref());
    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| root.join(CONFIG_FILE_NAME));
    let config = Config::load(&config_path)?;
    debug!(root = %root.display(), config = %config_path.display(), "Starting check");

    let checks = CheckSet::from_selectors(args.controllers_only, args.specs_only, args.rakes_only);
    let report = Engine::new(&root, config).run(checks);

    if let Some(path) = &args.output {
        colored::control::set_override(false);
        let rendered = reporting::render(&report, args.format)?;
        fs::write(path, rendered)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
    } else {
        print!("{}", reporting::render(&report, args.format)?);
        if args.format == reporting::OutputFormat::Json {
            println!();
        }
    }

    if report.has_violations() {
        Ok(UsecompassExit::ViolationsFound)
    } else {
        Ok(UsecompassExit::Success)
    }
}

/// Handles the init command.
///
/// # Errors
/// Returns error if the config file cannot be written or stdin fails.
pub fn handle_init(args: &InitArgs) -> Result<UsecompassExit> {
    let root = resolve_root(args.root.as_deref());
    let config_path = root.join(CONFIG_FILE_NAME);

    let overwrite = args.force || !config_path.exists() || confirm_overwrite(&config_path)?;
    if !overwrite {
        println!("Aborted.");
        return Ok(UsecompassExit::Success);
    }

    match Config::scaffold(&config_path, true)? {
        ScaffoldOutcome::Created | ScaffoldOutcome::Overwritten => println!(
            "{} {}",
            "Created configuration file:".green(),
            config_path.display()
        ),
        ScaffoldOutcome::Kept => {}
    }
    Ok(UsecompassExit::Success)
}

fn confirm_overwrite(path: &Path) -> Result<bool> {
    print!(
        "Configuration file already exists at {}. Overwrite? [y/N]: ",
        path.display()
    );
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
