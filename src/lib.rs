//! Checks that Rails controllers and rake tasks delegate to usecases, and that
//! usecases and rake files have specs.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod exit;
pub mod reporting;
pub mod types;

use std::path::Path;

use crate::analysis::Engine;
use crate::config::Config;
use crate::types::{AuditReport, CheckSet};

/// Runs `checks` against the project at `root` with an already-loaded config.
#[must_use]
pub fn check(root: &Path, config: Config, checks: CheckSet) -> AuditReport {
    Engine::new(root, config).run(checks)
}

/// Loads `config_path` (default `<root>/usecompass.yml`) and runs every check.
///
/// # Errors
/// Returns error if the config file exists but cannot be read or parsed.
pub fn check_project(root: &Path, config_path: Option<&Path>) -> error::Result<AuditReport> {
    let default_path = root.join(config::CONFIG_FILE_NAME);
    let config = Config::load(config_path.unwrap_or(&default_path))?;
    Ok(check(root, config, CheckSet::all()))
}
