// src/config/io.rs
use std::fs;
use std::path::Path;

use tracing::debug;

use super::types::Config;
use crate::error::{Result, UsecompassError};

/// Commented starter configuration written by `usecompass init`.
pub const SCAFFOLD: &str = r#"# Configuration file for usecompass

exclusions:
  controllers:
    # Controllers that don't need to call usecases
    - "app/controllers/application_controller.rb"
    # - "app/controllers/admin/health_check_controller.rb"

  controller_actions:
    # Specific controller actions that don't need to call usecases
    # - controller: "app/controllers/admin/dashboard_controller.rb"
    #   actions: ["index", "show"]

  usecase_specs:
    # Usecases that don't need specs (e.g., legacy code)
    # - "layered/usecase/legacy/migration_usecase.rb"

  rake_files:
    # Rake files whose tasks don't need to call usecases
    # - "lib/tasks/maintenance.rake"

  rake_tasks:
    # Specific rake tasks that don't need to call usecases
    # - rake_file: "lib/tasks/cleanup.rake"
    #   tasks: ["purge_logs"]

  rake_specs:
    # Rake files that don't need specs
    # - "lib/tasks/legacy/old_task.rake"

# Custom spec file mappings for non-standard naming
custom_mappings:
  rakes:
    # Map rake files to their corresponding spec files when naming doesn't follow convention
    # - rake_file: "lib/tasks/hoge_one.rake"
    #   spec_file: "spec/lib/tasks/hoge_one_1_spec.rb"

  usecases:
    # Map usecase files to their corresponding spec files when naming doesn't follow convention
    # - usecase_file: "layered/usecase/some_usecase.rb"
    #   spec_file: "spec/layered/usecase/some_custom_spec.rb"
"#;

/// Loads `path`, falling back to defaults when the file does not exist.
///
/// # Errors
/// Returns error if the file exists but cannot be read or is not valid YAML.
pub fn load(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!(path = %path.display(), "No config file, using defaults");
        return Ok(Config::default());
    }
    let content = fs::read_to_string(path).map_err(|e| UsecompassError::io(e, path))?;
    parse(&content).map_err(|source| UsecompassError::Config {
        source,
        path: path.to_path_buf(),
    })
}

/// Parses YAML text. Empty or comment-only documents yield the defaults.
///
/// # Errors
/// Returns the YAML error if the document is malformed or has the wrong shape.
pub fn parse(content: &str) -> std::result::Result<Config, serde_yaml::Error> {
    let blank = content.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#') || line == "---"
    });
    if blank {
        return Ok(Config::default());
    }
    let value: serde_yaml::Value = serde_yaml::from_str(content)?;
    if value.is_null() {
        return Ok(Config::default());
    }
    serde_yaml::from_value(value)
}

/// Outcome of writing the starter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    Created,
    Overwritten,
    /// A config exists and overwriting was not allowed.
    Kept,
}

/// Writes [`SCAFFOLD`] to `path`.
///
/// # Errors
/// Returns error if the file cannot be written.
pub fn write_scaffold(path: &Path, overwrite: bool) -> Result<ScaffoldOutcome> {
    let existed = path.exists();
    if existed && !overwrite {
        return Ok(ScaffoldOutcome::Kept);
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| UsecompassError::io(e, parent))?;
    }
    fs::write(path, SCAFFOLD).map_err(|e| UsecompassError::io(e, path))?;
    Ok(if existed {
        ScaffoldOutcome::Overwritten
    } else {
        ScaffoldOutcome::Created
    })
}
