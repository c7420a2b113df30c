//! Runs the requested checks over a project and collects the results.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

use super::ast::{self, Node, ParseError};
use super::spec_path::{self, SpecTarget};
use super::{controllers, tasks, FileContext};
use crate::config::{Config, Exclusions};
use crate::discovery;
use crate::types::{AuditReport, CheckSet, Role, Violation};

/// Orchestrates discovery, exclusion filtering, scanning and spec lookup.
pub struct Engine {
    root: PathBuf,
    config: Config,
}

impl Engine {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Runs the selected checks in a fixed order. Unselected checks stay `None`.
    #[must_use]
    pub fn run(&self, checks: CheckSet) -> AuditReport {
        let mut report = AuditReport::default();

        if checks.controller_actions {
            report.controller_violations = Some(self.scan_sources(
                Role::Controller,
                Exclusions::skips_controller,
                controllers::scan,
                &mut report.parse_failures,
            ));
        }
        if checks.usecase_specs {
            report.usecase_violations = Some(self.check_specs(
                Role::Usecase,
                SpecTarget::Usecase,
                Exclusions::skips_usecase_spec,
            ));
        }
        if checks.task_actions {
            report.rake_violations = Some(self.scan_sources(
                Role::Task,
                Exclusions::skips_rake_file,
                tasks::scan,
                &mut report.parse_failures,
            ));
        }
        if checks.task_specs {
            report.rake_spec_violations = Some(self.check_specs(
                Role::Task,
                SpecTarget::Task,
                Exclusions::skips_rake_spec,
            ));
        }

        report
    }

    fn scan_sources<S, F>(
        &self,
        role: Role,
        is_skipped: S,
        scanner: F,
        failures: &mut Vec<ParseError>,
    ) -> Vec<Violation>
    where
        S: Fn(&Exclusions, &str) -> bool,
        F: Fn(&Node, &FileContext) -> Vec<Violation>,
    {
        let exclusions = &self.config.exclusions;
        let mut violations = Vec::new();

        for unit in discovery::discover(&self.root, role) {
            if is_skipped(exclusions, &unit.relative_path) {
                debug!(path = %unit.relative_path, "Excluded");
                continue;
            }
            let bytes = match fs::read(&unit.absolute_path) {
                Ok(bytes) => bytes,
                Err(e) => {
                    warn!(path = %unit.relative_path, "Could not read file: {e}");
                    continue;
                }
            };
            // Invalid UTF-8 (e.g. Latin-1 comments) is replaced, not rejected.
            let source = String::from_utf8_lossy(&bytes);
            match ast::parse(&unit.relative_path, &source) {
                Ok(tree) => {
                    let ctx = FileContext {
                        file: &unit.relative_path,
                        exclusions,
                    };
                    violations.extend(scanner(&tree, &ctx));
                }
                Err(e) => {
                    // Listed in the report itself.
                    debug!("{e}");
                    failures.push(e);
                }
            }
        }

        violations
    }

    fn check_specs<S>(&self, role: Role, target: SpecTarget, is_skipped: S) -> Vec<Violation>
    where
        S: Fn(&Exclusions, &str) -> bool,
    {
        let mut violations = Vec::new();

        for unit in discovery::discover(&self.root, role) {
            if is_skipped(&self.config.exclusions, &unit.relative_path) {
                debug!(path = %unit.relative_path, "Excluded");
                continue;
            }
            let expected_spec =
                spec_path::resolve(&unit.relative_path, target, &self.config.custom_mappings);
            debug!(path = %unit.relative_path, spec = %expected_spec, "Resolved spec path");
            if self.root.join(&expected_spec).exists() {
                continue;
            }
            let file = unit.relative_path;
            violations.push(match target {
                SpecTarget::Usecase => Violation::UsecaseMissingSpec {
                    file,
                    expected_spec,
                },
                SpecTarget::Task => Violation::TaskMissingSpec {
                    file,
                    expected_spec,
                },
            });
        }

        violations
    }
}
