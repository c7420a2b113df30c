// src/types.rs
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::analysis::ast::ParseError;

/// What a discovered file is expected to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Controller,
    Usecase,
    Task,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Controller => "controller",
            Self::Usecase => "usecase",
            Self::Task => "task",
        };
        f.write_str(s)
    }
}

/// A file found by discovery, valid for a single analysis pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    pub absolute_path: PathBuf,
    /// Relative to the project root, always `/`-separated.
    pub relative_path: String,
}

/// A single structural finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    ActionWithoutUsecase {
        file: String,
        action_name: String,
        line: usize,
    },
    TaskWithoutUsecase {
        file: String,
        task_name: String,
        line: usize,
    },
    UsecaseMissingSpec {
        file: String,
        expected_spec: String,
    },
    TaskMissingSpec {
        file: String,
        expected_spec: String,
    },
}

impl Violation {
    /// Relative path of the offending source file.
    #[must_use]
    pub fn file(&self) -> &str {
        match self {
            Self::ActionWithoutUsecase { file, .. }
            | Self::TaskWithoutUsecase { file, .. }
            | Self::UsecaseMissingSpec { file, .. }
            | Self::TaskMissingSpec { file, .. } => file,
        }
    }
}

/// Which of the four checks to run.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckSet {
    pub controller_actions: bool,
    pub usecase_specs: bool,
    pub task_actions: bool,
    pub task_specs: bool,
}

impl CheckSet {
    #[must_use]
    pub const fn all() -> Self {
        Self {
            controller_actions: true,
            usecase_specs: true,
            task_actions: true,
            task_specs: true,
        }
    }

    /// Builds a selection from the CLI's additive `--*-only` flags.
    /// No flag at all means every check.
    #[must_use]
    pub const fn from_selectors(controllers: bool, specs: bool, rakes: bool) -> Self {
        if !controllers && !specs && !rakes {
            return Self::all();
        }
        Self {
            controller_actions: controllers,
            usecase_specs: specs,
            task_actions: rakes,
            task_specs: rakes,
        }
    }
}

impl Default for CheckSet {
    fn default() -> Self {
        Self::all()
    }
}

/// Results of one analysis pass.
///
/// A `None` collection means the check was not requested, which is distinct
/// from `Some(vec![])` (requested, nothing found).
#[derive(Debug, Clone, Default, Serialize)]
pub struct AuditReport {
    pub controller_violations: Option<Vec<Violation>>,
    pub usecase_violations: Option<Vec<Violation>>,
    pub rake_violations: Option<Vec<Violation>>,
    pub rake_spec_violations: Option<Vec<Violation>>,
    #[serde(serialize_with = "serialize_failures")]
    pub parse_failures: Vec<ParseError>,
}

impl AuditReport {
    /// Iterates over the requested collections in reporting order.
    pub fn sections(&self) -> impl Iterator<Item = (Section, &[Violation])> {
        [
            (Section::ControllerActions, &self.controller_violations),
            (Section::UsecaseSpecs, &self.usecase_violations),
            (Section::TaskActions, &self.rake_violations),
            (Section::TaskSpecs, &self.rake_spec_violations),
        ]
        .into_iter()
        .filter_map(|(section, v)| v.as_deref().map(|v| (section, v)))
    }

    #[must_use]
    pub fn total_violations(&self) -> usize {
        self.sections().map(|(_, v)| v.len()).sum()
    }

    #[must_use]
    pub fn has_violations(&self) -> bool {
        self.total_violations() > 0
    }
}

/// One of the four report sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    ControllerActions,
    UsecaseSpecs,
    TaskActions,
    TaskSpecs,
}

impl Section {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::ControllerActions => "Controllers not calling usecases:",
            Self::UsecaseSpecs => "Usecases without specs:",
            Self::TaskActions => "Rake tasks not calling usecases:",
            Self::TaskSpecs => "Rake files without specs:",
        }
    }
}

fn serialize_failures<S>(failures: &[ParseError], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(failures.iter().map(ToString::to_string))
}
