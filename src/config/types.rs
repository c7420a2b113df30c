use serde::{Deserialize, Deserializer, Serialize};

use crate::analysis::spec_path::SpecTarget;

/// Top level of `usecompass.yml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, deserialize_with = "nullable")]
    pub exclusions: Exclusions,
    #[serde(default, deserialize_with = "nullable")]
    pub custom_mappings: CustomMappings,
}

/// Files and definitions the checks should not report on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exclusions {
    /// Controllers skipped by the action scan.
    #[serde(default, deserialize_with = "nullable")]
    pub controllers: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub controller_actions: Vec<ActionExclusion>,
    /// Usecases that don't need a spec.
    #[serde(default, deserialize_with = "nullable")]
    pub usecase_specs: Vec<String>,
    /// Rake files skipped by the task scan.
    #[serde(default, deserialize_with = "nullable")]
    pub rake_files: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub rake_tasks: Vec<TaskExclusion>,
    /// Rake files that don't need a spec.
    #[serde(default, deserialize_with = "nullable")]
    pub rake_specs: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionExclusion {
    #[serde(default, deserialize_with = "nullable")]
    pub controller: String,
    #[serde(default, deserialize_with = "nullable")]
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskExclusion {
    #[serde(default, deserialize_with = "nullable")]
    pub rake_file: String,
    #[serde(default, deserialize_with = "nullable")]
    pub tasks: Vec<String>,
}

/// Explicit spec locations for files that don't follow the naming convention.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomMappings {
    #[serde(default, deserialize_with = "nullable")]
    pub usecases: Vec<UsecaseMapping>,
    #[serde(default, deserialize_with = "nullable")]
    pub rakes: Vec<RakeMapping>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsecaseMapping {
    #[serde(default, deserialize_with = "nullable")]
    pub usecase_file: String,
    #[serde(default, deserialize_with = "nullable")]
    pub spec_file: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RakeMapping {
    #[serde(default, deserialize_with = "nullable")]
    pub rake_file: String,
    #[serde(default, deserialize_with = "nullable")]
    pub spec_file: String,
}

impl Exclusions {
    #[must_use]
    pub fn skips_controller(&self, path: &str) -> bool {
        contains(&self.controllers, path)
    }

    #[must_use]
    pub fn skips_usecase_spec(&self, path: &str) -> bool {
        contains(&self.usecase_specs, path)
    }

    #[must_use]
    pub fn skips_rake_file(&self, path: &str) -> bool {
        contains(&self.rake_files, path)
    }

    #[must_use]
    pub fn skips_rake_spec(&self, path: &str) -> bool {
        contains(&self.rake_specs, path)
    }

    #[must_use]
    pub fn excludes_action(&self, controller: &str, action: &str) -> bool {
        self.controller_actions
            .iter()
            .any(|e| e.controller == controller && contains(&e.actions, action))
    }

    #[must_use]
    pub fn excludes_task(&self, rake_file: &str, task: &str) -> bool {
        self.rake_tasks
            .iter()
            .any(|e| e.rake_file == rake_file && contains(&e.tasks, task))
    }
}

impl CustomMappings {
    /// First mapping whose source equals `path` exactly. Entries without a
    /// `spec_file` never match.
    #[must_use]
    pub fn lookup(&self, target: SpecTarget, path: &str) -> Option<&str> {
        match target {
            SpecTarget::Usecase => self
                .usecases
                .iter()
                .filter(|m| !m.spec_file.is_empty())
                .find(|m| m.usecase_file == path)
                .map(|m| m.spec_file.as_str()),
            SpecTarget::Task => self
                .rakes
                .iter()
                .filter(|m| !m.spec_file.is_empty())
                .find(|m| m.rake_file == path)
                .map(|m| m.spec_file.as_str()),
        }
    }
}

fn contains(list: &[String], item: &str) -> bool {
    list.iter().any(|s| s == item)
}

/// Treats an explicit YAML `null` (a key with only comments under it) as the default.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
