// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::{ScaffoldOutcome, SCAFFOLD};
pub use self::types::{
    ActionExclusion, Config, CustomMappings, Exclusions, RakeMapping, TaskExclusion,
    UsecaseMapping,
};

use crate::error::Result;
use std::path::Path;

/// Default config file name, looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "usecompass.yml";

impl Config {
    /// Loads `usecompass.yml` (or any YAML path). Missing file means defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but is unreadable or malformed.
    pub fn load(path: &Path) -> Result<Self> {
        io::load(path)
    }

    /// Parses configuration from YAML text.
    ///
    /// # Errors
    /// Returns error if the YAML is malformed.
    pub fn from_yaml(content: &str) -> Result<Self> {
        io::parse(content).map_err(|source| crate::error::UsecompassError::Config {
            source,
            path: "<inline>".into(),
        })
    }

    /// Writes the starter configuration unless one exists and `overwrite` is false.
    ///
    /// # Errors
    /// Returns error if the file write fails.
    pub fn scaffold(path: &Path, overwrite: bool) -> Result<ScaffoldOutcome> {
        io::write_scaffold(path, overwrite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaffold_parses_with_comment_only_sections() {
        let config = Config::from_yaml(SCAFFOLD).unwrap();
        assert_eq!(
            config.exclusions.controllers,
            vec!["app/controllers/application_controller.rb".to_string()]
        );
        assert!(config.exclusions.controller_actions.is_empty());
        assert!(config.custom_mappings.usecases.is_empty());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config = Config::from_yaml("custom_mappings:\n  rakes:\n    - rake_file: a.rake\n      spec_file: b_spec.rb\n").unwrap();
        assert!(config.exclusions.controllers.is_empty());
        assert_eq!(config.custom_mappings.rakes.len(), 1);
        assert_eq!(Config::from_yaml("# nothing\n").unwrap(), Config::default());
    }

    #[test]
    fn per_action_exclusion_matches_file_and_name() {
        let config = Config::from_yaml(
            "exclusions:\n  controller_actions:\n    - controller: app/controllers/a_controller.rb\n      actions: [index]\n",
        )
        .unwrap();
        let ex = &config.exclusions;
        assert!(ex.excludes_action("app/controllers/a_controller.rb", "index"));
        assert!(!ex.excludes_action("app/controllers/a_controller.rb", "show"));
        assert!(!ex.excludes_action("app/controllers/b_controller.rb", "index"));
    }

    #[test]
    fn entries_missing_keys_never_match() {
        let config = Config::from_yaml(
            "exclusions:\n  controller_actions:\n    - actions: [index]\n  rake_tasks:\n    - tasks: [noop]\n",
        )
        .unwrap();
        let ex = &config.exclusions;
        assert_eq!(ex.controller_actions[0].controller, "");
        assert!(!ex.excludes_action("app/controllers/a_controller.rb", "index"));
        assert!(!ex.excludes_task("lib/tasks/a.rake", "noop"));
    }

    #[test]
    fn mapping_without_spec_file_falls_back_to_convention() {
        use crate::analysis::spec_path::{resolve, SpecTarget};

        let config = Config::from_yaml(
            "custom_mappings:\n  usecases:\n    - usecase_file: app/usecases/a_usecase.rb\n  rakes:\n    - spec_file: spec/odd_spec.rb\n",
        )
        .unwrap();
        let mappings = &config.custom_mappings;
        assert_eq!(mappings.lookup(SpecTarget::Usecase, "app/usecases/a_usecase.rb"), None);
        assert_eq!(
            resolve("app/usecases/a_usecase.rb", SpecTarget::Usecase, mappings),
            "spec/usecases/a_usecase_spec.rb"
        );
        assert_eq!(mappings.lookup(SpecTarget::Task, "lib/tasks/a.rake"), None);
        assert_eq!(
            resolve("lib/tasks/a.rake", SpecTarget::Task, mappings),
            "spec/lib/tasks/a_spec.rb"
        );
    }
}
