//! Maps a source file to the spec file that should cover it.
//!
//! Pure string rewriting; existence is checked by the caller.

use crate::config::CustomMappings;

/// Kinds of source file that are expected to have a spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecTarget {
    Usecase,
    Task,
}

const USECASE_SUFFIX: &str = "_usecase.rb";
const SPEC_SUFFIX: &str = "_spec.rb";

/// Expected spec path for `relative_path`, relative to the project root.
///
/// An exact custom mapping wins and is returned untouched; otherwise the
/// naming convention for `target` applies.
#[must_use]
pub fn resolve(relative_path: &str, target: SpecTarget, mappings: &CustomMappings) -> String {
    if let Some(spec) = mappings.lookup(target, relative_path) {
        return spec.to_string();
    }
    match target {
        SpecTarget::Usecase => usecase_spec_path(relative_path),
        SpecTarget::Task => task_spec_path(relative_path),
    }
}

/// `layered/x_usecase.rb` → `spec/layered/x_usecase_spec.rb`,
/// `app/usecases/x_usecase.rb` → `spec/usecases/x_usecase_spec.rb`,
/// anything else → `spec/<path>`.
#[must_use]
pub fn usecase_spec_path(relative_path: &str) -> String {
    let relocated = if let Some(rest) = relative_path.strip_prefix("layered/") {
        format!("spec/layered/{rest}")
    } else if let Some(rest) = relative_path.strip_prefix("app/") {
        format!("spec/{rest}")
    } else {
        format!("spec/{relative_path}")
    };

    match relocated.strip_suffix(USECASE_SUFFIX) {
        Some(stem) => format!("{stem}_usecase{SPEC_SUFFIX}"),
        None => relocated,
    }
}

/// `lib/tasks/x.rake` → `spec/lib/tasks/x_spec.rb`.
#[must_use]
pub fn task_spec_path(relative_path: &str) -> String {
    let relocated = match relative_path.strip_prefix("lib/") {
        Some(rest) => format!("spec/lib/{rest}"),
        None => format!("spec/{relative_path}"),
    };
    format!("{}{SPEC_SUFFIX}", strip_extension(&relocated))
}

/// Drops the final `.ext` of the file name, leaving directories alone.
fn strip_extension(path: &str) -> &str {
    let name_start = path.rfind('/').map_or(0, |i| i + 1);
    match path[name_start..].rfind('.') {
        Some(dot) if dot > 0 => &path[..name_start + dot],
        _ => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RakeMapping, UsecaseMapping};

    #[test]
    fn layered_usecase() {
        assert_eq!(
            usecase_spec_path("layered/usecase/orders/create_usecase.rb"),
            "spec/layered/usecase/orders/create_usecase_spec.rb"
        );
    }

    #[test]
    fn app_usecase_drops_app_segment() {
        assert_eq!(
            usecase_spec_path("app/usecases/orders/create_usecase.rb"),
            "spec/usecases/orders/create_usecase_spec.rb"
        );
    }

    #[test]
    fn other_roots_are_prefixed_with_spec() {
        assert_eq!(
            usecase_spec_path("domain/create_usecase.rb"),
            "spec/domain/create_usecase_spec.rb"
        );
        assert_eq!(usecase_spec_path("create_usecase.rb"), "spec/create_usecase_spec.rb");
    }

    #[test]
    fn prefix_must_be_leading() {
        assert_eq!(
            usecase_spec_path("engines/app/x_usecase.rb"),
            "spec/engines/app/x_usecase_spec.rb"
        );
    }

    #[test]
    fn rake_task_extension_and_suffix_change_together() {
        assert_eq!(task_spec_path("lib/tasks/cleanup.rake"), "spec/lib/tasks/cleanup_spec.rb");
        assert_eq!(
            task_spec_path("lib/tasks/db/seed.v2.rake"),
            "spec/lib/tasks/db/seed.v2_spec.rb"
        );
    }

    #[test]
    fn task_without_extension_or_lib_root() {
        assert_eq!(task_spec_path("lib/tasks/Rakefile"), "spec/lib/tasks/Rakefile_spec.rb");
        assert_eq!(task_spec_path("tasks/a.rake"), "spec/tasks/a_spec.rb");
        assert_eq!(task_spec_path("lib/tasks.d/run"), "spec/lib/tasks.d/run_spec.rb");
    }

    #[test]
    fn custom_mapping_wins_verbatim() {
        let mappings = CustomMappings {
            usecases: vec![UsecaseMapping {
                usecase_file: "layered/usecase/some_usecase.rb".into(),
                spec_file: "spec/custom/odd_name.rb".into(),
            }],
            rakes: vec![RakeMapping {
                rake_file: "lib/tasks/hoge_one.rake".into(),
                spec_file: "spec/lib/tasks/hoge_one_1_spec.rb".into(),
            }],
        };
        assert_eq!(
            resolve("layered/usecase/some_usecase.rb", SpecTarget::Usecase, &mappings),
            "spec/custom/odd_name.rb"
        );
        assert_eq!(
            resolve("lib/tasks/hoge_one.rake", SpecTarget::Task, &mappings),
            "spec/lib/tasks/hoge_one_1_spec.rb"
        );
        // Mappings are scoped by target.
        assert_eq!(
            resolve("lib/tasks/hoge_one.rake", SpecTarget::Usecase, &mappings),
            "spec/lib/tasks/hoge_one.rake"
        );
        assert_eq!(
            resolve("layered/usecase/other_usecase.rb", SpecTarget::Usecase, &mappings),
            "spec/layered/usecase/other_usecase_spec.rb"
        );
    }

    #[test]
    fn first_matching_mapping_wins() {
        let mappings = CustomMappings {
            usecases: vec![
                UsecaseMapping {
                    usecase_file: "app/a_usecase.rb".into(),
                    spec_file: "spec/first_spec.rb".into(),
                },
                UsecaseMapping {
                    usecase_file: "app/a_usecase.rb".into(),
                    spec_file: "spec/second_spec.rb".into(),
                },
            ],
            rakes: Vec::new(),
        };
        assert_eq!(resolve("app/a_usecase.rb", SpecTarget::Usecase, &mappings), "spec/first_spec.rb");
    }
}
