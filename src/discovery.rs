// src/discovery.rs
use crate::types::{Role, SourceUnit};
use regex::Regex;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, warn};
use walkdir::WalkDir;

const CONTROLLER_PATTERN: &str = r"^app/controllers/(.*/)?[^/]*_controller\.rb$";
const USECASE_PATTERN: &str = r"^(layered/usecase|app)/.+_usecase\.rb$";
const TASK_PATTERN: &str = r"^lib/tasks/.+\.rake$";

static CONTROLLER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CONTROLLER_PATTERN).unwrap_or_else(|_| panic!("Invalid Regex")));
static USECASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(USECASE_PATTERN).unwrap_or_else(|_| panic!("Invalid Regex")));
static TASK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TASK_PATTERN).unwrap_or_else(|_| panic!("Invalid Regex")));

impl Role {
    /// Directories (relative to the project root) that hold files of this role.
    #[must_use]
    pub fn search_roots(self) -> &'static [&'static str] {
        match self {
            Self::Controller => &["app/controllers"],
            Self::Usecase => &["layered/usecase", "app"],
            Self::Task => &["lib/tasks"],
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Self::Controller => &*CONTROLLER_RE,
            Self::Usecase => &*USECASE_RE,
            Self::Task => &*TASK_RE,
        }
    }

    /// Whether a root-relative, `/`-separated path belongs to this role.
    #[must_use]
    pub fn matches(self, relative_path: &str) -> bool {
        self.pattern().is_match(relative_path)
    }
}

/// Finds every file of `role` under `root`, sorted by relative path.
///
/// Missing role directories simply contribute nothing.
#[must_use]
pub fn discover(root: &Path, role: Role) -> Vec<SourceUnit> {
    let mut found: BTreeMap<String, PathBuf> = BTreeMap::new();

    for base in role.search_roots() {
        let dir = root.join(base);
        if !dir.is_dir() {
            debug!(%role, dir = %dir.display(), "Search root missing");
            continue;
        }
        let (paths, errors) = accumulate_walker(WalkDir::new(&dir).follow_links(false).into_iter());
        if errors > 0 {
            warn!(dir = %dir.display(), "Encountered {errors} errors during file walk");
        }
        for path in paths {
            let Some(relative) = relative_to(root, &path) else {
                continue;
            };
            if role.matches(&relative) {
                found.entry(relative).or_insert(path);
            }
        }
    }

    debug!(%role, count = found.len(), "Discovered files");
    found
        .into_iter()
        .map(|(relative_path, absolute_path)| SourceUnit {
            absolute_path,
            relative_path,
        })
        .collect()
}

fn accumulate_walker<I>(walker: I) -> (Vec<PathBuf>, usize)
where
    I: Iterator<Item = walkdir::Result<walkdir::DirEntry>>,
{
    let mut paths = Vec::new();
    let mut errors = 0;
    for item in walker {
        match item {
            Ok(entry) => {
                if entry.file_type().is_file() {
                    paths.push(entry.into_path());
                }
            }
            Err(_) => errors += 1,
        }
    }
    (paths, errors)
}

/// Root-relative path with forward slashes.
fn relative_to(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    Some(normalize_path(rel))
}

/// Normalizes a path to use forward slashes (cross-platform pattern matching).
#[must_use]
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
