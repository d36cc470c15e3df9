use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::{Context, Result};

/// Environment variable holding the comma-separated global skill roots.
pub const GLOBAL_SKILLS_PATH_ENV: &str = "GLOBAL_SKILLS_PATH";
/// Environment variable holding the comma-separated project skill roots.
pub const PROJECT_SKILLS_PATH_ENV: &str = "PROJECT_SKILLS_PATH";

pub const DEFAULT_GLOBAL_SKILLS_PATH: &str = "~/.skills/";
pub const DEFAULT_PROJECT_SKILLS_PATH: &str = ".skills/";

/// Resolved skill roots, split by origin.
///
/// Paths are absolute but not checked for existence; missing roots are
/// skipped later during discovery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillsPaths {
    pub global: Vec<PathBuf>,
    pub project: Vec<PathBuf>,
}

impl SkillsPaths {
    /// Resolve roots from `GLOBAL_SKILLS_PATH` / `PROJECT_SKILLS_PATH`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve roots reading variables through `lookup`.
    ///
    /// Same as [`SkillsPaths::from_env`] without touching the process
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let global = lookup(GLOBAL_SKILLS_PATH_ENV);
        let project = lookup(PROJECT_SKILLS_PATH_ENV);
        Self::resolve(global.as_deref(), project.as_deref())
    }

    /// Resolve raw list values against the user's home and the current
    /// working directory.
    pub fn resolve(global: Option<&str>, project: Option<&str>) -> Result<Self> {
        let cwd = std::env::current_dir()
            .context("failed to determine the current working directory")?;
        let home = home_dir();
        Ok(Self::resolve_with(global, project, home.as_deref(), &cwd))
    }

    pub fn resolve_with(
        global: Option<&str>,
        project: Option<&str>,
        home: Option<&Path>,
        cwd: &Path,
    ) -> Self {
        let paths = Self {
            global: parse_skills_paths(global, DEFAULT_GLOBAL_SKILLS_PATH, home, cwd),
            project: parse_skills_paths(project, DEFAULT_PROJECT_SKILLS_PATH, home, cwd),
        };
        debug!(global = ?paths.global, project = ?paths.project, "resolved skill roots");
        paths
    }

    /// All roots in scan order: global first, then project, duplicates
    /// removed (first occurrence wins).
    pub fn roots(&self) -> Vec<PathBuf> {
        dedup(self.global.iter().chain(self.project.iter()).cloned())
    }

    /// Boundary used to classify a skill as project-local.
    ///
    /// `None` when no project roots are configured, in which case every
    /// skill is global.
    pub fn project_root(&self) -> Option<&Path> {
        self.project.first().map(PathBuf::as_path)
    }
}

/// Split a comma-separated root list into absolute paths.
///
/// `value` falls back to `default` when absent or blank. Entries are trimmed,
/// empty entries are skipped, a leading `~` is replaced by `home` and relative
/// entries are joined onto `cwd`. Input order is kept and repeated paths are
/// dropped.
pub fn parse_skills_paths(
    value: Option<&str>,
    default: &str,
    home: Option<&Path>,
    cwd: &Path,
) -> Vec<PathBuf> {
    let raw = value.filter(|v| !v.trim().is_empty()).unwrap_or(default);

    let resolved = raw
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let expanded = expand_home(entry, home);
            let absolute = if expanded.is_absolute() {
                expanded
            } else {
                cwd.join(expanded)
            };
            normalize(&absolute)
        });

    dedup(resolved)
}

fn expand_home(entry: &str, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(entry);
    };
    if entry == "~" {
        return home.to_path_buf();
    }
    match entry.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(entry),
    }
}

/// Drop `.` components so `./.skills` and `.skills` compare equal.
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

fn dedup(paths: impl IntoIterator<Item = PathBuf>) -> Vec<PathBuf> {
    let mut out: Vec<PathBuf> = Vec::new();
    for path in paths {
        if !out.contains(&path) {
            out.push(path);
        }
    }
    out
}

fn home_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|d| d.home_dir().to_path_buf())
}
