use std::{
    collections::HashSet,
    ffi::OsStr,
    path::{Path, PathBuf},
};

use {
    async_trait::async_trait,
    skillhub_config::SkillsPaths,
    tracing::{debug, info, warn},
    walkdir::WalkDir,
};

use crate::{
    error::{Context, ManifestError, Result},
    parse,
    tool_name::generate_tool_name,
    types::{ParsedManifest, Skill, SkillLocation},
};

/// File name every skill directory must contain.
pub const SKILL_FILE: &str = "SKILL.md";

/// Outcome of one discovery run.
#[derive(Debug, Default)]
pub struct DiscoveryReport {
    /// Valid skills in discovery order (roots in order, files sorted by name
    /// within a root).
    pub skills: Vec<Skill>,
    /// Candidates dropped during parsing, with the reason.
    pub rejected: Vec<(PathBuf, ManifestError)>,
    /// Every repeated `tool_name` occurrence after the first.
    pub duplicates: Vec<String>,
}

/// Discovers skills from filesystem paths.
#[async_trait]
pub trait SkillDiscoverer: Send + Sync {
    /// Scan configured roots and return every skill found.
    async fn discover(&self) -> Result<DiscoveryReport>;
}

/// Recursive filesystem discoverer over an ordered list of roots.
pub struct FsSkillDiscoverer {
    roots: Vec<PathBuf>,
    project_root: Option<PathBuf>,
}

impl FsSkillDiscoverer {
    /// `project_root` is the boundary for [`SkillLocation::Project`]; pass
    /// `None` to classify everything as global.
    pub fn new(roots: Vec<PathBuf>, project_root: Option<PathBuf>) -> Self {
        Self {
            roots,
            project_root,
        }
    }

    pub fn from_paths(paths: &SkillsPaths) -> Self {
        Self::new(paths.roots(), paths.project_root().map(Path::to_path_buf))
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Blocking scan of all roots.
    pub fn scan(&self) -> DiscoveryReport {
        scan_roots(&self.roots, self.project_root.as_deref())
    }
}

#[async_trait]
impl SkillDiscoverer for FsSkillDiscoverer {
    async fn discover(&self) -> Result<DiscoveryReport> {
        let roots = self.roots.clone();
        let project_root = self.project_root.clone();
        tokio::task::spawn_blocking(move || scan_roots(&roots, project_root.as_deref()))
            .await
            .context("skill discovery task failed")
    }
}

fn scan_roots(roots: &[PathBuf], project_root: Option<&Path>) -> DiscoveryReport {
    let mut report = DiscoveryReport::default();

    for root in roots {
        if !root.exists() {
            debug!(root = %root.display(), "skills directory does not exist, skipping");
            continue;
        }

        match scan_root(root, project_root, &mut report.rejected) {
            Ok(skills) => {
                info!(root = %root.display(), count = skills.len(), "found skills");
                report.skills.extend(skills);
            },
            Err(e) => {
                warn!(root = %root.display(), error = %e, "could not scan skills directory");
            },
        }
    }

    report.duplicates = find_duplicate_tool_names(&report.skills);
    if !report.duplicates.is_empty() {
        warn!(duplicates = ?report.duplicates, "duplicate tool names detected");
    }

    report
}

/// Walk one root. An error on the root itself fails the whole root so it
/// contributes nothing; unreadable entries below it (dangling symlinks, loops,
/// denied subdirectories) are logged and skipped. Invalid manifests are
/// recorded in `rejected`.
fn scan_root(
    root: &Path,
    project_root: Option<&Path>,
    rejected: &mut Vec<(PathBuf, ManifestError)>,
) -> Result<Vec<Skill>> {
    let mut skills = Vec::new();

    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                warn!(
                    path = ?e.path(),
                    error = %e,
                    "skipping unreadable entry in skills directory"
                );
                continue;
            },
        };
        if !entry.file_type().is_file() || entry.file_name() != OsStr::new(SKILL_FILE) {
            continue;
        }

        let path = entry.path();
        let parsed = match parse::load_manifest(path) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping invalid SKILL.md");
                rejected.push((path.to_path_buf(), e));
                continue;
            },
        };

        let tool_name = generate_tool_name(path, root)?;
        let location = match project_root {
            Some(project) if path.starts_with(project) => SkillLocation::Project,
            _ => SkillLocation::Global,
        };
        let skill = into_skill(parsed, path, tool_name, location);
        debug!(skill = %skill.name, tool_name = %skill.tool_name, %location, "loaded skill");
        skills.push(skill);
    }

    Ok(skills)
}

fn into_skill(
    parsed: ParsedManifest,
    path: &Path,
    tool_name: String,
    location: SkillLocation,
) -> Skill {
    let ParsedManifest { manifest, body } = parsed;
    Skill {
        name: manifest.name,
        tool_name,
        description: manifest.description,
        license: manifest.license,
        allowed_tools: manifest.allowed_tools,
        metadata: manifest.metadata,
        content: body,
        path: path.to_path_buf(),
        full_path: path.parent().map(Path::to_path_buf).unwrap_or_default(),
        location,
    }
}

/// Repeated tool names, one entry per repeat, in discovery order.
pub fn find_duplicate_tool_names(skills: &[Skill]) -> Vec<String> {
    let mut seen = HashSet::new();
    skills
        .iter()
        .filter(|s| !seen.insert(s.tool_name.as_str()))
        .map(|s| s.tool_name.clone())
        .collect()
}
