use std::{collections::BTreeMap, path::PathBuf};

use serde::Serialize;

/// Where a skill was discovered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLocation {
    /// Under the project root (first configured project path).
    Project,
    /// Under any other configured root.
    Global,
}

impl std::fmt::Display for SkillLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Project => "project",
            Self::Global => "global",
        })
    }
}

/// Validated SKILL.md frontmatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillManifest {
    /// Skill name: lowercase ASCII letters, digits and hyphens.
    pub name: String,
    /// At least 10 characters, shown in skill listings.
    pub description: String,
    pub license: Option<String>,
    pub allowed_tools: Option<Vec<String>>,
    pub metadata: Option<BTreeMap<String, String>>,
}

/// Frontmatter plus markdown body of one SKILL.md.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedManifest {
    pub manifest: SkillManifest,
    /// Everything after the closing `---`, trimmed.
    pub body: String,
}

/// A discovered skill as held by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: String,
    /// Path-derived identifier, see [`crate::tool_name::generate_tool_name`].
    pub tool_name: String,
    pub description: String,
    pub license: Option<String>,
    pub allowed_tools: Option<Vec<String>>,
    pub metadata: Option<BTreeMap<String, String>>,
    /// Markdown body with the frontmatter stripped.
    pub content: String,
    /// Absolute path of the SKILL.md file.
    pub path: PathBuf,
    /// Absolute path of the directory holding SKILL.md; base directory for
    /// relative resources referenced by the content.
    pub full_path: PathBuf,
    pub location: SkillLocation,
}
