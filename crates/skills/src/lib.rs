//! Skills system: discovery, parsing, registry and the `skills` tool.
//!
//! A skill is a directory containing a `SKILL.md` file: YAML frontmatter
//! (`name`, `description`, optional `license`, `allowed_tools`, `metadata`)
//! followed by markdown instructions. Skills are found by recursively walking
//! the configured roots once at startup, held in a write-once
//! [`SkillRegistry`], and served to agents through [`SkillsTool`].

pub mod discover;
pub mod error;
pub mod parse;
pub mod registry;
pub mod tool;
pub mod tool_name;
pub mod types;

pub use {
    discover::{DiscoveryReport, FsSkillDiscoverer, SkillDiscoverer},
    error::{Error, ManifestError, Result},
    registry::SkillRegistry,
    tool::SkillsTool,
    types::{Skill, SkillLocation, SkillManifest},
};
