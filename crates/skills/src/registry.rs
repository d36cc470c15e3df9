use std::sync::OnceLock;

use tracing::info;

use crate::{
    discover::SkillDiscoverer,
    error::{Error, Result},
    types::Skill,
};

/// Write-once store of discovered skills.
///
/// Starts uninitialized; [`SkillRegistry::initialize`] fills it exactly once
/// and every later read is lock-free. Share it behind an `Arc` with whatever
/// serves tool calls. Reading before initialization is a caller bug and
/// returns [`Error::NotInitialized`].
#[derive(Debug, Default)]
pub struct SkillRegistry {
    skills: OnceLock<Vec<Skill>>,
}

impl SkillRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an already initialized registry.
    pub fn from_skills(skills: Vec<Skill>) -> Self {
        Self {
            skills: OnceLock::from(skills),
        }
    }

    /// Run discovery once and store the result.
    pub async fn initialize(&self, discoverer: &dyn SkillDiscoverer) -> Result<&[Skill]> {
        if self.is_initialized() {
            return Err(Error::AlreadyInitialized);
        }

        let report = discoverer.discover().await?;
        self.skills
            .set(report.skills)
            .map_err(|_| Error::AlreadyInitialized)?;

        let skills = self.skills()?;
        info!(
            count = skills.len(),
            rejected = report.rejected.len(),
            "skill registry initialized"
        );
        Ok(skills)
    }

    pub fn is_initialized(&self) -> bool {
        self.skills.get().is_some()
    }

    /// All skills in discovery order.
    pub fn skills(&self) -> Result<&[Skill]> {
        self.skills
            .get()
            .map(Vec::as_slice)
            .ok_or(Error::NotInitialized)
    }

    /// Exact match on `name`; the first skill discovered wins.
    ///
    /// A miss returns [`Error::NotFound`] carrying every registered name.
    pub fn find(&self, name: &str) -> Result<&Skill> {
        let skills = self.skills()?;
        skills
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| Error::NotFound {
                name: name.to_string(),
                available: skills.iter().map(|s| s.name.clone()).collect(),
            })
    }
}
