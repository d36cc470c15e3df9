use std::sync::Arc;

use {
    anyhow::Result,
    skillhub_common::AgentTool,
    skillhub_config::SkillsPaths,
    skillhub_skills::{FsSkillDiscoverer, SkillRegistry, SkillsTool},
};

/// Discover once and hand back the shared registry.
async fn load_registry(paths: &SkillsPaths) -> Result<Arc<SkillRegistry>> {
    let registry = Arc::new(SkillRegistry::new());
    registry
        .initialize(&FsSkillDiscoverer::from_paths(paths))
        .await?;
    Ok(registry)
}

pub async fn list(paths: &SkillsPaths, json: bool) -> Result<()> {
    let registry = load_registry(paths).await?;
    let skills = registry.skills()?;

    if json {
        println!("{}", serde_json::to_string_pretty(skills)?);
        return Ok(());
    }

    if skills.is_empty() {
        println!("No skills found.");
        return Ok(());
    }
    for skill in skills {
        println!(
            "  {} — {} [{}] {}",
            skill.name, skill.description, skill.location, skill.tool_name
        );
    }
    Ok(())
}

pub async fn invoke(paths: &SkillsPaths, command: &str) -> Result<()> {
    let tool = SkillsTool::new(load_registry(paths).await?);
    println!("{}", tool.invoke(command)?);
    Ok(())
}

pub async fn describe(paths: &SkillsPaths) -> Result<()> {
    let tool = SkillsTool::new(load_registry(paths).await?);
    println!("{}", serde_json::to_string_pretty(&tool.definition())?);
    Ok(())
}

pub fn print_paths(paths: &SkillsPaths) {
    let project_root = paths.project_root();
    for root in paths.roots() {
        let marker = if Some(root.as_path()) == project_root {
            " (project)"
        } else {
            ""
        };
        let missing = if root.exists() { "" } else { " [missing]" };
        println!("  {}{marker}{missing}", root.display());
    }
}
