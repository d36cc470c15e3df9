//! The `skills` tool: lets an agent load a skill's instructions by name.

use std::sync::Arc;

use {
    async_trait::async_trait,
    serde_json::{Value, json},
    skillhub_common::AgentTool,
    tracing::{info, warn},
};

use crate::{
    error::{Error, Result},
    registry::SkillRegistry,
    types::Skill,
};

pub const TOOL_NAME: &str = "skills";

const INSTRUCTIONS: &str = r#"Execute a skill within the main conversation

<skills_instructions>
When users ask you to perform tasks, check if any of the available skills below can help complete the task more effectively. Skills provide specialized capabilities and domain knowledge.

How to use skills:
- **Invoke skills using this tool `skills` with the skill name only (no arguments)**
- When you invoke a skill, you will see <command-message>The "{name}" skill is loading</command-message>
- The skill's prompt will expand and provide detailed instructions on how to complete the task
- Examples:
  - `command: "pdf"` - invoke the pdf skill
  - `command: "xlsx"` - invoke the xlsx skill
  - `command: "ms-office-suite:pdf"` - invoke using fully qualified name

Important:
- Only use skills listed in <available_skills> below
- Do not invoke a skill that is already running
- Do not use this tool for built-in CLI commands (like /help, /clear, etc.)
</skills_instructions>"#;

/// Tool handle over a shared registry.
pub struct SkillsTool {
    registry: Arc<SkillRegistry>,
}

impl SkillsTool {
    pub fn new(registry: Arc<SkillRegistry>) -> Self {
        Self { registry }
    }

    /// Load a skill by name and render it for the agent.
    ///
    /// An unknown name is not an error: the returned text lists the valid
    /// names instead. Only an uninitialized registry fails.
    pub fn invoke(&self, command: &str) -> Result<String> {
        match self.registry.find(command) {
            Ok(skill) => {
                info!(skill = %skill.name, tool_name = %skill.tool_name, "skill executed");
                Ok(render_skill(command, skill))
            },
            Err(Error::NotFound { available, .. }) => Ok(format!(
                "Skill \"{command}\" not found. Available skills: {}",
                available.join(", ")
            )),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl AgentTool for SkillsTool {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    /// Lists no skills, with a warning, when the registry has not been
    /// initialized yet.
    fn description(&self) -> String {
        match self.registry.skills() {
            Ok(skills) => tool_description(skills),
            Err(e) => {
                warn!(error = %e, "describing skills tool without a skill listing");
                tool_description(&[])
            },
        }
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "required": ["command"],
            "properties": {
                "command": {
                    "type": "string",
                    "description": "Name of the skill to invoke (e.g. \"pdf\")"
                }
            }
        })
    }

    async fn execute(&self, params: Value) -> anyhow::Result<Value> {
        let command = params
            .get("command")
            .and_then(Value::as_str)
            .ok_or_else(|| anyhow::anyhow!("missing 'command'"))?;
        Ok(Value::String(self.invoke(command)?))
    }
}

/// Tool description: fixed usage instructions followed by an
/// `<available_skills>` listing.
pub fn tool_description(skills: &[Skill]) -> String {
    let listing: Vec<String> = skills.iter().map(skill_xml).collect();
    format!(
        "{INSTRUCTIONS}\n\n<available_skills>\n{}\n</available_skills>",
        listing.join("\n")
    )
}

fn skill_xml(skill: &Skill) -> String {
    format!(
        "<skill>\n<name>\n{}\n</name>\n\
         <description>\n{}\n</description>\n\
         <location>\n{}\n</location>\n</skill>",
        skill.name, skill.description, skill.location
    )
}

fn render_skill(command: &str, skill: &Skill) -> String {
    format!(
        "<command-message>The \"{command}\" skill is running</command-message>\n\
         <command-name>{command}</command-name>\n\
         \n\
         # {command} Skill information\n\
         \n\
         Base directory for this skill: {}\n\
         \n\
         Skill Content:\n\
         \n\
         {}",
        skill.full_path.display(),
        skill.content
    )
}
