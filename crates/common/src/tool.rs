use {anyhow::Result, async_trait::async_trait};

/// Agent-callable tool.
///
/// The transport layer that exposes tools to an agent only sees this trait:
/// a stable name, a human/LLM-facing description, a JSON schema for the
/// parameters and an `execute` entry point taking and returning JSON.
#[async_trait]
pub trait AgentTool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> String;
    fn parameters_schema(&self) -> serde_json::Value;
    async fn execute(&self, params: serde_json::Value) -> Result<serde_json::Value>;

    /// Tool definition in the shape most tool-calling protocols expect.
    fn definition(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name(),
            "description": self.description(),
            "parameters": self.parameters_schema(),
        })
    }
}
