//! Tool registry for managing and executing tools.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Static metadata a host needs to expose a tool.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    /// JSON Schema describing the tool's parameters.
    pub parameters: Value,
}

/// Registry for managing tools.
///
/// The registry holds a collection of tools, rejects duplicate names, and
/// dispatches execution requests by name after validating arguments against
/// the tool's declared parameters.
pub struct ToolRegistry {
    /// Registered tools by name.
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool.
    ///
    /// Fails if a tool with the same name is already registered.
    pub fn register<T: Tool + 'static>(&mut self, tool: T) -> Result<(), ToolError> {
        self.register_shared(Arc::new(tool))
    }

    /// Register a tool that is already behind an `Arc`.
    pub fn register_shared(&mut self, tool: Arc<dyn Tool>) -> Result<(), ToolError> {
        let name = tool.name().to_string();
        if self.tools.contains_key(&name) {
            warn!("Refusing duplicate tool registration: {}", name);
            return Err(ToolError::DuplicateTool(name));
        }
        info!("Registering tool: {}", name);
        self.tools.insert(name, tool);
        Ok(())
    }

    /// Get a sorted list of registered tool names.
    pub fn list_tools(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Get a tool by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    /// Check if a tool is registered.
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Descriptors for every registered tool, sorted by name.
    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.list_tools()
            .into_iter()
            .filter_map(|name| self.tools.get(name))
            .map(|tool| ToolDescriptor {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                parameters: tool.parameters().to_json_schema(),
            })
            .collect()
    }

    /// Execute a tool by name with an empty invocation context.
    pub async fn execute(
        &self,
        name: &str,
        params: Map<String, Value>,
    ) -> Result<ToolOutput, ToolError> {
        self.execute_with_context(name, params, Map::new()).await
    }

    /// Execute a tool by name, forwarding `context` to the tool untouched.
    ///
    /// Arguments are validated before the tool runs; a validation failure
    /// means the tool was never called.
    pub async fn execute_with_context(
        &self,
        name: &str,
        params: Map<String, Value>,
        context: Map<String, Value>,
    ) -> Result<ToolOutput, ToolError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::NotFound(name.to_string()))?;

        tool.parameters().validate(&params)?;

        debug!("Executing tool '{}' with {} params", name, params.len());

        let result = tool
            .execute(ToolArgs::with_context(params, context))
            .await?;

        debug!(
            "Tool '{}' completed: blocks={}",
            name,
            result.content.len()
        );

        Ok(result)
    }

    /// Execute a tool with JSON arguments string.
    ///
    /// This is a convenience method that parses the JSON string into parameters.
    pub async fn execute_json(
        &self,
        name: &str,
        args_json: &str,
    ) -> Result<ToolOutput, ToolError> {
        let params: Map<String, Value> = serde_json::from_str(args_json)?;
        self.execute(name, params).await
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
