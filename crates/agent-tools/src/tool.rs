//! Tool trait definition and types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ToolError;
use crate::schema::ParamSchema;

/// Arguments passed to a tool for execution.
#[derive(Debug, Clone, Default)]
pub struct ToolArgs {
    /// Parameters as key-value pairs, already checked against the tool schema.
    pub params: Map<String, Value>,
    /// Caller-supplied invocation context. Opaque to the registry.
    pub context: Map<String, Value>,
}

impl ToolArgs {
    /// Create new tool arguments with the given parameters and an empty context.
    pub fn new(params: Map<String, Value>) -> Self {
        Self {
            params,
            context: Map::new(),
        }
    }

    /// Create tool arguments carrying an invocation context.
    pub fn with_context(params: Map<String, Value>, context: Map<String, Value>) -> Self {
        Self { params, context }
    }
}

/// A single piece of tool output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text { text: String },
}

/// Output from a tool execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolOutput {
    pub content: Vec<ContentBlock>,
}

impl ToolOutput {
    /// Output holding a single text block.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::Text { text: text.into() }],
        }
    }

    /// Output holding `value` pretty-printed with 2-space indentation.
    pub fn pretty_json(value: &Value) -> Result<Self, ToolError> {
        Ok(Self::text(serde_json::to_string_pretty(value)?))
    }

    /// All text blocks concatenated.
    pub fn as_text(&self) -> String {
        self.content
            .iter()
            .map(|block| match block {
                ContentBlock::Text { text } => text.as_str(),
            })
            .collect()
    }
}

/// Trait for tools that can be registered with a [`ToolRegistry`](crate::ToolRegistry).
///
/// The registry validates arguments against [`Tool::parameters`] before
/// calling [`Tool::execute`], so implementations only see well-formed input.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The tool's unique name (used for dispatch).
    fn name(&self) -> &str;

    /// Human-readable description of what the tool does.
    fn description(&self) -> &str;

    /// Declared parameters.
    fn parameters(&self) -> ParamSchema;

    /// Execute the tool with the given arguments.
    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError>;
}
