//! Tool registry and parameter schemas for agent-facing tools.
//!
//! This crate provides a [`ToolRegistry`] for registering and executing
//! tools exposed to a host agent framework. Each tool declares its
//! parameters as a static [`ParamSchema`]; the registry validates incoming
//! arguments against it before dispatching, so malformed calls never reach
//! a tool's implementation.
//!
//! Tool output is a list of [`ContentBlock`]s, normally a single text block.
//!
//! # Example
//!
//! ```rust,ignore
//! use agent_tools::ToolRegistry;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut registry = ToolRegistry::new();
//!     registry.register(MyTool::new()).unwrap();
//!
//!     let params = json!({"query": "from:alice"}).as_object().cloned().unwrap();
//!     let result = registry.execute("my_tool", params).await.unwrap();
//!     println!("{}", result.as_text());
//! }
//! ```

mod error;
mod registry;
mod schema;
mod tool;

pub use error::ToolError;
pub use registry::{ToolDescriptor, ToolRegistry};
pub use schema::{ParamSchema, ParamSpec, ParamType, ValidationError};
pub use tool::{ContentBlock, Tool, ToolArgs, ToolOutput};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
