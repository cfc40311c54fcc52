//! # mail-tools
//!
//! Agent tools that proxy mail operations to a remote mail service over HTTP.
//!
//! Four tools are provided: `mail_search`, `mail_list_items`,
//! `mail_get_item` and `mail_send_email`. Each one validates its arguments,
//! POSTs `{"tool", "ctx", "args"}` to the configured invoke endpoint, and
//! returns the JSON response pretty-printed as a single text block.
//!
//! ## Registering the tools
//!
//! ```no_run
//! use mail_tools::mail_registry_from_env;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let registry = mail_registry_from_env()?;
//!
//!     let params = json!({"query": "from:alice"}).as_object().cloned().unwrap_or_default();
//!     let output = registry.execute("mail_search", params).await?;
//!     println!("{}", output.as_text());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Calling the service directly
//!
//! ```no_run
//! use mail_tools::{MailOperation, MailProxyClient, MailProxyConfig};
//! use serde_json::{json, Map};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mail_tools::MailError> {
//!     let client = MailProxyClient::new(MailProxyConfig::from_env()?)?;
//!
//!     let args = json!({"id": "msg-42"}).as_object().cloned().unwrap_or_default();
//!     let item = client.forward(MailOperation::GetItem, &args, &Map::new()).await?;
//!     println!("{}", item);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod tools;
mod types;

use std::sync::Arc;

use agent_tools::{ToolError, ToolRegistry};

pub use client::MailProxyClient;
pub use config::{MailProxyConfig, DEFAULT_INVOKE_URL, INVOKE_URL_ENV};
pub use error::MailError;
pub use tools::MailTool;
pub use types::{InvokeRequest, MailOperation};

/// Register all four mail tools against a shared client.
pub fn register_mail_tools(
    registry: &mut ToolRegistry,
    client: Arc<MailProxyClient>,
) -> Result<(), ToolError> {
    for op in MailOperation::ALL {
        registry.register(MailTool::new(op, client.clone()))?;
    }
    Ok(())
}

/// Create a registry holding the mail tools for the given configuration.
pub fn mail_registry(config: MailProxyConfig) -> Result<ToolRegistry, ToolError> {
    let client = Arc::new(MailProxyClient::new(config)?);
    let mut registry = ToolRegistry::new();
    register_mail_tools(&mut registry, client)?;
    Ok(registry)
}

/// Create a registry holding the mail tools, resolving the endpoint from
/// `MCP_MAIL_INVOKE_URL`.
pub fn mail_registry_from_env() -> Result<ToolRegistry, ToolError> {
    mail_registry(MailProxyConfig::from_env()?)
}
