//! Error types for tool operations.

use thiserror::Error;

use crate::schema::ValidationError;

/// Errors that can occur during tool registration or execution.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Tool not found in registry.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// A tool with this name is already registered.
    #[error("Tool already registered: {0}")]
    DuplicateTool(String),

    /// Arguments did not match the tool's declared parameters.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The remote service answered with a non-success status.
    #[error("Remote invocation failed: {status} {body}")]
    Remote { status: u16, body: String },

    /// The request never completed (connect, DNS, timeout, body read).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// JSON parsing or serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Tool was constructed with unusable configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ToolError {
    /// True when the failure happened before the remote service answered.
    pub fn is_transport(&self) -> bool {
        matches!(self, ToolError::Transport(_))
    }

    /// True when the remote service answered with an error status.
    pub fn is_remote(&self) -> bool {
        matches!(self, ToolError::Remote { .. })
    }

    /// True when the call was rejected locally before any network activity.
    pub fn is_validation(&self) -> bool {
        matches!(self, ToolError::Validation(_))
    }
}
