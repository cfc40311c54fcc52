use agent_tools::{ToolError, ValidationError};
use thiserror::Error;

/// Errors that can occur when invoking the remote mail service.
#[derive(Debug, Error)]
pub enum MailError {
    /// Arguments did not match the operation's declared parameters
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The mail service answered with a non-success status
    #[error("mcp-mail invoke failed: {status} {body}")]
    Remote { status: u16, body: String },

    /// The request could not be completed
    #[error("mcp-mail transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Request body could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<MailError> for ToolError {
    fn from(err: MailError) -> Self {
        match err {
            MailError::Validation(e) => ToolError::Validation(e),
            MailError::Remote { status, body } => ToolError::Remote { status, body },
            MailError::Transport(e) => ToolError::Transport(e),
            MailError::Json(e) => ToolError::Json(e),
            MailError::Config(msg) => ToolError::Config(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_message_contains_status_and_body() {
        let err = MailError::Remote {
            status: 500,
            body: "\"boom\"".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("500"));
        assert!(message.contains("boom"));
    }

    #[test]
    fn test_conversion_keeps_kind() {
        let tool_err: ToolError = MailError::Remote {
            status: 404,
            body: "missing".to_string(),
        }
        .into();
        assert!(tool_err.is_remote());
        assert!(!tool_err.is_transport());
        assert!(tool_err.to_string().contains("404 missing"));

        let tool_err: ToolError = MailError::Validation(ValidationError::Missing("id".into())).into();
        assert!(tool_err.is_validation());
    }
}
