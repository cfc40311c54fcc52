use std::env;

use url::Url;

use crate::MailError;

/// Environment variable selecting the mail invoke endpoint.
pub const INVOKE_URL_ENV: &str = "MCP_MAIL_INVOKE_URL";

/// Endpoint used when [`INVOKE_URL_ENV`] is not set.
pub const DEFAULT_INVOKE_URL: &str = "http://host.docker.internal:8300/invoke";

/// Configuration for the mail proxy.
///
/// Resolved once at startup and shared by every mail tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailProxyConfig {
    /// Endpoint that receives `{tool, ctx, args}` POSTs.
    pub invoke_url: Url,
}

impl MailProxyConfig {
    /// Create a configuration with an explicit endpoint.
    pub fn new(invoke_url: impl AsRef<str>) -> Result<Self, MailError> {
        let raw = invoke_url.as_ref();
        let invoke_url = Url::parse(raw)
            .map_err(|e| MailError::Config(format!("Invalid invoke URL '{}': {}", raw, e)))?;
        Ok(Self { invoke_url })
    }

    /// Create configuration from environment variables.
    ///
    /// Optional (with defaults):
    /// - `MCP_MAIL_INVOKE_URL` - Default: http://host.docker.internal:8300/invoke
    pub fn from_env() -> Result<Self, MailError> {
        Self::from_value(env::var(INVOKE_URL_ENV).ok())
    }

    /// Apply the default-fallback rule to an already looked-up setting.
    ///
    /// Blank values are treated the same as an unset variable.
    pub fn from_value(value: Option<String>) -> Result<Self, MailError> {
        match value.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_INVOKE_URL),
        }
    }
}
