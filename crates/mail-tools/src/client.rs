use reqwest::header::CONTENT_TYPE;
use serde_json::{Map, Value};
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::{InvokeRequest, MailError, MailOperation, MailProxyConfig};

/// Client that forwards tool invocations to the mail invoke endpoint.
///
/// Holds a pooled HTTP client and is safe to share across concurrent calls.
/// Every call is a single POST: no retries and no timeout beyond the
/// transport defaults.
#[derive(Debug, Clone)]
pub struct MailProxyClient {
    http: reqwest::Client,
    invoke_url: Url,
}

impl MailProxyClient {
    /// Create a new client with the given configuration.
    pub fn new(config: MailProxyConfig) -> Result<Self, MailError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("mail-tools/", env!("CARGO_PKG_VERSION")))
            .build()?;

        info!(endpoint = %config.invoke_url, "Created mail proxy client");

        Ok(Self {
            http,
            invoke_url: config.invoke_url,
        })
    }

    /// Endpoint every invocation is sent to.
    pub fn endpoint(&self) -> &Url {
        &self.invoke_url
    }

    /// Validate `args` for `op` and forward the call.
    ///
    /// Invalid arguments are rejected before any request is made. This is
    /// the only way to reach the endpoint, so the tool identifier is always
    /// one of the known [`MailOperation`]s.
    pub async fn forward(
        &self,
        op: MailOperation,
        args: &Map<String, Value>,
        ctx: &Map<String, Value>,
    ) -> Result<Value, MailError> {
        op.schema().validate(args)?;
        self.send(op.remote_id(), args, ctx).await
    }

    /// POST one invocation. A 2xx body that is not JSON comes back as
    /// `{"raw": <text>}`.
    #[instrument(skip(self, args, ctx), fields(endpoint = %self.invoke_url))]
    async fn send(
        &self,
        tool: &str,
        args: &Map<String, Value>,
        ctx: &Map<String, Value>,
    ) -> Result<Value, MailError> {
        let body = serde_json::to_vec(&InvokeRequest { tool, ctx, args })?;

        debug!("Invoking '{}' with {} args", tool, args.len());

        let response = self
            .http
            .post(self.invoke_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        debug!(
            "Invoke '{}' returned status {} ({} bytes)",
            tool,
            status,
            text.len()
        );

        if !status.is_success() {
            warn!("mcp-mail invoke '{}' failed with status {}", tool, status);
            return Err(MailError::Remote {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(parse_body(text))
    }
}

/// Parse a success body, falling back to a raw-text wrapper.
fn parse_body(text: String) -> Value {
    match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(e) => {
            warn!("mcp-mail returned a non-JSON body: {}", e);
            let mut wrapper = Map::new();
            wrapper.insert("raw".to_string(), Value::String(text));
            Value::Object(wrapper)
        }
    }
}
