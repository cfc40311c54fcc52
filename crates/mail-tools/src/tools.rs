//! Mail operations exposed as agent tools.

use std::sync::Arc;

use agent_tools::{ParamSchema, Tool, ToolArgs, ToolError, ToolOutput};
use async_trait::async_trait;
use tracing::debug;

use crate::{MailOperation, MailProxyClient};

/// One mail operation registered as a tool.
///
/// Execution forwards the arguments and invocation context to the mail
/// service and returns the response pretty-printed as a single text block.
///
/// Arguments must match the operation's declared parameters exactly:
/// missing required fields, wrong types, `null` values and undeclared
/// fields are all refused before any request is made.
///
/// # Examples
///
/// ```json
/// {"query": "from:alice newer_than:7d", "max_results": 10}
/// {"to": ["bob@example.com"], "subject": "Hi", "body": "Hello"}
/// ```
pub struct MailTool {
    op: MailOperation,
    client: Arc<MailProxyClient>,
}

impl MailTool {
    pub fn new(op: MailOperation, client: Arc<MailProxyClient>) -> Self {
        Self { op, client }
    }
}

#[async_trait]
impl Tool for MailTool {
    fn name(&self) -> &str {
        self.op.tool_name()
    }

    fn description(&self) -> &str {
        self.op.description()
    }

    fn parameters(&self) -> ParamSchema {
        self.op.schema()
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        debug!("Forwarding {} to mcp-mail", self.op.tool_name());

        let out = self
            .client
            .forward(self.op, &args.params, &args.context)
            .await?;

        ToolOutput::pretty_json(&out)
    }
}
