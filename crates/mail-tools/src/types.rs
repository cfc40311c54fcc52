use agent_tools::{ParamSchema, ParamSpec, ParamType};
use serde::Serialize;
use serde_json::{Map, Value};

const SEARCH_PARAMS: &[ParamSpec] = &[
    ParamSpec::required("query", ParamType::String).describe(
        "Search query (provider-specific). Example: from:foo subject:bar newer_than:7d",
    ),
    ParamSpec::optional("max_results", ParamType::Number).describe("Max results to return."),
];

const LIST_ITEMS_PARAMS: &[ParamSpec] = &[
    ParamSpec::optional("max_results", ParamType::Number),
    ParamSpec::optional("folder", ParamType::String)
        .describe("Optional folder/label if supported by the MCP."),
];

const GET_ITEM_PARAMS: &[ParamSpec] =
    &[ParamSpec::required("id", ParamType::String).describe("Message/item id.")];

const SEND_EMAIL_PARAMS: &[ParamSpec] = &[
    ParamSpec::required("to", ParamType::StringArray),
    ParamSpec::required("subject", ParamType::String),
    ParamSpec::required("body", ParamType::String),
    ParamSpec::optional("cc", ParamType::StringArray),
    ParamSpec::optional("bcc", ParamType::StringArray),
];

/// The operations the remote mail service exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MailOperation {
    Search,
    ListItems,
    GetItem,
    SendEmail,
}

impl MailOperation {
    pub const ALL: [MailOperation; 4] = [
        MailOperation::Search,
        MailOperation::ListItems,
        MailOperation::GetItem,
        MailOperation::SendEmail,
    ];

    /// Name the tool is registered under.
    pub fn tool_name(&self) -> &'static str {
        match self {
            MailOperation::Search => "mail_search",
            MailOperation::ListItems => "mail_list_items",
            MailOperation::GetItem => "mail_get_item",
            MailOperation::SendEmail => "mail_send_email",
        }
    }

    /// Identifier sent as `tool` in the invoke request.
    pub fn remote_id(&self) -> &'static str {
        match self {
            MailOperation::Search => "search",
            MailOperation::ListItems => "list_items",
            MailOperation::GetItem => "get_item",
            MailOperation::SendEmail => "send_email",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MailOperation::Search => {
                "Search email via the mail MCP (forwards to mcp-mail /invoke search)."
            }
            MailOperation::ListItems => "List recent email items via the mail MCP (list_items).",
            MailOperation::GetItem => "Fetch a single email item via the mail MCP (get_item).",
            MailOperation::SendEmail => "Send an email via the mail MCP (send_email).",
        }
    }

    pub fn schema(&self) -> ParamSchema {
        match self {
            MailOperation::Search => ParamSchema::new(SEARCH_PARAMS),
            MailOperation::ListItems => ParamSchema::new(LIST_ITEMS_PARAMS),
            MailOperation::GetItem => ParamSchema::new(GET_ITEM_PARAMS),
            MailOperation::SendEmail => ParamSchema::new(SEND_EMAIL_PARAMS),
        }
    }
}

/// Body of a POST to the invoke endpoint.
#[derive(Debug, Serialize)]
pub struct InvokeRequest<'a> {
    pub tool: &'a str,
    pub ctx: &'a Map<String, Value>,
    pub args: &'a Map<String, Value>,
}
