//! Endpoint resolution from `MCP_MAIL_INVOKE_URL`.
//!
//! Kept in its own test binary with a single test so the process-wide
//! environment is not shared with other tests.

use mail_tools::{mail_registry_from_env, DEFAULT_INVOKE_URL, INVOKE_URL_ENV};
use mail_tools::{MailProxyClient, MailProxyConfig};
use serde_json::{json, Map, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn object(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

#[tokio::test]
async fn test_invoke_url_env_selects_endpoint_for_all_tools() {
    std::env::remove_var(INVOKE_URL_ENV);
    let config = MailProxyConfig::from_env().unwrap();
    assert_eq!(config.invoke_url.as_str(), DEFAULT_INVOKE_URL);

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/env/invoke"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ok":true}"#))
        .expect(4)
        .mount(&server)
        .await;

    let url = format!("{}/env/invoke", server.uri());
    std::env::set_var(INVOKE_URL_ENV, &url);

    let client = MailProxyClient::new(MailProxyConfig::from_env().unwrap()).unwrap();
    assert_eq!(client.endpoint().as_str(), url);

    let registry = mail_registry_from_env().unwrap();
    std::env::remove_var(INVOKE_URL_ENV);

    let calls = [
        ("mail_search", json!({"query": "q"})),
        ("mail_list_items", json!({})),
        ("mail_get_item", json!({"id": "1"})),
        (
            "mail_send_email",
            json!({"to": ["a@x.com"], "subject": "s", "body": "b"}),
        ),
    ];
    for (name, args) in calls {
        registry.execute(name, object(args)).await.unwrap();
    }

    let received = server.received_requests().await.unwrap_or_default();
    assert_eq!(received.len(), 4);
    let tools: Vec<String> = received
        .iter()
        .map(|r| r.body_json::<Value>().unwrap()["tool"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(tools, vec!["search", "list_items", "get_item", "send_email"]);
}
