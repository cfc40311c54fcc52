//! Example: Invoke one of the mail tools against a running mail service
//!
//! Prerequisites:
//! 1. A mail invoke endpoint reachable from this machine
//! 2. Optionally, environment variables set (or .env file):
//!    - MCP_MAIL_INVOKE_URL=http://127.0.0.1:8300/invoke
//!
//! Run with:
//! ```bash
//! cargo run -p mail-tools --example invoke -- mail_search '{"query": "newer_than:7d"}'
//! cargo run -p mail-tools --example invoke -- mail_list_items
//! ```

use mail_tools::mail_registry_from_env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mail_tools=debug".parse()?),
        )
        .init();

    let registry = mail_registry_from_env()?;

    let mut args = std::env::args().skip(1);
    let Some(tool) = args.next() else {
        println!("Registered tools:");
        for descriptor in registry.descriptors() {
            println!("  - {}: {}", descriptor.name, descriptor.description);
            println!("    {}", descriptor.parameters);
        }
        return Ok(());
    };
    let params = args.next().unwrap_or_else(|| "{}".to_string());

    let output = registry.execute_json(&tool, &params).await?;
    println!("{}", output.as_text());

    Ok(())
}
