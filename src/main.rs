//! Binary entry point for the authentik MCP server.
//!
//! Startup is strictly ordered: configuration, client construction, one
//! connection check, catalog registration, then the stdio loop. Any failure
//! before the loop aborts the process; stdout stays reserved for the MCP
//! wire protocol, so logs go to stderr.

use std::sync::Arc;

use log::info;

use authentik_mcp_server::{
    AuthentikClient, McpServer, Secrets, ServerSettings, SetupError, ToolRegistry, tools,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = ServerSettings::from_env()?;
    let client = Arc::new(AuthentikClient::new(&settings)?);

    let version = client
        .check_connection()
        .await
        .map_err(SetupError::ConnectionCheck)?;
    info!(
        "Connected to authentik {} at {}",
        version
            .get("version_current")
            .and_then(|value| value.as_str())
            .unwrap_or("unknown"),
        client.base()
    );

    let secrets = Secrets::new(settings.token.clone(), client.base());
    let mut registry = ToolRegistry::new(settings.runtime.clone(), secrets);
    let exposed = tools::register_all(&mut registry, &client);
    info!(
        "Registered {exposed} tools under the {} tier",
        settings.runtime.access_level.as_str()
    );

    McpServer::new(registry).run_stdio().await
}
