//! MCP server for the authentik identity provider.
//!
//! Exposes the authentik admin API (`/api/v3/`) as Model Context Protocol
//! tools that AI agents can discover and execute, with access-tier and
//! category gating decided at registration time and secret redaction on
//! every error path.
//!
//! # Core Components
//!
//! - [`ToolRegistry`] - registration gate and execution shim for every tool
//! - [`McpServer`] - JSON-RPC 2.0 stdio transport hosting the registry
//! - [`AuthentikClient`] - backend API client with per-family facets
//! - [`dispatch`] - by-type dispatch tables for the five sub-typed families
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use authentik_mcp_server::{
//!     AuthentikClient, McpServer, Secrets, ServerSettings, ToolRegistry, tools,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! let settings = ServerSettings::from_env()?;
//! let client = Arc::new(AuthentikClient::new(&settings)?);
//! client.check_connection().await?;
//!
//! let secrets = Secrets::new(settings.token.clone(), client.base());
//! let mut registry = ToolRegistry::new(settings.runtime.clone(), secrets);
//! tools::register_all(&mut registry, &client);
//!
//! McpServer::new(registry).run_stdio().await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod protocol;
pub mod redact;
pub mod registry;
pub mod tools;

// Re-export commonly used types for convenience
pub use api::{AuthentikClient, ResourceFacet};
pub use config::{AccessLevel, RuntimeConfig, ServerSettings, ToolCategory};
pub use error::{ApiError, SetupError, ToolError};
pub use protocol::{McpServer, ServerInfo};
pub use redact::{Secrets, redact};
pub use registry::{
    ToolAnnotations, ToolCallResult, ToolDescriptor, ToolRegistry, should_expose,
};
