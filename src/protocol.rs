//! MCP JSON-RPC 2.0 transport over stdio.
//!
//! One request per line on stdin, one response per line on stdout.
//! Registration is finished before [`McpServer::run_stdio`] reads the first
//! byte, so the tool surface is fixed while traffic flows. Tool-level
//! failures never become JSON-RPC errors; the execution shim has already
//! folded them into error-flagged results.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::registry::ToolRegistry;

pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// JSON-RPC error codes used on the wire.
pub const PARSE_ERROR: i64 = -32700;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;
pub const TOOL_ERROR: i64 = -32000;

/// Server identity reported during `initialize`.
#[derive(Debug, Clone)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

impl Default for ServerInfo {
    fn default() -> Self {
        Self {
            name: "authentik MCP Server".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct JsonRpcRequest {
    #[serde(default)]
    id: Option<Value>,
    method: String,
    #[serde(default)]
    params: Value,
}

/// One outbound JSON-RPC message.
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    jsonrpc: &'static str,
    id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl JsonRpcResponse {
    fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    fn failure(id: Value, code: i64, message: &str) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(json!({"code": code, "message": message})),
        }
    }
}

/// The hosting protocol server: a registry plus the stdio loop.
pub struct McpServer {
    registry: ToolRegistry,
    info: ServerInfo,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry,
            info: ServerInfo::default(),
        }
    }

    pub fn with_info(registry: ToolRegistry, info: ServerInfo) -> Self {
        Self { registry, info }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Handles one raw JSON-RPC message. Returns `None` for notifications.
    pub async fn handle_message(&self, raw: &str) -> Option<JsonRpcResponse> {
        let request: JsonRpcRequest = match serde_json::from_str(raw) {
            Ok(request) => request,
            Err(err) => {
                debug!("Unparseable request: {err}");
                return Some(JsonRpcResponse::failure(
                    Value::Null,
                    PARSE_ERROR,
                    "Parse error",
                ));
            }
        };

        // Requests without an id are notifications and get no response.
        let Some(id) = request.id else {
            debug!("Ignoring notification {}", request.method);
            return None;
        };

        Some(match request.method.as_str() {
            "initialize" => JsonRpcResponse::success(id, self.initialize_result()),
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => JsonRpcResponse::success(
                id,
                json!({"tools": self.registry.tool_listing()}),
            ),
            "tools/call" => self.handle_tool_call(id, &request.params).await,
            other => {
                debug!("Unknown method {other}");
                JsonRpcResponse::failure(id, METHOD_NOT_FOUND, "Method not found")
            }
        })
    }

    async fn handle_tool_call(&self, id: Value, params: &Value) -> JsonRpcResponse {
        let Some(name) = params.get("name").and_then(Value::as_str) else {
            return JsonRpcResponse::failure(id, INVALID_PARAMS, "Missing tool name");
        };
        let arguments = params
            .get("arguments")
            .cloned()
            .unwrap_or_else(|| json!({}));

        match self.registry.call(name, arguments).await {
            Some(result) => JsonRpcResponse::success(id, result.to_value()),
            None => JsonRpcResponse::failure(id, TOOL_ERROR, &format!("Unknown tool: {name}")),
        }
    }

    fn initialize_result(&self) -> Value {
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {"tools": {}},
            "serverInfo": {"name": self.info.name, "version": self.info.version},
        })
    }

    /// Serves MCP over stdio until stdin closes.
    pub async fn run_stdio(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        info!(
            "{} v{} ready; {} tools exposed",
            self.info.name,
            self.info.version,
            self.registry.len()
        );

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();
        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if let Some(response) = self.handle_message(line).await {
                let payload = serde_json::to_string(&response)?;
                stdout.write_all(payload.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
                stdout.flush().await?;
            }
        }
        info!("stdin closed, shutting down");
        Ok(())
    }
}
