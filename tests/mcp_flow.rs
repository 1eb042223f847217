//! Integration test simulating a complete MCP client-server interaction
//! against the full catalog, without touching a real backend: every
//! exercised path fails in argument validation or dispatch before any
//! network call would happen.

use std::sync::Arc;

use serde_json::{Value, json};
use url::Url;

use authentik_mcp_server::{
    AccessLevel, AuthentikClient, McpServer, RuntimeConfig, Secrets, ServerSettings,
    ToolRegistry, tools,
};

fn build_server(runtime: RuntimeConfig) -> McpServer {
    let settings = ServerSettings::new(
        Url::parse("https://auth.example.com").unwrap(),
        "integration-test-token",
        runtime,
    );
    let client = Arc::new(AuthentikClient::new(&settings).unwrap());
    let secrets = Secrets::new(settings.token.clone(), client.base());
    let mut registry = ToolRegistry::new(settings.runtime.clone(), secrets);
    tools::register_all(&mut registry, &client);
    McpServer::new(registry)
}

#[tokio::test]
async fn initialize_list_and_call_flow() {
    let server = build_server(RuntimeConfig::permissive());

    // 1. Initialize
    let response = server
        .handle_message(r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","capabilities":{},"clientInfo":{"name":"test-client","version":"1.0.0"}}}"#)
        .await
        .unwrap();
    let result = response.result.unwrap();
    assert_eq!(result["protocolVersion"], "2024-11-05");
    assert!(result["capabilities"]["tools"].is_object());

    // 2. List tools
    let response = server
        .handle_message(r#"{"jsonrpc":"2.0","id":2,"method":"tools/list","params":{}}"#)
        .await
        .unwrap();
    let tools_array = response.result.unwrap()["tools"].as_array().unwrap().clone();
    assert_eq!(tools_array.len(), 66);

    let names: Vec<&str> = tools_array
        .iter()
        .filter_map(|tool| tool["name"].as_str())
        .collect();
    for expected in [
        "authentik_list_users",
        "authentik_create_provider",
        "authentik_export_flow",
        "authentik_unassign_user_permission",
    ] {
        assert!(names.contains(&expected), "missing {expected}");
    }

    // Annotations reflect tier and destructiveness.
    let delete_user = tools_array
        .iter()
        .find(|tool| tool["name"] == "authentik_delete_user")
        .unwrap();
    assert_eq!(delete_user["annotations"]["readOnlyHint"], false);
    assert_eq!(delete_user["annotations"]["destructiveHint"], true);

    // 3. Call a tool with a bad discriminator: an error result, not a
    // protocol error.
    let response = server
        .handle_message(
            r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"authentik_create_stage","arguments":{"stage_type":"bogus_type","config":{}}}}"#,
        )
        .await
        .unwrap();
    assert!(response.error.is_none());
    let result = response.result.unwrap();
    assert_eq!(result["isError"], true);
    let text = result["content"][0]["text"].as_str().unwrap();
    assert!(text.starts_with("Error: Unknown stage type 'bogus_type'"));
    assert!(text.contains("authenticator_totp"));

    // 4. Unknown tool name is a protocol error.
    let response = server
        .handle_message(
            r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"authentik_frobnicate","arguments":{}}}"#,
        )
        .await
        .unwrap();
    assert_eq!(response.error.unwrap()["code"], -32000);

    // 5. Ping still answers.
    let response = server
        .handle_message(r#"{"jsonrpc":"2.0","id":5,"method":"ping","params":{}}"#)
        .await
        .unwrap();
    assert_eq!(response.result.unwrap(), json!({}));
}

#[tokio::test]
async fn read_only_session_hides_mutations_end_to_end() {
    let server = build_server(RuntimeConfig {
        access_level: AccessLevel::ReadOnly,
        categories: None,
    });

    let response = server
        .handle_message(r#"{"jsonrpc":"2.0","id":1,"method":"tools/list","params":{}}"#)
        .await
        .unwrap();
    let tools_array = response.result.unwrap()["tools"].as_array().unwrap().clone();
    assert_eq!(tools_array.len(), 30);
    for tool in &tools_array {
        assert_eq!(
            tool["annotations"]["readOnlyHint"], true,
            "mutating tool leaked: {}",
            tool["name"]
        );
    }

    // A suppressed tool does not exist from the agent's perspective.
    let response = server
        .handle_message(
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"authentik_delete_user","arguments":{"user_pk":1}}}"#,
        )
        .await
        .unwrap();
    assert_eq!(response.error.unwrap()["code"], -32000);
}

#[tokio::test]
async fn missing_arguments_surface_as_redacted_error_results() {
    let server = build_server(RuntimeConfig::permissive());

    let response = server
        .handle_message(
            r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"authentik_get_flow","arguments":{}}}"#,
        )
        .await
        .unwrap();
    let result = response.result.unwrap();
    assert_eq!(result["isError"], true);
    let text = result["content"][0]["text"].as_str().unwrap();
    assert_eq!(text, "Error: Missing required argument: slug");
    assert!(!text.contains("integration-test-token"));
}

#[tokio::test]
async fn malformed_payloads_and_notifications() {
    let server = build_server(RuntimeConfig::permissive());

    let response = server.handle_message("not json at all").await.unwrap();
    assert_eq!(response.error.unwrap()["code"], -32700);

    let response = server
        .handle_message(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
        .await;
    assert!(response.is_none());

    let response = server
        .handle_message(r#"{"jsonrpc":"2.0","id":9,"method":"prompts/list","params":{}}"#)
        .await
        .unwrap();
    assert_eq!(response.error.unwrap()["code"], -32601);
}

#[tokio::test]
async fn category_scoped_session_lists_one_family() {
    let server = build_server(RuntimeConfig {
        access_level: AccessLevel::Full,
        categories: Some(
            [authentik_mcp_server::ToolCategory::Providers]
                .into_iter()
                .collect(),
        ),
    });

    let response = server
        .handle_message(r#"{"jsonrpc":"2.0","id":1,"method":"tools/list","params":{}}"#)
        .await
        .unwrap();
    let tools_array = response.result.unwrap()["tools"].as_array().unwrap().clone();
    let names: Vec<&str> = tools_array
        .iter()
        .filter_map(|tool| tool["name"].as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "authentik_list_providers",
            "authentik_get_provider",
            "authentik_create_provider",
            "authentik_update_provider",
            "authentik_delete_provider",
        ]
    );

    // The provider_type enum travels with the schema.
    let create = tools_array
        .iter()
        .find(|tool| tool["name"] == "authentik_create_provider")
        .unwrap();
    let enum_values: Vec<&str> = create["inputSchema"]["properties"]["provider_type"]["enum"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert_eq!(enum_values.len(), 9);
    assert!(enum_values.contains(&"oauth2"));
    assert!(enum_values.contains(&"google_workspace"));
}
