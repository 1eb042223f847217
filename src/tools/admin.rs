//! Administrative tools: instance introspection, outposts, certificates,
//! and permission management.

use std::sync::Arc;

use serde_json::json;

use super::args::{query_from, require_identifier, require_object, render_json};
use super::bind;
use crate::api::AuthentikClient;
use crate::config::{AccessLevel, ToolCategory};
use crate::error::ToolError;
use crate::registry::ToolDescriptor;

pub fn tools(client: &Arc<AuthentikClient>) -> Vec<ToolDescriptor> {
    vec![
        version(client),
        system_info(client),
        list_outposts(client),
        get_outpost(client),
        list_certificates(client),
        get_certificate(client),
        download_certificate(client),
        generate_certificate(client),
        assign_user_permission(client),
        unassign_user_permission(client),
    ]
}

fn version(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_version",
        "Get the authentik server version and whether an update is available",
        ToolCategory::Admin,
        AccessLevel::ReadOnly,
        bind(client, |client, _args| async move {
            render_json(&client.version().await?)
        }),
    )
}

fn system_info(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_system_info",
        "Get runtime information about the authentik instance",
        ToolCategory::Admin,
        AccessLevel::ReadOnly,
        bind(client, |client, _args| async move {
            render_json(&client.system_info().await?)
        }),
    )
}

fn list_outposts(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_list_outposts",
        "List outposts and their deployment state",
        ToolCategory::Admin,
        AccessLevel::ReadOnly,
        bind(client, |client, args| async move {
            let query = query_from(&args, &["search", "page", "page_size"]);
            render_json(&client.outposts().list(&query).await?)
        }),
    )
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            "search": {"type": "string"},
            "page": {"type": "integer", "minimum": 1},
            "page_size": {"type": "integer", "minimum": 1}
        }
    }))
}

fn get_outpost(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_get_outpost",
        "Retrieve a single outpost by UUID",
        ToolCategory::Admin,
        AccessLevel::ReadOnly,
        bind(client, |client, args| async move {
            let uuid = require_identifier(&args, "outpost_uuid")?;
            render_json(&client.outposts().retrieve(&uuid).await?)
        }),
    )
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            "outpost_uuid": {"type": "string", "description": "UUID of the outpost"}
        },
        "required": ["outpost_uuid"]
    }))
}

fn list_certificates(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_list_certificates",
        "List certificate-key pairs",
        ToolCategory::Admin,
        AccessLevel::ReadOnly,
        bind(client, |client, args| async move {
            let query = query_from(&args, &["name", "has_key", "search", "page", "page_size"]);
            render_json(&client.certificates().list(&query).await?)
        }),
    )
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            "name": {"type": "string", "description": "Exact name to filter by"},
            "has_key": {"type": "boolean", "description": "Only pairs with a private key"},
            "search": {"type": "string"},
            "page": {"type": "integer", "minimum": 1},
            "page_size": {"type": "integer", "minimum": 1}
        }
    }))
}

fn get_certificate(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_get_certificate",
        "Retrieve a single certificate-key pair by UUID",
        ToolCategory::Admin,
        AccessLevel::ReadOnly,
        bind(client, |client, args| async move {
            let uuid = require_identifier(&args, "certificate_uuid")?;
            render_json(&client.certificates().retrieve(&uuid).await?)
        }),
    )
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            "certificate_uuid": {"type": "string", "description": "UUID of the certificate-key pair"}
        },
        "required": ["certificate_uuid"]
    }))
}

fn download_certificate(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_download_certificate",
        "Download the public certificate of a certificate-key pair, returned verbatim as text",
        ToolCategory::Admin,
        AccessLevel::ReadOnly,
        bind(client, |client, args| async move {
            let uuid = require_identifier(&args, "certificate_uuid")?;
            // Served as-is, not re-encoded as JSON.
            Ok(client
                .certificates()
                .export_text(&uuid, "view_certificate")
                .await?)
        }),
    )
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            "certificate_uuid": {"type": "string", "description": "UUID of the certificate-key pair"}
        },
        "required": ["certificate_uuid"]
    }))
}

fn generate_certificate(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_generate_certificate",
        "Generate a new self-signed certificate-key pair",
        ToolCategory::Admin,
        AccessLevel::Full,
        bind(client, |client, args| async move {
            let request = require_object(&args, "certificate")?;
            render_json(
                &client
                    .certificates()
                    .invoke_collection("generate", Some(&request))
                    .await?,
            )
        }),
    )
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            "certificate": {
                "type": "object",
                "description": "Generation parameters; common_name is required by the API",
                "properties": {
                    "common_name": {"type": "string"},
                    "subject_alt_name": {"type": "string", "description": "Comma-separated SANs"},
                    "validity_days": {"type": "integer", "minimum": 1}
                },
                "required": ["common_name"]
            }
        },
        "required": ["certificate"]
    }))
}

fn assign_user_permission(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_assign_user_permission",
        "Assign one or more global permissions to a user",
        ToolCategory::Admin,
        AccessLevel::Full,
        bind(client, |client, args| async move {
            let pk = require_identifier(&args, "user_pk")?;
            let permissions = permission_list(&args)?;
            render_json(
                &client
                    .user_permissions()
                    .invoke(&pk, "assign", Some(&json!({"permissions": permissions})))
                    .await?,
            )
        }),
    )
    .with_input_schema(permission_schema())
}

fn unassign_user_permission(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_unassign_user_permission",
        "Remove one or more global permissions from a user; removing an absent permission is a no-op",
        ToolCategory::Admin,
        AccessLevel::Full,
        bind(client, |client, args| async move {
            let pk = require_identifier(&args, "user_pk")?;
            let permissions = permission_list(&args)?;
            // Returns no body on success.
            client
                .user_permissions()
                .invoke(&pk, "unassign", Some(&json!({"permissions": permissions})))
                .await?;
            render_json(&json!({"status": "unassigned", "user_pk": pk}))
        }),
    )
    .with_input_schema(permission_schema())
}

fn permission_list(args: &serde_json::Value) -> Result<Vec<String>, ToolError> {
    let Some(items) = args.get("permissions").and_then(serde_json::Value::as_array) else {
        return Err(ToolError::MissingArgument("permissions"));
    };
    let permissions: Vec<String> = items
        .iter()
        .filter_map(|item| item.as_str().map(str::to_string))
        .collect();
    if permissions.is_empty() {
        return Err(ToolError::InvalidArgument {
            name: "permissions",
            message: "expected a non-empty list of permission codenames".to_string(),
        });
    }
    Ok(permissions)
}

fn permission_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "user_pk": {"type": "integer", "description": "Primary key of the user"},
            "permissions": {
                "type": "array",
                "items": {"type": "string"},
                "description": "Permission codenames, e.g. authentik_core.view_user"
            }
        },
        "required": ["user_pk", "permissions"]
    })
}
