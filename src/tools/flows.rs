//! Flow tools.

use std::sync::Arc;

use serde_json::json;

use super::args::{query_from, require_identifier, require_object, render_json};
use super::bind;
use crate::api::AuthentikClient;
use crate::config::{AccessLevel, ToolCategory};
use crate::registry::ToolDescriptor;

pub fn tools(client: &Arc<AuthentikClient>) -> Vec<ToolDescriptor> {
    vec![
        list_flows(client),
        get_flow(client),
        create_flow(client),
        update_flow(client),
        delete_flow(client),
        export_flow(client),
    ]
}

fn list_flows(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_list_flows",
        "List flows, with optional filters on designation and search",
        ToolCategory::Flows,
        AccessLevel::ReadOnly,
        bind(client, |client, args| async move {
            let query = query_from(&args, &["designation", "search", "page", "page_size"]);
            render_json(&client.flows().list(&query).await?)
        }),
    )
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            "designation": {
                "type": "string",
                "enum": [
                    "authentication", "authorization", "invalidation",
                    "enrollment", "unenrollment", "recovery", "stage_configuration"
                ],
                "description": "Flow designation to filter by"
            },
            "search": {"type": "string"},
            "page": {"type": "integer", "minimum": 1},
            "page_size": {"type": "integer", "minimum": 1}
        }
    }))
}

fn get_flow(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_get_flow",
        "Retrieve a single flow by slug",
        ToolCategory::Flows,
        AccessLevel::ReadOnly,
        bind(client, |client, args| async move {
            let slug = require_identifier(&args, "slug")?;
            render_json(&client.flows().retrieve(&slug).await?)
        }),
    )
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            "slug": {"type": "string", "description": "Slug of the flow"}
        },
        "required": ["slug"]
    }))
}

fn create_flow(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_create_flow",
        "Create a new flow",
        ToolCategory::Flows,
        AccessLevel::Full,
        bind(client, |client, args| async move {
            let flow = require_object(&args, "flow")?;
            render_json(&client.flows().create(&flow).await?)
        }),
    )
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            "flow": {
                "type": "object",
                "description": "Flow fields; name, slug, title and designation are required by the API",
                "properties": {
                    "name": {"type": "string"},
                    "slug": {"type": "string"},
                    "title": {"type": "string", "description": "Shown to end users"},
                    "designation": {"type": "string"},
                    "authentication": {"type": "string"}
                },
                "required": ["name", "slug", "title", "designation"]
            }
        },
        "required": ["flow"]
    }))
}

fn update_flow(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_update_flow",
        "Update fields of an existing flow",
        ToolCategory::Flows,
        AccessLevel::Full,
        bind(client, |client, args| async move {
            let slug = require_identifier(&args, "slug")?;
            let flow = require_object(&args, "flow")?;
            render_json(&client.flows().partial_update(&slug, &flow).await?)
        }),
    )
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            "slug": {"type": "string", "description": "Slug of the flow"},
            "flow": {"type": "object", "description": "Fields to change"}
        },
        "required": ["slug", "flow"]
    }))
}

fn delete_flow(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_delete_flow",
        "Permanently delete a flow",
        ToolCategory::Flows,
        AccessLevel::Full,
        bind(client, |client, args| async move {
            let slug = require_identifier(&args, "slug")?;
            client.flows().destroy(&slug).await?;
            render_json(&json!({"status": "deleted", "slug": slug}))
        }),
    )
    .destructive()
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            "slug": {"type": "string", "description": "Slug of the flow"}
        },
        "required": ["slug"]
    }))
}

fn export_flow(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_export_flow",
        "Export a flow as a blueprint, returned verbatim as text",
        ToolCategory::Flows,
        AccessLevel::ReadOnly,
        bind(client, |client, args| async move {
            let slug = require_identifier(&args, "slug")?;
            // Export payloads are served as-is, not re-encoded as JSON.
            Ok(client.flows().export_text(&slug, "export").await?)
        }),
    )
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            "slug": {"type": "string", "description": "Slug of the flow to export"}
        },
        "required": ["slug"]
    }))
}
