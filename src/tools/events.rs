//! Event log tools.

use std::sync::Arc;

use serde_json::json;

use super::args::{query_from, require_identifier, render_json};
use super::bind;
use crate::api::AuthentikClient;
use crate::config::{AccessLevel, ToolCategory};
use crate::registry::ToolDescriptor;

pub fn tools(client: &Arc<AuthentikClient>) -> Vec<ToolDescriptor> {
    vec![list_events(client), get_event(client)]
}

fn list_events(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_list_events",
        "List audit events, with optional filters on action and username",
        ToolCategory::Events,
        AccessLevel::ReadOnly,
        bind(client, |client, args| async move {
            let query = query_from(&args, &["action", "username", "search", "page", "page_size"]);
            render_json(&client.events().list(&query).await?)
        }),
    )
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            "action": {"type": "string", "description": "Event action to filter by, e.g. login or model_created"},
            "username": {"type": "string", "description": "Only events caused by this user"},
            "search": {"type": "string"},
            "page": {"type": "integer", "minimum": 1},
            "page_size": {"type": "integer", "minimum": 1}
        }
    }))
}

fn get_event(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_get_event",
        "Retrieve a single audit event by UUID",
        ToolCategory::Events,
        AccessLevel::ReadOnly,
        bind(client, |client, args| async move {
            let uuid = require_identifier(&args, "event_uuid")?;
            render_json(&client.events().retrieve(&uuid).await?)
        }),
    )
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            "event_uuid": {"type": "string", "description": "UUID of the event"}
        },
        "required": ["event_uuid"]
    }))
}
