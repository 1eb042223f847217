//! Application tools.

use std::sync::Arc;

use serde_json::json;

use super::args::{query_from, require_identifier, require_object, render_json};
use super::bind;
use crate::api::AuthentikClient;
use crate::config::{AccessLevel, ToolCategory};
use crate::registry::ToolDescriptor;

pub fn tools(client: &Arc<AuthentikClient>) -> Vec<ToolDescriptor> {
    vec![
        list_applications(client),
        get_application(client),
        create_application(client),
        update_application(client),
        delete_application(client),
    ]
}

fn list_applications(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_list_applications",
        "List applications, with optional free-text search",
        ToolCategory::Core,
        AccessLevel::ReadOnly,
        bind(client, |client, args| async move {
            let query = query_from(&args, &["search", "page", "page_size"]);
            render_json(&client.applications().list(&query).await?)
        }),
    )
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            "search": {"type": "string", "description": "Free-text search over name and slug"},
            "page": {"type": "integer", "minimum": 1},
            "page_size": {"type": "integer", "minimum": 1}
        }
    }))
}

fn get_application(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_get_application",
        "Retrieve a single application by slug",
        ToolCategory::Core,
        AccessLevel::ReadOnly,
        bind(client, |client, args| async move {
            let slug = require_identifier(&args, "slug")?;
            render_json(&client.applications().retrieve(&slug).await?)
        }),
    )
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            "slug": {"type": "string", "description": "Slug of the application"}
        },
        "required": ["slug"]
    }))
}

fn create_application(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_create_application",
        "Create a new application",
        ToolCategory::Core,
        AccessLevel::Full,
        bind(client, |client, args| async move {
            let application = require_object(&args, "application")?;
            render_json(&client.applications().create(&application).await?)
        }),
    )
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            "application": {
                "type": "object",
                "description": "Application fields; name and slug are required by the API",
                "properties": {
                    "name": {"type": "string"},
                    "slug": {"type": "string"},
                    "provider": {"type": "integer", "description": "Primary key of the backing provider"},
                    "meta_launch_url": {"type": "string"},
                    "open_in_new_tab": {"type": "boolean"}
                },
                "required": ["name", "slug"]
            }
        },
        "required": ["application"]
    }))
}

fn update_application(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_update_application",
        "Update fields of an existing application",
        ToolCategory::Core,
        AccessLevel::Full,
        bind(client, |client, args| async move {
            let slug = require_identifier(&args, "slug")?;
            let application = require_object(&args, "application")?;
            render_json(&client.applications().partial_update(&slug, &application).await?)
        }),
    )
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            "slug": {"type": "string", "description": "Slug of the application"},
            "application": {"type": "object", "description": "Fields to change"}
        },
        "required": ["slug", "application"]
    }))
}

fn delete_application(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_delete_application",
        "Permanently delete an application",
        ToolCategory::Core,
        AccessLevel::Full,
        bind(client, |client, args| async move {
            let slug = require_identifier(&args, "slug")?;
            client.applications().destroy(&slug).await?;
            render_json(&json!({"status": "deleted", "slug": slug}))
        }),
    )
    .destructive()
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            "slug": {"type": "string", "description": "Slug of the application"}
        },
        "required": ["slug"]
    }))
}
