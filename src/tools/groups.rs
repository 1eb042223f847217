//! Group tools.

use std::sync::Arc;

use serde_json::json;

use super::args::{query_from, require_identifier, require_object, render_json};
use super::bind;
use crate::api::AuthentikClient;
use crate::config::{AccessLevel, ToolCategory};
use crate::registry::ToolDescriptor;

pub fn tools(client: &Arc<AuthentikClient>) -> Vec<ToolDescriptor> {
    vec![
        list_groups(client),
        get_group(client),
        create_group(client),
        update_group(client),
        delete_group(client),
        add_user_to_group(client),
        remove_user_from_group(client),
    ]
}

fn list_groups(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_list_groups",
        "List groups, with optional filters on name, membership and superuser status",
        ToolCategory::Core,
        AccessLevel::ReadOnly,
        bind(client, |client, args| async move {
            let query = query_from(
                &args,
                &["name", "members_by_username", "is_superuser", "search", "page", "page_size"],
            );
            render_json(&client.groups().list(&query).await?)
        }),
    )
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            "name": {"type": "string", "description": "Exact group name to filter by"},
            "members_by_username": {"type": "string", "description": "Only groups containing this user"},
            "is_superuser": {"type": "boolean", "description": "Filter by superuser grant"},
            "search": {"type": "string", "description": "Free-text search"},
            "page": {"type": "integer", "minimum": 1},
            "page_size": {"type": "integer", "minimum": 1}
        }
    }))
}

fn get_group(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_get_group",
        "Retrieve a single group by UUID",
        ToolCategory::Core,
        AccessLevel::ReadOnly,
        bind(client, |client, args| async move {
            let uuid = require_identifier(&args, "group_uuid")?;
            render_json(&client.groups().retrieve(&uuid).await?)
        }),
    )
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            "group_uuid": {"type": "string", "description": "UUID of the group"}
        },
        "required": ["group_uuid"]
    }))
}

fn create_group(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_create_group",
        "Create a new group",
        ToolCategory::Core,
        AccessLevel::Full,
        bind(client, |client, args| async move {
            let group = require_object(&args, "group")?;
            render_json(&client.groups().create(&group).await?)
        }),
    )
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            "group": {
                "type": "object",
                "description": "Group fields; name is required by the API",
                "properties": {
                    "name": {"type": "string"},
                    "is_superuser": {"type": "boolean"},
                    "parent": {"type": "string", "description": "Parent group UUID"},
                    "attributes": {"type": "object"}
                },
                "required": ["name"]
            }
        },
        "required": ["group"]
    }))
}

fn update_group(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_update_group",
        "Update fields of an existing group",
        ToolCategory::Core,
        AccessLevel::Full,
        bind(client, |client, args| async move {
            let uuid = require_identifier(&args, "group_uuid")?;
            let group = require_object(&args, "group")?;
            render_json(&client.groups().partial_update(&uuid, &group).await?)
        }),
    )
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            "group_uuid": {"type": "string", "description": "UUID of the group"},
            "group": {"type": "object", "description": "Fields to change"}
        },
        "required": ["group_uuid", "group"]
    }))
}

fn delete_group(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_delete_group",
        "Permanently delete a group",
        ToolCategory::Core,
        AccessLevel::Full,
        bind(client, |client, args| async move {
            let uuid = require_identifier(&args, "group_uuid")?;
            client.groups().destroy(&uuid).await?;
            render_json(&json!({"status": "deleted", "group_uuid": uuid}))
        }),
    )
    .destructive()
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            "group_uuid": {"type": "string", "description": "UUID of the group"}
        },
        "required": ["group_uuid"]
    }))
}

fn add_user_to_group(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_add_user_to_group",
        "Add a user to a group",
        ToolCategory::Core,
        AccessLevel::Full,
        bind(client, |client, args| async move {
            let uuid = require_identifier(&args, "group_uuid")?;
            let user_pk = require_identifier(&args, "user_pk")?;
            // The API wants numeric pks; tolerate string-typed arguments.
            let pk = match user_pk.parse::<i64>() {
                Ok(number) => json!(number),
                Err(_) => json!(user_pk),
            };
            client
                .groups()
                .invoke(&uuid, "add_user", Some(&json!({"pk": pk})))
                .await?;
            render_json(&json!({"status": "added", "group_uuid": uuid}))
        }),
    )
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            "group_uuid": {"type": "string", "description": "UUID of the group"},
            "user_pk": {"type": "integer", "description": "Primary key of the user to add"}
        },
        "required": ["group_uuid", "user_pk"]
    }))
}

fn remove_user_from_group(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_remove_user_from_group",
        "Remove a user from a group",
        ToolCategory::Core,
        AccessLevel::Full,
        bind(client, |client, args| async move {
            let uuid = require_identifier(&args, "group_uuid")?;
            let user_pk = require_identifier(&args, "user_pk")?;
            let pk = match user_pk.parse::<i64>() {
                Ok(number) => json!(number),
                Err(_) => json!(user_pk),
            };
            client
                .groups()
                .invoke(&uuid, "remove_user", Some(&json!({"pk": pk})))
                .await?;
            render_json(&json!({"status": "removed", "group_uuid": uuid}))
        }),
    )
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            "group_uuid": {"type": "string", "description": "UUID of the group"},
            "user_pk": {"type": "integer", "description": "Primary key of the user to remove"}
        },
        "required": ["group_uuid", "user_pk"]
    }))
}
