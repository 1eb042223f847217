//! User tools.

use std::sync::Arc;

use serde_json::json;

use super::args::{query_from, require_identifier, require_object, require_str, render_json};
use super::bind;
use crate::api::AuthentikClient;
use crate::config::{AccessLevel, ToolCategory};
use crate::registry::ToolDescriptor;

pub fn tools(client: &Arc<AuthentikClient>) -> Vec<ToolDescriptor> {
    vec![
        list_users(client),
        get_user(client),
        create_user(client),
        update_user(client),
        delete_user(client),
        set_user_password(client),
    ]
}

fn list_users(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_list_users",
        "List users, with optional filters on username, email, group and free-text search",
        ToolCategory::Core,
        AccessLevel::ReadOnly,
        bind(client, |client, args| async move {
            let query = query_from(
                &args,
                &["username", "email", "groups_by_name", "search", "is_active", "page", "page_size"],
            );
            render_json(&client.users().list(&query).await?)
        }),
    )
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            "username": {"type": "string", "description": "Exact username to filter by"},
            "email": {"type": "string", "description": "Exact email address to filter by"},
            "groups_by_name": {"type": "string", "description": "Only users in the group with this name"},
            "search": {"type": "string", "description": "Free-text search over name, username and email"},
            "is_active": {"type": "boolean", "description": "Filter by active state"},
            "page": {"type": "integer", "minimum": 1, "description": "1-based result page"},
            "page_size": {"type": "integer", "minimum": 1, "description": "Results per page"}
        }
    }))
}

fn get_user(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_get_user",
        "Retrieve a single user by primary key",
        ToolCategory::Core,
        AccessLevel::ReadOnly,
        bind(client, |client, args| async move {
            let pk = require_identifier(&args, "user_pk")?;
            render_json(&client.users().retrieve(&pk).await?)
        }),
    )
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            "user_pk": {"type": "integer", "description": "Primary key of the user"}
        },
        "required": ["user_pk"]
    }))
}

fn create_user(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_create_user",
        "Create a new user",
        ToolCategory::Core,
        AccessLevel::Full,
        bind(client, |client, args| async move {
            let user = require_object(&args, "user")?;
            render_json(&client.users().create(&user).await?)
        }),
    )
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            "user": {
                "type": "object",
                "description": "User fields; username and name are required by the API",
                "properties": {
                    "username": {"type": "string"},
                    "name": {"type": "string", "description": "Display name"},
                    "email": {"type": "string"},
                    "is_active": {"type": "boolean"},
                    "groups": {"type": "array", "items": {"type": "string"}, "description": "Group UUIDs"},
                    "attributes": {"type": "object", "description": "Arbitrary custom attributes"}
                },
                "required": ["username", "name"]
            }
        },
        "required": ["user"]
    }))
}

fn update_user(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_update_user",
        "Update fields of an existing user",
        ToolCategory::Core,
        AccessLevel::Full,
        bind(client, |client, args| async move {
            let pk = require_identifier(&args, "user_pk")?;
            let user = require_object(&args, "user")?;
            render_json(&client.users().partial_update(&pk, &user).await?)
        }),
    )
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            "user_pk": {"type": "integer", "description": "Primary key of the user"},
            "user": {"type": "object", "description": "Fields to change"}
        },
        "required": ["user_pk", "user"]
    }))
}

fn delete_user(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_delete_user",
        "Permanently delete a user",
        ToolCategory::Core,
        AccessLevel::Full,
        bind(client, |client, args| async move {
            let pk = require_identifier(&args, "user_pk")?;
            client.users().destroy(&pk).await?;
            render_json(&json!({"status": "deleted", "user_pk": pk}))
        }),
    )
    .destructive()
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            "user_pk": {"type": "integer", "description": "Primary key of the user"}
        },
        "required": ["user_pk"]
    }))
}

fn set_user_password(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_set_user_password",
        "Set a user's password, invalidating their existing sessions",
        ToolCategory::Core,
        AccessLevel::Full,
        bind(client, |client, args| async move {
            let pk = require_identifier(&args, "user_pk")?;
            let password = require_str(&args, "password")?;
            client
                .users()
                .invoke(&pk, "set_password", Some(&json!({"password": password})))
                .await?;
            render_json(&json!({"status": "password set", "user_pk": pk}))
        }),
    )
    .destructive()
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            "user_pk": {"type": "integer", "description": "Primary key of the user"},
            "password": {"type": "string", "description": "New password"}
        },
        "required": ["user_pk", "password"]
    }))
}
