//! API token tools.
//!
//! `authentik_view_token_key` returns a live secret by design; it is gated
//! behind the full tier and its output is the one place the redactor must
//! not touch (success payloads are the tool's purpose, only failures are
//! scrubbed).

use std::sync::Arc;

use serde_json::json;

use super::args::{query_from, require_identifier, require_object, render_json};
use super::bind;
use crate::api::AuthentikClient;
use crate::config::{AccessLevel, ToolCategory};
use crate::registry::ToolDescriptor;

pub fn tools(client: &Arc<AuthentikClient>) -> Vec<ToolDescriptor> {
    vec![
        list_tokens(client),
        get_token(client),
        create_token(client),
        delete_token(client),
        view_token_key(client),
    ]
}

fn list_tokens(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_list_tokens",
        "List API tokens, with optional filters on user and intent",
        ToolCategory::Core,
        AccessLevel::ReadOnly,
        bind(client, |client, args| async move {
            let query = query_from(&args, &["user__username", "intent", "search", "page", "page_size"]);
            render_json(&client.tokens().list(&query).await?)
        }),
    )
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            "user__username": {"type": "string", "description": "Only tokens owned by this user"},
            "intent": {
                "type": "string",
                "enum": ["verification", "api", "recovery", "app_password"],
                "description": "Token intent to filter by"
            },
            "search": {"type": "string"},
            "page": {"type": "integer", "minimum": 1},
            "page_size": {"type": "integer", "minimum": 1}
        }
    }))
}

fn get_token(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_get_token",
        "Retrieve a single token by identifier (the key itself is not included)",
        ToolCategory::Core,
        AccessLevel::ReadOnly,
        bind(client, |client, args| async move {
            let identifier = require_identifier(&args, "identifier")?;
            render_json(&client.tokens().retrieve(&identifier).await?)
        }),
    )
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            "identifier": {"type": "string", "description": "Unique identifier of the token"}
        },
        "required": ["identifier"]
    }))
}

fn create_token(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_create_token",
        "Create a new API token",
        ToolCategory::Core,
        AccessLevel::Full,
        bind(client, |client, args| async move {
            let token = require_object(&args, "token")?;
            render_json(&client.tokens().create(&token).await?)
        }),
    )
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            "token": {
                "type": "object",
                "description": "Token fields; identifier is required by the API",
                "properties": {
                    "identifier": {"type": "string"},
                    "intent": {"type": "string", "enum": ["verification", "api", "recovery", "app_password"]},
                    "user": {"type": "integer", "description": "Owning user's primary key"},
                    "description": {"type": "string"},
                    "expiring": {"type": "boolean"}
                },
                "required": ["identifier"]
            }
        },
        "required": ["token"]
    }))
}

fn delete_token(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_delete_token",
        "Permanently delete a token, revoking its access",
        ToolCategory::Core,
        AccessLevel::Full,
        bind(client, |client, args| async move {
            let identifier = require_identifier(&args, "identifier")?;
            client.tokens().destroy(&identifier).await?;
            render_json(&json!({"status": "deleted", "identifier": identifier}))
        }),
    )
    .destructive()
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            "identifier": {"type": "string", "description": "Unique identifier of the token"}
        },
        "required": ["identifier"]
    }))
}

fn view_token_key(client: &Arc<AuthentikClient>) -> ToolDescriptor {
    ToolDescriptor::new(
        "authentik_view_token_key",
        "Reveal the secret key of a token",
        ToolCategory::Core,
        AccessLevel::Full,
        bind(client, |client, args| async move {
            let identifier = require_identifier(&args, "identifier")?;
            render_json(&client.tokens().fetch(&identifier, "view_key").await?)
        }),
    )
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            "identifier": {"type": "string", "description": "Unique identifier of the token"}
        },
        "required": ["identifier"]
    }))
}
