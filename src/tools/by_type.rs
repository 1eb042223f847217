//! By-type tool quintets for the five sub-typed resource families.
//!
//! One builder, five data rows: each family gets list/get/create/update/
//! delete tools whose handlers all go through [`dispatch::call`]. The
//! discriminator argument is constrained to the family's closed enum in
//! the input schema and re-validated by the dispatch table at call time.

use std::sync::Arc;

use serde_json::json;

use super::args::{query_from, require_identifier, require_object, require_str, render_json};
use super::bind;
use crate::api::{AuthentikClient, ResourceFacet};
use crate::config::{AccessLevel, ToolCategory};
use crate::dispatch::{self, DispatchTable, OperationKind};
use crate::registry::ToolDescriptor;

/// Everything the quintet builder needs to know about one family.
struct Family {
    table: &'static DispatchTable,
    category: ToolCategory,
    /// Tool-name fragment, singular, e.g. `stage`.
    noun: &'static str,
    /// Tool-name fragment, plural, e.g. `stages`.
    plural: &'static str,
    /// Argument carrying the discriminator, e.g. `stage_type`.
    type_arg: &'static str,
    /// Argument carrying the object identifier, e.g. `stage_uuid`.
    id_arg: &'static str,
    facet: fn(&AuthentikClient) -> ResourceFacet,
}

static FAMILIES: [Family; 5] = [
    Family {
        table: &dispatch::stages::TABLE,
        category: ToolCategory::Stages,
        noun: "stage",
        plural: "stages",
        type_arg: "stage_type",
        id_arg: "stage_uuid",
        facet: |client| client.stages(),
    },
    Family {
        table: &dispatch::providers::TABLE,
        category: ToolCategory::Providers,
        noun: "provider",
        plural: "providers",
        type_arg: "provider_type",
        id_arg: "provider_id",
        facet: |client| client.providers(),
    },
    Family {
        table: &dispatch::policies::TABLE,
        category: ToolCategory::Policies,
        noun: "policy",
        plural: "policies",
        type_arg: "policy_type",
        id_arg: "policy_uuid",
        facet: |client| client.policies(),
    },
    Family {
        table: &dispatch::sources::TABLE,
        category: ToolCategory::Sources,
        noun: "source",
        plural: "sources",
        type_arg: "source_type",
        id_arg: "source_slug",
        facet: |client| client.sources(),
    },
    Family {
        table: &dispatch::property_mappings::TABLE,
        category: ToolCategory::PropertyMappings,
        noun: "property_mapping",
        plural: "property_mappings",
        type_arg: "property_mapping_type",
        id_arg: "mapping_uuid",
        facet: |client| client.property_mappings(),
    },
];

pub fn tools(client: &Arc<AuthentikClient>) -> Vec<ToolDescriptor> {
    let mut tools = Vec::with_capacity(FAMILIES.len() * 5);
    for family in &FAMILIES {
        tools.push(list_tool(client, family));
        tools.push(get_tool(client, family));
        tools.push(create_tool(client, family));
        tools.push(update_tool(client, family));
        tools.push(delete_tool(client, family));
    }
    tools
}

fn type_schema(family: &Family) -> serde_json::Value {
    json!({
        "type": "string",
        "enum": family.table.discriminators(),
        "description": format!("Concrete {} type to operate on", family.table.family)
    })
}

fn list_tool(client: &Arc<AuthentikClient>, family: &'static Family) -> ToolDescriptor {
    ToolDescriptor::new(
        format!("authentik_list_{}", family.plural),
        format!("List {}s of the given type", family.table.family),
        family.category,
        AccessLevel::ReadOnly,
        bind(client, move |client, args| async move {
            let kind = require_str(&args, family.type_arg)?;
            let query = query_from(&args, &["search", "page", "page_size"]);
            let result = dispatch::call(
                &(family.facet)(&client),
                family.table,
                &kind,
                OperationKind::List,
                None,
                None,
                &query,
            )
            .await?;
            render_json(&result)
        }),
    )
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            (family.type_arg): type_schema(family),
            "search": {"type": "string", "description": "Free-text search"},
            "page": {"type": "integer", "minimum": 1},
            "page_size": {"type": "integer", "minimum": 1}
        },
        "required": [family.type_arg]
    }))
}

fn get_tool(client: &Arc<AuthentikClient>, family: &'static Family) -> ToolDescriptor {
    ToolDescriptor::new(
        format!("authentik_get_{}", family.noun),
        format!("Retrieve a single {} of the given type", family.table.family),
        family.category,
        AccessLevel::ReadOnly,
        bind(client, move |client, args| async move {
            let kind = require_str(&args, family.type_arg)?;
            let id = require_identifier(&args, family.id_arg)?;
            let result = dispatch::call(
                &(family.facet)(&client),
                family.table,
                &kind,
                OperationKind::Get,
                Some(&id),
                None,
                &[],
            )
            .await?;
            render_json(&result)
        }),
    )
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            (family.type_arg): type_schema(family),
            (family.id_arg): {"type": "string", "description": format!("Identifier of the {}", family.table.family)}
        },
        "required": [family.type_arg, family.id_arg]
    }))
}

fn create_tool(client: &Arc<AuthentikClient>, family: &'static Family) -> ToolDescriptor {
    ToolDescriptor::new(
        format!("authentik_create_{}", family.noun),
        format!(
            "Create a new {} of the given type from a type-specific configuration object",
            family.table.family
        ),
        family.category,
        AccessLevel::Full,
        bind(client, move |client, args| async move {
            let kind = require_str(&args, family.type_arg)?;
            let config = require_object(&args, "config")?;
            let result = dispatch::call(
                &(family.facet)(&client),
                family.table,
                &kind,
                OperationKind::Create,
                None,
                Some(&config),
                &[],
            )
            .await?;
            render_json(&result)
        }),
    )
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            (family.type_arg): type_schema(family),
            "config": {
                "type": "object",
                "description": format!("Type-specific {} configuration", family.table.family)
            }
        },
        "required": [family.type_arg, "config"]
    }))
}

fn update_tool(client: &Arc<AuthentikClient>, family: &'static Family) -> ToolDescriptor {
    ToolDescriptor::new(
        format!("authentik_update_{}", family.noun),
        format!("Update an existing {} of the given type", family.table.family),
        family.category,
        AccessLevel::Full,
        bind(client, move |client, args| async move {
            let kind = require_str(&args, family.type_arg)?;
            let id = require_identifier(&args, family.id_arg)?;
            let config = require_object(&args, "config")?;
            let result = dispatch::call(
                &(family.facet)(&client),
                family.table,
                &kind,
                OperationKind::Update,
                Some(&id),
                Some(&config),
                &[],
            )
            .await?;
            render_json(&result)
        }),
    )
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            (family.type_arg): type_schema(family),
            (family.id_arg): {"type": "string", "description": format!("Identifier of the {}", family.table.family)},
            "config": {"type": "object", "description": "Fields to change"}
        },
        "required": [family.type_arg, family.id_arg, "config"]
    }))
}

fn delete_tool(client: &Arc<AuthentikClient>, family: &'static Family) -> ToolDescriptor {
    ToolDescriptor::new(
        format!("authentik_delete_{}", family.noun),
        format!("Permanently delete a {} of the given type", family.table.family),
        family.category,
        AccessLevel::Full,
        bind(client, move |client, args| async move {
            let kind = require_str(&args, family.type_arg)?;
            let id = require_identifier(&args, family.id_arg)?;
            dispatch::call(
                &(family.facet)(&client),
                family.table,
                &kind,
                OperationKind::Delete,
                Some(&id),
                None,
                &[],
            )
            .await?;
            render_json(&json!({"status": "deleted", "type": kind, "id": id}))
        }),
    )
    .destructive()
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            (family.type_arg): type_schema(family),
            (family.id_arg): {"type": "string", "description": format!("Identifier of the {}", family.table.family)}
        },
        "required": [family.type_arg, family.id_arg]
    }))
}
