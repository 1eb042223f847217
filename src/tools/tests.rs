//! Catalog-level tests: naming, ordering, and exposure under different
//! runtime configurations.

use std::collections::HashSet;
use std::sync::Arc;

use serde_json::json;
use url::Url;

use super::{catalog, register_all};
use crate::api::AuthentikClient;
use crate::config::{AccessLevel, RuntimeConfig, ServerSettings, ToolCategory};
use crate::redact::Secrets;
use crate::registry::ToolRegistry;

fn test_client() -> Arc<AuthentikClient> {
    let settings = ServerSettings::new(
        Url::parse("https://auth.example.com").unwrap(),
        "test-token",
        RuntimeConfig::permissive(),
    );
    Arc::new(AuthentikClient::new(&settings).unwrap())
}

fn registry_with(runtime: RuntimeConfig) -> ToolRegistry {
    ToolRegistry::new(
        runtime,
        Secrets::new("test-token", "https://auth.example.com"),
    )
}

#[test]
fn catalog_names_are_unique_and_prefixed() {
    let client = test_client();
    let mut seen = HashSet::new();
    for descriptor in catalog(&client) {
        assert!(
            descriptor.name.starts_with("authentik_"),
            "unprefixed tool {}",
            descriptor.name
        );
        assert!(seen.insert(descriptor.name.clone()), "duplicate {}", descriptor.name);
        assert!(!descriptor.description.is_empty());
    }
}

#[test]
fn full_tier_exposes_the_entire_catalog() {
    let client = test_client();
    let mut registry = registry_with(RuntimeConfig::permissive());
    let exposed = register_all(&mut registry, &client);
    assert_eq!(exposed, catalog(&client).len());
    assert_eq!(exposed, 66);
}

#[test]
fn read_only_tier_exposes_exactly_the_read_only_subset() {
    let client = test_client();
    let expected: usize = catalog(&client)
        .iter()
        .filter(|descriptor| descriptor.access_level == AccessLevel::ReadOnly)
        .count();

    let mut registry = registry_with(RuntimeConfig {
        access_level: AccessLevel::ReadOnly,
        categories: None,
    });
    let exposed = register_all(&mut registry, &client);
    assert_eq!(exposed, expected);
    assert_eq!(exposed, 30);

    // Spot-check: listings exist, mutations do not.
    assert!(registry.contains("authentik_list_users"));
    assert!(registry.contains("authentik_export_flow"));
    assert!(!registry.contains("authentik_create_user"));
    assert!(!registry.contains("authentik_delete_stage"));
    assert!(!registry.contains("authentik_view_token_key"));
}

#[test]
fn destructive_tools_require_the_full_tier() {
    let client = test_client();
    for descriptor in catalog(&client) {
        if descriptor.destructive {
            assert_eq!(
                descriptor.access_level,
                AccessLevel::Full,
                "{} is destructive but not gated",
                descriptor.name
            );
        }
    }
}

#[test]
fn category_allowlist_carves_one_family() {
    let client = test_client();
    let mut registry = registry_with(RuntimeConfig {
        access_level: AccessLevel::Full,
        categories: Some([ToolCategory::Flows].into_iter().collect()),
    });
    let exposed = register_all(&mut registry, &client);
    assert_eq!(exposed, 6);
    assert!(registry.contains("authentik_list_flows"));
    assert!(registry.contains("authentik_export_flow"));
    assert!(!registry.contains("authentik_list_users"));
    assert!(!registry.contains("authentik_version"));
}

#[test]
fn by_type_schemas_enumerate_their_discriminators() {
    let client = test_client();
    for descriptor in catalog(&client) {
        let Some(schema) = &descriptor.input_schema else { continue };
        let Some(properties) = schema.get("properties").and_then(|p| p.as_object()) else {
            continue;
        };
        for (name, table) in [
            ("provider_type", &crate::dispatch::providers::TABLE),
            ("stage_type", &crate::dispatch::stages::TABLE),
            ("policy_type", &crate::dispatch::policies::TABLE),
            ("source_type", &crate::dispatch::sources::TABLE),
            ("property_mapping_type", &crate::dispatch::property_mappings::TABLE),
        ] {
            if let Some(type_property) = properties.get(name) {
                assert_eq!(
                    type_property["enum"],
                    json!(table.discriminators()),
                    "{} has a stale enum in {}",
                    name,
                    descriptor.name
                );
            }
        }
    }
}

#[tokio::test]
async fn missing_arguments_fail_without_touching_the_network() {
    let client = test_client();
    let mut registry = registry_with(RuntimeConfig::permissive());
    register_all(&mut registry, &client);

    // No user_pk: the handler fails in argument extraction, well before any
    // request could be sent to the (nonexistent) backend.
    let result = registry
        .call("authentik_get_user", json!({}))
        .await
        .unwrap();
    assert!(result.is_error);
    assert_eq!(result.text, "Error: Missing required argument: user_pk");
}

#[tokio::test]
async fn unknown_discriminator_surfaces_the_valid_set_verbatim() {
    let client = test_client();
    let mut registry = registry_with(RuntimeConfig::permissive());
    register_all(&mut registry, &client);

    let result = registry
        .call(
            "authentik_create_provider",
            json!({"provider_type": "bogus_type", "config": {}}),
        )
        .await
        .unwrap();
    assert!(result.is_error);
    assert!(result.text.starts_with("Error: Unknown provider type 'bogus_type'"));
    for entry in crate::dispatch::providers::TABLE.entries {
        assert!(
            result.text.contains(entry.discriminator),
            "valid set missing {}: {}",
            entry.discriminator,
            result.text
        );
    }
}
