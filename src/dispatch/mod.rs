//! By-type dispatch for the five sub-typed resource families.
//!
//! authentik models stages, providers, policies, sources, and property
//! mappings as one concrete endpoint per sub-type, each with its own typed
//! request wrapper. A [`DispatchTable`] is the minimal data needed to
//! project one logical "by type" tool onto that per-type surface: the URL
//! path segment and the create/update request keys, keyed by the
//! caller-supplied discriminator. Tables are static and closed; an unknown
//! discriminator fails before any network traffic, naming the valid set.

pub mod policies;
pub mod property_mappings;
pub mod providers;
pub mod sources;
pub mod stages;


use serde_json::{Value, json};

use crate::api::ResourceFacet;
use crate::error::ToolError;

/// The operation kinds a by-type tool can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl OperationKind {
    pub const ALL: [OperationKind; 5] = [
        Self::List,
        Self::Get,
        Self::Create,
        Self::Update,
        Self::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Get => "retrieve",
            Self::Create => "create",
            Self::Update => "partial_update",
            Self::Delete => "destroy",
        }
    }
}

/// One concrete sub-resource within a family.
#[derive(Debug, Clone, Copy)]
pub struct SubResource {
    /// Discriminator value callers supply, e.g. `oauth2`.
    pub discriminator: &'static str,
    /// URL path segment under the family root, e.g. `authenticator/totp`.
    pub segment: &'static str,
    /// Request wrapper key for create bodies.
    pub create_request_key: &'static str,
    /// Request wrapper key for update bodies.
    pub update_request_key: &'static str,
}

/// A family's static table of sub-resources.
#[derive(Debug, Clone, Copy)]
pub struct DispatchTable {
    /// Singular family name used in error messages, e.g. `provider`.
    pub family: &'static str,
    /// API group the family lives under, e.g. `providers`.
    pub group: &'static str,
    pub entries: &'static [SubResource],
}

impl DispatchTable {
    /// Looks up a caller-supplied discriminator.
    ///
    /// # Errors
    ///
    /// Unknown discriminators yield [`ToolError::UnknownKind`] naming the
    /// offending value and every valid discriminator. This happens before
    /// any network call and contains no secret.
    pub fn resolve(&self, discriminator: &str) -> Result<&'static SubResource, ToolError> {
        self.entries
            .iter()
            .find(|entry| entry.discriminator == discriminator)
            .ok_or_else(|| ToolError::UnknownKind {
                family: self.family,
                value: discriminator.to_string(),
                valid: self.valid_set(),
            })
    }

    /// Comma-separated discriminator list, in table order.
    pub fn valid_set(&self) -> String {
        self.entries
            .iter()
            .map(|entry| entry.discriminator)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Every discriminator, for input-schema enums.
    pub fn discriminators(&self) -> Vec<&'static str> {
        self.entries.iter().map(|entry| entry.discriminator).collect()
    }

    /// Concrete backend operation name, for logs and error context,
    /// e.g. `providers_oauth2_create`.
    pub fn operation_name(&self, sub: &SubResource, kind: OperationKind) -> String {
        format!(
            "{}_{}_{}",
            self.group,
            sub.segment.replace('/', "_"),
            kind.as_str()
        )
    }
}

/// Nests a type-specific configuration object under its request wrapper
/// key, matching the per-type request shape the backend expects.
pub(crate) fn wrapped_body(key: &str, config: &Value) -> Value {
    json!({ (key): config })
}

/// Resolves the discriminator and performs one operation against the
/// family's facet. The shared helper behind every by-type tool.
pub async fn call(
    facet: &ResourceFacet,
    table: &DispatchTable,
    discriminator: &str,
    kind: OperationKind,
    id: Option<&str>,
    config: Option<&Value>,
    query: &[(&str, String)],
) -> Result<Value, ToolError> {
    let sub = table.resolve(discriminator)?;
    log::debug!("Dispatching {}", table.operation_name(sub, kind));
    let value = match kind {
        OperationKind::List => facet.list_sub(sub.segment, query).await?,
        OperationKind::Get => facet.retrieve_sub(sub.segment, required_id(id)?).await?,
        OperationKind::Create => {
            let body = wrapped_body(sub.create_request_key, required_config(config)?);
            facet.create_sub(sub.segment, &body).await?
        }
        OperationKind::Update => {
            let body = wrapped_body(sub.update_request_key, required_config(config)?);
            facet.update_sub(sub.segment, required_id(id)?, &body).await?
        }
        OperationKind::Delete => facet.destroy_sub(sub.segment, required_id(id)?).await?,
    };
    Ok(value)
}

fn required_id(id: Option<&str>) -> Result<&str, ToolError> {
    id.ok_or(ToolError::MissingArgument("id"))
}

fn required_config(config: Option<&Value>) -> Result<&Value, ToolError> {
    config.ok_or(ToolError::MissingArgument("config"))
}
