//! Runtime configuration for the MCP server.
//!
//! Everything here is constructed once from the environment at startup and
//! immutable for the process lifetime. Invalid values abort startup with a
//! descriptive [`SetupError`]; in particular an unrecognized access tier
//! never silently falls back to a default.

use std::collections::HashSet;
use std::env;

use url::Url;

use crate::error::SetupError;

/// Base URL of the authentik instance, e.g. `https://auth.example.com`.
pub const ENV_URL: &str = "AUTHENTIK_URL";
/// API token used for every backend call.
pub const ENV_TOKEN: &str = "AUTHENTIK_TOKEN";
/// Access tier: `read-only` or `full`. Defaults to `full` when unset.
pub const ENV_ACCESS: &str = "AUTHENTIK_MCP_ACCESS";
/// Optional comma-separated category allowlist.
pub const ENV_CATEGORIES: &str = "AUTHENTIK_MCP_CATEGORIES";

/// Safety tier controlling whether mutating tools are exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessLevel {
    /// Only tools that cannot change backend state.
    ReadOnly,
    /// The complete tool surface, mutations included.
    Full,
}

impl AccessLevel {
    /// Parses the wire form used by [`ENV_ACCESS`] and by tool metadata.
    pub fn parse(value: &str) -> Result<Self, SetupError> {
        match value {
            "read-only" => Ok(Self::ReadOnly),
            "full" => Ok(Self::Full),
            other => Err(SetupError::InvalidAccessLevel {
                value: other.to_string(),
                valid: "read-only, full",
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReadOnly => "read-only",
            Self::Full => "full",
        }
    }
}

/// Topical tag grouping tools for opt-in scoping.
///
/// The set is closed: allowlist entries outside it fail startup rather than
/// silently matching nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolCategory {
    /// Users, groups, applications, tokens.
    Core,
    Flows,
    Stages,
    Providers,
    Policies,
    Sources,
    PropertyMappings,
    Events,
    /// Version and system introspection, outposts, certificates, permissions.
    Admin,
}

impl ToolCategory {
    /// Every category, in the order used for error messages.
    pub const ALL: [ToolCategory; 9] = [
        Self::Core,
        Self::Flows,
        Self::Stages,
        Self::Providers,
        Self::Policies,
        Self::Sources,
        Self::PropertyMappings,
        Self::Events,
        Self::Admin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Flows => "flows",
            Self::Stages => "stages",
            Self::Providers => "providers",
            Self::Policies => "policies",
            Self::Sources => "sources",
            Self::PropertyMappings => "property-mappings",
            Self::Events => "events",
            Self::Admin => "admin",
        }
    }

    /// Parses one allowlist entry.
    pub fn parse(value: &str) -> Result<Self, SetupError> {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| SetupError::UnknownCategory {
                value: value.to_string(),
                valid: Self::ALL.map(|category| category.as_str()).join(", "),
            })
    }
}

/// The two orthogonal exposure filters, fixed for the process lifetime.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub access_level: AccessLevel,
    /// `None` exposes every category.
    pub categories: Option<HashSet<ToolCategory>>,
}

impl RuntimeConfig {
    /// An unrestricted configuration: full tier, all categories.
    pub fn permissive() -> Self {
        Self {
            access_level: AccessLevel::Full,
            categories: None,
        }
    }

    pub fn allows_category(&self, category: ToolCategory) -> bool {
        self.categories
            .as_ref()
            .map_or(true, |allowed| allowed.contains(&category))
    }
}

/// Complete startup configuration: connection details plus exposure filters.
#[derive(Clone)]
pub struct ServerSettings {
    pub base_url: Url,
    pub token: String,
    pub runtime: RuntimeConfig,
}

// The token must not leak through Debug output.
impl std::fmt::Debug for ServerSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerSettings")
            .field("base_url", &self.base_url.as_str())
            .field("token", &"[redacted]")
            .field("runtime", &self.runtime)
            .finish()
    }
}

impl ServerSettings {
    pub fn new(base_url: Url, token: impl Into<String>, runtime: RuntimeConfig) -> Self {
        Self {
            base_url,
            token: token.into(),
            runtime,
        }
    }

    /// Reads the full configuration from the environment.
    ///
    /// # Errors
    ///
    /// Fails when a required variable is missing, the URL does not parse as
    /// an absolute http(s) URL, the access tier is not `read-only`/`full`,
    /// or a category allowlist entry falls outside the closed set.
    pub fn from_env() -> Result<Self, SetupError> {
        let raw_url = required(ENV_URL)?;
        let token = required(ENV_TOKEN)?;
        let base_url = parse_base_url(&raw_url)?;

        let access_level = match non_empty(ENV_ACCESS) {
            Some(value) => AccessLevel::parse(&value)?,
            None => AccessLevel::Full,
        };
        let categories = match non_empty(ENV_CATEGORIES) {
            Some(value) => parse_allowlist(&value)?,
            None => None,
        };

        Ok(Self {
            base_url,
            token,
            runtime: RuntimeConfig {
                access_level,
                categories,
            },
        })
    }
}

fn required(name: &'static str) -> Result<String, SetupError> {
    non_empty(name).ok_or(SetupError::MissingEnv(name))
}

fn non_empty(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Validates the base URL and normalizes away trailing slashes so path
/// composition and redaction both work from one canonical form.
pub(crate) fn parse_base_url(raw: &str) -> Result<Url, SetupError> {
    let mut url = Url::parse(raw).map_err(|err| SetupError::InvalidBaseUrl {
        url: raw.to_string(),
        message: err.to_string(),
    })?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(SetupError::InvalidBaseUrl {
            url: raw.to_string(),
            message: format!("unsupported scheme '{}'", url.scheme()),
        });
    }
    if url.cannot_be_a_base() {
        return Err(SetupError::InvalidBaseUrl {
            url: raw.to_string(),
            message: "not a base URL".to_string(),
        });
    }
    let trimmed = url.path().trim_end_matches('/').to_string();
    url.set_path(&trimmed);
    Ok(url)
}

/// Parses a comma-separated allowlist. An allowlist with no usable entries
/// is treated as absent rather than as "expose nothing".
pub(crate) fn parse_allowlist(raw: &str) -> Result<Option<HashSet<ToolCategory>>, SetupError> {
    let mut allowed = HashSet::new();
    for entry in raw.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        allowed.insert(ToolCategory::parse(entry)?);
    }
    if allowed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(allowed))
    }
}
