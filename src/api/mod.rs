//! HTTP client for the authentik admin API.
//!
//! [`AuthentikClient`] owns one `reqwest::Client` and hands out one
//! [`ResourceFacet`] per resource family. Facets are constructed at most
//! once, on first use, and live for the process lifetime; concurrent tool
//! invocations share them freely because neither the client nor a facet
//! holds mutable state.

mod facets;
mod http;


pub(crate) use self::http::HttpCore;
pub use self::facets::ResourceFacet;

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use log::debug;
use reqwest::Method;
use serde_json::Value;

use crate::config::ServerSettings;
use crate::error::{ApiError, SetupError};

const USER_AGENT: &str = concat!("authentik-mcp-server/", env!("CARGO_PKG_VERSION"));
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Client facade over the authentik admin API.
pub struct AuthentikClient {
    core: Arc<HttpCore>,
    facets: Facets,
}

/// Lazily initialized facet slots, one per resource family.
#[derive(Default)]
struct Facets {
    users: OnceLock<ResourceFacet>,
    groups: OnceLock<ResourceFacet>,
    applications: OnceLock<ResourceFacet>,
    tokens: OnceLock<ResourceFacet>,
    flows: OnceLock<ResourceFacet>,
    events: OnceLock<ResourceFacet>,
    outposts: OnceLock<ResourceFacet>,
    certificates: OnceLock<ResourceFacet>,
    user_permissions: OnceLock<ResourceFacet>,
    stages: OnceLock<ResourceFacet>,
    providers: OnceLock<ResourceFacet>,
    policies: OnceLock<ResourceFacet>,
    sources: OnceLock<ResourceFacet>,
    property_mappings: OnceLock<ResourceFacet>,
}

impl AuthentikClient {
    /// Builds the client from validated settings.
    ///
    /// No network traffic happens here; the first request is
    /// [`check_connection`](Self::check_connection) during startup.
    pub fn new(settings: &ServerSettings) -> Result<Self, SetupError> {
        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| SetupError::HttpClient(err.to_string()))?;

        let base = settings.base_url.as_str().trim_end_matches('/').to_string();
        debug!("API client configured for {base}");

        Ok(Self {
            core: Arc::new(HttpCore::new(http, base, settings.token.clone())),
            facets: Facets::default(),
        })
    }

    /// Base URL without trailing slash, as used in every composed request.
    pub fn base(&self) -> &str {
        self.core.base()
    }

    /// Proves the configured URL and token work before any tool is exposed.
    pub async fn check_connection(&self) -> Result<Value, ApiError> {
        self.version().await
    }

    /// `GET /api/v3/admin/version/`
    pub async fn version(&self) -> Result<Value, ApiError> {
        self.core.request(Method::GET, "admin/version/", &[], None).await
    }

    /// `GET /api/v3/admin/system/`
    pub async fn system_info(&self) -> Result<Value, ApiError> {
        self.core.request(Method::GET, "admin/system/", &[], None).await
    }

    fn facet(slot: &OnceLock<ResourceFacet>, core: &Arc<HttpCore>, base_path: &'static str) -> ResourceFacet {
        slot.get_or_init(|| ResourceFacet::new(Arc::clone(core), base_path))
            .clone()
    }

    pub fn users(&self) -> ResourceFacet {
        Self::facet(&self.facets.users, &self.core, "core/users")
    }

    pub fn groups(&self) -> ResourceFacet {
        Self::facet(&self.facets.groups, &self.core, "core/groups")
    }

    pub fn applications(&self) -> ResourceFacet {
        Self::facet(&self.facets.applications, &self.core, "core/applications")
    }

    pub fn tokens(&self) -> ResourceFacet {
        Self::facet(&self.facets.tokens, &self.core, "core/tokens")
    }

    pub fn flows(&self) -> ResourceFacet {
        Self::facet(&self.facets.flows, &self.core, "flows/instances")
    }

    pub fn events(&self) -> ResourceFacet {
        Self::facet(&self.facets.events, &self.core, "events/events")
    }

    pub fn outposts(&self) -> ResourceFacet {
        Self::facet(&self.facets.outposts, &self.core, "outposts/instances")
    }

    pub fn certificates(&self) -> ResourceFacet {
        Self::facet(&self.facets.certificates, &self.core, "crypto/certificatekeypairs")
    }

    pub fn user_permissions(&self) -> ResourceFacet {
        Self::facet(
            &self.facets.user_permissions,
            &self.core,
            "rbac/permissions/assigned_by_users",
        )
    }

    pub fn stages(&self) -> ResourceFacet {
        Self::facet(&self.facets.stages, &self.core, "stages")
    }

    pub fn providers(&self) -> ResourceFacet {
        Self::facet(&self.facets.providers, &self.core, "providers")
    }

    pub fn policies(&self) -> ResourceFacet {
        Self::facet(&self.facets.policies, &self.core, "policies")
    }

    pub fn sources(&self) -> ResourceFacet {
        Self::facet(&self.facets.sources, &self.core, "sources")
    }

    pub fn property_mappings(&self) -> ResourceFacet {
        Self::facet(&self.facets.property_mappings, &self.core, "propertymappings")
    }
}
