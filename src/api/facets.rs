//! Per-resource-family slices of the admin API.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use super::HttpCore;
use crate::error::ApiError;

/// One resource family's view of the API, e.g. `core/users` or `providers`.
///
/// Cheap to clone; every clone shares the same HTTP core.
#[derive(Debug, Clone)]
pub struct ResourceFacet {
    core: Arc<HttpCore>,
    base_path: &'static str,
}

impl ResourceFacet {
    pub(crate) fn new(core: Arc<HttpCore>, base_path: &'static str) -> Self {
        Self { core, base_path }
    }

    pub fn base_path(&self) -> &'static str {
        self.base_path
    }

    /// `GET {base}/` with query filters.
    pub async fn list(&self, query: &[(&str, String)]) -> Result<Value, ApiError> {
        self.core
            .request(Method::GET, &collection_path(self.base_path, None), query, None)
            .await
    }

    /// `GET {base}/{id}/`
    pub async fn retrieve(&self, id: &str) -> Result<Value, ApiError> {
        self.core
            .request(Method::GET, &item_path(self.base_path, None, id), &[], None)
            .await
    }

    /// `POST {base}/`
    pub async fn create(&self, body: &Value) -> Result<Value, ApiError> {
        self.core
            .request(Method::POST, &collection_path(self.base_path, None), &[], Some(body))
            .await
    }

    /// `PATCH {base}/{id}/`
    pub async fn partial_update(&self, id: &str, body: &Value) -> Result<Value, ApiError> {
        self.core
            .request(Method::PATCH, &item_path(self.base_path, None, id), &[], Some(body))
            .await
    }

    /// `DELETE {base}/{id}/`
    pub async fn destroy(&self, id: &str) -> Result<Value, ApiError> {
        self.core
            .request(Method::DELETE, &item_path(self.base_path, None, id), &[], None)
            .await
    }

    /// `GET {base}/{segment}/` for a by-type sub-resource.
    pub async fn list_sub(
        &self,
        segment: &str,
        query: &[(&str, String)],
    ) -> Result<Value, ApiError> {
        self.core
            .request(
                Method::GET,
                &collection_path(self.base_path, Some(segment)),
                query,
                None,
            )
            .await
    }

    /// `GET {base}/{segment}/{id}/`
    pub async fn retrieve_sub(&self, segment: &str, id: &str) -> Result<Value, ApiError> {
        self.core
            .request(
                Method::GET,
                &item_path(self.base_path, Some(segment), id),
                &[],
                None,
            )
            .await
    }

    /// `POST {base}/{segment}/`
    pub async fn create_sub(&self, segment: &str, body: &Value) -> Result<Value, ApiError> {
        self.core
            .request(
                Method::POST,
                &collection_path(self.base_path, Some(segment)),
                &[],
                Some(body),
            )
            .await
    }

    /// `PATCH {base}/{segment}/{id}/`
    pub async fn update_sub(
        &self,
        segment: &str,
        id: &str,
        body: &Value,
    ) -> Result<Value, ApiError> {
        self.core
            .request(
                Method::PATCH,
                &item_path(self.base_path, Some(segment), id),
                &[],
                Some(body),
            )
            .await
    }

    /// `DELETE {base}/{segment}/{id}/`
    pub async fn destroy_sub(&self, segment: &str, id: &str) -> Result<Value, ApiError> {
        self.core
            .request(
                Method::DELETE,
                &item_path(self.base_path, Some(segment), id),
                &[],
                None,
            )
            .await
    }

    /// `POST {base}/{id}/{action}/` for item-level actions such as
    /// `set_password` or `assign`.
    pub async fn invoke(
        &self,
        id: &str,
        action: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        self.core
            .request(Method::POST, &action_path(self.base_path, id, action), &[], body)
            .await
    }

    /// `GET {base}/{id}/{action}/` for item-level lookups such as
    /// `view_key`.
    pub async fn fetch(&self, id: &str, action: &str) -> Result<Value, ApiError> {
        self.core
            .request(Method::GET, &action_path(self.base_path, id, action), &[], None)
            .await
    }

    /// `POST {base}/{action}/` for collection-level actions such as
    /// certificate generation.
    pub async fn invoke_collection(
        &self,
        action: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        self.core
            .request(
                Method::POST,
                &collection_path(self.base_path, Some(action)),
                &[],
                body,
            )
            .await
    }

    /// `GET {base}/{id}/{action}/` returning the raw text payload.
    pub async fn export_text(&self, id: &str, action: &str) -> Result<String, ApiError> {
        self.core
            .request_text(Method::GET, &action_path(self.base_path, id, action))
            .await
    }
}

pub(crate) fn collection_path(base: &str, segment: Option<&str>) -> String {
    match segment {
        Some(segment) => format!("{base}/{segment}/"),
        None => format!("{base}/"),
    }
}

pub(crate) fn item_path(base: &str, segment: Option<&str>, id: &str) -> String {
    match segment {
        Some(segment) => format!("{base}/{segment}/{id}/"),
        None => format!("{base}/{id}/"),
    }
}

pub(crate) fn action_path(base: &str, id: &str, action: &str) -> String {
    format!("{base}/{id}/{action}/")
}
