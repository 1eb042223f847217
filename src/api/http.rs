//! Shared HTTP core behind every facet.

use log::debug;
use reqwest::{Client, Method, Response, StatusCode};
use serde_json::Value;

use crate::error::ApiError;

const API_PREFIX: &str = "api/v3";

/// One bearer-authenticated connection to the authentik API.
///
/// Immutable after construction; shared by every facet through an `Arc`.
pub(crate) struct HttpCore {
    http: Client,
    base: String,
    token: String,
}

// The token must not leak through Debug output.
impl std::fmt::Debug for HttpCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCore")
            .field("base", &self.base)
            .field("token", &"[redacted]")
            .finish_non_exhaustive()
    }
}

impl HttpCore {
    pub(crate) fn new(http: Client, base: String, token: String) -> Self {
        Self { http, base, token }
    }

    pub(crate) fn base(&self) -> &str {
        &self.base
    }

    /// Full URL for an API path such as `core/users/42/`.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}/{}", self.base, API_PREFIX, path)
    }

    /// Performs one JSON request. Empty and 204 responses become
    /// `Value::Null`.
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let response = self.send(method, path, query, body).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(read_http_error(status, response).await);
        }
        if status == StatusCode::NO_CONTENT {
            return Ok(Value::Null);
        }
        let text = response.text().await.map_err(ApiError::from)?;
        if text.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// Performs one request whose success payload is raw text rather than
    /// JSON (export-style operations).
    pub(crate) async fn request_text(
        &self,
        method: Method,
        path: &str,
    ) -> Result<String, ApiError> {
        let response = self.send(method, path, &[], None).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(read_http_error(status, response).await);
        }
        response.text().await.map_err(ApiError::from)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<Response, ApiError> {
        let url = self.endpoint(path);
        debug!("{method} {url}");
        let mut request = self.http.request(method, url).bearer_auth(&self.token);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        request.send().await.map_err(ApiError::from)
    }
}

/// Reads a non-success response into [`ApiError::Http`], keeping the parsed
/// JSON body when there is one so the redactor can render field-level
/// detail.
async fn read_http_error(status: StatusCode, response: Response) -> ApiError {
    let body = response
        .text()
        .await
        .ok()
        .filter(|text| !text.is_empty())
        .and_then(|text| serde_json::from_str(&text).ok());
    ApiError::Http {
        status: status.as_u16(),
        status_text: status
            .canonical_reason()
            .unwrap_or("Unknown Status")
            .to_string(),
        body,
    }
}
