//! Error types for the authentik MCP server.
//!
//! Errors are split by lifecycle: [`SetupError`] covers the one-time startup
//! sequence and aborts the process, [`ApiError`] covers calls against the
//! authentik API, and [`ToolError`] is the failure type every tool handler
//! returns into the execution shim.

use serde_json::Value;

/// Fatal errors during the one-time startup sequence.
///
/// Any of these aborts the process before a single tool is registered.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    /// A required environment variable is unset or blank.
    #[error("Missing required environment variable: {0}")]
    MissingEnv(&'static str),

    /// The configured access tier is not one of the supported values.
    #[error("Invalid access level '{value}', expected one of: {valid}")]
    InvalidAccessLevel {
        value: String,
        valid: &'static str,
    },

    /// A category allowlist entry is not in the closed category set.
    #[error("Unknown tool category '{value}', expected one of: {valid}")]
    UnknownCategory { value: String, valid: String },

    /// The configured base URL could not be parsed or uses an unsupported scheme.
    #[error("Invalid authentik URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },

    /// The HTTP client could not be constructed.
    #[error("Failed to construct HTTP client: {0}")]
    HttpClient(String),

    /// The startup connection check against the authentik API failed.
    #[error("Connection check against the authentik API failed: {0}")]
    ConnectionCheck(#[source] ApiError),
}

/// Failures from calls against the authentik API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    ///
    /// `body` holds the parsed JSON error body when the response carried one,
    /// typically a map of field name to message list.
    #[error("{status} {status_text}")]
    Http {
        status: u16,
        status_text: String,
        body: Option<Value>,
    },

    /// The request never produced a response (DNS, connect, timeout).
    #[error("Request failed: {message}")]
    Transport { message: String },

    /// A success response carried a body that is not valid JSON.
    #[error("Invalid JSON in response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            ApiError::Http {
                status: status.as_u16(),
                status_text: status
                    .canonical_reason()
                    .unwrap_or("Unknown Status")
                    .to_string(),
                body: None,
            }
        } else {
            ApiError::Transport {
                message: source_message(&err),
            }
        }
    }
}

/// Walks the source chain to the deepest cause, which for connect-level
/// failures is the message worth showing (reqwest's own Display only says
/// "error sending request").
pub(crate) fn source_message(err: &(dyn std::error::Error + 'static)) -> String {
    let mut current = err;
    while let Some(source) = current.source() {
        current = source;
    }
    let message = current.to_string();
    if message.is_empty() {
        "Unknown fetch error".to_string()
    } else {
        message
    }
}

/// Failures a tool handler can produce.
///
/// Every variant is caught at the execution shim and converted into an
/// error-flagged text result; nothing propagates across the protocol
/// boundary.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// A backend call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A required argument was absent from the call.
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    /// An argument was present but unusable.
    #[error("Invalid argument '{name}': {message}")]
    InvalidArgument {
        name: &'static str,
        message: String,
    },

    /// A by-type tool was called with a discriminator outside its table.
    ///
    /// Raised before any network call; the message enumerates the valid set
    /// and contains no secret.
    #[error("Unknown {family} type '{value}'. Valid types: {valid}")]
    UnknownKind {
        family: &'static str,
        value: String,
        valid: String,
    },

    /// A successful response could not be rendered for the agent.
    #[error("Failed to render response: {0}")]
    Render(String),
}
