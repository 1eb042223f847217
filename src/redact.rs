//! Secret scrubbing for anything a tool surfaces to the agent.
//!
//! Every failure leaving the execution shim is rendered here. The renderer
//! classifies the failure (structured backend error, transport failure,
//! generic), then applies one uniform scrub pass over the resulting text:
//! the configured token, the configured base URL, and anything shaped like
//! an authorization header or bearer token. The whole path is total: no
//! branch can panic, and a scrub step that cannot run is skipped rather
//! than propagated.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::error::{ApiError, ToolError};

/// Replacement for the configured token and for token-shaped substrings.
pub const TOKEN_MARKER: &str = "[redacted]";
/// Replacement for the configured base URL.
pub const URL_MARKER: &str = "[authentik]";

/// The values that must never appear in agent-visible output.
#[derive(Clone)]
pub struct Secrets {
    token: String,
    base_url: String,
}

impl std::fmt::Debug for Secrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secrets")
            .field("token", &"[redacted]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Secrets {
    pub fn new(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: base_url.into(),
        }
    }
}

/// Renders a tool failure as a safe display string.
pub fn redact(error: &ToolError, secrets: &Secrets) -> String {
    scrub(&render(error), secrets)
}

fn render(error: &ToolError) -> String {
    match error {
        ToolError::Api(api) => render_api(api),
        other => other.to_string(),
    }
}

fn render_api(error: &ApiError) -> String {
    match error {
        ApiError::Http {
            status,
            status_text,
            body,
        } => match body.as_ref().and_then(render_error_body) {
            Some(fields) => format!("{status} {status_text}: {fields}"),
            None => format!("{status} {status_text}"),
        },
        ApiError::Transport { message } => {
            if message.is_empty() {
                "Unknown fetch error".to_string()
            } else {
                message.clone()
            }
        }
        other => other.to_string(),
    }
}

/// Renders a `{"field": ["msg", ...]}` style error body as
/// `field: msg1, msg2; other: msg`. Non-object bodies yield `None` and the
/// caller falls back to the bare status line.
fn render_error_body(body: &Value) -> Option<String> {
    let map = body.as_object()?;
    if map.is_empty() {
        return None;
    }
    let mut parts = Vec::with_capacity(map.len());
    for (field, value) in map {
        let rendered = match value {
            Value::Array(items) => items
                .iter()
                .map(value_text)
                .collect::<Vec<_>>()
                .join(", "),
            other => value_text(other),
        };
        parts.push(format!("{field}: {rendered}"));
    }
    Some(parts.join("; "))
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// The uniform scrub pass, in order: token literal, base URL literal, then
/// authorization/bearer patterns. The pattern step catches valid tokens the
/// backend may echo that differ from the configured one.
pub fn scrub(message: &str, secrets: &Secrets) -> String {
    let mut output = message.to_string();
    if !secrets.token.is_empty() {
        output = output.replace(&secrets.token, TOKEN_MARKER);
    }
    if !secrets.base_url.is_empty() {
        output = output.replace(&secrets.base_url, URL_MARKER);
    }
    if let Some(pattern) = credential_pattern() {
        output = pattern.replace_all(&output, "${1}[redacted]").into_owned();
    }
    output
}

/// Matches `Authorization: <scheme> <value>` headers and bare
/// `Bearer <value>` forms, case-insensitively. The value class includes the
/// brackets of [`TOKEN_MARKER`] so already-scrubbed text is a fixed point.
fn credential_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| {
            Regex::new(
                r"(?i)\b(authorization\s*[:=]\s*(?:bearer\s+|basic\s+|token\s+)?|bearer\s+)[a-z0-9._~+/=\[\]-]+",
            )
            .ok()
        })
        .as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn secrets() -> Secrets {
        Secrets::new("ak-secret-token-123", "https://auth.example.com")
    }

    fn http_error(status: u16, status_text: &str, body: Option<Value>) -> ToolError {
        ToolError::Api(ApiError::Http {
            status,
            status_text: status_text.to_string(),
            body,
        })
    }

    #[test]
    fn structured_body_renders_field_messages() {
        let error = http_error(
            400,
            "Bad Request",
            Some(json!({"name": ["This field is required."]})),
        );
        assert_eq!(
            redact(&error, &secrets()),
            "400 Bad Request: name: This field is required."
        );
    }

    #[test]
    fn structured_body_joins_lists_and_fields() {
        let error = http_error(
            400,
            "Bad Request",
            Some(json!({
                "name": ["This field is required.", "Must be unique."],
                "slug": ["Invalid slug."]
            })),
        );
        assert_eq!(
            redact(&error, &secrets()),
            "400 Bad Request: name: This field is required., Must be unique.; slug: Invalid slug."
        );
    }

    #[test]
    fn unparseable_body_falls_back_to_status_line() {
        assert_eq!(redact(&http_error(502, "Bad Gateway", None), &secrets()), "502 Bad Gateway");
        let non_object = http_error(500, "Internal Server Error", Some(json!("boom")));
        assert_eq!(redact(&non_object, &secrets()), "500 Internal Server Error");
    }

    #[test]
    fn transport_error_uses_cause_or_generic() {
        let error = ToolError::Api(ApiError::Transport {
            message: "dns error: failed to lookup address".to_string(),
        });
        assert_eq!(redact(&error, &secrets()), "dns error: failed to lookup address");

        let empty = ToolError::Api(ApiError::Transport {
            message: String::new(),
        });
        assert_eq!(redact(&empty, &secrets()), "Unknown fetch error");
    }

    #[test]
    fn token_occurrences_are_replaced_everywhere() {
        let error = http_error(
            401,
            "Unauthorized",
            Some(json!({"detail": ["token ak-secret-token-123 rejected, retry with ak-secret-token-123"]})),
        );
        let output = redact(&error, &secrets());
        assert!(!output.contains("ak-secret-token-123"), "leaked: {output}");
        assert!(output.contains(TOKEN_MARKER));
    }

    #[test]
    fn base_url_is_replaced_with_placeholder() {
        let error = ToolError::Api(ApiError::Transport {
            message: "connect to https://auth.example.com/api/v3/ refused".to_string(),
        });
        let output = redact(&error, &secrets());
        assert!(!output.contains("auth.example.com"), "leaked: {output}");
        assert!(output.contains(URL_MARKER));
    }

    #[test]
    fn unrelated_bearer_patterns_are_redacted_independently() {
        // A rotated token the backend echoes is not the configured secret but
        // must still disappear.
        let error = http_error(
            400,
            "Bad Request",
            Some(json!({
                "detail": ["ak-secret-token-123 invalid; header was Authorization: Bearer xyz-other-token"]
            })),
        );
        let output = redact(&error, &secrets());
        assert!(!output.contains("ak-secret-token-123"));
        assert!(!output.contains("xyz-other-token"), "leaked: {output}");
    }

    #[test]
    fn basic_credentials_are_redacted() {
        let error = ToolError::Api(ApiError::Transport {
            message: "authorization: Basic dXNlcjpwYXNz rejected".to_string(),
        });
        let output = redact(&error, &secrets());
        assert!(!output.contains("dXNlcjpwYXNz"), "leaked: {output}");
    }

    #[test]
    fn invalid_discriminator_errors_pass_through_unchanged() {
        let error = ToolError::UnknownKind {
            family: "provider",
            value: "bogus_type".to_string(),
            valid: "oauth2, saml, proxy".to_string(),
        };
        assert_eq!(redact(&error, &secrets()), error.to_string());
    }

    #[test]
    fn scrub_is_idempotent_on_scrubbed_output() {
        let samples = [
            "Authorization: Bearer abc123 and again Bearer def456",
            "token ak-secret-token-123 at https://auth.example.com/if/admin",
            "plain message without secrets",
        ];
        for sample in samples {
            let once = scrub(sample, &secrets());
            assert_eq!(scrub(&once, &secrets()), once, "not a fixed point: {sample}");
        }
    }

    proptest! {
        #[test]
        fn redaction_is_complete_and_idempotent(
            token in "[A-Za-z0-9]{12,32}",
            prefix in "[a-zA-Z ,.:;]{0,40}",
            middle in "[a-zA-Z ,.:;]{0,40}",
            suffix in "[a-zA-Z ,.:;]{0,40}",
        ) {
            // Tokens that collide with the markers would make the fixed-point
            // check vacuous.
            prop_assume!(!TOKEN_MARKER.contains(token.as_str()) && !URL_MARKER.contains(token.as_str()));
            let secrets = Secrets::new(token.clone(), "https://auth.example.com");
            let message = format!("{prefix}{token}{middle}{token}{suffix}");

            let once = scrub(&message, &secrets);
            prop_assert!(!once.contains(&token));
            prop_assert_eq!(scrub(&once, &secrets), once);
        }
    }
}
