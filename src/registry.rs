//! Tool descriptors, the visibility policy, and the execution shim.
//!
//! The registry is the single gate between the tool catalog and the
//! protocol server. Registration evaluates the visibility policy, derives
//! the protocol annotations, and wraps the handler so that no failure,
//! whether typed, opaque, or a panic, ever crosses the protocol boundary
//! as anything but a redacted, error-flagged text result.

use std::collections::HashMap;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::pin::Pin;
use std::sync::Arc;

use futures::FutureExt;
use log::{debug, warn};
use serde::Serialize;
use serde_json::{Value, json};

use crate::config::{AccessLevel, RuntimeConfig, ToolCategory};
use crate::error::ToolError;
use crate::redact::{Secrets, redact};

/// Boxed future returned by tool handlers.
pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<String, ToolError>> + Send>>;

/// Shared handler closure, typically bound to a backend client.
pub type ToolHandler = Arc<dyn Fn(Value) -> HandlerFuture + Send + Sync>;

/// Fixed message used when a failure cannot be rendered safely.
const OPAQUE_FAILURE: &str = "Tool execution failed";

/// Everything the catalog declares about one tool.
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub access_level: AccessLevel,
    pub category: ToolCategory,
    pub destructive: bool,
    pub input_schema: Option<Value>,
    pub handler: ToolHandler,
}

impl ToolDescriptor {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: ToolCategory,
        access_level: AccessLevel,
        handler: ToolHandler,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            access_level,
            category,
            destructive: false,
            input_schema: None,
            handler,
        }
    }

    /// Marks the tool as destructive for the protocol annotations.
    pub fn destructive(mut self) -> Self {
        self.destructive = true;
        self
    }

    pub fn with_input_schema(mut self, schema: Value) -> Self {
        self.input_schema = Some(schema);
        self
    }
}

/// Decides whether a tool is exposed at all under the given configuration.
///
/// Pure and total: the default posture is full exposure, restricted by two
/// independent opt-in filters (the safety tier and the category allowlist)
/// which must both pass.
pub fn should_expose(descriptor: &ToolDescriptor, config: &RuntimeConfig) -> bool {
    if descriptor.access_level == AccessLevel::Full
        && config.access_level == AccessLevel::ReadOnly
    {
        return false;
    }
    config.allows_category(descriptor.category)
}

/// Protocol-visible behavior hints.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolAnnotations {
    pub read_only_hint: bool,
    pub destructive_hint: bool,
}

/// A tool the protocol server will serve for the rest of the process.
pub struct RegisteredTool {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
    pub annotations: ToolAnnotations,
    handler: ToolHandler,
}

/// Uniform result envelope handed back to the protocol layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCallResult {
    pub text: String,
    pub is_error: bool,
}

impl ToolCallResult {
    /// Wire shape: a single text content item plus the error flag.
    pub fn to_value(&self) -> Value {
        json!({
            "content": [{"type": "text", "text": self.text}],
            "isError": self.is_error,
        })
    }
}

/// Holds every exposed tool for the process lifetime.
pub struct ToolRegistry {
    config: RuntimeConfig,
    secrets: Arc<Secrets>,
    tools: Vec<RegisteredTool>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new(config: RuntimeConfig, secrets: Secrets) -> Self {
        Self {
            config,
            secrets: Arc::new(secrets),
            tools: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Registers one tool, returning whether it was exposed.
    ///
    /// Suppressed tools leave no trace: they never appear in listings and
    /// their names resolve to nothing at call time.
    pub fn register(&mut self, descriptor: ToolDescriptor) -> bool {
        if !should_expose(&descriptor, &self.config) {
            debug!("Suppressing tool {}", descriptor.name);
            return false;
        }
        if self.index.contains_key(&descriptor.name) {
            warn!(
                "Tool {} already registered; keeping the first registration",
                descriptor.name
            );
            return false;
        }
        let annotations = ToolAnnotations {
            read_only_hint: descriptor.access_level == AccessLevel::ReadOnly,
            destructive_hint: descriptor.destructive,
        };
        let tool = RegisteredTool {
            name: descriptor.name,
            description: descriptor.description,
            input_schema: descriptor
                .input_schema
                .unwrap_or_else(|| json!({"type": "object", "properties": {}})),
            annotations,
            handler: descriptor.handler,
        };
        self.index.insert(tool.name.clone(), self.tools.len());
        self.tools.push(tool);
        true
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Tool definitions in registration order, as served by `tools/list`.
    pub fn tool_listing(&self) -> Vec<Value> {
        self.tools
            .iter()
            .map(|tool| {
                json!({
                    "name": tool.name,
                    "description": tool.description,
                    "inputSchema": tool.input_schema,
                    "annotations": tool.annotations,
                })
            })
            .collect()
    }

    /// Runs a registered tool through the execution shim.
    ///
    /// Returns `None` when no tool with that name is registered. Every
    /// failure path (handler error, handler panic, or a panic while
    /// redacting) degrades to an error-flagged text result.
    pub async fn call(&self, name: &str, arguments: Value) -> Option<ToolCallResult> {
        let tool = self.index.get(name).map(|&slot| &self.tools[slot])?;
        debug!("Executing tool {name}");
        let outcome = AssertUnwindSafe((tool.handler)(arguments)).catch_unwind().await;
        Some(match outcome {
            Ok(Ok(text)) => ToolCallResult {
                text,
                is_error: false,
            },
            Ok(Err(error)) => {
                let message = std::panic::catch_unwind(AssertUnwindSafe(|| {
                    redact(&error, &self.secrets)
                }))
                .unwrap_or_else(|_| OPAQUE_FAILURE.to_string());
                ToolCallResult {
                    text: format!("Error: {message}"),
                    is_error: true,
                }
            }
            Err(_) => ToolCallResult {
                text: format!("Error: {OPAQUE_FAILURE}"),
                is_error: true,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn noop_handler() -> ToolHandler {
        Arc::new(|_args| Box::pin(async { Ok("ok".to_string()) }))
    }

    fn descriptor(access_level: AccessLevel, category: ToolCategory) -> ToolDescriptor {
        ToolDescriptor::new("test_tool", "A test tool", category, access_level, noop_handler())
    }

    fn config(
        access_level: AccessLevel,
        categories: Option<&[ToolCategory]>,
    ) -> RuntimeConfig {
        RuntimeConfig {
            access_level,
            categories: categories.map(|list| list.iter().copied().collect::<HashSet<_>>()),
        }
    }

    fn registry(runtime: RuntimeConfig) -> ToolRegistry {
        ToolRegistry::new(
            runtime,
            Secrets::new("ak-secret-token-123", "https://auth.example.com"),
        )
    }

    #[test]
    fn full_tool_is_hidden_under_read_only_tier() {
        let tool = descriptor(AccessLevel::Full, ToolCategory::Core);
        assert!(!should_expose(&tool, &config(AccessLevel::ReadOnly, None)));
    }

    #[test]
    fn category_outside_allowlist_is_hidden() {
        let tool = descriptor(AccessLevel::ReadOnly, ToolCategory::Flows);
        let runtime = config(
            AccessLevel::Full,
            Some(&[ToolCategory::Core, ToolCategory::Admin]),
        );
        assert!(!should_expose(&tool, &runtime));
    }

    #[test]
    fn unrestricted_config_exposes_everything() {
        for category in ToolCategory::ALL {
            let tool = descriptor(AccessLevel::Full, category);
            assert!(should_expose(&tool, &config(AccessLevel::Full, None)));
        }
    }

    fn any_access_level() -> impl Strategy<Value = AccessLevel> {
        prop_oneof![Just(AccessLevel::ReadOnly), Just(AccessLevel::Full)]
    }

    fn any_category() -> impl Strategy<Value = ToolCategory> {
        prop::sample::select(ToolCategory::ALL.to_vec())
    }

    fn any_allowlist() -> impl Strategy<Value = Option<Vec<ToolCategory>>> {
        prop::option::of(prop::collection::vec(any_category(), 0..4))
    }

    proptest! {
        /// A tool visible under read-only must stay visible under full.
        #[test]
        fn tier_is_monotonic(
            tool_level in any_access_level(),
            category in any_category(),
            allowlist in any_allowlist(),
        ) {
            let tool = descriptor(tool_level, category);
            let read_only = config(AccessLevel::ReadOnly, allowlist.as_deref());
            let full = config(AccessLevel::Full, allowlist.as_deref());
            if should_expose(&tool, &read_only) {
                prop_assert!(should_expose(&tool, &full));
            }
        }

        /// The category gate's outcome does not depend on the tier.
        #[test]
        fn category_gate_is_independent_of_tier(
            category in any_category(),
            allowlist in any_allowlist(),
        ) {
            let tool = descriptor(AccessLevel::ReadOnly, category);
            let read_only = config(AccessLevel::ReadOnly, allowlist.as_deref());
            let full = config(AccessLevel::Full, allowlist.as_deref());
            prop_assert_eq!(
                should_expose(&tool, &read_only),
                should_expose(&tool, &full)
            );
        }
    }

    #[test]
    fn suppressed_tool_is_absent_from_listing_and_calls() {
        let mut registry = registry(config(AccessLevel::ReadOnly, None));
        let registered = registry.register(descriptor(AccessLevel::Full, ToolCategory::Core));
        assert!(!registered);
        assert!(registry.is_empty());
        assert!(!registry.contains("test_tool"));
        assert!(registry.tool_listing().is_empty());
    }

    #[test]
    fn registration_derives_annotations() {
        let mut registry = registry(RuntimeConfig::permissive());
        let tool = ToolDescriptor::new(
            "authentik_delete_user",
            "Delete a user",
            ToolCategory::Core,
            AccessLevel::Full,
            noop_handler(),
        )
        .destructive();
        assert!(registry.register(tool));

        let listing = registry.tool_listing();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0]["annotations"]["readOnlyHint"], false);
        assert_eq!(listing[0]["annotations"]["destructiveHint"], true);
        // Tools without a declared schema still serve an object schema.
        assert_eq!(listing[0]["inputSchema"]["type"], "object");
    }

    #[test]
    fn duplicate_names_keep_the_first_registration() {
        let mut registry = registry(RuntimeConfig::permissive());
        assert!(registry.register(descriptor(AccessLevel::ReadOnly, ToolCategory::Core)));
        assert!(!registry.register(descriptor(AccessLevel::ReadOnly, ToolCategory::Core)));
        assert_eq!(registry.len(), 1);
    }

    #[tokio::test]
    async fn shim_passes_success_text_through() {
        let mut registry = registry(RuntimeConfig::permissive());
        registry.register(descriptor(AccessLevel::ReadOnly, ToolCategory::Core));

        let result = registry.call("test_tool", json!({})).await.unwrap();
        assert_eq!(result.text, "ok");
        assert!(!result.is_error);
    }

    #[tokio::test]
    async fn shim_converts_every_failure_shape_to_error_results() {
        let failures: Vec<(&str, ToolHandler)> = vec![
            (
                "structured",
                Arc::new(|_| {
                    Box::pin(async {
                        Err(ToolError::Api(ApiError::Http {
                            status: 400,
                            status_text: "Bad Request".to_string(),
                            body: Some(json!({"name": ["This field is required."]})),
                        }))
                    })
                }),
            ),
            (
                "transport",
                Arc::new(|_| {
                    Box::pin(async {
                        Err(ToolError::Api(ApiError::Transport {
                            message: "connection refused".to_string(),
                        }))
                    })
                }),
            ),
            (
                "generic",
                Arc::new(|_| Box::pin(async { Err(ToolError::MissingArgument("user_id")) })),
            ),
        ];

        let mut registry = registry(RuntimeConfig::permissive());
        for (name, handler) in failures {
            registry.register(ToolDescriptor::new(
                name,
                "failing tool",
                ToolCategory::Core,
                AccessLevel::ReadOnly,
                handler,
            ));
        }

        for name in ["structured", "transport", "generic"] {
            let result = registry.call(name, json!({})).await.unwrap();
            assert!(result.is_error, "{name} should be an error result");
            assert!(
                result.text.starts_with("Error: "),
                "{name} missing prefix: {}",
                result.text
            );
        }
    }

    #[tokio::test]
    async fn shim_redacts_secrets_in_failures() {
        let mut registry = registry(RuntimeConfig::permissive());
        registry.register(ToolDescriptor::new(
            "leaky",
            "leaky tool",
            ToolCategory::Core,
            AccessLevel::ReadOnly,
            Arc::new(|_| {
                Box::pin(async {
                    Err(ToolError::Api(ApiError::Transport {
                        message: "sent ak-secret-token-123 to https://auth.example.com".to_string(),
                    }))
                })
            }),
        ));

        let result = registry.call("leaky", json!({})).await.unwrap();
        assert!(result.is_error);
        assert!(!result.text.contains("ak-secret-token-123"));
        assert!(!result.text.contains("auth.example.com"));
    }

    #[tokio::test]
    async fn shim_contains_panicking_handlers() {
        let mut registry = registry(RuntimeConfig::permissive());
        registry.register(ToolDescriptor::new(
            "panicky",
            "panicking tool",
            ToolCategory::Core,
            AccessLevel::ReadOnly,
            Arc::new(|_| Box::pin(async { panic!("ak-secret-token-123 in panic payload") })),
        ));

        let result = registry.call("panicky", json!({})).await.unwrap();
        assert!(result.is_error);
        assert_eq!(result.text, "Error: Tool execution failed");
    }

    #[tokio::test]
    async fn unknown_tool_yields_none() {
        let registry = registry(RuntimeConfig::permissive());
        assert!(registry.call("missing", json!({})).await.is_none());
    }

    #[test]
    fn call_result_wire_shape() {
        let result = ToolCallResult {
            text: "hello".to_string(),
            is_error: false,
        };
        let value = result.to_value();
        assert_eq!(value["content"][0]["type"], "text");
        assert_eq!(value["content"][0]["text"], "hello");
        assert_eq!(value["isError"], false);
    }
}
