//! Argument extraction shared by the tool handlers.
//!
//! The protocol layer has already validated arguments against the tool's
//! declared input schema; these helpers turn the loosely typed JSON map
//! into what a handler needs and produce descriptive [`ToolError`]s when a
//! caller strays outside the schema anyway.

use serde_json::Value;

use crate::error::ToolError;

pub(crate) fn require_str(args: &Value, name: &'static str) -> Result<String, ToolError> {
    args.get(name)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(ToolError::MissingArgument(name))
}

/// Accepts strings and integers (authentik mixes numeric pks and slugs) and
/// rejects anything that would break out of a composed URL path.
pub(crate) fn require_identifier(args: &Value, name: &'static str) -> Result<String, ToolError> {
    let value = match args.get(name) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        Some(_) | None => return Err(ToolError::MissingArgument(name)),
    };
    if value.is_empty()
        || value.contains(['/', '?', '#'])
        || value.chars().any(char::is_whitespace)
    {
        return Err(ToolError::InvalidArgument {
            name,
            message: format!("'{value}' is not a valid identifier"),
        });
    }
    Ok(value)
}

pub(crate) fn require_object(args: &Value, name: &'static str) -> Result<Value, ToolError> {
    match args.get(name) {
        Some(value @ Value::Object(_)) => Ok(value.clone()),
        Some(_) => Err(ToolError::InvalidArgument {
            name,
            message: "expected an object".to_string(),
        }),
        None => Err(ToolError::MissingArgument(name)),
    }
}

/// Collects the named arguments that are present into query parameters,
/// rendering scalars the way the API expects them.
pub(crate) fn query_from(args: &Value, keys: &[&'static str]) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    for key in keys {
        let Some(value) = args.get(*key) else { continue };
        let rendered = match value {
            Value::String(text) => text.clone(),
            Value::Number(number) => number.to_string(),
            Value::Bool(flag) => flag.to_string(),
            _ => continue,
        };
        query.push((*key, rendered));
    }
    query
}

/// Pretty-prints a response payload for the agent.
pub(crate) fn render_json(value: &Value) -> Result<String, ToolError> {
    serde_json::to_string_pretty(value).map_err(|err| ToolError::Render(err.to_string()))
}
