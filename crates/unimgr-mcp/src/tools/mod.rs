//! Tool catalog and shared handler plumbing.
//!
//! Every tool is declared as a [`ToolSpec`], a typed description of its
//! name, purpose, and parameters, rather than a loose JSON dictionary.
//! The specs render to JSON-schema objects for `tools/list`; the handlers
//! live in per-resource modules and always return tool-level results, never
//! protocol errors (the calling agent gets something inspectable even when
//! the upstream call fails).

pub mod deployments;
pub mod devices;
pub mod hosts;
pub mod sites;

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, Tool};
use serde::Serialize;
use serde_json::{Map, Value};

/// Tool call arguments as decoded from the protocol layer.
pub type Arguments = Map<String, Value>;

// ── Parameter declarations ──────────────────────────────────────────

/// The kind of a tool parameter. Every Site Manager tool takes string
/// identifiers only, but the schema rendering goes through this enum so a
/// new kind is a variant, not a stringly-typed dictionary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
}

impl ParamKind {
    const fn json_type(self) -> &'static str {
        match self {
            Self::String => "string",
        }
    }
}

/// A single declared tool parameter.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: ParamKind,
    pub required: bool,
}

impl ParamSpec {
    pub const fn required_string(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            kind: ParamKind::String,
            required: true,
        }
    }
}

/// A declared tool: name, description, and parameters.
#[derive(Debug, Clone, Copy)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub params: &'static [ParamSpec],
}

impl ToolSpec {
    /// Render the JSON-schema `inputSchema` object for this tool.
    pub fn input_schema(&self) -> Map<String, Value> {
        let mut properties = Map::new();
        for param in self.params {
            properties.insert(
                param.name.to_owned(),
                serde_json::json!({
                    "type": param.kind.json_type(),
                    "description": param.description,
                }),
            );
        }

        let mut schema = Map::new();
        schema.insert("type".to_owned(), Value::String("object".to_owned()));
        schema.insert("properties".to_owned(), Value::Object(properties));

        let required: Vec<Value> = self
            .params
            .iter()
            .filter(|p| p.required)
            .map(|p| Value::String(p.name.to_owned()))
            .collect();
        if !required.is_empty() {
            schema.insert("required".to_owned(), Value::Array(required));
        }

        schema
    }

    /// Convert to the protocol-level tool definition.
    pub fn to_tool(&self) -> Tool {
        Tool::new(self.name, self.description, Arc::new(self.input_schema()))
    }
}

/// All tools this server exposes, in registration order.
pub fn catalog() -> impl Iterator<Item = &'static ToolSpec> {
    sites::TOOLS
        .iter()
        .chain(hosts::TOOLS)
        .chain(devices::TOOLS)
        .chain(deployments::TOOLS)
}

// ── Result and argument helpers ─────────────────────────────────────

/// Wrap a serializable value as a successful JSON tool result.
pub(crate) fn json_result<T: Serialize>(value: &T) -> CallToolResult {
    match serde_json::to_string_pretty(value) {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(err) => error_result(format!("Failed to encode result: {err}")),
    }
}

/// Wrap a message as a tool-level error result.
pub(crate) fn error_result(message: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(message.into())])
}

/// The error result for a missing required parameter.
pub(crate) fn missing_param(name: &str) -> CallToolResult {
    error_result(format!("{name} parameter is required"))
}

/// Fetch a required string argument. Absent, non-string, and empty values
/// all count as missing.
pub(crate) fn required_string<'a>(args: &'a Arguments, name: &str) -> Option<&'a str> {
    args.get(name)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}
