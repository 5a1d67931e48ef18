use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name used when a tool call or tool result does not carry one
pub const UNKNOWN_TOOL: &str = "unknown_tool";

/// A tool call request as it appears on an assistant message, before decoding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCallPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Raw arguments: encoded text, already structured data, or null when absent
    #[serde(default)]
    pub arguments: Value,
}

impl ToolCallPayload {
    pub fn new<S: Into<String>>(name: S, arguments: Value) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            arguments,
        }
    }

    pub fn with_id<S: Into<String>>(mut self, id: S) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// A decoded tool call attached to a workflow step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCallRequest {
    pub id: String,
    pub name: String,
    /// Always structured; undecodable payloads are wrapped by the argument decoder
    pub arguments: Value,
}

/// The outcome of a tool invocation, as reported by a tool message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResult {
    pub tool_name: String,
    /// Full result text; truncation for display happens in the renderer
    pub result: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}
