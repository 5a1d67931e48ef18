use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::tool::ToolCallPayload;

/// The role a message was produced under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
    Tool,
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Map a wire role name onto a role, accepting both chat-completion and LangChain names
    pub fn from_name(name: &str) -> Self {
        match name {
            "user" | "human" => Role::User,
            "assistant" | "ai" => Role::Assistant,
            "tool" => Role::Tool,
            _ => Role::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// A single transcript entry in normalized form
pub struct Message {
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<ToolCallPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl Message {
    fn new<S: Into<String>>(role: Role, content: S) -> Self {
        Message {
            role,
            content: content.into(),
            name: None,
            tool_calls: Vec::new(),
            tool_call_id: None,
        }
    }

    /// Create a new user message
    pub fn user<S: Into<String>>(content: S) -> Self {
        Self::new(Role::User, content)
    }

    /// Create a new assistant message
    pub fn assistant<S: Into<String>>(content: S) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Create a new tool result message produced by the named tool
    pub fn tool<N: Into<String>, S: Into<String>>(name: N, content: S) -> Self {
        Self::new(Role::Tool, content).with_name(name)
    }

    /// Create a message with a role the workflow does not recognise
    pub fn unknown<S: Into<String>>(content: S) -> Self {
        Self::new(Role::Unknown, content)
    }

    /// Attribute the message to an agent or tool
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach a tool call request to the message
    pub fn with_tool_call(mut self, tool_call: ToolCallPayload) -> Self {
        self.tool_calls.push(tool_call);
        self
    }

    /// Link a tool message to the request it answers
    pub fn with_tool_call_id<S: Into<String>>(mut self, id: S) -> Self {
        self.tool_call_id = Some(id.into());
        self
    }

    /// Shorthand for attaching a tool call with only a name and arguments
    pub fn with_tool_request<S: Into<String>>(self, name: S, arguments: Value) -> Self {
        self.with_tool_call(ToolCallPayload::new(name, arguments))
    }
}
