//! Adapters from orchestrator documents to the normalized [`Message`] type
//!
//! Transcripts reach us in more than one shape: chat-completion style records
//! (`role`, `tool_calls[].function.arguments`) and LangChain serialized messages
//! (`type`, `tool_calls[].args`, `additional_kwargs`). Everything is flattened here so
//! the workflow code never has to look at raw JSON. Conversion of a single message never
//! fails; missing or mistyped fields fall back to defaults.
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::errors::TranscriptError;
use crate::models::message::{Message, Role};
use crate::models::tool::ToolCallPayload;

/// Convert one wire message into a [`Message`]
pub fn message_from_value(value: &Value) -> Message {
    let role = string_field(value, "role")
        .or_else(|| string_field(value, "type"))
        .map(Role::from_name)
        .unwrap_or(Role::Unknown);

    Message {
        role,
        content: content_text(value.get("content")),
        name: string_field(value, "name").map(str::to_string),
        tool_calls: tool_calls_from_value(value),
        tool_call_id: string_field(value, "tool_call_id").map(str::to_string),
    }
}

/// Find the messages array in an orchestrator document and normalize it.
///
/// Accepts a bare array, `{"messages": [...]}` or the supervisor endpoint's
/// `{"result": {"messages": [...]}}`.
pub fn transcript_from_value(document: &Value) -> Result<Vec<Message>, TranscriptError> {
    let state = document.get("result").unwrap_or(document);
    let messages = match state {
        Value::Array(messages) => messages,
        _ => state
            .get("messages")
            .and_then(Value::as_array)
            .ok_or(TranscriptError::MissingMessages)?,
    };

    Ok(messages.iter().map(message_from_value).collect())
}

pub fn transcript_from_str(text: &str) -> Result<Vec<Message>, TranscriptError> {
    let document: Value = serde_json::from_str(text)?;
    transcript_from_value(&document)
}

/// Read a transcript document from disk
pub fn load_transcript(path: &Path) -> Result<Vec<Message>, TranscriptError> {
    let text = fs::read_to_string(path)?;
    transcript_from_str(&text)
}

fn string_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Message content is either plain text or a list of content blocks
fn content_text(content: Option<&Value>) -> String {
    match content {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Array(blocks)) => blocks
            .iter()
            .filter_map(|block| match block {
                Value::String(text) => Some(text.as_str()),
                _ => block.get("text").and_then(Value::as_str),
            })
            .collect::<Vec<_>>()
            .join("\n"),
        _ => String::new(),
    }
}

fn tool_calls_from_value(value: &Value) -> Vec<ToolCallPayload> {
    let tool_calls = value
        .get("tool_calls")
        .and_then(Value::as_array)
        .filter(|calls| !calls.is_empty())
        .or_else(|| {
            value
                .get("additional_kwargs")
                .and_then(|kwargs| kwargs.get("tool_calls"))
                .and_then(Value::as_array)
        });

    tool_calls
        .map(|calls| calls.iter().map(tool_call_from_value).collect())
        .unwrap_or_default()
}

fn tool_call_from_value(tool_call: &Value) -> ToolCallPayload {
    let function = tool_call.get("function");

    let name = string_field(tool_call, "name")
        .or_else(|| function.and_then(|f| string_field(f, "name")))
        .map(str::to_string);

    let arguments = function
        .and_then(|f| f.get("arguments"))
        .or_else(|| tool_call.get("arguments"))
        .or_else(|| tool_call.get("args"))
        .filter(|arguments| !arguments.is_null())
        .cloned()
        .unwrap_or(Value::Null);

    ToolCallPayload {
        id: string_field(tool_call, "id").map(str::to_string),
        name,
        arguments,
    }
}
