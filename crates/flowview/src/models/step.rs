use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::tool::{ToolCallRequest, ToolResult};

/// Agent a user-opened step is attributed to before any assistant replies
pub const USER_AGENT: &str = "user";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Opened by a user message
    UserInput,
    /// Opened by an assistant message that arrived before any user message
    AssistantResponse,
}

impl StepKind {
    /// Human readable label, e.g. "user input"
    pub fn label(&self) -> &'static str {
        match self {
            StepKind::UserInput => "user input",
            StepKind::AssistantResponse => "assistant response",
        }
    }
}

/// One user turn (or leading assistant turn) with everything that happened before the next one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub id: usize,
    #[serde(rename = "type")]
    pub kind: StepKind,
    pub agent: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assistant_response: Option<String>,
    pub tool_calls: Vec<ToolCallRequest>,
    pub tool_results: Vec<ToolResult>,
    /// When the step was built, not when the message was written
    pub timestamp: DateTime<Utc>,
}

impl Step {
    fn new<A: Into<String>, C: Into<String>>(id: usize, kind: StepKind, agent: A, content: C) -> Self {
        Step {
            id,
            kind,
            agent: agent.into(),
            content: content.into(),
            assistant_response: None,
            tool_calls: Vec::new(),
            tool_results: Vec::new(),
            timestamp: Utc::now(),
        }
    }

    pub fn user_input<C: Into<String>>(id: usize, content: C) -> Self {
        Self::new(id, StepKind::UserInput, USER_AGENT, content)
    }

    pub fn assistant_response<A: Into<String>, C: Into<String>>(
        id: usize,
        agent: A,
        content: C,
    ) -> Self {
        Self::new(id, StepKind::AssistantResponse, agent, content)
    }
}

/// The reconstructed view of one workflow run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub steps: Vec<Step>,
    pub final_response: Option<String>,
}

impl Workflow {
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_step_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&StepKind::UserInput).unwrap(),
            "\"user_input\""
        );
        assert_eq!(
            serde_json::to_string(&StepKind::AssistantResponse).unwrap(),
            "\"assistant_response\""
        );
    }

    #[test]
    fn test_step_kind_label() {
        assert_eq!(StepKind::UserInput.label(), "user input");
        assert_eq!(StepKind::AssistantResponse.label(), "assistant response");
    }

    #[test]
    fn test_step_serializes_camel_case() {
        let mut step = Step::user_input(0, "hi");
        step.assistant_response = Some("hello".to_string());
        step.tool_results.push(ToolResult {
            tool_name: "transfer_to_news_agent".to_string(),
            result: "ok".to_string(),
            tool_call_id: Some("call_1".to_string()),
        });

        let value = serde_json::to_value(&step).unwrap();
        assert_eq!(value["type"], json!("user_input"));
        assert_eq!(value["agent"], json!("user"));
        assert_eq!(value["assistantResponse"], json!("hello"));
        assert_eq!(value["toolCalls"], json!([]));
        assert_eq!(value["toolResults"][0]["toolName"], json!("transfer_to_news_agent"));
        assert_eq!(value["toolResults"][0]["toolCallId"], json!("call_1"));
        assert!(value.get("timestamp").is_some());
    }

    #[test]
    fn test_empty_workflow() {
        let workflow = Workflow::default();
        assert!(workflow.is_empty());
        assert_eq!(
            serde_json::to_value(&workflow).unwrap(),
            json!({"steps": [], "finalResponse": null})
        );
    }
}
