use crate::models::message::{Message, Role};
use crate::models::step::{Step, Workflow};
use crate::models::tool::{ToolCallPayload, ToolCallRequest, ToolResult, UNKNOWN_TOOL};

use super::arguments::decode_arguments;
use super::attribution::{AgentResolver, TransferPrefix, ROOT_AGENT};

/// Groups a transcript into workflow steps.
///
/// Every user message opens a new step; assistant replies, tool calls and tool results
/// are folded into the step that is open when they arrive. An assistant message seen
/// before any user message opens a step of its own. Malformed messages are never an
/// error, missing fields fall back to defaults.
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser<R = TransferPrefix> {
    resolver: R,
}

impl TranscriptParser {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: AgentResolver> TranscriptParser<R> {
    /// Use a different handoff convention
    pub fn with_resolver(resolver: R) -> Self {
        Self { resolver }
    }

    pub fn parse(&self, messages: &[Message]) -> Workflow {
        let steps = messages
            .iter()
            .enumerate()
            .fold(ParseState::new(), |state, (index, message)| {
                state.apply(&self.resolver, index, message)
            })
            .finish();

        tracing::debug!(
            messages = messages.len(),
            steps = steps.len(),
            "parsed transcript"
        );

        Workflow {
            steps,
            final_response: final_response(messages),
        }
    }
}

/// Parse a transcript with the default handoff convention
pub fn parse_transcript(messages: &[Message]) -> Workflow {
    TranscriptParser::new().parse(messages)
}

/// Content of the last assistant message, if there is one
pub fn final_response(messages: &[Message]) -> Option<String> {
    messages
        .iter()
        .rev()
        .find(|message| message.role == Role::Assistant)
        .map(|message| message.content.clone())
}

/// Accumulator threaded through the fold over the transcript
struct ParseState {
    closed: Vec<Step>,
    open: Option<Step>,
    current_agent: String,
}

impl ParseState {
    fn new() -> Self {
        Self {
            closed: Vec::new(),
            open: None,
            current_agent: ROOT_AGENT.to_string(),
        }
    }

    fn apply<R: AgentResolver>(self, resolver: &R, index: usize, message: &Message) -> Self {
        match message.role {
            Role::User => self.user(message),
            Role::Assistant => self.assistant(index, message),
            Role::Tool => self.tool(resolver, index, message),
            Role::Unknown => {
                tracing::trace!(index, "ignoring message with unrecognised role");
                self
            }
        }
    }

    fn user(mut self, message: &Message) -> Self {
        if let Some(step) = self.open.take() {
            self.closed.push(step);
        }
        self.open = Some(Step::user_input(self.closed.len(), message.content.as_str()));
        self.current_agent = ROOT_AGENT.to_string();
        self
    }

    fn assistant(mut self, index: usize, message: &Message) -> Self {
        if let Some(name) = non_empty(message.name.as_deref()) {
            self.current_agent = name.to_string();
        }

        match self.open.as_mut() {
            Some(step) => {
                step.assistant_response = Some(message.content.clone());
                step.agent = self.current_agent.clone();
                step.tool_calls.extend(
                    message
                        .tool_calls
                        .iter()
                        .map(|call| tool_call_request(call, index)),
                );
            }
            None => {
                if !message.tool_calls.is_empty() {
                    tracing::debug!(
                        index,
                        "assistant message before any user turn, its tool calls are not shown"
                    );
                }
                self.open = Some(Step::assistant_response(
                    self.closed.len(),
                    self.current_agent.as_str(),
                    message.content.as_str(),
                ));
            }
        }
        self
    }

    fn tool<R: AgentResolver>(mut self, resolver: &R, index: usize, message: &Message) -> Self {
        let Some(step) = self.open.as_mut() else {
            tracing::debug!(index, "dropping tool message with no open step");
            return self;
        };

        let tool_name = non_empty(message.name.as_deref()).unwrap_or(UNKNOWN_TOOL);
        if let Some(target) = resolver.handoff_target(tool_name) {
            self.current_agent = target.to_string();
            step.agent = self.current_agent.clone();
        }

        step.tool_results.push(ToolResult {
            tool_name: tool_name.to_string(),
            result: message.content.clone(),
            tool_call_id: message.tool_call_id.clone(),
        });
        self
    }

    fn finish(mut self) -> Vec<Step> {
        if let Some(step) = self.open.take() {
            self.closed.push(step);
        }
        self.closed
    }
}

fn tool_call_request(call: &ToolCallPayload, index: usize) -> ToolCallRequest {
    ToolCallRequest {
        id: non_empty(call.id.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| format!("tool-{}", index)),
        name: non_empty(call.name.as_deref())
            .unwrap_or(UNKNOWN_TOOL)
            .to_string(),
        arguments: decode_arguments(&call.arguments),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
