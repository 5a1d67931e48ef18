use serde::{Deserialize, Serialize};

use crate::models::message::{Message, Role};

use super::attribution::{AgentResolver, TransferPrefix, ROOT_AGENT};

/// A transfer of control between two agents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    pub from: String,
    pub to: String,
    /// Index of the handoff tool message in the transcript
    pub step_index: usize,
}

/// Lists the handoffs in a transcript without building steps
#[derive(Debug, Clone, Default)]
pub struct TransitionExtractor<R = TransferPrefix> {
    resolver: R,
}

impl TransitionExtractor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: AgentResolver> TransitionExtractor<R> {
    pub fn with_resolver(resolver: R) -> Self {
        Self { resolver }
    }

    pub fn extract(&self, messages: &[Message]) -> Vec<Transition> {
        let (transitions, _) = messages
            .iter()
            .enumerate()
            .filter(|(_, message)| message.role == Role::Tool)
            .filter_map(|(index, message)| {
                let name = message.name.as_deref()?;
                self.resolver
                    .handoff_target(name)
                    .map(|target| (index, target))
            })
            .fold(
                (Vec::new(), ROOT_AGENT.to_string()),
                |(mut transitions, current_agent), (index, target)| {
                    transitions.push(Transition {
                        from: current_agent,
                        to: target.to_string(),
                        step_index: index,
                    });
                    (transitions, target.to_string())
                },
            );
        transitions
    }
}

/// Extract handoffs with the default naming convention
pub fn extract_transitions(messages: &[Message]) -> Vec<Transition> {
    TransitionExtractor::new().extract(messages)
}
